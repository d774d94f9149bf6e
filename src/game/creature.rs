//! Creature records as returned by the data service, and their display form.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::views::escape_html;

/// Moves shown per creature.
pub const MAX_MOVES: usize = 4;

// ── Wire format ────────────────────────────────────────────────────

/// The subset of a PokéAPI `pokemon` record this app reads. Unknown fields
/// are ignored; missing `moves`/`sprites` decode as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

// ── Display model ──────────────────────────────────────────────────

/// A creature ready for display. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    name: String,
    moves: Vec<String>,
    image_url: String,
}

impl Creature {
    pub fn new(name: impl Into<String>, moves: Vec<String>, image_url: impl Into<String>) -> Self {
        let mut moves = moves;
        moves.truncate(MAX_MOVES);
        Self {
            name: name.into(),
            moves,
            image_url: image_url.into(),
        }
    }

    /// Keep the first four moves in listing order.
    pub fn from_record(record: CreatureRecord) -> Self {
        let moves = record
            .moves
            .into_iter()
            .take(MAX_MOVES)
            .map(|slot| slot.move_ref.name)
            .collect();
        Self {
            name: record.name,
            moves,
            image_url: record.sprites.front_default.unwrap_or_default(),
        }
    }

    /// Decode a response body straight into a creature.
    pub fn from_json(body: &str) -> Result<Self> {
        let record: CreatureRecord = serde_json::from_str(body).map_err(AppError::Decode)?;
        Ok(Self::from_record(record))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Render the creature card: name heading, sprite, move list.
    pub fn render(&self) -> String {
        let name = escape_html(self.name());
        let mut html = String::with_capacity(256);
        html.push_str(r#"<div class="pokemon">"#);
        html.push_str(&format!("<h2>{}</h2>", name));
        html.push_str(&format!(
            r#"<img src="{}" alt="{}">"#,
            escape_html(self.image_url()),
            name
        ));
        html.push_str("<ul>");
        for m in self.moves() {
            html.push_str(&format!("<li>{}</li>", escape_html(m)));
        }
        html.push_str("</ul></div>");
        html
    }
}
