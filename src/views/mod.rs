//! Views — each owns one DOM region and decides, per render, what change
//! (if any) that region needs.
//!
//! Views never touch the DOM themselves; they return a [`Patch`] and the
//! `dom` module applies it. That keeps every view testable natively.

pub mod action_button;
pub mod creature_list;
pub mod fetch_control;
pub mod layout;
pub mod result_log;

use std::fmt;
use std::str::FromStr;

/// A DOM region with a stable element id inside the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    FetchControl,
    CreatureList,
    ActionButton,
    ResultLog,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::FetchControl,
        Region::CreatureList,
        Region::ActionButton,
        Region::ResultLog,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Region::FetchControl => "fetch-control",
            Region::CreatureList => "pokemon-list",
            Region::ActionButton => "battle-control",
            Region::ResultLog => "battle-results",
        }
    }
}

/// The change one region needs after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    Unchanged,
    /// Set the region's inner HTML (an empty string clears it).
    Replace(String),
    /// Append HTML after the region's existing children.
    Append(String),
}

impl Patch {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }
}

static UNCHANGED: Patch = Patch::Unchanged;

/// All region patches from one controller render, in region order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPass {
    patches: Vec<(Region, Patch)>,
}

impl RenderPass {
    pub fn new(patches: Vec<(Region, Patch)>) -> Self {
        Self { patches }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Region, Patch)> {
        self.patches.iter()
    }

    pub fn patch(&self, region: Region) -> &Patch {
        self.patches
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, p)| p)
            .unwrap_or(&UNCHANGED)
    }

    /// True when no region needs a DOM write.
    pub fn is_noop(&self) -> bool {
        self.patches.iter().all(|(_, p)| p.is_unchanged())
    }
}

/// User actions, carried in `data-action` attributes on rendered controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FetchCreatures,
    Battle,
}

impl Action {
    pub fn as_attr(self) -> &'static str {
        match self {
            Action::FetchCreatures => "fetch",
            Action::Battle => "battle",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fetch" => Ok(Action::FetchCreatures),
            "battle" => Ok(Action::Battle),
            other => Err(format!("unknown action {:?}", other)),
        }
    }
}

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
