//! "Get Pokemon" control region.

use crate::game::state::Phase;
use crate::views::{Action, Patch};

/// Rendered on the first pass and whenever the fetch phase flips; the
/// button is disabled while a cycle is in flight.
#[derive(Debug, Default)]
pub struct FetchControl {
    rendered: Option<Phase>,
}

impl FetchControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, phase: Phase) -> Patch {
        if self.rendered == Some(phase) {
            return Patch::Unchanged;
        }
        self.rendered = Some(phase);
        let disabled = if phase == Phase::Fetching { " disabled" } else { "" };
        Patch::Replace(format!(
            r#"<button type="button" id="getPokemon" data-action="{}"{}>Get Pokemon</button>"#,
            Action::FetchCreatures,
            disabled
        ))
    }
}
