//! Battle results list region.

use crate::views::{Patch, escape_html};

/// Append-only: emits `<li>` items for entries past the count already in
/// the DOM.
#[derive(Debug, Default)]
pub struct ResultLogView {
    rendered: usize,
}

impl ResultLogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, results: &[String]) -> Patch {
        if results.len() == self.rendered {
            return Patch::Unchanged;
        }
        // Results never shrink while the app runs; rebuild if they somehow did.
        let (start, full) = if results.len() < self.rendered {
            (0, true)
        } else {
            (self.rendered, false)
        };
        let html: String = results[start..]
            .iter()
            .map(|line| format!("<li>{}</li>", escape_html(line)))
            .collect();
        self.rendered = results.len();
        if full {
            Patch::Replace(html)
        } else {
            Patch::Append(html)
        }
    }
}
