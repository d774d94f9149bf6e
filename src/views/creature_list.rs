//! Creature cards region.

use crate::game::creature::Creature;
use crate::views::Patch;

/// Re-renders only when the ordered creature names differ from the last
/// rendered set.
#[derive(Debug, Default)]
pub struct CreatureListView {
    rendered: Option<Vec<String>>,
}

impl CreatureListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, creatures: &[Creature]) -> Patch {
        if !self.changed(creatures) {
            return Patch::Unchanged;
        }
        let html: String = creatures.iter().map(Creature::render).collect();
        self.rendered = Some(creatures.iter().map(|c| c.name().to_string()).collect());
        Patch::Replace(html)
    }

    fn changed(&self, creatures: &[Creature]) -> bool {
        match &self.rendered {
            None => true,
            Some(names) => {
                names.len() != creatures.len()
                    || names.iter().zip(creatures).any(|(n, c)| n != c.name())
            }
        }
    }
}
