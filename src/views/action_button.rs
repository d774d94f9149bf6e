//! "Battle!" control region.

use crate::game::TEAM_SIZE;
use crate::game::creature::Creature;
use crate::views::{Action, Patch};

/// Cleared on every render; the button is present only when exactly two
/// creatures are stored. Clicks are handled by the root's delegated
/// listener through the button's `data-action`, so replacing the node
/// never leaves a stale handler behind.
#[derive(Debug, Default)]
pub struct ActionButton;

impl ActionButton {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, creatures: &[Creature]) -> Patch {
        if creatures.len() == TEAM_SIZE {
            Patch::Replace(format!(
                r#"<button type="button" data-action="{}">Battle!</button>"#,
                Action::Battle
            ))
        } else {
            Patch::Replace(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(n: usize) -> Vec<Creature> {
        (0..n)
            .map(|i| Creature::new(format!("c{}", i), Vec::new(), ""))
            .collect()
    }

    #[test]
    fn button_only_at_exactly_two() {
        let mut view = ActionButton::new();
        for n in 0..=3 {
            let Patch::Replace(html) = view.render(&team(n)) else {
                panic!("action button always replaces");
            };
            assert_eq!(html.contains("Battle!"), n == 2, "count {}", n);
        }
    }

    #[test]
    fn button_carries_battle_action() {
        let mut view = ActionButton::new();
        let Patch::Replace(html) = view.render(&team(2)) else {
            panic!("expected replace");
        };
        assert!(html.contains(r#"data-action="battle""#));
    }
}
