//! The application controller: sole owner of state, views and the RNG.
//!
//! Every state change goes through [`AppController::update`], which swaps in
//! the merged state and runs a full render pass. Each view decides for
//! itself whether its region changes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::game::battle;
use crate::game::creature::Creature;
use crate::game::state::{AppState, Phase, StatePatch};
use crate::views::action_button::ActionButton;
use crate::views::creature_list::CreatureListView;
use crate::views::fetch_control::FetchControl;
use crate::views::result_log::ResultLogView;
use crate::views::{Region, RenderPass};

pub struct AppController {
    config: AppConfig,
    state: AppState,
    phase: Phase,
    rng: StdRng,
    fetch_control: FetchControl,
    creature_list: CreatureListView,
    action_button: ActionButton,
    result_log: ResultLogView,
}

impl AppController {
    pub fn new(config: AppConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: AppConfig, rng: StdRng) -> Self {
        Self {
            config,
            state: AppState::default(),
            phase: Phase::Idle,
            rng,
            fetch_control: FetchControl::new(),
            creature_list: CreatureListView::new(),
            action_button: ActionButton::new(),
            result_log: ResultLogView::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Merge `patch` into a new state value and re-render everything.
    pub fn update(&mut self, patch: StatePatch) -> RenderPass {
        self.state = self.state.merged(patch);
        self.render()
    }

    pub fn render(&mut self) -> RenderPass {
        RenderPass::new(vec![
            (Region::FetchControl, self.fetch_control.render(self.phase)),
            (
                Region::CreatureList,
                self.creature_list.render(&self.state.creatures),
            ),
            (
                Region::ActionButton,
                self.action_button.render(&self.state.creatures),
            ),
            (
                Region::ResultLog,
                self.result_log.render(&self.state.battle_results),
            ),
        ])
    }

    // ── Fetch cycle ────────────────────────────────────────────────

    /// Enter `Fetching` and clear the stored creatures.
    pub fn begin_fetch_cycle(&mut self) -> Result<RenderPass> {
        if self.phase == Phase::Fetching {
            return Err(AppError::CycleInFlight);
        }
        self.phase = Phase::Fetching;
        tracing::debug!("fetch cycle started");
        Ok(self.update(StatePatch::creatures(Vec::new())))
    }

    /// Random creature id in `1..=max_creature_id`.
    pub fn next_creature_id(&mut self) -> u32 {
        self.rng.gen_range(1..=self.config.max_creature_id)
    }

    pub fn add_creature(&mut self, creature: Creature) -> RenderPass {
        tracing::debug!(name = creature.name(), "creature received");
        let mut creatures = self.state.creatures.clone();
        creatures.push(creature);
        self.update(StatePatch::creatures(creatures))
    }

    /// Back to `Idle`, whether the cycle completed or failed part way.
    pub fn finish_fetch_cycle(&mut self) -> RenderPass {
        self.phase = Phase::Idle;
        tracing::debug!(count = self.state.creatures.len(), "fetch cycle finished");
        self.render()
    }

    // ── Battle ─────────────────────────────────────────────────────

    pub fn battle(&mut self) -> Result<RenderPass> {
        let outcome = battle::fight(&self.state.creatures, &mut self.rng)?;
        let line = outcome.to_string();
        tracing::info!("{}", line);
        let mut results = self.state.battle_results.clone();
        results.push(line);
        Ok(self.update(StatePatch::battle_results(results)))
    }

    pub fn state_json(&self) -> String {
        self.state.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Patch;

    fn controller() -> AppController {
        AppController::with_rng(AppConfig::default(), StdRng::seed_from_u64(42))
    }

    fn named(name: &str) -> Creature {
        Creature::new(name, Vec::new(), "")
    }

    fn has_battle_button(pass: &RenderPass) -> bool {
        match pass.patch(Region::ActionButton) {
            Patch::Replace(html) => html.contains("Battle!"),
            _ => false,
        }
    }

    #[test]
    fn first_render_fills_every_region_but_the_empty_log() {
        let mut app = controller();
        let pass = app.render();
        assert!(matches!(pass.patch(Region::FetchControl), Patch::Replace(_)));
        assert!(matches!(pass.patch(Region::CreatureList), Patch::Replace(_)));
        assert!(matches!(pass.patch(Region::ActionButton), Patch::Replace(_)));
        assert_eq!(pass.patch(Region::ResultLog), &Patch::Unchanged);
    }

    #[test]
    fn button_appears_only_at_two() {
        let mut app = controller();
        let pass = app.begin_fetch_cycle().unwrap();
        assert!(!has_battle_button(&pass));
        let pass = app.add_creature(named("pikachu"));
        assert!(!has_battle_button(&pass));
        let pass = app.add_creature(named("bulbasaur"));
        assert!(has_battle_button(&pass));
    }

    #[test]
    fn second_cycle_rejected_while_fetching() {
        let mut app = controller();
        app.begin_fetch_cycle().unwrap();
        assert!(matches!(
            app.begin_fetch_cycle(),
            Err(AppError::CycleInFlight)
        ));
        app.finish_fetch_cycle();
        assert_eq!(app.phase(), Phase::Idle);
        assert!(app.begin_fetch_cycle().is_ok());
    }

    #[test]
    fn new_cycle_clears_creatures_but_keeps_results() {
        let mut app = controller();
        app.begin_fetch_cycle().unwrap();
        app.add_creature(named("pikachu"));
        app.add_creature(named("bulbasaur"));
        app.finish_fetch_cycle();
        app.battle().unwrap();

        app.begin_fetch_cycle().unwrap();
        assert!(app.state().creatures.is_empty());
        assert_eq!(app.state().battle_results.len(), 1);
    }

    #[test]
    fn battle_appends_exactly_one_line() {
        let mut app = controller();
        app.begin_fetch_cycle().unwrap();
        app.add_creature(named("Pikachu"));
        app.add_creature(named("Bulbasaur"));
        app.finish_fetch_cycle();

        for n in 1..=5 {
            let pass = app.battle().unwrap();
            assert_eq!(app.state().battle_results.len(), n);
            let line = app.state().battle_results.last().unwrap();
            assert!(line == "Pikachu defeated Bulbasaur!" || line == "Bulbasaur defeated Pikachu!");
            let Patch::Append(html) = pass.patch(Region::ResultLog) else {
                panic!("battle should append to the log");
            };
            assert_eq!(html.matches("<li>").count(), 1);
            assert_eq!(pass.patch(Region::CreatureList), &Patch::Unchanged);
        }
    }

    #[test]
    fn battle_without_two_creatures_changes_nothing() {
        let mut app = controller();
        app.begin_fetch_cycle().unwrap();
        app.add_creature(named("solo"));
        assert!(matches!(
            app.battle(),
            Err(AppError::NotEnoughCreatures { count: 1 })
        ));
        assert!(app.state().battle_results.is_empty());
    }

    #[test]
    fn ids_stay_in_bounds() {
        let mut app = controller();
        for _ in 0..5_000 {
            let id = app.next_creature_id();
            assert!((1..=807).contains(&id), "id {} out of range", id);
        }
    }

    #[test]
    fn ids_respect_configured_bound() {
        let config = AppConfig {
            max_creature_id: 1,
            ..AppConfig::default()
        };
        let mut app = AppController::with_rng(config, StdRng::seed_from_u64(9));
        assert!((0..100).all(|_| app.next_creature_id() == 1));
    }

    #[test]
    fn rerender_without_changes_is_noop() {
        let mut app = controller();
        app.render();
        // the action button region always clears and redraws
        let pass = app.render();
        for (region, patch) in pass.iter() {
            if *region != Region::ActionButton {
                assert!(patch.is_unchanged(), "{:?} changed", region);
            }
        }
    }
}
