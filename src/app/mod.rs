//! Application runtime: the controller singleton and the action dispatcher.
//!
//! Uses `thread_local!` + `RefCell` for mutable access in single-threaded
//! WASM. Borrows are never held across an `.await`: the fetch cycle takes
//! the controller once per step.

pub mod controller;

use std::cell::RefCell;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::fetch::CreatureSource;
use crate::game::TEAM_SIZE;
use crate::views::{Action, RenderPass};
use controller::AppController;

thread_local! {
    static APP: RefCell<AppController> = RefCell::new(AppController::new(AppConfig::default()));
}

/// Execute a closure with read access to the controller.
pub fn with_app<F, R>(f: F) -> R
where
    F: FnOnce(&AppController) -> R,
{
    APP.with(|a| f(&a.borrow()))
}

/// Execute a closure with mutable access to the controller.
pub fn with_app_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppController) -> R,
{
    APP.with(|a| f(&mut a.borrow_mut()))
}

/// Replace the controller (used at start-up and by tests).
pub fn install(controller: AppController) {
    APP.with(|a| {
        *a.borrow_mut() = controller;
    });
}

/// Run one fetch cycle: clear, then fetch `TEAM_SIZE` creatures one after
/// the other, handing every render pass to `apply`.
///
/// A failed fetch ends the cycle early; creatures already received stay in
/// state and the phase returns to idle.
pub async fn run_fetch_cycle<S, F>(source: &S, mut apply: F) -> Result<()>
where
    S: CreatureSource + ?Sized,
    F: FnMut(RenderPass),
{
    apply(with_app_mut(|app| app.begin_fetch_cycle())?);

    let outcome = fetch_team(source, &mut apply).await;

    apply(with_app_mut(|app| app.finish_fetch_cycle()));
    outcome
}

async fn fetch_team<S, F>(source: &S, apply: &mut F) -> Result<()>
where
    S: CreatureSource + ?Sized,
    F: FnMut(RenderPass),
{
    for _ in 0..TEAM_SIZE {
        let id = with_app_mut(|app| app.next_creature_id());
        let creature = source.fetch(id).await?;
        apply(with_app_mut(|app| app.add_creature(creature)));
    }
    Ok(())
}

/// Handle a user action coming from the DOM (or a direct wasm export call).
pub fn dispatch(action: Action) {
    tracing::debug!(%action, "dispatch");
    match action {
        Action::Battle => match with_app_mut(|app| app.battle()) {
            Ok(pass) => crate::dom::apply(&pass),
            Err(err) => tracing::debug!("battle ignored: {}", err),
        },
        Action::FetchCreatures => {
            let source = with_app(|app| crate::fetch::HttpSource::new(app.config().clone()));
            wasm_bindgen_futures::spawn_local(async move {
                match run_fetch_cycle(&source, |pass| crate::dom::apply(&pass)).await {
                    Ok(()) => {}
                    Err(AppError::CycleInFlight) => {
                        tracing::debug!("fetch ignored: a cycle is already running")
                    }
                    Err(err) => tracing::error!("fetch cycle failed: {}", err),
                }
            });
        }
    }
}
