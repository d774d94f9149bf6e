//! Creature battle — an in-browser WASM single-page app.
//!
//! Fetches two random creatures from PokéAPI, shows them, and lets the user
//! pit them against each other, appending each outcome to a results log.
//!
//! The host page loads the module and calls `start(root_id, config_json)`.
//! Everything after that (markup, click handling, fetches) runs in Rust:
//! `app` owns state and dispatches actions, `views` compute per-region
//! patches, `dom` writes them into the page.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod game;
pub mod logger;
pub mod views;

use app::controller::AppController;
use config::AppConfig;
use views::Action;

/// Mount the app into `#root_id` and kick off the first fetch cycle.
///
/// # Arguments
/// * `root_id`     — id of the container element (e.g. "root")
/// * `config_json` — JSON object with any of `api_base`, `max_creature_id`,
///   `log_level`; an empty string uses the defaults
#[wasm_bindgen]
pub fn start(root_id: &str, config_json: &str) -> Result<(), JsValue> {
    let config = AppConfig::from_json(config_json)?;
    logger::init(&config.log_level)?;
    app::install(AppController::new(config));
    dom::mount(root_id)?;
    app::dispatch(Action::FetchCreatures);
    Ok(())
}

/// Start a new fetch cycle (same as clicking "Get Pokemon").
#[wasm_bindgen]
pub fn get_creatures() {
    app::dispatch(Action::FetchCreatures);
}

/// Run one battle (same as clicking "Battle!").
#[wasm_bindgen]
pub fn battle() {
    app::dispatch(Action::Battle);
}

/// Current state as JSON, for debugging from the console.
#[wasm_bindgen]
pub fn export_state() -> String {
    app::with_app(|app| app.state_json())
}
