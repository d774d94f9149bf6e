//! Browser tests for the DOM bridge. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use creature_battle::app::{self, controller::AppController};
use creature_battle::config::AppConfig;
use creature_battle::dom;
use creature_battle::game::creature::Creature;
use creature_battle::game::state::Phase;
use creature_battle::views::{Action, Region};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

const ROOT_ID: &str = "root";

/// Remount into a single shared root so region ids stay unique in the page.
fn mount_fresh() {
    let doc = document();
    if doc.get_element_by_id(ROOT_ID).is_none() {
        let root = doc.create_element("div").unwrap();
        root.set_id(ROOT_ID);
        doc.body().unwrap().append_child(&root).unwrap();
    }
    app::install(AppController::with_rng(
        AppConfig::default(),
        StdRng::seed_from_u64(1),
    ));
    dom::mount(ROOT_ID).unwrap();
}

fn region(region: Region) -> web_sys::Element {
    document().get_element_by_id(region.element_id()).unwrap()
}

#[wasm_bindgen_test]
fn mount_writes_shell() {
    mount_fresh();
    dom::apply(&app::with_app_mut(|a| a.render()));
    assert!(region(Region::FetchControl).inner_html().contains("Get Pokemon"));
    assert_eq!(region(Region::ActionButton).inner_html(), "");
}

#[wasm_bindgen_test]
fn battle_appends_one_list_item() {
    mount_fresh();
    let pass = app::with_app_mut(|a| {
        a.begin_fetch_cycle().unwrap();
        a.add_creature(Creature::new("Pikachu", Vec::new(), ""));
        let pass = a.add_creature(Creature::new("Bulbasaur", Vec::new(), ""));
        a.finish_fetch_cycle();
        pass
    });
    dom::apply(&pass);
    assert!(region(Region::ActionButton).inner_html().contains("Battle!"));

    let log = region(Region::ResultLog);
    dom::apply(&app::with_app_mut(|a| a.battle()).unwrap());
    assert_eq!(log.child_element_count(), 1);

    // an unchanged render adds nothing
    dom::apply(&app::with_app_mut(|a| a.render()));
    assert_eq!(log.child_element_count(), 1);
}

fn button_in(region_: Region) -> HtmlElement {
    region(region_)
        .query_selector("button")
        .unwrap()
        .expect("region has a button")
        .dyn_into()
        .unwrap()
}

/// Let queued microtasks (including `spawn_local` tasks) run.
async fn settle() {
    for _ in 0..2 {
        JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
            .await
            .unwrap();
    }
}

fn mount_with_team() {
    mount_fresh();
    for pass in app::with_app_mut(|a| {
        vec![
            a.begin_fetch_cycle().unwrap(),
            a.add_creature(Creature::new("Pikachu", Vec::new(), "")),
            a.add_creature(Creature::new("Bulbasaur", Vec::new(), "")),
            a.finish_fetch_cycle(),
        ]
    }) {
        dom::apply(&pass);
    }
}

#[wasm_bindgen_test]
fn clicking_battle_button_appends_result() {
    mount_with_team();
    let log = region(Region::ResultLog);
    assert_eq!(log.child_element_count(), 0);

    button_in(Region::ActionButton).click();
    assert_eq!(log.child_element_count(), 1);
    let text = log.inner_html();
    assert!(
        text.contains("Pikachu defeated Bulbasaur!") || text.contains("Bulbasaur defeated Pikachu!")
    );

    // the button was redrawn by the pass; the delegated listener still fires
    button_in(Region::ActionButton).click();
    assert_eq!(log.child_element_count(), 2);
    assert_eq!(app::with_app(|a| a.state().battle_results.len()), 2);
}

#[wasm_bindgen_test]
fn clicks_after_remount_reach_one_listener() {
    mount_with_team();
    mount_with_team();
    button_in(Region::ActionButton).click();
    assert_eq!(region(Region::ResultLog).child_element_count(), 1);
}

#[wasm_bindgen_test]
fn fetch_button_maps_to_fetch_action_when_enabled() {
    mount_fresh();
    dom::apply(&app::with_app_mut(|a| a.render()));
    let button = button_in(Region::FetchControl);
    assert_eq!(dom::action_of(&button), Some(Action::FetchCreatures));
}

#[wasm_bindgen_test]
async fn disabled_fetch_button_dispatches_nothing() {
    mount_fresh();
    // Leave the DOM showing the in-flight button while the controller is idle,
    // so any dispatch would be visible as a new cycle.
    let pass = app::with_app_mut(|a| a.begin_fetch_cycle()).unwrap();
    dom::apply(&pass);
    app::with_app_mut(|a| a.finish_fetch_cycle());

    let button = button_in(Region::FetchControl);
    assert!(button.has_attribute("disabled"));
    assert_eq!(dom::action_of(&button), None);

    button.click();
    settle().await;
    assert_eq!(app::with_app(|a| a.phase()), Phase::Idle);
}
