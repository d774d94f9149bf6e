//! DOM bridge: mounts the page shell into the root element, applies render
//! passes, and turns clicks on `data-action` elements into [`Action`]s.
//!
//! One delegated click listener sits on the root, so controls that views
//! replace never need their own handlers.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

use crate::error::{AppError, Result, js_error_text};
use crate::views::{Action, Patch, Region, RenderPass, layout};

struct Mount {
    root: Element,
    regions: Vec<(Region, Element)>,
    on_click: Closure<dyn FnMut(Event)>,
}

impl Drop for Mount {
    // A remount replaces the old Mount; its listener must leave the root
    // before the closure is freed.
    fn drop(&mut self) {
        let _ = self
            .root
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }
}

thread_local! {
    static MOUNT: RefCell<Option<Mount>> = const { RefCell::new(None) };
}

/// Write the shell into `#root_id` and start listening for actions.
pub fn mount(root_id: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Dom("no document".to_string()))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| AppError::MissingRoot(root_id.to_string()))?;

    root.set_inner_html(&layout::render_shell());

    let mut regions = Vec::with_capacity(Region::ALL.len());
    for region in Region::ALL {
        let el = document
            .get_element_by_id(region.element_id())
            .ok_or_else(|| AppError::Dom(format!("#{} missing from shell", region.element_id())))?;
        regions.push((region, el));
    }

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(action) = action_for(&event) {
            crate::app::dispatch(action);
        }
    });
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| AppError::Dom(js_error_text(&e)))?;

    MOUNT.with(|m| {
        *m.borrow_mut() = Some(Mount {
            root,
            regions,
            on_click,
        });
    });
    tracing::info!(root = root_id, "mounted");
    Ok(())
}

/// Apply a render pass. A no-op before `mount`.
pub fn apply(pass: &RenderPass) {
    if pass.is_noop() {
        tracing::trace!("render pass has no changes");
        return;
    }
    MOUNT.with(|m| {
        if let Some(mount) = m.borrow().as_ref() {
            mount.apply(pass);
        }
    });
}

impl Mount {
    fn apply(&self, pass: &RenderPass) {
        for (region, patch) in pass.iter() {
            let Some(el) = self.element(*region) else {
                continue;
            };
            match patch {
                Patch::Unchanged => {}
                Patch::Replace(html) => el.set_inner_html(html),
                Patch::Append(html) => {
                    if let Err(e) = el.insert_adjacent_html("beforeend", html) {
                        tracing::warn!(?region, "append failed: {}", js_error_text(&e));
                    }
                }
            }
        }
    }

    fn element(&self, region: Region) -> Option<&Element> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, el)| el)
    }
}

fn action_for(event: &Event) -> Option<Action> {
    let target: Element = event.target()?.dyn_into().ok()?;
    action_of(&target)
}

/// The action of the nearest `[data-action]` ancestor of `target`, unless
/// that control is disabled.
pub fn action_of(target: &Element) -> Option<Action> {
    let trigger = target.closest("[data-action]").ok()??;
    if trigger.has_attribute("disabled") {
        return None;
    }
    trigger.get_attribute("data-action")?.parse().ok()
}
