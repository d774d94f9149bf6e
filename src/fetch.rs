//! Creature acquisition.
//!
//! [`CreatureSource`] is the seam between the controller's fetch cycle and
//! the network; [`HttpSource`] is the browser implementation over
//! `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::AppConfig;
use crate::error::{AppError, Result, js_error_text};
use crate::game::creature::Creature;

#[async_trait(?Send)]
pub trait CreatureSource {
    /// Fetch and decode the creature with the given id.
    async fn fetch(&self, id: u32) -> Result<Creature>;
}

/// GETs `{api_base}/{id}` and decodes the JSON body.
pub struct HttpSource {
    config: AppConfig,
}

impl HttpSource {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl CreatureSource for HttpSource {
    async fn fetch(&self, id: u32) -> Result<Creature> {
        let url = self.config.creature_url(id);
        let network = |reason: String| AppError::Network {
            url: url.clone(),
            reason,
        };

        let window = web_sys::window().ok_or_else(|| network("no window".to_string()))?;
        tracing::debug!(%url, "GET");
        let value = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|e| network(js_error_text(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| network("fetch resolved to a non-Response".to_string()))?;

        if !response.ok() {
            return Err(AppError::Status {
                id,
                status: response.status(),
            });
        }

        let text = response.text().map_err(|e| network(js_error_text(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| network(js_error_text(&e)))?
            .as_string()
            .unwrap_or_default();

        Creature::from_json(&body)
    }
}
