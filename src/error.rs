//! Error type shared by the controller, the fetch layer and the DOM bridge.
//!
//! Nothing here is shown to the user. Errors end up in the console log, or
//! cross the wasm-bindgen boundary as a `JsValue`.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration is not valid JSON")]
    ConfigParse(#[source] serde_json::Error),

    #[error("root element #{0} not found")]
    MissingRoot(String),

    #[error("dom: {0}")]
    Dom(String),

    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("creature {id} request returned HTTP {status}")]
    Status { id: u32, status: u16 },

    #[error("creature record could not be decoded")]
    Decode(#[source] serde_json::Error),

    #[error("a fetch cycle is already in flight")]
    CycleInFlight,

    #[error("battle needs two creatures, have {count}")]
    NotEnoughCreatures { count: usize },

    #[error("logger setup failed: {0}")]
    Logger(String),
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
