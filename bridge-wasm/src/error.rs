//! Error types for the WebAssembly bridge

use bridge_traits::BridgeError;
use core_playback::PlaybackError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type for WebAssembly bridge operations
pub type WasmResult<T> = Result<T, WasmError>;

/// Errors that can occur in the WebAssembly bridge
#[derive(Error, Debug)]
pub enum WasmError {
    /// JavaScript error from web-sys
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Playback operation failed
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// Runtime setup failed
    #[error(transparent)]
    Runtime(#[from] core_runtime::Error),

    /// Value could not be converted to or from JavaScript
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<BridgeError> for WasmError {
    fn from(err: BridgeError) -> Self {
        WasmError::Playback(PlaybackError::Bridge(err))
    }
}

impl From<serde_wasm_bindgen::Error> for WasmError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WasmError::Serialization(err.to_string())
    }
}

impl From<JsValue> for WasmError {
    fn from(js_value: JsValue) -> Self {
        let msg = if js_value.is_string() {
            js_value
                .as_string()
                .unwrap_or_else(|| "Unknown error".to_string())
        } else if let Some(error) = js_value.dyn_ref::<js_sys::Error>() {
            error.message().into()
        } else {
            format!("{:?}", js_value)
        };
        WasmError::JavaScript(msg)
    }
}

/// Errors cross into JavaScript as `Error` objects carrying the message.
impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
