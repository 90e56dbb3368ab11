//! Page-level setup for the shim.
//!
//! Hosts call [`init_media_shim`] once at startup, before the first control
//! call, to route panics and `tracing` events to the browser console.

use core_runtime::logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
use tracing::info;
use wasm_bindgen::prelude::*;

use crate::error::WasmResult;

/// Install the panic hook and console logging at `level`.
pub fn bootstrap(level: LogLevel) -> WasmResult<()> {
    console_error_panic_hook::set_once();

    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(level);
    init_logging(config)?;

    info!(version = env!("CARGO_PKG_VERSION"), "media shim initialized");
    Ok(())
}

/// Initialize the media shim
///
/// # Arguments
///
/// * `log_level` - 0 = Trace, 1 = Debug, 2 = Info (default), 3 = Warn, 4 = Error.
///   Any other number selects Info.
///
/// Throws if logging was already initialized on this page.
#[wasm_bindgen(js_name = initMediaShim)]
pub fn init_media_shim(log_level: Option<f64>) -> Result<(), JsValue> {
    let level = log_level.map_or(LogLevel::Info, LogLevel::from_number);
    bootstrap(level).map_err(JsValue::from)
}
