//! WebAssembly bindings for the media control shim
//!
//! This module exposes the controller to JavaScript/TypeScript. The free
//! functions resolve `window.document` on every call and use the default
//! configuration; [`JsMediaControl`] is for hosts that need a custom path
//! attribute.
//!
//! Errors are thrown as JavaScript `Error` objects. A missing element id is an
//! error for every operation.

use core_playback::{Instruction, MediaController, PlayerState};
use core_runtime::ShimConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::dom::DomDocument;
use crate::error::{WasmError, WasmResult};

// =============================================================================
// Conversions
// =============================================================================

/// Snapshot object, or `null` when the element is not ready.
pub(crate) fn state_to_js(state: &PlayerState) -> WasmResult<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    Ok(state.serialize(&serializer)?)
}

fn default_controller() -> WasmResult<MediaController<DomDocument>> {
    Ok(MediaController::with_defaults(DomDocument::current()?))
}

// =============================================================================
// Media Control
// =============================================================================

/// JavaScript-accessible media controller
///
/// # Example
///
/// ```javascript
/// const control = new JsMediaControl("data-path");
/// control.play("tv");
/// const state = control.playerState("tv");
/// if (state) {
///   console.log(`${state.path}: ${state.time}/${state.duration}`);
/// }
/// ```
#[wasm_bindgen]
pub struct JsMediaControl {
    inner: MediaController<DomDocument>,
}

#[wasm_bindgen]
impl JsMediaControl {
    /// Create a controller bound to the current document
    ///
    /// # Arguments
    ///
    /// * `path_attribute` - Attribute on the `<source>` child holding the media
    ///   path. Defaults to `meta-path`.
    #[wasm_bindgen(constructor)]
    pub fn new(path_attribute: Option<String>) -> Result<JsMediaControl, JsValue> {
        let config = match path_attribute {
            Some(attribute) => ShimConfig::default().with_path_attribute(attribute),
            None => ShimConfig::default(),
        };
        let document = DomDocument::current().map_err(WasmError::from)?;
        let inner = MediaController::new(document, config).map_err(WasmError::from)?;

        Ok(Self { inner })
    }

    /// Start playback
    pub fn play(&self, id: &str) -> Result<(), JsValue> {
        Ok(self.inner.play(id).map_err(WasmError::from)?)
    }

    /// Pause playback
    pub fn pause(&self, id: &str) -> Result<(), JsValue> {
        Ok(self.inner.pause(id).map_err(WasmError::from)?)
    }

    /// Current `{ path, duration, time }`, or `null` when not ready
    #[wasm_bindgen(js_name = playerState)]
    pub fn player_state(&self, id: &str) -> Result<JsValue, JsValue> {
        let state = self.inner.player_state(id).map_err(WasmError::from)?;
        Ok(state_to_js(&state)?)
    }

    /// Seek to `time` seconds; ignored while the element reports no position
    #[wasm_bindgen(js_name = setCurrentTime)]
    pub fn set_current_time(&self, id: &str, time: f64) -> Result<(), JsValue> {
        self.inner
            .set_current_time(id, time)
            .map_err(WasmError::from)?;
        Ok(())
    }

    /// Apply a remote instruction
    ///
    /// Returns `{ tag: "Applied" }` when the loaded media was driven,
    /// `{ tag: "Loaded", path }` when the source was swapped first, or
    /// `{ tag: "Stopped" }` for an `Idle` instruction.
    ///
    /// ```javascript
    /// control.applyInstruction("tv", {
    ///   tag: "Play", path: "shows/ep1.mkv", from: 30, behaviour: { tag: "Playing" }
    /// });
    /// ```
    #[wasm_bindgen(js_name = applyInstruction)]
    pub fn apply_instruction(&self, id: &str, instruction: JsValue) -> Result<JsValue, JsValue> {
        let instruction: Instruction =
            serde_wasm_bindgen::from_value(instruction).map_err(WasmError::from)?;
        let outcome = self
            .inner
            .apply(id, &instruction)
            .map_err(WasmError::from)?;
        Ok(serde_wasm_bindgen::to_value(&outcome).map_err(WasmError::from)?)
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Start playback of the media element with the given id
#[wasm_bindgen]
pub fn play(id: &str) -> Result<(), JsValue> {
    Ok(default_controller()?.play(id).map_err(WasmError::from)?)
}

/// Pause the media element with the given id
#[wasm_bindgen]
pub fn pause(id: &str) -> Result<(), JsValue> {
    Ok(default_controller()?.pause(id).map_err(WasmError::from)?)
}

/// Playback snapshot of the media element with the given id, or `null`
#[wasm_bindgen(js_name = playerState)]
pub fn player_state(id: &str) -> Result<JsValue, JsValue> {
    let state = default_controller()?
        .player_state(id)
        .map_err(WasmError::from)?;
    Ok(state_to_js(&state)?)
}

/// Seek the media element with the given id
#[wasm_bindgen(js_name = setCurrentTime)]
pub fn set_current_time(id: &str, time: f64) -> Result<(), JsValue> {
    default_controller()?
        .set_current_time(id, time)
        .map_err(WasmError::from)?;
    Ok(())
}

// =============================================================================
// Module Info
// =============================================================================

/// Get the media shim version
#[wasm_bindgen(js_name = mediaShimVersion)]
pub fn media_shim_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
