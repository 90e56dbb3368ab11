//! `web-sys` implementation of the media bridge traits.
//!
//! [`DomDocument`] resolves ids with `getElementById` on every call and hands
//! out [`DomMediaElement`] handles that forward straight to the browser's
//! `HTMLMediaElement`. Playback requests are fire-and-forget: the promise
//! returned by `play()` is only watched so a rejection (autoplay policy,
//! unsupported source) lands in the log instead of the console as an
//! unhandled rejection.
//!
//! Source swaps replace the element's first child with a fresh `<source>`
//! and call `load()`; DOM failures while doing so are logged at `warn`.

use bridge_traits::{error::Result as BridgeResult, BridgeError, MediaDocument, MediaElement, SourceNode};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlMediaElement, HtmlSourceElement};

use crate::error::WasmError;

/// Browser document the shim resolves media elements in.
#[derive(Debug, Clone)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    /// Wrap an explicit document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window.
    ///
    /// # Errors
    ///
    /// [`BridgeError::NotAvailable`] outside a window context (e.g. in a worker).
    pub fn current() -> BridgeResult<Self> {
        let window = web_sys::window().ok_or_else(|| BridgeError::NotAvailable("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| BridgeError::NotAvailable("document".into()))?;
        Ok(Self::new(document))
    }
}

impl MediaDocument for DomDocument {
    type Element = DomMediaElement;

    fn media_element(&self, id: &str) -> BridgeResult<DomMediaElement> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| BridgeError::ElementNotFound(id.to_string()))?;

        element
            .dyn_into::<HtmlMediaElement>()
            .map(DomMediaElement::new)
            .map_err(|_| BridgeError::NotAMediaElement(id.to_string()))
    }
}

/// Handle to an `<audio>` or `<video>` element.
#[derive(Debug, Clone)]
pub struct DomMediaElement {
    element: HtmlMediaElement,
}

impl DomMediaElement {
    /// Wrap a media element.
    pub fn new(element: HtmlMediaElement) -> Self {
        Self { element }
    }

    /// Put a `<source>` for `url` first, replacing any existing first child
    /// element. A `src` attribute on the media element itself would take
    /// precedence over source children, so it is removed.
    fn replace_source(&self, url: &str, attribute: &str, path: &str) -> Result<(), JsValue> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| JsValue::from_str("media element has no owner document"))?;
        let source = document
            .create_element("source")?
            .dyn_into::<HtmlSourceElement>()
            .map_err(JsValue::from)?;
        source.set_src(url);
        source.set_attribute(attribute, path)?;

        self.element.remove_attribute("src")?;
        match self.element.first_element_child() {
            Some(existing) => {
                self.element.replace_child(&source, &existing)?;
            }
            None => {
                self.element
                    .insert_before(&source, self.element.first_child().as_ref())?;
            }
        }
        Ok(())
    }

    fn remove_source(&self) -> Result<(), JsValue> {
        self.element.remove_attribute("src")?;
        if let Some(existing) = self.element.first_element_child() {
            existing.remove();
        }
        Ok(())
    }
}

impl MediaElement for DomMediaElement {
    type Source = DomSourceNode;

    fn play(&self) {
        match self.element.play() {
            Ok(promise) => {
                let id = self.element.id();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        warn!(element_id = %id, error = %WasmError::from(err), "native play rejected");
                    }
                });
            }
            Err(err) => {
                warn!(element_id = %self.element.id(), error = %WasmError::from(err), "native play threw");
            }
        }
    }

    fn pause(&self) {
        if let Err(err) = self.element.pause() {
            warn!(element_id = %self.element.id(), error = %WasmError::from(err), "native pause threw");
        }
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&self, time: f64) {
        self.element.set_current_time(time);
    }

    fn first_source(&self) -> Option<DomSourceNode> {
        self.element.first_element_child().map(DomSourceNode::new)
    }

    fn load_source(&self, url: &str, attribute: &str, path: &str) {
        if let Err(err) = self.replace_source(url, attribute, path) {
            warn!(element_id = %self.element.id(), error = %WasmError::from(err), "source swap failed");
            return;
        }
        self.element.load();
    }

    fn clear_source(&self) {
        if let Err(err) = self.remove_source() {
            warn!(element_id = %self.element.id(), error = %WasmError::from(err), "source removal failed");
        }
        self.element.load();
    }
}

/// First child element of a media element.
#[derive(Debug, Clone)]
pub struct DomSourceNode {
    element: Element,
}

impl DomSourceNode {
    /// Wrap a child element.
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl SourceNode for DomSourceNode {
    /// Only `<source>` children count; `src` is the resolved absolute URL.
    fn src(&self) -> Option<String> {
        self.element
            .dyn_ref::<HtmlSourceElement>()
            .map(HtmlSourceElement::src)
            .filter(|src| !src.is_empty())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }
}
