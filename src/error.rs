use wasm_bindgen::JsValue;

/// Why a component could not attach to the page.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A required element is absent; the component stays inert.
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    /// The browser rejected a DOM call.
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for WireError {
    fn from(value: JsValue) -> Self {
        WireError::Js(format!("{:?}", value))
    }
}
