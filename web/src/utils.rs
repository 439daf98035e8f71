use anyhow::{anyhow, Context, Result};
use gloo_utils::errors::JsError;
use wasm_bindgen::JsValue;
use web_sys::Element;

pub fn js_error(err: JsValue) -> anyhow::Error {
    match JsError::try_from(err) {
        Ok(err) => anyhow!("{err}"),
        Err(err) => anyhow!("{err}"),
    }
}

pub fn get_document_element() -> Result<Element> {
    let window = web_sys::window().context("Unable to get the window object")?;
    let document = window
        .document()
        .context("Unable to get the document object")?;
    document
        .document_element()
        .context("Unable to get the document element")
}

pub fn get_local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window().context("Unable to get the window object")?;
    window
        .local_storage()
        .map_err(js_error)?
        .context("No local storage available")
}
