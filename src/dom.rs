//! Thin helpers over `web_sys` for the few imperative DOM operations the app needs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Insert a `<style id=..>` element into `<head>` unless one with that id already exists.
/// Returns whether a stylesheet was inserted.
pub fn ensure_stylesheet(id: &str, css: &str) -> Result<bool, DomError> {
    let doc = document()?;
    if doc.get_element_by_id(id).is_some() {
        return Ok(false);
    }
    let style = doc.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    let head = doc.head().ok_or(DomError::NoDocument)?;
    head.append_child(&style)?;
    Ok(true)
}

/// Run `callback` once after `delay_ms`. Returns the timer handle.
pub fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) -> Result<i32, DomError> {
    let callback = Closure::once(callback);
    let id = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    callback.forget();
    Ok(id)
}

/// Open a new browsing context and write a complete HTML document into it.
pub fn open_document_window(html: &str) -> Result<(), DomError> {
    let popup = window()?
        .open_with_url_and_target("", "_blank")?
        .ok_or(DomError::PopupBlocked)?;
    let doc: web_sys::HtmlDocument = popup
        .document()
        .ok_or(DomError::NoDocument)?
        .dyn_into()
        .map_err(|_| DomError::NoDocument)?;
    doc.write(&js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(html)))?;
    doc.close()?;
    Ok(())
}
