//! Hover labels for elements carrying a `data-tooltip` attribute.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::error::DomError;

pub const TOOLTIP_ATTR: &str = "data-tooltip";
const BOUND_ATTR: &str = "data-tooltip-bound";
pub const TOOLTIP_STYLE_ID: &str = "tooltip-styles";
const TOOLTIP_CLASS: &str = "tooltip";

/// Gap between the target element and the label, in pixels.
const TOOLTIP_GAP: f64 = 10.0;

/// Viewport-relative box of the hovered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

/// Top-left corner for a `width`×`height` label centred above `target`.
pub fn tooltip_position(target: Rect, width: f64, height: f64) -> (f64, f64) {
    let top = target.top - height - TOOLTIP_GAP;
    let left = target.left + (target.width - width) / 2.0;
    (top, left)
}

/// Bind hover handlers to every `[data-tooltip]` element not bound yet.
/// Returns the number of newly bound elements.
pub fn attach_tooltips() -> Result<usize, DomError> {
    dom::ensure_stylesheet(TOOLTIP_STYLE_ID, TOOLTIP_CSS)?;

    let doc = dom::document()?;
    let nodes = doc.query_selector_all(&format!("[{}]:not([{}])", TOOLTIP_ATTR, BOUND_ATTR))?;

    let mut bound = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        bind(&element)?;
        bound += 1;
    }
    Ok(bound)
}

/// Bind tooltips on the next tick, once the current render has reached the DOM.
pub fn refresh_tooltips() {
    let scheduled = dom::set_timeout(0, || match dom::document()
        .and_then(|doc| remove_stale(&doc))
        .and_then(|_| attach_tooltips())
    {
        Ok(0) => {}
        Ok(n) => tracing::debug!("Bound {} tooltips", n),
        Err(e) => tracing::warn!("Failed to bind tooltips: {}", e),
    });
    if let Err(e) = scheduled {
        tracing::warn!("Failed to schedule tooltip binding: {}", e);
    }
}

fn bind(target: &Element) -> Result<(), DomError> {
    let current: Rc<RefCell<Option<Element>>> = Rc::new(RefCell::new(None));

    let enter = {
        let current = current.clone();
        let target = target.clone();
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_: web_sys::MouseEvent| {
            if let Some(old) = current.borrow_mut().take() {
                old.remove();
            }
            match show(&target) {
                Ok(tip) => *current.borrow_mut() = Some(tip),
                Err(e) => tracing::warn!("Failed to show tooltip: {}", e),
            }
        })
    };

    let leave = {
        let current = current.clone();
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_: web_sys::MouseEvent| {
            if let Some(tip) = current.borrow_mut().take() {
                tip.remove();
            }
        })
    };

    target.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
    target.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
    enter.forget();
    leave.forget();

    target.set_attribute(BOUND_ATTR, "")?;
    Ok(())
}

/// Remove every label still in the document. A target removed by a re-render
/// never sees `mouseleave`, so its label would otherwise stay behind.
fn remove_stale(doc: &web_sys::Document) -> Result<(), DomError> {
    let stale = doc.query_selector_all(&format!(".{}", TOOLTIP_CLASS))?;
    for i in 0..stale.length() {
        if let Some(el) = stale.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            el.remove();
        }
    }
    Ok(())
}

fn show(target: &Element) -> Result<Element, DomError> {
    let doc = dom::document()?;
    remove_stale(&doc)?;
    let text = target.get_attribute(TOOLTIP_ATTR).unwrap_or_default();

    let tip = doc.create_element("div")?;
    tip.set_class_name(TOOLTIP_CLASS);
    tip.set_text_content(Some(&text));
    doc.body().ok_or(DomError::NoDocument)?.append_child(&tip)?;

    // Measured after insertion so the label has a size.
    let rect = target.get_bounding_client_rect();
    let tip_html: &HtmlElement = tip.unchecked_ref();
    let (top, left) = tooltip_position(
        Rect {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
        },
        f64::from(tip_html.offset_width()),
        f64::from(tip_html.offset_height()),
    );

    let style = tip_html.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", &format!("{}px", top))?;
    style.set_property("left", &format!("{}px", left))?;
    Ok(tip)
}

pub const TOOLTIP_CSS: &str = r#"
.tooltip {
    position: absolute;
    background: #333;
    color: white;
    padding: 5px 10px;
    border-radius: 4px;
    font-size: 12px;
    z-index: 1000;
    white-space: nowrap;
    pointer-events: none;
}

.tooltip:after {
    content: '';
    position: absolute;
    top: 100%;
    left: 50%;
    margin-left: -5px;
    border-width: 5px;
    border-style: solid;
    border-color: #333 transparent transparent transparent;
}
"#;
