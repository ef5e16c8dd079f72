//! Probe host over the page's live document.

use std::future::Future;
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Window};

use bp_core::{HostError, ProbeHost, Sleep};

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ProbeHost for WebDom {
    type Node = HtmlElement;

    fn create_element(&mut self, tag: &str) -> Result<HtmlElement, HostError> {
        let element = self
            .document
            .create_element(tag)
            .map_err(|e| HostError::CreateElement {
                tag: tag.to_string(),
                reason: js_error(&e),
            })?;
        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| HostError::CreateElement {
                tag: tag.to_string(),
                reason: "not an HTML element".to_string(),
            })
    }

    fn set_attribute(&mut self, node: &HtmlElement, name: &str, value: &str) -> Result<(), HostError> {
        node.set_attribute(name, value)
            .map_err(|e| HostError::SetAttribute {
                name: name.to_string(),
                reason: js_error(&e),
            })
    }

    fn force_show(&mut self, node: &HtmlElement) -> Result<(), HostError> {
        node.style()
            .set_property_with_priority("display", "block", "important")
            .map_err(|e| HostError::Style(js_error(&e)))
    }

    fn append_child(&mut self, parent: &HtmlElement, child: &HtmlElement) -> Result<(), HostError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| HostError::Append(js_error(&e)))
    }

    fn has_body(&mut self) -> bool {
        self.document.body().is_some()
    }

    fn attach_to_body(&mut self, node: &HtmlElement) -> Result<(), HostError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| HostError::Attach("document has no body".to_string()))?;
        body.append_child(node)
            .map(|_| ())
            .map_err(|e| HostError::Attach(js_error(&e)))
    }

    // offsetParent is null for elements that don't render
    fn has_no_layout_box(&self, node: &HtmlElement) -> Result<bool, HostError> {
        Ok(node.offset_parent().is_none())
    }

    fn detach(&mut self, node: &HtmlElement) {
        node.remove();
    }
}

/// Sleeps on the event loop through `setTimeout`.
pub struct TimeoutSleeper {
    window: Window,
}

impl TimeoutSleeper {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Sleep for TimeoutSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let window = self.window.clone();
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                .is_err()
            {
                // No timer available, resolve on the next microtask instead
                let _ = resolve.call0(&JsValue::UNDEFINED);
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
    }
}
