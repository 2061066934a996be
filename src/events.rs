//! Typed listener registration.
//!
//! Anything that is an `EventTarget` (window, document, elements) can take a
//! handler for a named event with the concrete event type spelled out at the
//! call site, e.g. `window.on("mousemove", |ev: web::MouseEvent| ..)`.
//! Listeners live for the lifetime of the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

pub trait EventSource {
    fn on<E>(&self, name: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static;
}

impl<T: AsRef<web::EventTarget>> EventSource for T {
    fn on<E>(&self, name: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        if let Err(e) = self
            .as_ref()
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] could not listen for {}: {:?}", name, e);
        }
        closure.forget();
    }
}
