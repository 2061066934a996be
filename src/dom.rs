use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

fn collect(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    collect(root.query_selector_all(selector).ok())
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect(root.query_selector_all(selector).ok())
}

/// Set one inline style property; silently skips non-HTML elements.
#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[inline]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// One-shot timer. The callback is handed to JS and freed after it runs.
pub fn set_timeout(handler: impl FnOnce() + 'static, delay_ms: i32) {
    let Some(w) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(handler);
    if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    ) {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

/// Repeating timer, cleared when dropped.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: i32, handler: impl FnMut() + 'static) -> Option<Self> {
        let w = web::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(id) => Some(Self {
                id,
                _closure: closure,
            }),
            Err(e) => {
                log::warn!("[dom] setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
