//! Fetch each section's JSON and render it into its container.
//!
//! Sections load independently: a failure in one leaves the others and the
//! backdrops untouched.

use crate::carousel;
use crate::dom;
use crate::events::EventSource;
use homepage_core::constants::{REVEAL_MAIN_DELAY_MS, REVEAL_TOP_DELAY_MS};
use homepage_core::markup::{self, Hover};
use homepage_core::sections::check_status;
use homepage_core::{
    CarouselConfig, Content, LoadError, LoadResult, Outcome, Placeholder, Section,
};
use std::error::Error as _;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: JsValue) -> LoadError {
    LoadError::Network(format!("{:?}", e))
}

pub fn load_all() {
    for section in Section::ALL {
        spawn_local(load(section));
    }
}

async fn load(section: Section) {
    let name = section.name();
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(container) = dom::query(&document, section.container_selector()) else {
        log::warn!(
            "[{}] {}",
            name,
            LoadError::MissingContainer(section.container_selector())
        );
        return;
    };

    let loading = show_placeholder(&document, &container, section);
    let result = fetch_content(section).await;
    match &result {
        Ok(content) => log::info!("[{}] loaded {} records", name, content.record_count()),
        Err(e) => match e.source() {
            Some(cause) => log::error!("[{}] load failed: {} ({})", name, e, cause),
            None => log::error!("[{}] load failed: {}", name, e),
        },
    }
    apply(&container, loading.as_ref(), &section.settle(&result));
    if let Ok(content) = &result {
        after_render(&container, content);
    }
}

fn show_placeholder(
    document: &web::Document,
    container: &web::Element,
    section: Section,
) -> Option<web::Element> {
    match section.placeholder() {
        Placeholder::Appended { text } => {
            let node = document.create_element("div").ok()?;
            node.set_class_name("loading");
            node.set_text_content(Some(text));
            container.append_child(&node).ok()?;
            Some(node)
        }
        Placeholder::Replace { html } => {
            container.set_inner_html(html);
            None
        }
    }
}

fn apply(container: &web::Element, loading: Option<&web::Element>, outcome: &Outcome) {
    if outcome.remove_placeholder {
        if let Some(node) = loading {
            node.remove();
        }
    }
    if let Some(html) = &outcome.container_html {
        container.set_inner_html(html);
    }
    if let Some(text) = outcome.loading_text {
        match loading {
            Some(node) => node.set_text_content(Some(text)),
            // the loading node could not be created
            None => container.set_inner_html(text),
        }
    }
}

async fn fetch_text(url: &str) -> LoadResult<String> {
    let window = web::window().ok_or_else(|| LoadError::Network("no window".into()))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    check_status(response.status())?;
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    body.as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".into()))
}

async fn fetch_content(section: Section) -> LoadResult<Content> {
    let url = section.url(dom::now_ms());
    log::debug!("[{}] fetching {}", section.name(), url);
    let body = fetch_text(&url).await?;
    Content::decode(section, &body)
}

// ---------------- Post-render behavior ----------------

fn after_render(container: &web::Element, content: &Content) {
    wire_hover(container);
    match content {
        Content::Profile(_) => {
            reveal_later(container, "[data-reveal=\"top\"]", REVEAL_TOP_DELAY_MS);
            reveal_later(container, "[data-reveal=\"main\"]", REVEAL_MAIN_DELAY_MS);
        }
        Content::Team(_) => {
            wire_avatar_fallbacks(container);
            if let Err(e) = carousel::mount(container, CarouselConfig::default()) {
                log::error!("[carousel] mount failed: {:?}", e);
            }
        }
        Content::Projects(_) => {
            reveal_later(container, ".research-card", REVEAL_TOP_DELAY_MS);
        }
        Content::Papers(_) | Content::Ipr(_) => {}
    }
}

fn reveal_later(container: &web::Element, selector: &str, delay_ms: i32) {
    let targets = dom::query_all_in(container, selector);
    dom::set_timeout(
        move || {
            for el in &targets {
                dom::set_style(el, "opacity", "1");
                dom::set_style(el, "transform", "translateY(0)");
            }
        },
        delay_ms,
    );
}

fn wire_hover(container: &web::Element) {
    for el in dom::query_all_in(container, "[data-hover]") {
        let Some(kind) = el.get_attribute("data-hover").as_deref().and_then(Hover::from_attr)
        else {
            continue;
        };
        let style = kind.style();
        let enter = el.clone();
        el.on("mouseenter", move |_: web::MouseEvent| {
            dom::set_style(&enter, "transform", style.enter_transform);
            dom::set_style(&enter, "box-shadow", style.enter_shadow);
            if kind == Hover::Member {
                dom::set_style(&enter, "transition", "all 0.3s ease");
            }
        });
        let leave = el.clone();
        el.on("mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&leave, "transform", style.leave_transform);
            dom::set_style(&leave, "box-shadow", style.leave_shadow);
        });
    }
}

/// Swap a broken member photo for the initial badge.
fn wire_avatar_fallbacks(container: &web::Element) {
    for img in dom::query_all_in(container, "img.member-avatar") {
        let broken = img.clone();
        img.on("error", move |_: web::Event| {
            let card = broken.parent_element();
            broken.remove();
            if let Some(card) = card {
                let initial = card.get_attribute("data-initial").unwrap_or_default();
                _ = card.insert_adjacent_html("afterbegin", &markup::initial_badge(&initial));
            }
        });
    }
}
