#![cfg(target_arch = "wasm32")]
use homepage_core::nav::MobileMenu;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod backdrop;
mod carousel;
mod content;
mod dom;
mod events;
mod frame;
mod nav;

use events::EventSource;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("homepage-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        document.on("DOMContentLoaded", move |_: web::Event| run());
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    content::load_all();
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each backdrop is optional; one missing canvas must not stop the other.
    if let Err(e) = backdrop::start_wave(&document, &window) {
        log::warn!("[wave] not started: {:?}", e);
    }
    if let Err(e) = backdrop::start_particles(&document, &window) {
        log::warn!("[particles] not started: {:?}", e);
    }

    let menu = Rc::new(RefCell::new(MobileMenu::default()));
    nav::setup_nav_scroll(&document, &window, menu.clone());
    nav::setup_parallax(&document, &window);
    nav::setup_mobile_menu(&document, menu);
    Ok(())
}
