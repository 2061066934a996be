use crate::dom;
use crate::events::EventSource;
use homepage_core::nav::{
    active_section, link_is_active, parallax_speed, parallax_transform, MobileMenu, SectionBounds,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const MENU_ID: &str = "mobile-menu";
const MENU_BUTTON_ID: &str = "mobile-menu-button";

fn section_bounds(sections: &[web::HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .filter_map(|s| {
            let id = s.get_attribute("id")?;
            Some(SectionBounds {
                id,
                top: s.offset_top() as f64,
                height: s.offset_height() as f64,
            })
        })
        .collect()
}

fn highlight_links(links: &[web::Element], active: Option<&str>) {
    for link in links {
        let on = link_is_active(link.get_attribute("href").as_deref(), active);
        _ = link.class_list().toggle_with_force("active", on);
    }
}

fn apply_menu(document: &web::Document, menu: MobileMenu) {
    if let Some(el) = document.get_element_by_id(MENU_ID) {
        _ = el.class_list().toggle_with_force("open", menu.open);
    }
}

/// Scroll spy on `.nav-link`s plus smooth scrolling on click.
pub fn setup_nav_scroll(
    document: &web::Document,
    window: &web::Window,
    menu: Rc<RefCell<MobileMenu>>,
) {
    let links = Rc::new(dom::query_all(document, ".nav-link"));
    let sections: Rc<Vec<web::HtmlElement>> = Rc::new(
        dom::query_all(document, "section")
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect(),
    );

    let update = {
        let (links, sections) = (links.clone(), sections.clone());
        move || {
            let bounds = section_bounds(&sections);
            highlight_links(&links, active_section(&bounds, dom::scroll_y()));
        }
    };

    for link in links.iter() {
        let (all, clicked, doc, menu) = (
            links.clone(),
            link.clone(),
            document.clone(),
            menu.clone(),
        );
        link.on("click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = clicked.get_attribute("href") else {
                return;
            };
            let target = dom::query(&doc, &href).and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
            if let (Some(target), Some(w)) = (target, web::window()) {
                let opts = web::ScrollToOptions::new();
                opts.set_top(target.offset_top() as f64);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
            highlight_links(&all, href.strip_prefix('#'));
            menu.borrow_mut().close();
            apply_menu(&doc, *menu.borrow());
        });
    }

    update();
    window.on("scroll", move |_: web::Event| update());
}

/// Translate every `.parallax` element by a fraction of the scroll offset.
pub fn setup_parallax(document: &web::Document, window: &web::Window) {
    let targets: Vec<(web::Element, f64)> = dom::query_all(document, ".parallax")
        .into_iter()
        .map(|el| {
            let speed = parallax_speed(el.get_attribute("data-speed").as_deref());
            (el, speed)
        })
        .collect();
    if targets.is_empty() {
        return;
    }
    window.on("scroll", move |_: web::Event| {
        let y = dom::scroll_y();
        for (el, speed) in &targets {
            dom::set_style(el, "transform", &parallax_transform(y, *speed));
        }
    });
}

pub fn setup_mobile_menu(document: &web::Document, menu: Rc<RefCell<MobileMenu>>) {
    let doc = document.clone();
    dom::add_click_listener(document, MENU_BUTTON_ID, move || {
        let open = menu.borrow_mut().toggle();
        log::debug!("[nav] mobile menu open={}", open);
        apply_menu(&doc, *menu.borrow());
    });
}
