use crate::dom;
use crate::events::EventSource;
use homepage_core::markup::{
    CAROUSEL_INDICATORS_ID, CAROUSEL_INDICATOR_CLASS, CAROUSEL_NEXT_ID, CAROUSEL_PREV_ID,
    CAROUSEL_ROOT_CLASS, CAROUSEL_SLIDES_ID, CAROUSEL_SLIDE_CLASS,
};
use homepage_core::{Autoplay, Carousel, CarouselConfig, Nav, Step, Transform};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CarouselView {
    strip: web::HtmlElement,
    indicators: Vec<web::Element>,
    state: Carousel,
    config: CarouselConfig,
}

type SharedView = Rc<RefCell<CarouselView>>;

impl CarouselView {
    fn apply(&self, t: Transform) {
        let style = self.strip.style();
        let transition = if t.animated {
            self.config.transition_css()
        } else {
            "none".to_string()
        };
        _ = style.set_property("transition", &transition);
        _ = style.set_property("transform", &t.css());
        if !t.animated {
            // flush styles so a following animated move starts from here
            _ = self.strip.offset_width();
        }
    }

    fn sync_indicators(&self) {
        for (el, active) in self.indicators.iter().zip(self.state.indicators()) {
            _ = el.class_list().toggle_with_force("active", active);
        }
    }
}

fn dispatch(view: &SharedView, nav: Nav) {
    let step = view.borrow_mut().state.request(nav);
    run_step(view, step);
}

fn run_step(view: &SharedView, step: Step) {
    match step {
        Step::Move {
            transform,
            snap_after,
        } => {
            let v = view.borrow();
            v.apply(transform);
            v.sync_indicators();
            if snap_after {
                let delay = v.config.snap_delay_ms();
                let pending = view.clone();
                dom::set_timeout(move || resolve_snap(&pending), delay);
            }
        }
        Step::Queued | Step::Ignored => {}
    }
}

fn resolve_snap(view: &SharedView) {
    let snap = view.borrow_mut().state.complete_snap();
    if let Some(snap) = snap {
        view.borrow().apply(snap.transform);
        if let Some(step) = snap.replay {
            log::debug!("[carousel] replaying queued navigation");
            run_step(view, step);
        }
    }
}

fn start_autoplay(view: &SharedView, autoplay: &Rc<RefCell<Autoplay<dom::Interval>>>) {
    let period = view.borrow().config.autoplay_ms as i32;
    let ticking = view.clone();
    autoplay
        .borrow_mut()
        .start(|| dom::Interval::start(period, move || dispatch(&ticking, Nav::Next)));
}

/// Insert the wraparound copies and wire buttons, indicators and autoplay
/// for the carousel rendered inside `container`.
pub fn mount(container: &web::Element, config: CarouselConfig) -> anyhow::Result<()> {
    let strip = dom::query_in(container, &format!("#{}", CAROUSEL_SLIDES_ID))
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CAROUSEL_SLIDES_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let slides = dom::query_all_in(&strip, &format!(".{}", CAROUSEL_SLIDE_CLASS));
    let Some(state) = Carousel::new(slides.len()) else {
        log::warn!("[carousel] no slides, carousel disabled");
        return Ok(());
    };
    let (Some(first), Some(last)) = (slides.first(), slides.last()) else {
        return Ok(());
    };

    let first_copy = first
        .clone_node_with_deep(true)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let last_copy = last
        .clone_node_with_deep(true)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    strip
        .append_child(&first_copy)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let first_node: &web::Node = first;
    strip
        .insert_before(&last_copy, Some(first_node))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let indicators = dom::query_in(container, &format!("#{}", CAROUSEL_INDICATORS_ID))
        .map(|holder| dom::query_all_in(&holder, &format!(".{}", CAROUSEL_INDICATOR_CLASS)))
        .unwrap_or_default();
    let view = Rc::new(RefCell::new(CarouselView {
        strip,
        indicators,
        state,
        config,
    }));
    {
        let v = view.borrow();
        v.apply(v.state.initial_transform());
        v.sync_indicators();
    }

    if let Some(prev) = dom::query_in(container, &format!("#{}", CAROUSEL_PREV_ID)) {
        let v = view.clone();
        prev.on("click", move |_: web::MouseEvent| dispatch(&v, Nav::Prev));
    }
    if let Some(next) = dom::query_in(container, &format!("#{}", CAROUSEL_NEXT_ID)) {
        let v = view.clone();
        next.on("click", move |_: web::MouseEvent| dispatch(&v, Nav::Next));
    }
    for el in view.borrow().indicators.iter() {
        let Some(index) = el
            .get_attribute("data-index")
            .and_then(|s| s.parse::<usize>().ok())
        else {
            continue;
        };
        let v = view.clone();
        el.on("click", move |_: web::MouseEvent| dispatch(&v, Nav::Jump(index)));
    }

    let autoplay = Rc::new(RefCell::new(Autoplay::new()));
    start_autoplay(&view, &autoplay);
    if let Some(root) = dom::query_in(container, &format!(".{}", CAROUSEL_ROOT_CLASS)) {
        let pause = autoplay.clone();
        root.on("mouseenter", move |_: web::MouseEvent| {
            drop(pause.borrow_mut().stop());
        });
        let (resume, v) = (autoplay.clone(), view.clone());
        root.on("mouseleave", move |_: web::MouseEvent| start_autoplay(&v, &resume));
    }

    log::info!("[carousel] mounted with {} slides", view.borrow().state.len());
    Ok(())
}
