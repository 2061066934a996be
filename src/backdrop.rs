//! Canvas backdrops: the wave strip and the particle field.
//!
//! Each backdrop owns its canvas, its 2D context and its simulation. Resize
//! rebuilds the simulation synchronously; the particle field additionally
//! reads a shared [`PointerState`] that window listeners keep current.

use crate::dom;
use crate::events::EventSource;
use crate::frame::{start_loop, Animation};
use homepage_core::constants::{
    PARTICLE_LINK_WIDTH, WAVE_GRADIENT_BOTTOM, WAVE_GRADIENT_TOP,
};
use homepage_core::particles::rgba;
use homepage_core::{ParticleConfig, ParticleField, PathCmd, PointerState, WaveConfig, WaveField};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

// ---------------- Wave ----------------

pub struct WaveBackdrop {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: WaveField,
}

impl WaveBackdrop {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        let mut backdrop = Self {
            canvas,
            ctx,
            field: WaveField::new(WaveConfig::default()),
        };
        backdrop.resize();
        Ok(backdrop)
    }

    pub fn resize(&mut self) {
        let (width, _) = dom::viewport_size();
        self.field.resize(width as f32, &mut rand::thread_rng());
        self.canvas.set_width(self.field.width as u32);
        self.canvas.set_height(self.field.height as u32);
    }

    fn draw(&self) {
        let ctx = &self.ctx;
        let (w, h) = (self.field.width as f64, self.field.height as f64);
        ctx.clear_rect(0.0, 0.0, w, h);

        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        _ = gradient.add_color_stop(0.0, WAVE_GRADIENT_TOP);
        _ = gradient.add_color_stop(1.0, WAVE_GRADIENT_BOTTOM);
        ctx.set_fill_style(&gradient);

        ctx.begin_path();
        for cmd in self.field.silhouette() {
            match cmd {
                PathCmd::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::QuadTo { ctrl, to } => {
                    ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
                }
                PathCmd::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            }
        }
        ctx.fill();
    }
}

impl Animation for WaveBackdrop {
    fn frame(&mut self) {
        self.field.update();
        self.draw();
    }
}

// ---------------- Particles ----------------

pub struct ParticleBackdrop {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    pointer: Rc<RefCell<PointerState>>,
}

impl ParticleBackdrop {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        pointer: Rc<RefCell<PointerState>>,
    ) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        let mut backdrop = Self {
            canvas,
            ctx,
            field: ParticleField::new(ParticleConfig::default()),
            pointer,
        };
        backdrop.resize();
        Ok(backdrop)
    }

    pub fn resize(&mut self) {
        let (width, height) = dom::viewport_size();
        self.field
            .resize(width as f32, height as f32, &mut rand::thread_rng());
        self.canvas.set_width(self.field.width as u32);
        self.canvas.set_height(self.field.height as u32);
    }

    fn draw(&self) {
        let ctx = &self.ctx;
        let rgb = self.field.config.rgb;
        ctx.clear_rect(0.0, 0.0, self.field.width as f64, self.field.height as f64);

        for p in &self.field.particles {
            ctx.begin_path();
            _ = ctx.arc(p.position.x as f64, p.position.y as f64, p.radius as f64, 0.0, TAU);
            ctx.set_fill_style(&JsValue::from_str(&p.color(rgb)));
            ctx.fill();
        }

        ctx.set_line_width(PARTICLE_LINK_WIDTH);
        let particles = &self.field.particles;
        self.field.for_each_link(|link| {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            ctx.begin_path();
            ctx.set_stroke_style(&JsValue::from_str(&rgba(rgb, link.alpha)));
            ctx.move_to(a.position.x as f64, a.position.y as f64);
            ctx.line_to(b.position.x as f64, b.position.y as f64);
            ctx.stroke();
        });
    }
}

impl Animation for ParticleBackdrop {
    fn frame(&mut self) {
        let pointer = *self.pointer.borrow();
        self.field.update(&pointer);
        self.draw();
    }
}

// ---------------- Wiring ----------------

fn wire_pointer(window: &web::Window, pointer: &Rc<RefCell<PointerState>>) {
    let on_move = pointer.clone();
    window.on("mousemove", move |ev: web::MouseEvent| {
        on_move
            .borrow_mut()
            .move_to(ev.client_x() as f32, ev.client_y() as f32);
    });
    let on_out = pointer.clone();
    window.on("mouseout", move |_: web::MouseEvent| {
        on_out.borrow_mut().leave();
    });
}

pub fn start_wave(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    let canvas = canvas_by_id(document, "waveCanvas")?;
    let wave = Rc::new(RefCell::new(WaveBackdrop::new(canvas)?));
    let on_resize = wave.clone();
    window.on("resize", move |_: web::Event| on_resize.borrow_mut().resize());
    log::info!("[wave] started with {} points", wave.borrow().field.points.len());
    start_loop(wave);
    Ok(())
}

pub fn start_particles(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    let canvas = canvas_by_id(document, "particlesCanvas")?;
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let particles = Rc::new(RefCell::new(ParticleBackdrop::new(canvas, pointer.clone())?));
    wire_pointer(window, &pointer);
    let on_resize = particles.clone();
    window.on("resize", move |_: web::Event| on_resize.borrow_mut().resize());
    log::info!(
        "[particles] started with {} particles",
        particles.borrow().field.particles.len()
    );
    start_loop(particles);
    Ok(())
}
