use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

pub mod config;
pub mod error;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;

use config::SceneConfig;
use error::RenderError;
use render::{FrameRenderer, WebGLContext};
use scene::{FrameClock, RenderState};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init (e.g. several modules on one page) keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Cube and pyramid under an orbiting camera, exposed to JavaScript
#[wasm_bindgen]
pub struct OrbitingSolids {
    canvas: HtmlCanvasElement,
    ctx: WebGLContext,
    renderer: FrameRenderer,
    state: RenderState,
    clock: FrameClock,
}

#[wasm_bindgen]
impl OrbitingSolids {
    /// Create the scene with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<OrbitingSolids, JsValue> {
        Self::with_config(canvas, "")
    }

    /// Create the scene from a YAML settings string
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<OrbitingSolids, JsValue> {
        Self::build(canvas, yaml).map_err(report)
    }

    /// Draw one frame, then advance the orbit by `dt` seconds
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f64) {
        let aspect = aspect_ratio(self.canvas.client_width(), self.canvas.client_height());
        self.renderer.render(&self.ctx, &mut self.state, aspect, dt);
    }

    /// Draw one frame from an animation-frame timestamp in milliseconds
    #[wasm_bindgen]
    pub fn render_at(&mut self, now_ms: f64) {
        let dt = self.clock.tick(now_ms);
        self.render(dt);
    }

    /// Current orbit angle in radians
    #[wasm_bindgen]
    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }
}

impl OrbitingSolids {
    fn build(canvas: HtmlCanvasElement, yaml: &str) -> Result<OrbitingSolids, RenderError> {
        let config = SceneConfig::from_yaml(yaml)?;
        let ctx = WebGLContext::from_canvas(&canvas)?;
        let renderer = FrameRenderer::new(&ctx, &config)?;

        log::info!(
            "Scene ready on {}x{} canvas, pyramid mode {:?}",
            canvas.width(),
            canvas.height(),
            config.pyramid.mode
        );

        Ok(Self {
            canvas,
            ctx,
            renderer,
            state: RenderState::new(),
            clock: FrameClock::new(),
        })
    }
}

/// Look up the canvas by element id and render into it on every animation frame
#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Result<(), JsValue> {
    let canvas = find_canvas(canvas_id).map_err(report)?;
    let app = Rc::new(RefCell::new(OrbitingSolids::new(canvas)?));

    // The closure re-arms itself through this slot, so it lives until the page closes
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        app.borrow_mut().render_at(now);
        if let Some(cb) = frame_for_cb.borrow().as_ref() {
            if let Err(err) = request_frame(cb) {
                log::error!("Animation loop stopped: {}", err);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = frame.borrow().as_ref() {
        request_frame(cb).map_err(report)?;
    }
    Ok(())
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, RenderError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| RenderError::Host("no document".to_string()))?;

    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| RenderError::Host(format!("canvas '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| RenderError::Host(format!("element '{}' is not a canvas", canvas_id)))
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, RenderError> {
    let window = web_sys::window().ok_or_else(|| RenderError::Host("no window".to_string()))?;
    Ok(window.request_animation_frame(cb.as_ref().unchecked_ref())?)
}

/// Log the error, alert the user for shader build failures, and hand it to JavaScript
fn report(err: RenderError) -> JsValue {
    log::error!("{}", err);
    if err.is_user_facing() {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&err.to_string());
        }
    }
    err.into()
}

/// Width over height; a collapsed canvas falls back to square
fn aspect_ratio(width: i32, height: i32) -> f32 {
    if width <= 0 || height <= 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
