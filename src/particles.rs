use crate::canvas::WebCanvas;
use crate::constants::{MAX_PARTICLES_ATTR, PARTICLES_CANVAS_ID, SEED_ATTR};
use crate::dom;
use crate::frame;
use anyhow::anyhow;
use portfolio_core::{
    FieldConfig, FrameLoop, ParticleField, ParticleScene, PointerTracker, StopHandle, Surface,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type SceneLoop = Rc<RefCell<FrameLoop<ParticleScene<WebCanvas>>>>;

/// Start the particle background on `#particles-canvas`.
///
/// Returns `Ok(None)` when the page has no such canvas: the effect is simply
/// not part of this page.
pub fn init(
    document: &web::Document,
    pointer: PointerTracker,
) -> anyhow::Result<Option<StopHandle>> {
    let Some(canvas_el) = document.get_element_by_id(PARTICLES_CANVAS_ID) else {
        log::debug!("[particles] no #{}; background disabled", PARTICLES_CANVAS_ID);
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", PARTICLES_CANVAS_ID, e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;

    let surface = sync_canvas_to_viewport(&canvas);
    let config = field_config(&canvas);
    let seed = field_seed(&canvas);
    let field = ParticleField::new(surface, config, seed)?;
    log::info!(
        "[particles] {} particles on {}x{} (seed {})",
        field.len(),
        surface.width,
        surface.height,
        seed
    );

    let scene_loop: SceneLoop = Rc::new(RefCell::new(FrameLoop::new(ParticleScene::new(
        WebCanvas::new(ctx),
        field,
        pointer,
    ))));
    wire_resize(&canvas, scene_loop.clone());
    Ok(Some(frame::start_loop(scene_loop)))
}

/// Match the canvas backing store to the viewport and report the new surface.
fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Surface {
    let (w, h) = dom::viewport_size().unwrap_or((canvas.width(), canvas.height()));
    canvas.set_width(w);
    canvas.set_height(h);
    Surface::new(w, h)
}

fn wire_resize(canvas: &web::HtmlCanvasElement, scene_loop: SceneLoop) {
    let canvas = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move || {
            let surface = sync_canvas_to_viewport(&canvas);
            // Positions are not reclamped; particles outside the new bounds
            // bounce back on their next update.
            scene_loop.borrow_mut().task_mut().resize(surface);
        });
    }
}

fn field_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let default = FieldConfig::default();
    let Some(raw) = canvas.get_attribute(MAX_PARTICLES_ATTR) else {
        return default;
    };
    let candidate = match raw.trim().parse::<usize>() {
        Ok(n) => default.clone().with_max_particles(n),
        Err(e) => {
            log::warn!("[particles] ignoring {}={:?}: {}", MAX_PARTICLES_ATTR, raw, e);
            return default;
        }
    };
    match candidate.validate() {
        Ok(()) => candidate,
        Err(e) => {
            log::warn!("[particles] ignoring {}: {}", MAX_PARTICLES_ATTR, e);
            default
        }
    }
}

fn field_seed(canvas: &web::HtmlCanvasElement) -> u64 {
    canvas
        .get_attribute(SEED_ATTR)
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                log::warn!("[particles] ignoring {}={:?}: {}", SEED_ATTR, raw, e);
                None
            }
        })
        .unwrap_or_else(rand::random::<u64>)
}
