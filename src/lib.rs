#![cfg(target_arch = "wasm32")]
use crate::camera::OrbitCamera;
use crate::core::{MotionTables, Params, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pulsar-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let params = Rc::new(RefCell::new(Params::default()));
    let colors_dirty = Rc::new(RefCell::new(false));
    let paused = Rc::new(RefCell::new(false));
    let motion = Rc::new(RefCell::new(MotionTables::from_entropy()));

    let panel = Rc::new(panel::build(&document, params.clone(), colors_dirty.clone())?);

    let aspect = Viewport::new(canvas.width(), canvas.height()).aspect();
    let camera = Rc::new(RefCell::new(OrbitCamera::default_view(aspect)));

    events::wire_global_keydown(events::KeyWiring {
        params: params.clone(),
        paused: paused.clone(),
        motion: motion.clone(),
        panel,
        canvas: canvas.clone(),
    });
    events::wire_orbit_controls(events::OrbitWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        drag: Rc::new(RefCell::new(input::DragState::default())),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        params, colors_dirty, paused, motion, camera, canvas, gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
