use crate::camera::OrbitCamera;
use crate::core::{GlitchFrame, GlitchSchedule, MotionTables, Params, WaveGrid};
use crate::render::{self, FrameInputs};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub params: Rc<RefCell<Params>>,
    pub colors_dirty: Rc<RefCell<bool>>,
    pub paused: Rc<RefCell<bool>>,
    pub motion: Rc<RefCell<MotionTables>>,
    pub camera: Rc<RefCell<OrbitCamera>>,

    pub grid: WaveGrid,
    pub glitch: GlitchSchedule,
    pub last_glitch: GlitchFrame,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    /// Animation clock in seconds; only advances while not paused.
    pub elapsed: f64,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        params: Rc<RefCell<Params>>,
        colors_dirty: Rc<RefCell<bool>>,
        paused: Rc<RefCell<bool>>,
        motion: Rc<RefCell<MotionTables>>,
        camera: Rc<RefCell<OrbitCamera>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        let grid = WaveGrid::new(&params.borrow());
        Self {
            params,
            colors_dirty,
            paused,
            motion,
            camera,
            grid,
            glitch: GlitchSchedule::from_entropy(),
            last_glitch: GlitchFrame::idle(),
            canvas,
            gpu,
            last_instant: Instant::now(),
            elapsed: 0.0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let running = !*self.paused.borrow();
        if running {
            self.elapsed += dt.as_secs_f64();
        }

        let params = self.params.borrow().clone();
        if self.colors_dirty.replace(false) {
            self.grid.recolor(&params);
        }
        if running {
            self.grid
                .update_heights(self.elapsed, &params, &mut self.motion.borrow_mut());
            self.last_glitch = self.glitch.step();
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        let view_proj = {
            let mut cam = self.camera.borrow_mut();
            cam.set_aspect(w, h);
            cam.update();
            cam.view_proj()
        };

        if let Some(g) = self.gpu.as_mut() {
            g.resize_if_needed(w, h);
            let inputs = FrameInputs {
                vertices: self.grid.vertices(),
                view_proj,
                params: &params,
                glitch: self.last_glitch,
                time: self.elapsed as f32,
            };
            if let Err(e) = g.render(&inputs) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
