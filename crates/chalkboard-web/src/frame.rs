use crate::app::App;
use crate::dom;
use crate::input::CanvasRect;
use crate::render;
use chalkboard_core::{scene_vertices, StrokeVertex};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: Rc<RefCell<App>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub css_size: Vec2,
    // board revision the vertex buffer was built from
    pub revision: Option<u64>,
    pub vertices: Vec<StrokeVertex>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        app: Rc<RefCell<App>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        let css_size = CanvasRect::of(&canvas).size();
        Self {
            app,
            canvas,
            gpu,
            css_size,
            revision: None,
            vertices: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        let css = CanvasRect::of(&self.canvas).size();

        let (view_proj, rebuilt) = {
            let mut guard = self.app.borrow_mut();
            let a = &mut *guard;
            a.tick_lyrics();

            let resized = css != self.css_size && css.x > 0.0 && css.y > 0.0;
            if resized {
                a.board.resize(css.x, css.y);
                self.css_size = css;
                log::debug!("[frame] board resized to {}x{}", css.x, css.y);
            }

            let revision = a.paint.revision();
            let rebuilt = resized || self.revision != Some(revision);
            if rebuilt {
                scene_vertices(
                    a.paint.visible_strokes(),
                    self.css_size.x,
                    self.css_size.y,
                    &mut self.vertices,
                );
                self.revision = Some(revision);
            }
            (a.board.camera.view_proj(), rebuilt)
        };

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        if rebuilt {
            gpu.upload_vertices(&self.vertices);
        }
        match gpu.render(view_proj) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("[frame] render error: {:?}", e),
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
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
