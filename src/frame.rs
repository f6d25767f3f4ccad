use crate::core::GallerySession;
use crate::events::InputBindings;
use crate::render;
use crate::{dom, overlay};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<GallerySession>>,
    pub canvas: web::HtmlCanvasElement,

    pub gpu: Option<render::GpuState<'a>>,
    /// Item indices whose surfaces settled since the last frame and still
    /// need a texture upload.
    pub pending_uploads: Rc<RefCell<Vec<usize>>>,

    /// Keeps the input listeners attached for the life of the loop.
    pub bindings: InputBindings,

    pub last_instant: Instant,
    pub was_loading: bool,
    pub last_generation: u64,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        self.session.borrow_mut().advance(dt_sec);

        let session = self.session.borrow();

        // the loading overlay drops once, when the last surface settles
        let loading = session.is_loading();
        if self.was_loading && !loading {
            if let Some(document) = dom::window_document() {
                overlay::hide_loading(&document);
            }
            log::info!("[gallery] all surfaces settled");
        }
        self.was_loading = loading;

        if let Some(g) = &mut self.gpu {
            if session.generation() != self.last_generation {
                self.last_generation = session.generation();
                self.pending_uploads.borrow_mut().clear();
                g.reset_items(session.len());
            }

            for index in self.pending_uploads.borrow_mut().drain(..) {
                if let Some(surface) = session.items().get(index).and_then(|i| i.surface.as_ref())
                {
                    g.upload_item_surface(index, &surface.data);
                }
            }

            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(dt_sec, &session) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    session: &Rc<RefCell<GallerySession>>,
) -> Option<render::GpuState<'static>> {
    // snapshot before awaiting so no RefCell borrow is held across it
    let (config, item_count) = {
        let s = session.borrow();
        (s.config().clone(), s.len())
    };
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, config, item_count).await {
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
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
