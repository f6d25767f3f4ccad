use crate::core::{
    ndc_from_canvas_px, ClickOutcome, GallerySession, MediaKind, POINTER_THROTTLE_MS,
};
use crate::{dom, overlay};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Everything the input closures need to reach.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<GallerySession>>,
}

/// Canvas-relative pointer position in backing-store pixels.
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = canvas.width() as f32 / rect.width().max(1.0) as f32;
    let sy = canvas.height() as f32 / rect.height().max(1.0) as f32;
    Vec2::new(x_css * sx, y_css * sy)
}

pub(super) fn make_pointermove(w: &InputWiring) -> Closure<dyn FnMut(web::PointerEvent)> {
    let w = w.clone();
    let mut last_processed: Option<Instant> = None;

    Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let now = Instant::now();
        if let Some(prev) = last_processed {
            if now.duration_since(prev) < Duration::from_millis(POINTER_THROTTLE_MS) {
                return;
            }
        }
        last_processed = Some(now);

        let width = w.canvas.width();
        let height = w.canvas.height();
        if width == 0 || height == 0 {
            return;
        }
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let ndc = ndc_from_canvas_px(pos.x, pos.y, width as f32, height as f32);
        let aspect = width as f32 / height as f32;

        let hovering = {
            let mut session = w.session.borrow_mut();
            if !session.pointer_moved(ndc, aspect) {
                return;
            }
            session.hovered_index().is_some()
        };
        if let Some(document) = dom::window_document() {
            dom::set_cursor_pointer(&document, hovering);
        }
    }) as Box<dyn FnMut(_)>)
}

pub(super) fn make_pointerup(w: &InputWiring) -> Closure<dyn FnMut(web::PointerEvent)> {
    let w = w.clone();

    Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let width = w.canvas.width();
        let height = w.canvas.height();
        if width == 0 || height == 0 {
            return;
        }
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let ndc = ndc_from_canvas_px(pos.x, pos.y, width as f32, height as f32);
        let aspect = width as f32 / height as f32;

        let outcome = w.session.borrow_mut().click(ndc, aspect);
        let document = match dom::window_document() {
            Some(d) => d,
            None => return,
        };
        match outcome {
            ClickOutcome::Selected(index) => {
                let session = w.session.borrow();
                let item = &session.items()[index];
                let caption = match item.descriptor.kind {
                    MediaKind::Image => "Image • click anywhere to return",
                    MediaKind::Video => "Video • click anywhere to return",
                };
                overlay::show_focus(
                    &document,
                    &item.descriptor.title,
                    caption,
                    item.descriptor.external_link.as_deref(),
                );
                overlay::hide_intro(&document);
                dom::set_cursor_pointer(&document, false);
                log::info!("[click] selected item {} ({})", index, item.descriptor.id);
            }
            ClickOutcome::Dismissed => {
                overlay::hide_focus(&document);
                overlay::show_intro(&document);
                log::info!("[click] dismissed focus");
            }
            ClickOutcome::Miss => {}
        }
    }) as Box<dyn FnMut(_)>)
}
