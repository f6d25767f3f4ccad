use super::pointer::InputWiring;
use crate::{dom, overlay};
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub(super) fn make_keydown(w: &InputWiring) -> Closure<dyn FnMut(web::KeyboardEvent)> {
    let w = w.clone();

    Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        if !w.session.borrow_mut().dismiss() {
            return;
        }
        if let Some(document) = dom::window_document() {
            overlay::hide_focus(&document);
            overlay::show_intro(&document);
        }
        log::info!("[keys] escape dismissed focus");
    }) as Box<dyn FnMut(_)>)
}
