pub mod keyboard;
pub mod pointer;

pub use pointer::InputWiring;

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the listener closures and the window they are attached to. Listeners
/// are detached when this is dropped, so tearing the gallery down does not
/// leave dangling handlers.
pub struct InputBindings {
    window: web::Window,
    pointermove: Closure<dyn FnMut(web::PointerEvent)>,
    pointerup: Closure<dyn FnMut(web::PointerEvent)>,
    keydown: Closure<dyn FnMut(web::KeyboardEvent)>,
    resize: Closure<dyn FnMut()>,
}

impl Drop for InputBindings {
    fn drop(&mut self) {
        _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.pointermove.as_ref().unchecked_ref(),
        );
        _ = self.window.remove_event_listener_with_callback(
            "pointerup",
            self.pointerup.as_ref().unchecked_ref(),
        );
        _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}

/// Wire pointer move, pointer up, keyboard and window resize handling.
pub fn wire_input_handlers(w: InputWiring) -> anyhow::Result<InputBindings> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let pointermove = pointer::make_pointermove(&w);
    let pointerup = pointer::make_pointerup(&w);
    let keydown = keyboard::make_keydown(&w);
    // keeps the canvas backing store at CSS size * devicePixelRatio
    let resize = {
        let canvas = w.canvas.clone();
        Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas);
        }) as Box<dyn FnMut()>)
    };

    _ = window
        .add_event_listener_with_callback("pointermove", pointermove.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("pointerup", pointerup.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

    Ok(InputBindings {
        window,
        pointermove,
        pointerup,
        keydown,
        resize,
    })
}
