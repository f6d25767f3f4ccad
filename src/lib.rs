#![cfg(target_arch = "wasm32")]
use crate::core::{GalleryConfig, GallerySession, MediaDescriptor, RESOLVE_TIMEOUT_MS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod media;
mod overlay;
mod render;

/// The page's demo catalog: a numbered image set plus two video entries.
fn demo_catalog() -> Vec<MediaDescriptor> {
    let mut catalog: Vec<MediaDescriptor> = (1..=30)
        .map(|i| {
            MediaDescriptor::image(
                &i.to_string(),
                &format!("/images/{i}.png"),
                &format!("Image {i}"),
            )
        })
        .collect();
    catalog.push(MediaDescriptor::video(
        "31",
        "/media/studio-reel.mp4",
        "Studio Reel",
    ));
    catalog.push(
        MediaDescriptor::video(
            "32",
            "https://www.youtube.com/watch?v=aqz-KE-bpKQ",
            "Live Session",
        )
        .with_link("https://www.youtube.com/watch?v=aqz-KE-bpKQ"),
    );
    catalog
}

/// Kick off one resolution task per item. Each task settles within the
/// resolve timeout and commits under the generation it was spawned for.
fn spawn_surface_resolvers(
    session: &Rc<RefCell<GallerySession>>,
    pending_uploads: &Rc<RefCell<Vec<usize>>>,
) {
    let (generation, descriptors) = {
        let s = session.borrow();
        let descriptors: Vec<MediaDescriptor> =
            s.items().iter().map(|item| item.descriptor.clone()).collect();
        (s.generation(), descriptors)
    };
    for (index, descriptor) in descriptors.into_iter().enumerate() {
        let session = session.clone();
        let pending_uploads = pending_uploads.clone();
        spawn_local(async move {
            let surface = media::resolve(&descriptor, RESOLVE_TIMEOUT_MS).await;
            if session.borrow_mut().commit_surface(generation, index, surface) {
                pending_uploads.borrow_mut().push(index);
            }
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-gallery starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_fatal(&document, &format!("{e:#}"));
            }
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
        .get_element_by_id("gallery-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #gallery-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // the demo page widens the shell a little beyond the preset
    let config = GalleryConfig {
        radius: 15.0,
        ..GalleryConfig::curation()
    };
    let session = Rc::new(RefCell::new(GallerySession::new(demo_catalog(), config)?));

    overlay::show_loading(&document);
    overlay::show_intro(&document);

    // attach before the await so resizes during gpu init still land; the
    // bindings drop and detach everything if init bails below
    let bindings = events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
    })?;

    // WebGPU is required; this is the one unrecoverable path
    let gpu = match frame::init_gpu(&canvas, &session).await {
        Some(g) => g,
        None => {
            overlay::hide_loading(&document);
            overlay::show_fatal(&document, "WebGPU is unavailable in this browser.");
            return Ok(());
        }
    };

    let pending_uploads: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    spawn_surface_resolvers(&session, &pending_uploads);

    let last_generation = session.borrow().generation();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        canvas,
        gpu: Some(gpu),
        pending_uploads,
        bindings,
        last_instant: Instant::now(),
        was_loading: true,
        last_generation,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
