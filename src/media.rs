//! Resolves catalog entries to pixel surfaces for the renderer.
//!
//! Every path settles: network failures, decode errors and timeouts all fall
//! back to a generated placeholder so the sphere never has holes.

use crate::core::{
    classify_source, is_instagram, placeholder_surface, MediaDescriptor, MediaKind,
    PlaceholderStyle, ResolvedSurface, SourceClass, SurfaceData, SurfaceOrigin,
    PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH, SURFACE_HEIGHT, SURFACE_WIDTH,
};
use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const TIMEOUT_MARK: &str = "timeout";

/// Resolve a descriptor to a drawable surface, settling within the given
/// timeout. Never fails.
pub async fn resolve(descriptor: &MediaDescriptor, timeout_ms: u32) -> ResolvedSurface {
    let class = classify_source(descriptor);
    let loaded = match &class {
        SourceClass::Image(url) | SourceClass::Thumbnail(url) => {
            load_image_surface(url, timeout_ms).await
        }
        SourceClass::VideoFrame(url) => capture_video_frame(url, timeout_ms).await,
        SourceClass::External => None,
    };
    match loaded {
        Some(data) => ResolvedSurface {
            data,
            origin: match class {
                SourceClass::VideoFrame(_) => SurfaceOrigin::VideoFrame,
                _ => SurfaceOrigin::Decoded,
            },
        },
        None => {
            if !matches!(class, SourceClass::External) {
                log::warn!("[media] placeholder for {}", descriptor.id);
            }
            placeholder_for(descriptor)
        }
    }
}

/// A promise that resolves with a marker value after `ms` milliseconds.
fn timeout_promise(window: &web::Window, ms: u32) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, _reject| {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_1(
            &resolve,
            ms as i32,
            &JsValue::from_str(TIMEOUT_MARK),
        );
    })
}

/// Race a promise against the timeout. A timeout settles as Err so callers
/// fall through to the placeholder path.
async fn race_with_timeout(promise: &js_sys::Promise, timeout_ms: u32) -> Result<JsValue, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let timeout = timeout_promise(&window, timeout_ms);
    let race = js_sys::Promise::race(&js_sys::Array::of2(promise, &timeout));
    let settled = JsFuture::from(race).await?;
    if settled.as_string().as_deref() == Some(TIMEOUT_MARK) {
        return Err(JsValue::from_str("timed out"));
    }
    Ok(settled)
}

async fn load_image_surface(url: &str, timeout_ms: u32) -> Option<SurfaceData> {
    let img = web::HtmlImageElement::new().ok()?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    if race_with_timeout(&img.decode(), timeout_ms).await.is_err() {
        return None;
    }
    draw_image_surface(&img)
}

fn draw_image_surface(img: &web::HtmlImageElement) -> Option<SurfaceData> {
    let ctx = scratch_context(SURFACE_WIDTH, SURFACE_HEIGHT)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        img,
        0.0,
        0.0,
        SURFACE_WIDTH as f64,
        SURFACE_HEIGHT as f64,
    )
    .ok()?;
    read_back(&ctx, SURFACE_WIDTH, SURFACE_HEIGHT)
}

/// Pull the first frame out of a video element without ever playing it.
async fn capture_video_frame(url: &str, timeout_ms: u32) -> Option<SurfaceData> {
    let document = dom::window_document()?;
    let video: web::HtmlVideoElement = document
        .create_element("video")
        .ok()?
        .dyn_into()
        .ok()?;
    video.set_cross_origin(Some("anonymous"));
    video.set_muted(true);
    video.set_preload("auto");
    _ = video.set_attribute("playsinline", "");

    let ready = js_sys::Promise::new(&mut |resolve, reject| {
        video.set_onloadeddata(Some(&resolve));
        video.set_onerror(Some(&reject));
    });
    video.set_src(url);

    let settled = race_with_timeout(&ready, timeout_ms).await;
    video.set_onloadeddata(None);
    video.set_onerror(None);

    let surface = if settled.is_ok() {
        scratch_context(SURFACE_WIDTH, SURFACE_HEIGHT).and_then(|ctx| {
            ctx.draw_image_with_html_video_element_and_dw_and_dh(
                &video,
                0.0,
                0.0,
                SURFACE_WIDTH as f64,
                SURFACE_HEIGHT as f64,
            )
            .ok()?;
            read_back(&ctx, SURFACE_WIDTH, SURFACE_HEIGHT)
        })
    } else {
        None
    };

    // release the element whether or not the capture worked
    _ = video.pause();
    _ = video.remove_attribute("src");
    video.load();
    surface
}

fn placeholder_for(descriptor: &MediaDescriptor) -> ResolvedSurface {
    let style = placeholder_style(descriptor);
    let base = placeholder_surface(style, PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
    let data = stamp_title(&base, &descriptor.title, style).unwrap_or(base);
    ResolvedSurface {
        data,
        origin: SurfaceOrigin::Placeholder,
    }
}

fn placeholder_style(descriptor: &MediaDescriptor) -> PlaceholderStyle {
    match descriptor.kind {
        MediaKind::Image => PlaceholderStyle::Image,
        MediaKind::Video => {
            if is_instagram(&descriptor.source) {
                PlaceholderStyle::External
            } else {
                PlaceholderStyle::Video
            }
        }
    }
}

/// Draw the item title over the gradient so placeholders stay identifiable.
/// Falls back to the bare gradient when the 2D canvas is unavailable.
fn stamp_title(base: &SurfaceData, title: &str, style: PlaceholderStyle) -> Option<SurfaceData> {
    let ctx = scratch_context(base.width, base.height)?;
    let image_data = web::ImageData::new_with_u8_clamped_array_and_sh(
        wasm_bindgen::Clamped(&base.pixels),
        base.width,
        base.height,
    )
    .ok()?;
    ctx.put_image_data(&image_data, 0.0, 0.0).ok()?;

    let cx = base.width as f64 / 2.0;
    let cy = base.height as f64 / 2.0;
    ctx.set_text_align("center");
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 16px system-ui");
    ctx.fill_text(title, cx, cy).ok()?;
    ctx.set_font("12px system-ui");
    let caption = match style {
        PlaceholderStyle::Image => "Click to view",
        PlaceholderStyle::Video => "Click to watch",
        PlaceholderStyle::External => "View externally",
    };
    ctx.fill_text(caption, cx, cy + 24.0).ok()?;

    read_back(&ctx, base.width, base.height)
}

fn scratch_context(width: u32, height: u32) -> Option<web::CanvasRenderingContext2d> {
    let document = dom::window_document()?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    canvas.set_width(width);
    canvas.set_height(height);
    canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn read_back(ctx: &web::CanvasRenderingContext2d, width: u32, height: u32) -> Option<SurfaceData> {
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .ok()?;
    Some(SurfaceData {
        width,
        height,
        pixels: data.data().to_vec(),
    })
}
