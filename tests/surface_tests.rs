// Host-side tests for placeholder rasters and source classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod placeholder {
        include!("../src/core/placeholder.rs");
    }
    pub mod source {
        include!("../src/core/source.rs");
    }
}

use crate::core::catalog::{validate_catalog, MediaDescriptor, MediaKind};
use crate::core::placeholder::{placeholder_surface, PlaceholderStyle};
use crate::core::source::{
    classify_source, is_instagram, is_youtube, youtube_thumbnail_url, youtube_video_id, SourceClass,
};

#[test]
fn placeholder_has_full_alpha_and_exact_size() {
    let s = placeholder_surface(PlaceholderStyle::Image, 320, 240);
    assert_eq!(s.width, 320);
    assert_eq!(s.height, 240);
    assert_eq!(s.pixels.len(), 320 * 240 * 4);
    for px in s.pixels.chunks_exact(4) {
        assert_eq!(px[3], 0xff);
    }
}

#[test]
fn gradient_runs_between_the_palette_stops() {
    let s = placeholder_surface(PlaceholderStyle::Image, 320, 240);
    let px = |x: usize, y: usize| {
        let o = (y * 320 + x) * 4;
        [s.pixels[o], s.pixels[o + 1], s.pixels[o + 2]]
    };
    // the top-right corner sits exactly on the middle stop, outside any dot
    assert_eq!(px(319, 0), [0x2d, 0x1b, 0x1b]);
    // the bottom-right corner is the final stop
    assert_eq!(px(319, 239), [0x1b, 0x1b, 0x2d]);
    // the origin is the first stop lifted by the dot grid
    let lifted = |c: u8| (c as f32 + (255.0 - c as f32) * 0.1).round() as u8;
    assert_eq!(px(0, 0), [lifted(0x1a), lifted(0x1a), lifted(0x1a)]);
}

#[test]
fn styles_use_distinct_palettes() {
    let image = placeholder_surface(PlaceholderStyle::Image, 32, 32);
    let video = placeholder_surface(PlaceholderStyle::Video, 32, 32);
    let external = placeholder_surface(PlaceholderStyle::External, 32, 32);
    assert_ne!(image.pixels, video.pixels);
    assert_ne!(video.pixels, external.pixels);
}

#[test]
fn placeholders_are_deterministic() {
    let a = placeholder_surface(PlaceholderStyle::Video, 64, 48);
    let b = placeholder_surface(PlaceholderStyle::Video, 64, 48);
    assert_eq!(a.pixels, b.pixels);
}

#[test]
fn degenerate_sizes_are_clamped() {
    let s = placeholder_surface(PlaceholderStyle::External, 0, 0);
    assert_eq!(s.width, 1);
    assert_eq!(s.height, 1);
    assert_eq!(s.pixels.len(), 4);
}

#[test]
fn images_decode_directly() {
    let d = MediaDescriptor::image("1", "/images/1.png", "Image 1");
    assert_eq!(d.kind, MediaKind::Image);
    assert_eq!(classify_source(&d), SourceClass::Image("/images/1.png".to_string()));
}

#[test]
fn direct_video_files_capture_a_frame() {
    let d = MediaDescriptor::video("v", "/media/reel.mp4", "Reel");
    assert_eq!(
        classify_source(&d),
        SourceClass::VideoFrame("/media/reel.mp4".to_string())
    );
}

#[test]
fn youtube_links_use_the_public_thumbnail() {
    let d = MediaDescriptor::video("v", "https://www.youtube.com/watch?v=a1b2c3d4e5f", "Clip");
    assert_eq!(
        classify_source(&d),
        SourceClass::Thumbnail("https://img.youtube.com/vi/a1b2c3d4e5f/hqdefault.jpg".to_string())
    );
}

#[test]
fn youtube_id_extraction_handles_the_common_shapes() {
    let id = Some("a1b2c3d4e5f".to_string());
    assert_eq!(youtube_video_id("https://youtu.be/a1b2c3d4e5f"), id);
    assert_eq!(youtube_video_id("https://www.youtube.com/watch?v=a1b2c3d4e5f"), id);
    assert_eq!(youtube_video_id("https://www.youtube.com/watch?v=a1b2c3d4e5f&t=42s"), id);
    assert_eq!(youtube_video_id("https://www.youtube.com/embed/a1b2c3d4e5f"), id);
    assert_eq!(
        youtube_video_id("https://www.youtube.com/watch?list=xyz&v=a1b2c3d4e5f"),
        id
    );
    // malformed ids do not extract
    assert_eq!(youtube_video_id("https://www.youtube.com/watch?v=short"), None);
    assert_eq!(youtube_video_id("https://www.youtube.com/playlist?list=xyz"), None);
}

#[test]
fn youtube_without_an_id_falls_back_to_external() {
    let d = MediaDescriptor::video("v", "https://www.youtube.com/@somechannel", "Channel");
    assert_eq!(classify_source(&d), SourceClass::External);
}

#[test]
fn instagram_is_always_external() {
    let d = MediaDescriptor::video("v", "https://www.instagram.com/p/abc123/", "Post");
    assert!(is_instagram(&d.source));
    assert!(!is_youtube(&d.source));
    assert_eq!(classify_source(&d), SourceClass::External);
}

#[test]
fn thumbnail_urls_are_wellformed() {
    assert_eq!(
        youtube_thumbnail_url("a1b2c3d4e5f"),
        "https://img.youtube.com/vi/a1b2c3d4e5f/hqdefault.jpg"
    );
}

#[test]
fn catalogs_reject_empty_and_duplicate_ids() {
    let good = vec![
        MediaDescriptor::image("a", "/a.png", "A"),
        MediaDescriptor::video("b", "/b.mp4", "B").with_link("https://example.com/b"),
    ];
    assert!(validate_catalog(&good).is_ok());
    assert_eq!(good[1].external_link.as_deref(), Some("https://example.com/b"));

    let dup = vec![
        MediaDescriptor::image("a", "/a.png", "A"),
        MediaDescriptor::image("a", "/a2.png", "A2"),
    ];
    assert!(validate_catalog(&dup).is_err());

    let empty = vec![MediaDescriptor::image("", "/x.png", "X")];
    assert!(validate_catalog(&empty).is_err());
}
