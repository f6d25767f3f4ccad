// Host-side tests for the gallery state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod picking {
        include!("../src/core/picking.rs");
    }
    pub mod placeholder {
        include!("../src/core/placeholder.rs");
    }
    pub mod session {
        include!("../src/core/session.rs");
    }
}

use crate::core::catalog::MediaDescriptor;
use crate::core::config::GalleryConfig;
use crate::core::picking::project_to_ndc;
use crate::core::placeholder::{placeholder_surface, PlaceholderStyle, ResolvedSurface, SurfaceOrigin};
use crate::core::session::{ClickOutcome, GallerySession, ViewState};
use glam::{Vec2, Vec3};

fn catalog(n: usize) -> Vec<MediaDescriptor> {
    (1..=n)
        .map(|i| MediaDescriptor::image(&i.to_string(), &format!("/img/{i}.png"), &format!("Image {i}")))
        .collect()
}

fn surface() -> ResolvedSurface {
    ResolvedSurface {
        data: placeholder_surface(PlaceholderStyle::Image, 8, 8),
        origin: SurfaceOrigin::Placeholder,
    }
}

fn settled_session(n: usize) -> GallerySession {
    let mut s = GallerySession::new(catalog(n), GalleryConfig::curation()).unwrap();
    let generation = s.generation();
    for i in 0..n {
        assert!(s.commit_surface(generation, i, surface()));
    }
    s
}

/// Ndc position that aims the camera ray straight at an item's anchor.
fn aim_at(s: &GallerySession, index: usize, aspect: f32) -> Vec2 {
    let world = s.item_world_anchor(index);
    let cam = s.camera();
    project_to_ndc(world, aspect, cam.eye, cam.look_at).unwrap()
}

/// Index of the item closest to the camera side of the sphere.
fn front_item(s: &GallerySession) -> usize {
    let mut best = 0;
    let mut best_z = f32::MIN;
    for i in 0..s.len() {
        let z = s.item_world_anchor(i).z;
        if z > best_z {
            best_z = z;
            best = i;
        }
    }
    best
}

#[test]
fn building_lays_out_every_item() {
    let s = GallerySession::new(catalog(12), GalleryConfig::curation()).unwrap();
    assert_eq!(s.len(), 12);
    assert!(s.is_loading());
    assert_eq!(s.view(), ViewState::Browsing);
    let shell = GalleryConfig::curation().shell_radius();
    for item in s.items() {
        assert!((item.anchor.length() - shell).abs() < 1e-2);
        assert!(item.surface.is_none());
        assert_eq!(item.presentation.scale, 1.0);
        assert_eq!(item.presentation.opacity, 1.0);
    }
    assert!(s.item("7").is_some());
    assert!(s.item("99").is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut bad = catalog(3);
    bad.push(MediaDescriptor::image("2", "/img/dup.png", "Dup"));
    assert!(GallerySession::new(bad, GalleryConfig::curation()).is_err());
}

#[test]
fn empty_catalogs_are_fine() {
    let s = GallerySession::new(Vec::new(), GalleryConfig::curation()).unwrap();
    assert!(s.is_empty());
    assert!(!s.is_loading());
}

#[test]
fn surfaces_commit_first_writer_wins() {
    let mut s = GallerySession::new(catalog(3), GalleryConfig::curation()).unwrap();
    let generation = s.generation();
    assert!(s.commit_surface(generation, 0, surface()));
    // a second writer for the same slot loses
    assert!(!s.commit_surface(generation, 0, surface()));
    // stale generations are dropped
    assert!(!s.commit_surface(generation - 1, 1, surface()));
    assert!(s.is_loading());
    assert!(s.commit_surface(generation, 1, surface()));
    assert!(s.commit_surface(generation, 2, surface()));
    assert!(!s.is_loading());
    // out-of-range writes are ignored
    assert!(!s.commit_surface(generation, 99, surface()));
}

#[test]
fn rebuild_invalidates_prior_generations() {
    let mut s = GallerySession::new(catalog(2), GalleryConfig::curation()).unwrap();
    let old_generation = s.generation();
    s.rebuild(catalog(4)).unwrap();
    assert_eq!(s.len(), 4);
    assert!(!s.commit_surface(old_generation, 0, surface()));
    let current = s.generation();
    assert!(s.commit_surface(current, 0, surface()));
}

#[test]
fn pointer_over_an_item_hovers_it() {
    let mut s = settled_session(6);
    let aspect = 1.0;
    let index = front_item(&s);
    let ndc = aim_at(&s, index, aspect);
    assert!(s.pointer_moved(ndc, aspect));
    assert_eq!(s.hovered_index(), Some(index));
    let id = (index + 1).to_string();
    assert_eq!(s.hovered_id(), Some(id.as_str()));
    // a far corner clears the hover again
    assert!(s.pointer_moved(Vec2::new(0.98, 0.98), aspect));
    assert_eq!(s.hovered_index(), None);
}

#[test]
fn pointer_sets_a_clamped_rotation_target() {
    let mut s = settled_session(4);
    s.pointer_moved(Vec2::new(0.8, 0.6), 1.0);
    let sensitivity = s.config().rotate_sensitivity;
    let target = s.rotation().target;
    assert!((target.x - 0.6 * sensitivity).abs() < 1e-6);
    assert!((target.y - 0.8 * sensitivity).abs() < 1e-6);
    // wildly out-of-range input clamps to a half turn either way
    s.pointer_moved(Vec2::new(50.0, -50.0), 1.0);
    let target = s.rotation().target;
    assert!((target.x + std::f32::consts::PI).abs() < 1e-6);
    assert!((target.y - std::f32::consts::PI).abs() < 1e-6);
}

#[test]
fn surfaceless_items_are_not_pickable() {
    let mut s = GallerySession::new(catalog(6), GalleryConfig::curation()).unwrap();
    let index = front_item(&s);
    let ndc = aim_at(&s, index, 1.0);
    assert_eq!(s.click(ndc, 1.0), ClickOutcome::Miss);
    assert!(!s.pointer_moved(ndc, 1.0));
    assert_eq!(s.hovered_index(), None);
}

#[test]
fn clicking_an_item_focuses_it() {
    let mut s = settled_session(6);
    let aspect = 1.0;
    let index = front_item(&s);
    let ndc = aim_at(&s, index, aspect);
    assert_eq!(s.click(ndc, aspect), ClickOutcome::Selected(index));
    assert_eq!(s.view(), ViewState::Focused(index));
    let id = (index + 1).to_string();
    assert_eq!(s.focused_id(), Some(id.as_str()));
    // the pointer is inert while focused
    assert!(!s.pointer_moved(Vec2::new(0.5, 0.5), aspect));
    assert_eq!(s.hovered_index(), None);
    // the camera is retargeted just in front of the item
    let world = s.item_world_anchor(index);
    let desired = s.camera().desired_eye;
    let offset = s.config().focus_distance;
    assert!((desired - (world + Vec3::Z * offset)).length() < 1e-3);
    assert!((s.camera().look_at - world).length() < 1e-3);
}

#[test]
fn clicking_again_dismisses() {
    let mut s = settled_session(6);
    let index = front_item(&s);
    let ndc = aim_at(&s, index, 1.0);
    assert_eq!(s.click(ndc, 1.0), ClickOutcome::Selected(index));
    // any click while focused dismisses, even one over the same item
    assert_eq!(s.click(ndc, 1.0), ClickOutcome::Dismissed);
    assert_eq!(s.view(), ViewState::Browsing);
    assert_eq!(s.focused_id(), None);
    let cam = s.camera();
    assert!((cam.desired_eye - cam.resting_eye).length() < 1e-6);
    assert!(cam.look_at.length() < 1e-6);
}

#[test]
fn browsing_misses_change_nothing() {
    let mut s = settled_session(6);
    assert_eq!(s.click(Vec2::new(0.99, -0.99), 1.0), ClickOutcome::Miss);
    assert_eq!(s.view(), ViewState::Browsing);
}

#[test]
fn escape_dismisses_only_when_focused() {
    let mut s = settled_session(6);
    assert!(!s.dismiss());
    let ndc = aim_at(&s, front_item(&s), 1.0);
    s.click(ndc, 1.0);
    assert!(s.dismiss());
    assert_eq!(s.view(), ViewState::Browsing);
    assert!(!s.dismiss());
}

#[test]
fn rotation_eases_toward_the_pointer_target() {
    let mut s = settled_session(4);
    s.pointer_moved(Vec2::new(0.8, 0.6), 1.0);
    let target = s.rotation().target;
    assert!(target.length() > 0.1);
    let mut last_gap = (target - s.rotation().current).length();
    for _ in 0..60 {
        s.advance(1.0 / 60.0);
        let gap = (target - s.rotation().current).length();
        assert!(gap <= last_gap + 1e-6);
        last_gap = gap;
    }
    // one second closes most of the distance but not all of it
    assert!(last_gap < target.length() * 0.5);
    assert!(last_gap > 0.0);
}

#[test]
fn idle_pointer_drifts_the_sphere() {
    let mut s = settled_session(4);
    // a pointer resting near center counts as idle
    s.pointer_moved(Vec2::new(0.01, -0.02), 1.0);
    let yaw0 = s.rotation().current.y;
    for _ in 0..30 {
        s.advance(1.0 / 60.0);
    }
    let drift = s.rotation().current.y - yaw0;
    let expected = s.config().auto_rotate_rate * 0.5;
    assert!((drift - expected).abs() < 1e-4);
    // pitch is untouched by the idle drift
    assert_eq!(s.rotation().current.x, 0.0);
}

#[test]
fn large_frame_gaps_are_clamped() {
    let mut s = settled_session(4);
    s.pointer_moved(Vec2::new(0.01, 0.0), 1.0);
    // a backgrounded tab reports a huge dt on resume
    s.advance(60.0);
    let drift = s.rotation().current.y;
    assert!((drift - s.config().auto_rotate_rate * 0.25).abs() < 1e-4);
}

#[test]
fn focus_eases_item_emphasis_and_camera() {
    let mut s = settled_session(6);
    let index = front_item(&s);
    let ndc = aim_at(&s, index, 1.0);
    s.click(ndc, 1.0);
    for _ in 0..240 {
        s.advance(1.0 / 60.0);
    }
    let focus_scale = s.config().focus_scale;
    let focused = &s.items()[index];
    assert!((focused.presentation.scale - focus_scale).abs() < 0.05);
    assert!((focused.presentation.opacity - 1.0).abs() < 1e-3);
    for (i, item) in s.items().iter().enumerate() {
        if i != index {
            assert!(item.presentation.opacity < 0.05, "item {i} still visible");
            assert!((item.presentation.scale - 1.0).abs() < 0.05);
        }
    }
    // the camera settled just in front of the item
    let world = s.item_world_anchor(index);
    let offset = s.config().focus_distance;
    assert!((s.camera().eye - (world + Vec3::Z * offset)).length() < 0.2);
}

#[test]
fn hover_emphasis_eases_in_and_out() {
    let mut s = settled_session(6);
    let index = front_item(&s);
    let ndc = aim_at(&s, index, 1.0);
    s.pointer_moved(ndc, 1.0);
    for _ in 0..120 {
        s.advance(1.0 / 60.0);
    }
    let hover_scale = s.items()[index].presentation.scale;
    assert!(hover_scale > 1.05);
    // moving off the item lets the scale relax again
    s.pointer_moved(Vec2::new(0.98, 0.98), 1.0);
    for _ in 0..120 {
        s.advance(1.0 / 60.0);
    }
    assert!((s.items()[index].presentation.scale - 1.0).abs() < 0.02);
}

#[test]
fn dismissal_glides_everything_back() {
    let mut s = settled_session(6);
    let index = front_item(&s);
    let ndc = aim_at(&s, index, 1.0);
    s.click(ndc, 1.0);
    for _ in 0..120 {
        s.advance(1.0 / 60.0);
    }
    s.dismiss();
    for _ in 0..240 {
        s.advance(1.0 / 60.0);
    }
    assert_eq!(s.view(), ViewState::Browsing);
    for item in s.items() {
        assert!((item.presentation.scale - 1.0).abs() < 0.05);
        assert!((item.presentation.opacity - 1.0).abs() < 0.05);
    }
    assert!((s.camera().eye - s.camera().resting_eye).length() < 0.2);
}
