use crate::core::catalog::{validate_catalog, MediaDescriptor};
use crate::core::config::GalleryConfig;
use crate::core::constants::{
    CAMERA_TAU_SEC, HOVER_SCALE, IDLE_POINTER_THRESHOLD, ROTATION_TARGET_LIMIT, ROTATION_TAU_SEC,
};
use crate::core::layout::{facing_rotation, sphere_points};
use crate::core::picking::{camera_ray, ray_quad};
use crate::core::placeholder::ResolvedSurface;
use fnv::FnvHashMap;
use glam::{EulerRot, Quat, Vec2, Vec3};

/// Per-item animated presentation values, eased toward their targets every
/// frame.
#[derive(Debug, Clone, Copy)]
pub struct Presentation {
    pub scale: f32,
    pub opacity: f32,
    pub target_scale: f32,
    pub target_opacity: f32,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
            target_scale: 1.0,
            target_opacity: 1.0,
        }
    }
}

/// One gallery entry at runtime: the immutable descriptor and anchor plus
/// the mutable state the frame loop animates. `surface` stays `None` until
/// its resolution settles; surfaceless items are neither drawn nor
/// pickable.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub descriptor: MediaDescriptor,
    pub anchor: Vec3,
    pub orientation: Quat,
    pub surface: Option<ResolvedSurface>,
    pub presentation: Presentation,
}

/// Group rotation smoothing state, radians. `x` is pitch, `y` is yaw.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationState {
    pub current: Vec2,
    pub target: Vec2,
}

/// Camera eye smoothing state.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub eye: Vec3,
    pub desired_eye: Vec3,
    pub look_at: Vec3,
    pub resting_eye: Vec3,
}

/// Which mode the page is in. `Focused` holds the item index; the id is
/// exposed through [`GallerySession::focused_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Browsing,
    Focused(usize),
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(usize),
    Dismissed,
    Miss,
}

/// The owning gallery state: items, rotation, view mode, camera rig and the
/// async surface barrier. All mutation funnels through this struct from the
/// single browser thread; the renderer only reads it.
pub struct GallerySession {
    config: GalleryConfig,
    items: Vec<GalleryItem>,
    index_by_id: FnvHashMap<String, usize>,
    rotation: RotationState,
    view: ViewState,
    hovered: Option<usize>,
    camera: CameraRig,
    pointer_ndc: Vec2,
    pending_surfaces: usize,
    generation: u64,
}

impl GallerySession {
    pub fn new(catalog: Vec<MediaDescriptor>, config: GalleryConfig) -> anyhow::Result<Self> {
        let resting_eye = Vec3::new(0.0, 0.0, config.camera_distance);
        let mut session = Self {
            config,
            items: Vec::new(),
            index_by_id: FnvHashMap::default(),
            rotation: RotationState::default(),
            view: ViewState::Browsing,
            hovered: None,
            camera: CameraRig {
                eye: resting_eye,
                desired_eye: resting_eye,
                look_at: Vec3::ZERO,
                resting_eye,
            },
            pointer_ndc: Vec2::ZERO,
            pending_surfaces: 0,
            generation: 0,
        };
        session.rebuild(catalog)?;
        Ok(session)
    }

    /// Replace the catalog: clears prior items, lays out afresh and arms a
    /// new surface barrier. The generation bump makes every in-flight
    /// resolution for the previous build stale.
    pub fn rebuild(&mut self, catalog: Vec<MediaDescriptor>) -> anyhow::Result<()> {
        validate_catalog(&catalog)?;
        self.generation += 1;
        self.items.clear();
        self.index_by_id.clear();
        let anchors = sphere_points(
            self.config.distribution,
            catalog.len(),
            self.config.shell_radius(),
        );
        for (i, (descriptor, anchor)) in catalog.into_iter().zip(anchors).enumerate() {
            self.index_by_id.insert(descriptor.id.clone(), i);
            self.items.push(GalleryItem {
                orientation: facing_rotation(anchor, self.config.facing),
                descriptor,
                anchor,
                surface: None,
                presentation: Presentation::default(),
            });
        }
        self.pending_surfaces = self.items.len();
        self.view = ViewState::Browsing;
        self.hovered = None;
        self.rotation = RotationState::default();
        log::info!(
            "[gallery] built {} items (generation {})",
            self.items.len(),
            self.generation
        );
        Ok(())
    }

    #[inline]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[inline]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &str) -> Option<&GalleryItem> {
        self.index_by_id.get(id).map(|&i| &self.items[i])
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True until every item of the current build has a settled surface.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.pending_surfaces > 0
    }

    #[inline]
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn focused_id(&self) -> Option<&str> {
        match self.view {
            ViewState::Focused(i) => Some(self.items[i].descriptor.id.as_str()),
            ViewState::Browsing => None,
        }
    }

    #[inline]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered.map(|i| self.items[i].descriptor.id.as_str())
    }

    #[inline]
    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    #[inline]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    #[inline]
    pub fn group_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.current.x,
            self.rotation.current.y,
            0.0,
        )
    }

    #[inline]
    pub fn item_world_anchor(&self, index: usize) -> Vec3 {
        self.group_rotation() * self.items[index].anchor
    }

    /// First-writer-wins surface commit. Returns whether the surface was
    /// applied; stale generations and second writers are ignored.
    pub fn commit_surface(
        &mut self,
        generation: u64,
        index: usize,
        surface: ResolvedSurface,
    ) -> bool {
        if generation != self.generation {
            log::info!(
                "[media] dropping stale surface for item {} (generation {} != {})",
                index,
                generation,
                self.generation
            );
            return false;
        }
        let item = match self.items.get_mut(index) {
            Some(item) => item,
            None => return false,
        };
        if item.surface.is_some() {
            return false;
        }
        item.surface = Some(surface);
        self.pending_surfaces = self.pending_surfaces.saturating_sub(1);
        true
    }

    /// Pointer moved to `ndc`. While Browsing this retargets the group
    /// rotation and re-picks the hovered item; while Focused the pointer is
    /// inert. Returns true when the hovered item changed.
    pub fn pointer_moved(&mut self, ndc: Vec2, aspect: f32) -> bool {
        if let ViewState::Focused(_) = self.view {
            return false;
        }
        self.pointer_ndc = ndc;
        let s = self.config.rotate_sensitivity;
        self.rotation.target = Vec2::new(
            (ndc.y * s).clamp(-ROTATION_TARGET_LIMIT, ROTATION_TARGET_LIMIT),
            (ndc.x * s).clamp(-ROTATION_TARGET_LIMIT, ROTATION_TARGET_LIMIT),
        );
        let next = self.pick(ndc, aspect).map(|(i, _)| i);
        let changed = next != self.hovered;
        self.hovered = next;
        changed
    }

    /// Mode-dependent click: selects the hit item while Browsing, dismisses
    /// focus otherwise. A browsing miss changes nothing.
    pub fn click(&mut self, ndc: Vec2, aspect: f32) -> ClickOutcome {
        match self.view {
            ViewState::Focused(_) => {
                self.leave_focus();
                ClickOutcome::Dismissed
            }
            ViewState::Browsing => match self.pick(ndc, aspect) {
                Some((index, _)) => {
                    self.enter_focus(index);
                    ClickOutcome::Selected(index)
                }
                None => ClickOutcome::Miss,
            },
        }
    }

    /// Escape path; same side effects as a dismissing click.
    pub fn dismiss(&mut self) -> bool {
        if let ViewState::Focused(_) = self.view {
            self.leave_focus();
            true
        } else {
            false
        }
    }

    /// Advance one frame: rotation easing or idle drift, per-item emphasis
    /// targets and easing, camera glide. `dt` is in seconds.
    pub fn advance(&mut self, dt: f32) {
        // a backgrounded tab must not teleport the easing on resume
        let dt = dt.clamp(0.0, 0.25);

        if let ViewState::Browsing = self.view {
            let idle = self.pointer_ndc.x.abs() < IDLE_POINTER_THRESHOLD
                && self.pointer_ndc.y.abs() < IDLE_POINTER_THRESHOLD;
            if idle {
                self.rotation.current.y += self.config.auto_rotate_rate * dt;
            } else {
                let alpha = ease_alpha(dt, ROTATION_TAU_SEC);
                self.rotation.current += (self.rotation.target - self.rotation.current) * alpha;
            }
        }

        // emphasis targets are re-derived from the view mode every frame
        match self.view {
            ViewState::Browsing => {
                let hovered = self.hovered;
                for (i, item) in self.items.iter_mut().enumerate() {
                    item.presentation.target_scale =
                        if hovered == Some(i) { HOVER_SCALE } else { 1.0 };
                    item.presentation.target_opacity = 1.0;
                }
            }
            ViewState::Focused(focused) => {
                let focus_scale = self.config.focus_scale;
                for (i, item) in self.items.iter_mut().enumerate() {
                    if i == focused {
                        item.presentation.target_scale = focus_scale;
                        item.presentation.target_opacity = 1.0;
                    } else {
                        item.presentation.target_scale = 1.0;
                        item.presentation.target_opacity = 0.0;
                    }
                }
            }
        }

        let alpha_item = ease_alpha(dt, self.config.item_tau);
        for item in &mut self.items {
            let p = &mut item.presentation;
            p.scale += (p.target_scale - p.scale) * alpha_item;
            p.opacity += (p.target_opacity - p.opacity) * alpha_item;
        }

        let alpha_cam = ease_alpha(dt, CAMERA_TAU_SEC);
        self.camera.eye += (self.camera.desired_eye - self.camera.eye) * alpha_cam;
    }

    fn pick(&self, ndc: Vec2, aspect: f32) -> Option<(usize, f32)> {
        let (ro, rd) = camera_ray(ndc, aspect, self.camera.eye, self.camera.look_at);
        // rotate the ray into group space so anchors stay static
        let inv = self.group_rotation().inverse();
        let ro = inv * ro;
        let rd = inv * rd;
        let half = self.config.quad_size * 0.5;
        let mut best = None::<(usize, f32)>;
        for (i, item) in self.items.iter().enumerate() {
            if item.surface.is_none() {
                continue;
            }
            let extent = half * item.presentation.scale;
            if let Some(t) = ray_quad(ro, rd, item.anchor, item.orientation, extent) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best
    }

    fn enter_focus(&mut self, index: usize) {
        self.view = ViewState::Focused(index);
        self.hovered = None;
        let world = self.item_world_anchor(index);
        // fixed offset toward the viewer, not radial: near items get a
        // closeup, far items are viewed from inside the sphere
        self.camera.desired_eye = world + Vec3::Z * self.config.focus_distance;
        self.camera.look_at = world;
        log::info!("[focus] item {} ({})", index, self.items[index].descriptor.id);
    }

    fn leave_focus(&mut self) {
        self.view = ViewState::Browsing;
        self.camera.desired_eye = self.camera.resting_eye;
        self.camera.look_at = Vec3::ZERO;
        log::info!("[focus] dismissed");
    }
}

#[inline]
fn ease_alpha(dt: f32, tau: f32) -> f32 {
    1.0 - (-dt / tau.max(1e-3)).exp()
}
