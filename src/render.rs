use crate::core::{
    view_proj, wireframe_rings, Backdrop, GalleryConfig, GallerySession, SurfaceData,
    HOVER_BRIGHTEN, OUTLINE_DRIFT_PITCH_RATE, OUTLINE_DRIFT_YAW_RATE, OUTLINE_OPACITY_BASE,
    OUTLINE_OPACITY_PULSE, OUTLINE_PULSE_RATE, OUTLINE_RING_COUNT, OUTLINE_SEGMENTS,
    OUTLINE_SHELL_FACTOR,
};
use glam::{EulerRot, Quat};
use web_sys as web;

mod backdrop;
mod helpers;
mod outline;
mod quads;

use backdrop::{create_backdrop_resources, BackdropResources, BackdropUniforms};
use outline::{create_outline_resources, OutlineResources, OutlineUniforms};
use quads::{create_quad_resources, QuadGlobals, QuadInstance, QuadResources};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    // Liquid backdrop layer, absent for the plain preset
    backdrop: Option<BackdropResources>,
    // Decorative wireframe shell
    outline: OutlineResources,
    // Instanced item quads
    quads: QuadResources,
    // One sampled texture per item, created when its surface settles
    item_bind_groups: Vec<Option<wgpu::BindGroup>>,

    width: u32,
    height: u32,
    time_accum: f32,
    outline_yaw: f32,
    outline_pitch: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        gallery: GalleryConfig,
        item_count: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let backdrop = match gallery.backdrop {
            Backdrop::LiquidCrt => Some(create_backdrop_resources(&device, format)),
            Backdrop::Plain => None,
        };
        let shell = wireframe_rings(
            gallery.radius * OUTLINE_SHELL_FACTOR,
            OUTLINE_RING_COUNT,
            OUTLINE_SEGMENTS,
        );
        let outline = create_outline_resources(&device, format, &shell);
        let quads = create_quad_resources(&device, format, item_count.max(1));
        let mut item_bind_groups = Vec::new();
        item_bind_groups.resize_with(item_count, || None);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            backdrop,
            outline,
            quads,
            item_bind_groups,
            width,
            height,
            time_accum: 0.0,
            outline_yaw: 0.0,
            outline_pitch: 0.0,
        })
    }

    /// Forget per-item textures after a catalog rebuild; they are recreated
    /// as the new generation's surfaces settle.
    pub fn reset_items(&mut self, count: usize) {
        self.item_bind_groups.clear();
        self.item_bind_groups.resize_with(count, || None);
        self.quads.ensure_capacity(&self.device, count.max(1));
    }

    /// Upload a settled surface and bind it for drawing at `index`.
    pub fn upload_item_surface(&mut self, index: usize, data: &SurfaceData) {
        if index >= self.item_bind_groups.len() {
            return;
        }
        let view = helpers::create_surface_texture(&self.device, &self.queue, data);
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("item_bg"),
            layout: &self.quads.item_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.quads.sampler),
                },
            ],
        });
        self.item_bind_groups[index] = Some(bind_group);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        session: &GallerySession,
    ) -> Result<(), wgpu::SurfaceError> {
        // same resume clamp as the session easing, so the decor does not scrub
        let dt = dt_sec.clamp(0.0, 0.25);
        self.time_accum += dt;
        self.outline_yaw += OUTLINE_DRIFT_YAW_RATE * dt;
        self.outline_pitch += OUTLINE_DRIFT_PITCH_RATE * dt;

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let cam = session.camera();
        let vp = view_proj(aspect, cam.eye, cam.look_at);
        let group = session.group_rotation();

        let items = session.items();
        if items.len() > self.quads.instance_capacity {
            self.quads.ensure_capacity(&self.device, items.len());
        }

        // instance slot i belongs to item i; draw order is decided separately
        let hovered = session.hovered_index();
        let mut instances: Vec<QuadInstance> = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            instances.push(QuadInstance {
                anchor: item.anchor.to_array(),
                orient: item.orientation.to_array(),
                scale: item.presentation.scale,
                opacity: item.presentation.opacity,
                brighten: if hovered == Some(i) { HOVER_BRIGHTEN } else { 1.0 },
            });
        }
        if !instances.is_empty() {
            self.queue.write_buffer(
                &self.quads.instance_buffer,
                0,
                bytemuck::cast_slice(&instances),
            );
        }

        let globals = QuadGlobals {
            view_proj: vp.to_cols_array_2d(),
            group_rot: group.to_array(),
            quad_size: session.config().quad_size.to_array(),
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.quads.globals_buffer, 0, bytemuck::bytes_of(&globals));

        // alpha blending wants farthest-first submission
        let mut order: Vec<(usize, f32)> = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if item.surface.is_none() || item.presentation.opacity <= 0.01 {
                continue;
            }
            if self.item_bind_groups.get(i).map_or(true, |b| b.is_none()) {
                continue;
            }
            let world = group * item.anchor;
            order.push((i, cam.eye.distance_squared(world)));
        }
        order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let drift = Quat::from_euler(EulerRot::XYZ, self.outline_pitch, self.outline_yaw, 0.0);
        let pulse = OUTLINE_OPACITY_BASE
            + (self.time_accum * OUTLINE_PULSE_RATE).sin() * OUTLINE_OPACITY_PULSE;
        let outline_uniforms = OutlineUniforms {
            view_proj: vp.to_cols_array_2d(),
            drift: drift.to_array(),
            color: [1.0, 1.0, 1.0, pulse],
        };
        self.queue.write_buffer(
            &self.outline.uniform_buffer,
            0,
            bytemuck::bytes_of(&outline_uniforms),
        );

        if let Some(bd) = &self.backdrop {
            let backdrop_uniforms = BackdropUniforms {
                resolution: [self.width as f32, self.height as f32],
                time: self.time_accum * 0.6,
                _pad: 0.0,
            };
            self.queue.write_buffer(
                &bd.uniform_buffer,
                0,
                bytemuck::bytes_of(&backdrop_uniforms),
            );
        }

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("gallery_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(bd) = &self.backdrop {
                rpass.set_pipeline(&bd.pipeline);
                rpass.set_bind_group(0, &bd.bind_group, &[]);
                rpass.draw(0..3, 0..1);
            }

            rpass.set_pipeline(&self.outline.pipeline);
            rpass.set_bind_group(0, &self.outline.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.outline.vertex_buffer.slice(..));
            rpass.draw(0..self.outline.vertex_count, 0..1);

            rpass.set_pipeline(&self.quads.pipeline);
            rpass.set_bind_group(0, &self.quads.globals_bg, &[]);
            rpass.set_vertex_buffer(0, self.quads.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.quads.instance_buffer.slice(..));
            for &(i, _) in &order {
                if let Some(Some(bg)) = self.item_bind_groups.get(i) {
                    rpass.set_bind_group(1, bg, &[]);
                    rpass.draw(0..6, i as u32..i as u32 + 1);
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
