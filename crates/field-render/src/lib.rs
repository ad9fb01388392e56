//! wgpu renderer for the particle field.
//!
//! [`GpuState`] is the [`RenderSink`] both frontends hand to the field
//! controller: the web host builds it from a canvas, the native host from a
//! winit window.

use field_core::{
    RenderError, RenderSink, Scene, CONNECTION_POOL_SIZE, FIELD_COLOR, MAX_NODE_COUNT,
    NODE_OPACITY, NODE_RADIUS,
};
use glam::Mat4;
use thiserror::Error;
use wgpu::util::DeviceExt;

mod pipelines;
use pipelines::{create_field_pipelines, FieldUniforms, LineVertex, NodeInstance, QUAD_CORNERS};

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create GPU surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    UnsupportedSurface,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    node_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    line_vb: wgpu::Buffer,
    // scratch reused every frame
    instances: Vec<NodeInstance>,
    line_vertices: Vec<LineVertex>,
    adapter_name: String,
    released: bool,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
    ) -> Result<Self, GpuError> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;
        let adapter_name = adapter.get_info().name;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 cannot satisfy the default limits
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(GpuError::UnsupportedSurface)?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipelines = create_field_pipelines(&device, format);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("field_uniforms"),
            size: std::mem::size_of::<FieldUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("field_bg"),
            layout: &pipelines.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("node_instances"),
            size: (std::mem::size_of::<NodeInstance>() * MAX_NODE_COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let line_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("connection_lines"),
            size: (std::mem::size_of::<LineVertex>() * CONNECTION_POOL_SIZE * 2) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        log::info!("[gpu] adapter={} format={:?}", adapter_name, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            node_pipeline: pipelines.node_pipeline,
            line_pipeline: pipelines.line_pipeline,
            uniform_buffer,
            bind_group,
            quad_vb,
            instance_vb,
            line_vb,
            instances: Vec::with_capacity(MAX_NODE_COUNT),
            line_vertices: Vec::with_capacity(CONNECTION_POOL_SIZE * 2),
            adapter_name,
            released: false,
        })
    }

    /// Name reported by the selected adapter (fed to tier detection).
    pub fn adapter_name(&self) -> &str {
        &self.adapter_name
    }

    fn write_frame_data(&mut self, scene: &Scene<'_>) {
        let cam = scene.camera;
        let uniforms = FieldUniforms {
            view: cam.view_matrix().to_cols_array_2d(),
            proj: cam.projection_matrix().to_cols_array_2d(),
            model: Mat4::from_rotation_y(scene.scene_rotation).to_cols_array_2d(),
            color: [FIELD_COLOR[0], FIELD_COLOR[1], FIELD_COLOR[2], NODE_OPACITY],
            params: [NODE_RADIUS, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        self.instances.clear();
        self.instances.extend(
            scene
                .nodes
                .iter()
                .take(MAX_NODE_COUNT)
                .map(|n| NodeInstance {
                    center: n.position.to_array(),
                    scale: n.scale,
                }),
        );
        self.line_vertices.clear();
        for c in scene.connections.iter().take(CONNECTION_POOL_SIZE) {
            self.line_vertices.push(LineVertex {
                pos: c.from.to_array(),
                alpha: c.opacity,
            });
            self.line_vertices.push(LineVertex {
                pos: c.to.to_array(),
                alpha: c.opacity,
            });
        }
        if !self.instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&self.instances));
        }
        if !self.line_vertices.is_empty() {
            self.queue
                .write_buffer(&self.line_vb, 0, bytemuck::cast_slice(&self.line_vertices));
        }
    }
}

impl RenderSink for GpuState<'_> {
    fn resize(&mut self, width: u32, height: u32) {
        if self.released || width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    fn draw(&mut self, scene: &Scene<'_>) -> Result<(), RenderError> {
        if self.released {
            return Ok(());
        }
        let frame = self.surface.get_current_texture().map_err(|e| match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(other.to_string()),
        })?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.write_frame_data(scene);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("field_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("field_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // transparent: the page shows through behind the field
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if !self.line_vertices.is_empty() {
                rpass.set_pipeline(&self.line_pipeline);
                rpass.set_vertex_buffer(0, self.line_vb.slice(..));
                rpass.draw(0..self.line_vertices.len() as u32, 0..1);
            }
            if !self.instances.is_empty() {
                rpass.set_pipeline(&self.node_pipeline);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
                rpass.draw(0..6, 0..self.instances.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.uniform_buffer.destroy();
        self.quad_vb.destroy();
        self.instance_vb.destroy();
        self.line_vb.destroy();
        self.instances = Vec::new();
        self.line_vertices = Vec::new();
        self.released = true;
        log::info!("[gpu] resources released");
    }
}
