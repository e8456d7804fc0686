//! WebGPU rendering backend: three pipelines sharing one uniform bind group.
//!
//! The structure pass draws opaque lit boxes with depth writes; the grid and
//! particle passes blend over it with depth testing only. Particle geometry
//! is uploaded once at construction; per-frame data is uniforms plus the 16
//! structure instances.

use scene_core::{
    cube_vertices, ground_vertices, Scene, StructureInstance, GRID_WGSL, PARTICLES_WGSL,
    STRUCTURE_WGSL,
};
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    mouse_strength: f32,
    mouse: [f32; 2],
    _pad: [f32; 2],
}

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    scene_uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    structure_pipeline: wgpu::RenderPipeline,
    cube_vb: wgpu::Buffer,
    structure_instance_vb: wgpu::Buffer,

    grid_pipeline: wgpu::RenderPipeline,
    grid_vb: wgpu::Buffer,

    particle_pipeline: wgpu::RenderPipeline,
    particle_quad_vb: wgpu::Buffer,
    particle_instance_vb: wgpu::Buffer,
    particle_count: u32,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        // The surface target owns its canvas handle, so no borrowed lifetime.
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
        let depth_view = create_depth_view(&device, width, height);

        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let lights_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lights"),
            contents: bytemuck::bytes_of(&scene.lights.pack()),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        // Geometry uploads
        let cube = cube_vertices();
        let cube_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vb"),
            contents: bytemuck::cast_slice(&cube),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let structure_count = scene.architecture.node_count() as u32;
        let structure_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("structure_instances"),
            size: (std::mem::size_of::<StructureInstance>() as u64) * structure_count.max(1) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let grid_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grid_vb"),
            contents: bytemuck::cast_slice(&ground_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_corners: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let particle_quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_quad_vb"),
            contents: bytemuck::cast_slice(&quad_corners),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let particle_instances = scene.particles.instances();
        let particle_count = particle_instances.len() as u32;
        // An empty field is legal; keep a minimal placeholder buffer and
        // skip the draw call.
        let placeholder = [0u8; 32];
        let particle_contents: &[u8] = if particle_instances.is_empty() {
            &placeholder
        } else {
            bytemuck::cast_slice(&particle_instances)
        };
        let particle_instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_instances"),
            contents: particle_contents,
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Pipelines
        let structure_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("structure_shader"),
            source: wgpu::ShaderSource::Wgsl(STRUCTURE_WGSL.into()),
        });
        let grid_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("grid_shader"),
            source: wgpu::ShaderSource::Wgsl(GRID_WGSL.into()),
        });
        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(PARTICLES_WGSL.into()),
        });

        let cube_layout = wgpu::VertexBufferLayout {
            array_stride: 24,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };
        let structure_instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StructureInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 4,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 48,
                    shader_location: 5,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 64,
                    shader_location: 6,
                },
            ],
        };
        let grid_layout = wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        };
        let particle_quad_layout = wgpu::VertexBufferLayout {
            array_stride: 8,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        };
        let particle_instance_layout = wgpu::VertexBufferLayout {
            array_stride: 32,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 28,
                    shader_location: 4,
                },
            ],
        };

        let make_pipeline = |label: &str,
                             shader: &wgpu::ShaderModule,
                             buffers: &[wgpu::VertexBufferLayout],
                             blend: Option<wgpu::BlendState>,
                             depth_write: bool| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers,
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: depth_write,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };

        let structure_pipeline = make_pipeline(
            "structure_pipeline",
            &structure_shader,
            &[cube_layout, structure_instance_layout],
            Some(wgpu::BlendState::REPLACE),
            true,
        );
        let grid_pipeline = make_pipeline(
            "grid_pipeline",
            &grid_shader,
            &[grid_layout],
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );
        let particle_pipeline = make_pipeline(
            "particle_pipeline",
            &particle_shader,
            &[particle_quad_layout, particle_instance_layout],
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        log::info!(
            "gpu: initialized {}x{} ({} particles, {} nodes)",
            width,
            height,
            particle_count,
            structure_count
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            scene_uniform_buffer,
            bind_group,
            structure_pipeline,
            cube_vb,
            structure_instance_vb,
            grid_pipeline,
            grid_vb,
            particle_pipeline,
            particle_quad_vb,
            particle_instance_vb,
            particle_count,
            width,
            height,
        })
    }

    /// Reconfigure the surface and depth target on an actual size change.
    /// Zero dimensions are clamped to the minimum safe size.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let mouse = scene.mouse();
        let uniforms = SceneUniforms {
            view: scene.camera.view_matrix().to_cols_array_2d(),
            proj: scene.camera.projection_matrix().to_cols_array_2d(),
            resolution: [self.width as f32, self.height as f32],
            time: scene.time(),
            mouse_strength: scene.input.mouse_strength,
            mouse: mouse.to_array(),
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        let instances = scene.structure_instances();
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.structure_instance_vb, 0, bytemuck::cast_slice(&instances));
        }

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.016,
                            g: 0.016,
                            b: 0.024,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if !instances.is_empty() {
                rpass.set_pipeline(&self.structure_pipeline);
                rpass.set_vertex_buffer(0, self.cube_vb.slice(..));
                rpass.set_vertex_buffer(1, self.structure_instance_vb.slice(..));
                rpass.draw(0..36, 0..instances.len() as u32);
            }
            rpass.set_pipeline(&self.grid_pipeline);
            rpass.set_vertex_buffer(0, self.grid_vb.slice(..));
            rpass.draw(0..6, 0..1);
            if self.particle_count > 0 {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_vertex_buffer(0, self.particle_quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.particle_instance_vb.slice(..));
                rpass.draw(0..6, 0..self.particle_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}
