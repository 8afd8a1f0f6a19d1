use crate::constants::*;
use folio_core::{
    srgb_to_linear, CameraHandle, CameraState, Fog, MaterialHandle, RenderContext, SceneHandle,
    CAMERA_FOV_DEG,
};
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod mesh;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    tint: [f32; 4],
    fog: [f32; 4],
    light_dir: [f32; 4],
    shading: [f32; 4],
}

// ===================== Handle state written by the slide rig =====================

#[derive(Clone, Copy, Debug)]
pub struct CameraParams {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraHandle for CameraParams {
    fn set_position(&mut self, position: Vec3) {
        self.eye = position;
    }
    fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SceneParams {
    pub background: Vec3,
    pub fog: Fog,
}

impl SceneHandle for SceneParams {
    fn set_background(&mut self, color: Vec3) {
        self.background = color;
    }
    fn set_fog(&mut self, fog: Fog) {
        self.fog = fog;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ModelParams {
    pub tint: Vec3,
}

impl MaterialHandle for ModelParams {
    fn set_tint(&mut self, color: Vec3) {
        self.tint = color;
    }
}

/// Everything the renderer reads each frame.
#[derive(Clone, Copy, Debug)]
pub struct ViewParams {
    pub camera: CameraParams,
    pub scene: SceneParams,
    pub model: ModelParams,
}

impl ViewParams {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            camera: CameraParams { eye, target },
            scene: SceneParams {
                background: Vec3::ONE,
                fog: Fog {
                    color: Vec3::ONE,
                    density: 0.0,
                },
            },
            model: ModelParams { tint: Vec3::ONE },
        }
    }

    pub fn context(&mut self) -> RenderContext<'_> {
        RenderContext::new(&mut self.camera, &mut self.scene, &mut self.model)
    }

    fn uniforms(&self, aspect: f32) -> SceneUniforms {
        let proj = Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        let view = CameraState::new(self.camera.eye, self.camera.target).view_matrix();
        let light = Vec3::from(KEY_LIGHT_DIR).normalize();
        SceneUniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            eye: self.camera.eye.extend(1.0).to_array(),
            tint: srgb_to_linear(self.model.tint).extend(1.0).to_array(),
            fog: srgb_to_linear(self.scene.fog.color)
                .extend(self.scene.fog.density)
                .to_array(),
            light_dir: light.extend(0.0).to_array(),
            shading: [AMBIENT, SPECULAR_STRENGTH, SPECULAR_POWER, GROUND_SHADE],
        }
    }
}

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<mesh::Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBS,
        };
        let pipeline = helpers::make_scene_pipeline(&device, &pl, &shader, vertex_layout, format);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let showroom =
            mesh::showroom_mesh(MODEL_CENTER, MODEL_HALF_EXTENTS, GROUND_Y, GROUND_HALF_SIZE);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("showroom_vb"),
            contents: bytemuck::cast_slice(&showroom.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("showroom_ib"),
            contents: bytemuck::cast_slice(&showroom.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, "depth", width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            index_buffer,
            index_count: showroom.indices.len() as u32,
            _depth_tex: depth_tex,
            depth_view,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface and depth target at the current size.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        let (tex, view) = helpers::create_depth_texture(&self.device, "depth", self.width, self.height);
        self._depth_tex = tex;
        self.depth_view = view;
    }

    pub fn render(&mut self, params: &ViewParams) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let u = params.uniforms(aspect);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let bg = srgb_to_linear(params.scene.background);
        let clear = wgpu::Color {
            r: bg.x as f64,
            g: bg.y as f64,
            b: bg.z as f64,
            a: 1.0,
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
