pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use game_core::GameEngine;
use resources::GameBuffers;
use std::sync::Arc;
use tracing::{debug, info};
use wgpu::*;
use winit::window::Window;

/// Segments in the ball's circle fan
const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
}

impl Renderer {
    /// Set up the GPU for a window showing a `width` x `height` playfield
    pub fn new(window: Arc<Window>, width: f32, height: f32) -> anyhow::Result<Self> {
        let ctx = pollster::block_on(init::init_wgpu(window))?;
        let camera = Camera::screen(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, CIRCLE_SEGMENTS);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        info!(
            width = ctx.size.0,
            height = ctx.size.1,
            format = ?ctx.config.format,
            "renderer ready"
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
        })
    }

    /// Resize the surface; the camera keeps mapping the playfield to the whole window
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        debug!(width, height, "surface resized");
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, engine: &GameEngine) -> anyhow::Result<()> {
        draw::draw_frame(self, engine)
    }
}
