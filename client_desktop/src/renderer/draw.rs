use super::resources::{InstanceData, MAX_CIRCLE_INSTANCES, MAX_RECT_INSTANCES};
use super::Renderer;
use crate::font;
use game_core::{Aabb, Anchor, Canvas, Color, GameEngine, TextStyle};
use glam::Vec2;
use tracing::{debug, warn};
use wgpu::*;

/// Net line thickness in pixels
const LINE_WIDTH: f32 = 1.0;

/// Collects one frame of engine draw calls as GPU instances
#[derive(Debug, Default)]
pub struct FrameCanvas {
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

impl FrameCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for FrameCanvas {
    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.rects.push(InstanceData::from_rect(rect, color));
    }

    fn fill_ellipse(&mut self, rect: Aabb, color: Color) {
        self.circles.push(InstanceData::from_rect(rect, color));
    }

    /// Only axis-aligned lines are drawn, as thin rectangles
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (min, max) = (from.min(to), from.max(to));
        let half = LINE_WIDTH / 2.0;
        let rect = if from.x == to.x {
            Aabb::new(Vec2::new(min.x - half, min.y), Vec2::new(max.x + half, max.y))
        } else if from.y == to.y {
            Aabb::new(Vec2::new(min.x, min.y - half), Vec2::new(max.x, max.y + half))
        } else {
            debug!(?from, ?to, "diagonal line skipped");
            return;
        };
        self.fill_rect(rect, color);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle, anchor: Anchor, color: Color) {
        let cell = style.px() / font::GLYPH_ROWS as f32;
        let origin = match anchor {
            Anchor::TopLeft => pos,
            Anchor::Center => pos - font::text_size(text, cell) / 2.0,
        };

        for rect in font::layout(text, origin, cell) {
            self.fill_rect(rect, color);
        }
    }
}

pub fn draw_frame(renderer: &mut Renderer, engine: &GameEngine) -> anyhow::Result<()> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            debug!("surface lost or outdated, reconfiguring");
            renderer.reconfigure();
            return Ok(());
        }
        Err(SurfaceError::OutOfMemory) => {
            anyhow::bail!("GPU out of memory");
        }
        Err(err) => {
            warn!(%err, "skipping frame");
            return Ok(());
        }
    };

    let mut canvas = FrameCanvas::new();
    engine.render(&mut canvas);
    let (rect_count, circle_count) = update_buffers(renderer, &canvas);

    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(wgpu::Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, rect_count, circle_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &Renderer, canvas: &FrameCanvas) -> (u32, u32) {
    let rects = clamp_instances(&canvas.rects, MAX_RECT_INSTANCES, "rect");
    let circles = clamp_instances(&canvas.circles, MAX_CIRCLE_INSTANCES, "circle");

    if !rects.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(rects));
    }
    if !circles.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.circles, 0, bytemuck::cast_slice(circles));
    }

    (rects.len() as u32, circles.len() as u32)
}

fn clamp_instances<'a>(instances: &'a [InstanceData], max: usize, kind: &str) -> &'a [InstanceData] {
    if instances.len() > max {
        warn!(kind, count = instances.len(), max, "instance buffer full, dropping extras");
        &instances[..max]
    } else {
        instances
    }
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, rects: u32, circles: u32) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (paddles, net, text)
    let rect_mesh = &renderer.meshes.0;
    pass.set_vertex_buffer(0, rect_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
    pass.draw_indexed(0..rect_mesh.index_count, 0, 0..rects);

    // Circles (ball)
    let circle_mesh = &renderer.meshes.1;
    pass.set_vertex_buffer(0, circle_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(circle_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
    pass.draw_indexed(0..circle_mesh.index_count, 0, 0..circles);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, GameRng};

    #[test]
    fn test_vertical_line_becomes_thin_rect() {
        let mut canvas = FrameCanvas::new();
        canvas.draw_line(Vec2::new(400.0, 0.0), Vec2::new(400.0, 600.0), Color::WHITE);

        assert_eq!(canvas.rects.len(), 1);
        assert_eq!(canvas.rects[0].transform, [400.0, 300.0, 1.0, 600.0]);
    }

    #[test]
    fn test_diagonal_line_is_skipped() {
        let mut canvas = FrameCanvas::new();
        canvas.draw_line(Vec2::ZERO, Vec2::new(10.0, 10.0), Color::WHITE);
        assert!(canvas.rects.is_empty());
    }

    #[test]
    fn test_centered_text_is_centered() {
        let mut canvas = FrameCanvas::new();
        canvas.draw_text("-", Vec2::new(400.0, 300.0), TextStyle::Menu, Anchor::Center, Color::WHITE);

        // A dash is one run across the glyph's middle row
        assert_eq!(canvas.rects.len(), 1);
        let [cx, cy, ..] = canvas.rects[0].transform;
        assert!((cx - 400.0).abs() < 1e-4);
        assert!((cy - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_top_left_text_starts_at_pos() {
        let mut canvas = FrameCanvas::new();
        canvas.draw_text("1", Vec2::new(200.0, 20.0), TextStyle::Score, Anchor::TopLeft, Color::WHITE);

        let left = canvas
            .rects
            .iter()
            .map(|r| r.transform[0] - r.transform[2] / 2.0)
            .fold(f32::INFINITY, f32::min);
        let top = canvas
            .rects
            .iter()
            .map(|r| r.transform[1] - r.transform[3] / 2.0)
            .fold(f32::INFINITY, f32::min);
        assert!(left >= 200.0);
        assert!((top - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_engine_frame_fits_instance_buffers() {
        let engine = GameEngine::new(Config::new(), GameRng::new(1));
        let mut canvas = FrameCanvas::new();
        engine.render(&mut canvas);

        assert_eq!(canvas.circles.len(), 1, "One ball");
        assert!(canvas.rects.len() >= 3, "Two paddles and the net");
        assert!(canvas.rects.len() <= MAX_RECT_INSTANCES);
    }

    #[test]
    fn test_clamp_instances() {
        let instances = vec![InstanceData::from_rect(Aabb::new(Vec2::ZERO, Vec2::ONE), Color::WHITE); 5];
        assert_eq!(clamp_instances(&instances, 3, "rect").len(), 3);
        assert_eq!(clamp_instances(&instances, 8, "rect").len(), 5);
    }
}
