//! Camera for Pong game
//!
//! Simple 2D orthographic camera in screen pixels

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create a camera mapping a `width` x `height` pixel screen with the
    /// origin at the top-left corner and y growing downwards
    pub fn screen(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn project(camera: &Camera, x: f32, y: f32) -> Vec4 {
        camera.projection * camera.view * Vec4::new(x, y, 0.0, 1.0)
    }

    #[test]
    fn test_screen_corners_map_to_clip_space() {
        let camera = Camera::screen(800.0, 600.0);

        let top_left = project(&camera, 0.0, 0.0);
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = project(&camera, 800.0, 600.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_depth_inside_clip_range() {
        let camera = Camera::screen(800.0, 600.0);
        let z = project(&camera, 400.0, 300.0).z;
        assert!((0.0..=1.0).contains(&z));
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
