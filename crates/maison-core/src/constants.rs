use glam::Vec3;

// Page-wide tuning constants shared by the web frontend.

// Navigation bar
pub const SCROLL_NAV_THRESHOLD: f64 = 50.0; // CSS px; nav switches to solid strictly past this

// Hero carousel
pub const AUTOPLAY_INTERVAL_MS: i32 = 6000; // fixed schedule, never reset by manual navigation

// Custom cursor
pub const CURSOR_HALF_SIZE_PX: f32 = 16.0; // 32 px ring centered on the pointer
pub const CURSOR_SPRING_MASS: f32 = 0.1;
pub const CURSOR_SPRING_TENSION: f32 = 120.0;
pub const CURSOR_SPRING_FRICTION: f32 = 14.0;

// Product viewer scene
pub const SPIN_RADIANS_PER_SEC: f32 = 0.6; // 0.01 rad/frame at 60 fps in the design reference
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOVY_RADIANS: f32 = 50.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const AMBIENT_LIGHT: f32 = 0.5;

// The two gold rings that make up the product model
pub const PRIMARY_RING_RADIUS: f32 = 1.0;
pub const PRIMARY_RING_TUBE: f32 = 0.3;
pub const DETAIL_RING_RADIUS: f32 = 1.0;
pub const DETAIL_RING_TUBE: f32 = 0.1;
pub const RING_RADIAL_SEGMENTS: u32 = 16;
pub const RING_TUBULAR_SEGMENTS: u32 = 100;
pub const DETAIL_RING_Z: f32 = 0.3; // detail ring sits slightly in front of the primary

pub const PRIMARY_RING_COLOR: [f32; 3] = [0.722, 0.525, 0.043]; // dark goldenrod
pub const DETAIL_RING_COLOR: [f32; 3] = [0.855, 0.647, 0.125]; // goldenrod
pub const PRIMARY_RING_METALNESS: f32 = 0.8;
pub const PRIMARY_RING_ROUGHNESS: f32 = 0.2;
pub const DETAIL_RING_METALNESS: f32 = 0.9;
pub const DETAIL_RING_ROUGHNESS: f32 = 0.1;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::new(CAMERA_EYE[0], CAMERA_EYE[1], CAMERA_EYE[2])
}
