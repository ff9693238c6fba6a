use glam::Vec2;
use std::f32::consts::PI;

/// Axis-aligned rectangle in screen or world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width * 0.5,
            center.y - height * 0.5,
            width,
            height,
        )
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

pub fn vec2_from_angle(angle: f32) -> Vec2 {
    vec2(angle.cos(), angle.sin())
}

/// Angle of `v` in degrees, measured from +x towards +y.
pub fn vec2_angle_deg(v: Vec2) -> f32 {
    rad_to_deg(v.y.atan2(v.x))
}

pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Edge-inclusive point test, matching the renderer's hit-testing.
pub fn point_in_bounds(pos: Vec2, bounds: &Rect) -> bool {
    pos.x >= bounds.x
        && pos.x <= bounds.x + bounds.width
        && pos.y >= bounds.y
        && pos.y <= bounds.y + bounds.height
}
