use glam::Vec2;
use raylib::prelude::{Color, RaylibDraw, Rectangle, Vector2};

use crate::color::Rgba;
use crate::entities::{PartInstance, PartSlot, Tank};
use crate::math::{deg_to_rad, vec2_from_angle, Rect};
use crate::parts::{mount_angle, mount_distance, part_shape, rarity_color, PartCatalog, PartShape};

pub(super) fn color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

pub(super) fn vector(v: Vec2) -> Vector2 {
    Vector2::new(v.x, v.y)
}

pub(super) fn rectangle(r: Rect) -> Rectangle {
    Rectangle::new(r.x, r.y, r.width, r.height)
}

/// Where and how to draw a tank. The world view and the crafting preview
/// differ only in these.
#[derive(Clone, Copy, Debug)]
pub(super) struct TankPose {
    pub center: Vec2,
    pub hull_angle: f32,
    pub turret_angle: f32,
    pub scale: f32,
}

impl TankPose {
    pub fn of(tank: &Tank) -> Self {
        Self {
            center: tank.position,
            hull_angle: tank.rotation,
            turret_angle: tank.aim_angle,
            scale: 1.0,
        }
    }
}

/// Hull plus every part. Back parts go under the hull, the rest on top.
pub(super) fn draw_tank<D: RaylibDraw>(
    d: &mut D,
    tank: &Tank,
    catalog: &PartCatalog,
    pose: TankPose,
) {
    let under = tank.parts.iter().filter(|part| part.slot == PartSlot::Back);
    for part in under {
        draw_part(d, tank, part, catalog, pose);
    }

    let size = tank.body_size * pose.scale;
    d.draw_rectangle_pro(
        Rectangle::new(pose.center.x, pose.center.y, size, size),
        Vector2::new(size * 0.5, size * 0.5),
        pose.hull_angle,
        color(tank.body_color),
    );
    d.draw_circle_v(
        vector(pose.center),
        size * 0.25,
        color(tank.body_color.brightness(-0.3)),
    );

    let over = tank.parts.iter().filter(|part| part.slot != PartSlot::Back);
    for part in over {
        draw_part(d, tank, part, catalog, pose);
    }
}

fn draw_part<D: RaylibDraw>(
    d: &mut D,
    tank: &Tank,
    part: &PartInstance,
    catalog: &PartCatalog,
    pose: TankPose,
) {
    let Some(definition) = catalog.get(part.definition_id) else {
        return;
    };
    let angle = pose.turret_angle + mount_angle(part.slot) + part.angle_offset;
    let reach = mount_distance(part.slot, tank.body_size) * pose.scale;
    let mount = pose.center + vec2_from_angle(deg_to_rad(angle)) * reach;

    match part_shape(definition.kind, definition.size * pose.scale) {
        PartShape::Barrel { length, width } => {
            d.draw_rectangle_pro(
                Rectangle::new(mount.x, mount.y, length, width),
                Vector2::new(0.0, width * 0.5),
                angle,
                color(definition.color),
            );
        }
        PartShape::Disc { radius } => {
            d.draw_circle_v(vector(mount), radius, color(definition.color));
            d.draw_circle_lines(
                mount.x as i32,
                mount.y as i32,
                radius,
                color(rarity_color(part.rarity)),
            );
        }
        PartShape::Hidden => {}
    }
}

pub(super) fn draw_health_bar<D: RaylibDraw>(d: &mut D, tank: &Tank) {
    let max = tank.current_stats.max_health;
    if max <= 0.0 || tank.health >= max {
        return;
    }
    let pct = (tank.health / max).clamp(0.0, 1.0);
    let bar_w = tank.body_size;
    let bar_h = 5.0;
    let x = tank.position.x - bar_w * 0.5;
    let y = tank.position.y - tank.body_size * 0.5 - 12.0;
    d.draw_rectangle(
        x as i32,
        y as i32,
        bar_w as i32,
        bar_h as i32,
        Color::new(10, 10, 10, 190),
    );
    d.draw_rectangle(
        x as i32,
        y as i32,
        (bar_w * pct) as i32,
        bar_h as i32,
        color(Rgba::GREEN),
    );
}
