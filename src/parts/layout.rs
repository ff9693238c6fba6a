use crate::entities::{PartSlot, PartType};

/// How a part is drawn on the hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PartShape {
    Barrel { length: f32, width: f32 },
    Disc { radius: f32 },
    Hidden,
}

pub fn part_shape(kind: PartType, size: f32) -> PartShape {
    match kind {
        PartType::Cannon | PartType::Launcher => PartShape::Barrel {
            length: size * 2.0,
            width: size * 0.4,
        },
        PartType::Shield | PartType::Booster | PartType::DroneBay => {
            PartShape::Disc { radius: size * 0.5 }
        }
        PartType::None => PartShape::Hidden,
    }
}

/// Degrees added to the aim angle for a slot, clockwise in screen space.
pub fn mount_angle(slot: PartSlot) -> f32 {
    match slot {
        PartSlot::Front | PartSlot::Top => 0.0,
        PartSlot::Right => 90.0,
        PartSlot::Back => 180.0,
        PartSlot::Left => 270.0,
    }
}

pub fn mount_distance(slot: PartSlot, body_size: f32) -> f32 {
    match slot {
        PartSlot::Top => 0.0,
        PartSlot::Front | PartSlot::Back | PartSlot::Left | PartSlot::Right => body_size * 0.5,
    }
}
