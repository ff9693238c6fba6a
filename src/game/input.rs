use glam::Vec2;

use crate::crafting::UiInput;

/// Everything the frame driver reads from the player in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Unnormalised WASD/arrow direction, screen axes (y down).
    pub move_dir: Vec2,
    /// Cursor position in world space.
    pub aim_world: Vec2,
    pub open_crafting: bool,
    pub ui: UiInput,
}

#[cfg(feature = "render")]
pub use sampling::sample_input;

#[cfg(feature = "render")]
mod sampling {
    use raylib::prelude::{Camera2D, KeyboardKey, MouseButton, RaylibHandle};

    use super::FrameInput;
    use crate::crafting::UiInput;
    use crate::math::vec2;

    pub fn sample_input(rl: &RaylibHandle, camera: Camera2D) -> FrameInput {
        let mut move_dir = vec2(0.0, 0.0);
        if rl.is_key_down(KeyboardKey::KEY_W) || rl.is_key_down(KeyboardKey::KEY_UP) {
            move_dir.y -= 1.0;
        }
        if rl.is_key_down(KeyboardKey::KEY_S) || rl.is_key_down(KeyboardKey::KEY_DOWN) {
            move_dir.y += 1.0;
        }
        if rl.is_key_down(KeyboardKey::KEY_A) || rl.is_key_down(KeyboardKey::KEY_LEFT) {
            move_dir.x -= 1.0;
        }
        if rl.is_key_down(KeyboardKey::KEY_D) || rl.is_key_down(KeyboardKey::KEY_RIGHT) {
            move_dir.x += 1.0;
        }

        let mouse = rl.get_mouse_position();
        let aim = rl.get_screen_to_world2D(mouse, camera);
        let tab = rl.is_key_pressed(KeyboardKey::KEY_TAB);

        FrameInput {
            move_dir,
            aim_world: vec2(aim.x, aim.y),
            open_crafting: tab || rl.is_key_pressed(KeyboardKey::KEY_E),
            ui: UiInput {
                pointer: vec2(mouse.x, mouse.y),
                clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
                cancel: tab || rl.is_key_pressed(KeyboardKey::KEY_ESCAPE),
                scroll: rl.get_mouse_wheel_move(),
                viewport: vec2(rl.get_screen_width() as f32, rl.get_screen_height() as f32),
            },
        }
    }
}
