mod crafting;
mod helpers;
mod hud;
mod world;

use raylib::prelude::{Camera2D, Color, RaylibDraw, RaylibDrawHandle};

use super::Game;
use helpers::vector;

impl Game {
    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = d.get_screen_width();
        let screen_height = d.get_screen_height();
        d.clear_background(Color::new(240, 240, 245, 255));
        self.draw_world(d, screen_width, screen_height);
        if self.crafting.is_open() {
            self.draw_crafting(d, screen_width, screen_height);
        } else {
            self.draw_hud(d, screen_height);
        }
    }

    /// View centred on the followed point, unscaled.
    pub fn camera(&self, screen_width: i32, screen_height: i32) -> Camera2D {
        Camera2D {
            target: vector(self.camera_target),
            offset: vector(glam::Vec2::new(
                screen_width as f32 * 0.5,
                screen_height as f32 * 0.5,
            )),
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}
