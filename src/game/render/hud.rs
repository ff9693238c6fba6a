use raylib::prelude::{RaylibDraw, RaylibDrawHandle};

use crate::color::Rgba;

use super::helpers::color;
use super::Game;

impl Game {
    pub(super) fn draw_hud(&self, d: &mut RaylibDrawHandle, screen_height: i32) {
        d.draw_text("TAB or E: Customize Tank", 10, 10, 16, color(Rgba::DARKGRAY));
        d.draw_text("WASD: Move | Mouse: Aim", 10, 30, 14, color(Rgba::GRAY));

        if let Some(player) = self.tanks.player() {
            let label = format!("Parts: {}", player.parts.len());
            d.draw_text(&label, 10, screen_height - 30, 14, color(Rgba::DARKGRAY));
        }
    }
}
