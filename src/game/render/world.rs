use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, RaylibMode2DExt, Vector2};

use crate::config::GRID_SPACING;

use super::helpers::{draw_health_bar, draw_tank, TankPose};
use super::Game;

impl Game {
    pub(super) fn draw_world(
        &self,
        d: &mut RaylibDrawHandle,
        screen_width: i32,
        screen_height: i32,
    ) {
        let camera = self.camera(screen_width, screen_height);
        let top_left = d.get_screen_to_world2D(Vector2::new(0.0, 0.0), camera);
        let bottom_right = d.get_screen_to_world2D(
            Vector2::new(screen_width as f32, screen_height as f32),
            camera,
        );

        d.draw_mode2D(camera, |mut d2, _| {
            draw_grid(&mut d2, top_left, bottom_right);
            for tank in self.tanks.iter_active() {
                draw_tank(&mut d2, tank, self.catalog, TankPose::of(tank));
                draw_health_bar(&mut d2, tank);
            }
        });
    }
}

fn draw_grid<D: RaylibDraw>(d: &mut D, top_left: Vector2, bottom_right: Vector2) {
    let tint = Color::new(200, 200, 200, 50);
    let snap = |value: f32, pad: i32| (value as i32 / GRID_SPACING + pad) * GRID_SPACING;
    let (start_x, end_x) = (snap(top_left.x, -1), snap(bottom_right.x, 1));
    let (start_y, end_y) = (snap(top_left.y, -1), snap(bottom_right.y, 1));

    for x in (start_x..=end_x).step_by(GRID_SPACING as usize) {
        d.draw_line(x, start_y, x, end_y, tint);
    }
    for y in (start_y..=end_y).step_by(GRID_SPACING as usize) {
        d.draw_line(start_x, y, end_x, y, tint);
    }
}
