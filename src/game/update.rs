use crate::tanks::{update_tank, TankInput};

use super::{FrameInput, Game};

impl Game {
    /// Advances one frame. While the editor is open the world is frozen.
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        if input.open_crafting && !self.crafting.is_open() {
            if let Some(player) = self.tanks.player_id() {
                // The opening key doubles as cancel; let it settle first.
                self.crafting.open(player);
                return;
            }
        }

        if self.crafting.is_open() {
            self.crafting.update(&input.ui, dt, &mut self.tanks, self.catalog);
            return;
        }

        self.update_player(input, dt);
        self.update_ai(dt);
    }

    fn update_player(&mut self, input: &FrameInput, dt: f32) {
        let Some(player) = self.tanks.player_id() else {
            return;
        };
        let control = TankInput {
            move_dir: input.move_dir,
            aim_pos: input.aim_world,
        };
        self.tanks.update(player, &control, dt);
        if let Some(tank) = self.tanks.get(player) {
            self.camera_target = tank.position;
        }
    }

    fn update_ai(&mut self, dt: f32) {
        let idle = TankInput::default();
        for tank in self.tanks.iter_active_mut().filter(|tank| !tank.is_player) {
            update_tank(tank, &idle, dt);
        }
    }
}
