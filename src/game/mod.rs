mod input;
#[cfg(feature = "render")]
mod render;
mod update;

use glam::Vec2;
use log::{info, warn};
use rand::{rngs::SmallRng, SeedableRng};

use crate::config::{GameConfig, STARTING_PART};
use crate::crafting::CraftingSession;
use crate::entities::{PartInstance, TankId};
use crate::parts::{self, PartCatalog};
use crate::tanks::{spawn_ai_tanks, TankPool};

pub use input::FrameInput;
#[cfg(feature = "render")]
pub use input::sample_input;

/// Owns the world and decides each frame whether the crafting editor or the
/// simulation gets to run.
pub struct Game {
    catalog: &'static PartCatalog,
    tanks: TankPool,
    crafting: CraftingSession,
    camera_target: Vec2,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let catalog = parts::catalog();
        let mut tanks = TankPool::new();
        let mut rng = SmallRng::seed_from_u64(config.seed);

        match tanks.create(Vec2::ZERO, true, catalog) {
            Ok(player) => equip_starting_part(&mut tanks, player, catalog),
            Err(err) => warn!("could not create the player tank: {err}"),
        }
        let ai = spawn_ai_tanks(
            &mut tanks,
            &mut rng,
            config.ai_tanks,
            config.spawn_radius,
            catalog,
        );

        info!(
            "game ready: seed {}, {} AI tanks, {} part types",
            config.seed,
            ai.len(),
            catalog.len()
        );
        Self {
            catalog,
            tanks,
            crafting: CraftingSession::new(),
            camera_target: Vec2::ZERO,
        }
    }

    pub fn catalog(&self) -> &PartCatalog {
        self.catalog
    }

    pub fn tanks(&self) -> &TankPool {
        &self.tanks
    }

    pub fn tanks_mut(&mut self) -> &mut TankPool {
        &mut self.tanks
    }

    pub fn crafting(&self) -> &CraftingSession {
        &self.crafting
    }

    pub fn is_crafting(&self) -> bool {
        self.crafting.is_open()
    }

    /// World-space point the view is centred on.
    pub fn camera_target(&self) -> Vec2 {
        self.camera_target
    }
}

fn equip_starting_part(tanks: &mut TankPool, player: TankId, catalog: &PartCatalog) {
    let (definition_id, slot) = STARTING_PART;
    if let Err(err) = tanks.attach_part(player, PartInstance::new(definition_id, slot), catalog) {
        warn!("player starts without its {} part: {err}", slot.name());
    }
}
