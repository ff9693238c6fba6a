//! Core of a 2D tank game built around craftable tank parts.
//!
//! Everything except drawing and input sampling runs headless; the raylib
//! frontend sits behind the `render` feature.
pub mod color;
pub mod config;
pub mod crafting;
pub mod entities;
pub mod game;
pub mod logging;
pub mod math;
pub mod parts;
pub mod tanks;

pub use color::Rgba;
pub use config::GameConfig;
pub use crafting::{CraftMode, CraftingLayout, CraftingSession, ListEntry, UiInput};
pub use entities::{
    PartDefinition, PartId, PartInstance, PartSlot, PartType, Rarity, Stats, Tank, TankId,
};
pub use game::{FrameInput, Game};
pub use logging::init as init_logging;
pub use parts::{CatalogError, PartCatalog};
pub use tanks::{TankError, TankInput, TankPool};
