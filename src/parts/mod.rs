//! Part templates, per-instance bonus maths and the drawing layout of parts.

mod bonus;
mod catalog;
mod layout;

use once_cell::sync::Lazy;

pub use bonus::{effective_bonus, rarity_multiplier, upgrade_multiplier};
pub use catalog::{quick_stat_label, rarity_color, type_name, CatalogError, PartCatalog};
pub use layout::{mount_angle, mount_distance, part_shape, PartShape};

static STANDARD_CATALOG: Lazy<PartCatalog> = Lazy::new(PartCatalog::standard);

/// Process-wide stock catalog, built on first access and never mutated.
pub fn catalog() -> &'static PartCatalog {
    &STANDARD_CATALOG
}
