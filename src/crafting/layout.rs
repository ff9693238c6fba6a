use glam::Vec2;

use crate::config::{
    CRAFT_PANEL_MARGIN, CRAFT_PANEL_WIDTH, PART_LIST_TOP, PART_LIST_VISIBLE_BOTTOM,
    PART_LIST_VISIBLE_TOP, PART_ROW_GAP, PART_ROW_HEIGHT, SLOT_BUTTON_SIZE, SLOT_BUTTON_SPACING,
    SLOT_CLUSTER_TOP,
};
use crate::entities::{PartId, PartSlot};
use crate::math::{point_in_bounds, vec2, Rect};

/// One entry of the part picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListEntry {
    RemovePart,
    Part(PartId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartRow {
    pub entry: ListEntry,
    pub rect: Rect,
    /// Rows scrolled out of the list band are drawn clipped and ignore clicks.
    pub clickable: bool,
}

/// Screen geometry of the crafting panel for a given viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraftingLayout {
    panel: Rect,
}

impl CraftingLayout {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            panel: Rect::new(
                viewport.x - CRAFT_PANEL_WIDTH - CRAFT_PANEL_MARGIN,
                CRAFT_PANEL_MARGIN,
                CRAFT_PANEL_WIDTH,
                viewport.y - CRAFT_PANEL_MARGIN * 2.0,
            ),
        }
    }

    pub fn panel(&self) -> Rect {
        self.panel
    }

    pub fn slot_button(&self, slot: PartSlot) -> Rect {
        let center = vec2(
            self.panel.x + self.panel.width * 0.5,
            self.panel.y + SLOT_CLUSTER_TOP,
        );
        Rect::centered(
            center + slot_button_direction(slot) * SLOT_BUTTON_SPACING,
            SLOT_BUTTON_SIZE,
            SLOT_BUTTON_SIZE,
        )
    }

    pub fn slot_at(&self, point: Vec2) -> Option<PartSlot> {
        PartSlot::ALL
            .into_iter()
            .find(|slot| point_in_bounds(point, &self.slot_button(*slot)))
    }

    pub fn list_background(&self) -> Rect {
        Rect::new(
            self.panel.x + 5.0,
            self.panel.y + PART_LIST_TOP - 5.0,
            self.panel.width - 10.0,
            self.panel.height - PART_LIST_TOP - 20.0,
        )
    }

    /// Every picker row, in display order: the optional remove row, then the
    /// catalog in registration order.
    pub fn part_rows(&self, show_remove: bool, catalog_len: usize, scroll: i32) -> Vec<PartRow> {
        let remove = show_remove.then_some(ListEntry::RemovePart);
        let parts = (0..catalog_len).map(ListEntry::Part);
        remove
            .into_iter()
            .chain(parts)
            .enumerate()
            .map(|(row, entry)| {
                let y = self.panel.y + PART_LIST_TOP + row as f32 * PART_ROW_HEIGHT
                    - scroll as f32;
                PartRow {
                    entry,
                    rect: Rect::new(
                        self.panel.x + 10.0,
                        y,
                        self.panel.width - 20.0,
                        PART_ROW_HEIGHT - PART_ROW_GAP,
                    ),
                    clickable: self.row_in_band(y),
                }
            })
            .collect()
    }

    pub fn row_at(
        &self,
        point: Vec2,
        show_remove: bool,
        catalog_len: usize,
        scroll: i32,
    ) -> Option<ListEntry> {
        self.part_rows(show_remove, catalog_len, scroll)
            .into_iter()
            .find(|row| row.clickable && point_in_bounds(point, &row.rect))
            .map(|row| row.entry)
    }

    fn row_in_band(&self, y: f32) -> bool {
        y >= self.panel.y + PART_LIST_VISIBLE_TOP
            && y <= self.panel.y + self.panel.height - PART_LIST_VISIBLE_BOTTOM
    }
}

fn slot_button_direction(slot: PartSlot) -> Vec2 {
    match slot {
        PartSlot::Front => vec2(1.0, 0.0),
        PartSlot::Back => vec2(-1.0, 0.0),
        PartSlot::Left => vec2(0.0, -1.0),
        PartSlot::Right => vec2(0.0, 1.0),
        PartSlot::Top => Vec2::ZERO,
    }
}
