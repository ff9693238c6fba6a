use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, RaylibScissorModeExt};

use crate::color::Rgba;
use crate::crafting::{CraftMode, CraftingLayout, ListEntry};
use crate::entities::{PartSlot, Tank};
use crate::math::{point_in_bounds, vec2, Rect};
use crate::parts::{quick_stat_label, type_name};

use super::helpers::{color, draw_tank, rectangle, TankPose};
use super::Game;

const PANEL_FILL: Color = Color::new(30, 30, 40, 240);
const PANEL_EDGE: Color = Color::new(100, 100, 120, 255);
const ROW_FILL: Color = Color::new(40, 40, 50, 255);
const ROW_HOVER: Color = Color::new(60, 60, 80, 255);

/// One picker row with its text laid out ahead of the clipped pass.
struct RowLabel {
    rect: Rect,
    title: String,
    subtitle: &'static str,
    stat: String,
    stat_width: i32,
    accent: Option<Rgba>,
    remove: bool,
}

impl Game {
    pub(super) fn draw_crafting(
        &self,
        d: &mut RaylibDrawHandle,
        screen_width: i32,
        screen_height: i32,
    ) {
        let Some(tank) = self.crafting.tank().and_then(|id| self.tanks.get(id)) else {
            return;
        };
        let layout = CraftingLayout::new(vec2(screen_width as f32, screen_height as f32));
        let panel = layout.panel();

        d.draw_rectangle(0, 0, screen_width, screen_height, Color::new(0, 0, 0, 100));
        d.draw_rectangle_rec(rectangle(panel), PANEL_FILL);
        d.draw_rectangle_lines_ex(rectangle(panel), 2.0, PANEL_EDGE);

        let title = "CUSTOMIZE TANK";
        let title_width = d.measure_text(title, 20);
        d.draw_text(
            title,
            (panel.x + panel.width * 0.5) as i32 - title_width / 2,
            (panel.y + 15.0) as i32,
            20,
            Color::WHITE,
        );

        let spin = self.crafting.preview_rotation();
        draw_tank(
            d,
            tank,
            self.catalog,
            TankPose {
                center: vec2(panel.x + 35.0, panel.y + 75.0),
                hull_angle: spin,
                turret_angle: spin,
                scale: 0.5,
            },
        );

        self.draw_slot_buttons(d, &layout, tank);

        if self.crafting.mode() == CraftMode::SelectingPart {
            let editing = format!("Editing: {} Slot", self.crafting.selected_slot().name());
            d.draw_text(
                &editing,
                (panel.x + 10.0) as i32,
                (panel.y + 200.0) as i32,
                14,
                Color::YELLOW,
            );
            self.draw_part_list(d, &layout);
        }

        draw_stats(d, panel, tank);

        let hint = match self.crafting.mode() {
            CraftMode::SelectingSlot => "Click a slot to modify",
            CraftMode::SelectingPart => "ESC to go back",
        };
        let hint_width = d.measure_text(hint, 12);
        d.draw_text(
            hint,
            (panel.x + panel.width * 0.5) as i32 - hint_width / 2,
            (panel.y + panel.height - 25.0) as i32,
            12,
            Color::GRAY,
        );
    }

    fn draw_slot_buttons(&self, d: &mut RaylibDrawHandle, layout: &CraftingLayout, tank: &Tank) {
        let mouse = d.get_mouse_position();
        let mouse = vec2(mouse.x, mouse.y);
        let editing = self.crafting.mode() == CraftMode::SelectingPart;

        for slot in PartSlot::ALL {
            let button = layout.slot_button(slot);
            let part = tank.part_in_slot(slot);
            let mut fill = if part.is_some() {
                Rgba::DARKGREEN
            } else {
                Rgba::DARKGRAY
            };
            if editing && slot == self.crafting.selected_slot() {
                fill = Rgba::SKYBLUE;
            }
            if point_in_bounds(mouse, &button) {
                fill = fill.brightness(0.3);
            }
            d.draw_rectangle_rec(rectangle(button), color(fill));
            d.draw_rectangle_lines_ex(rectangle(button), 2.0, Color::WHITE);

            let center = button.center();
            let label = slot.name();
            let label_width = d.measure_text(label, 12);
            d.draw_text(
                label,
                center.x as i32 - label_width / 2,
                center.y as i32 - 6,
                12,
                Color::WHITE,
            );

            let equipped = part.and_then(|part| self.catalog.get(part.definition_id));
            if let Some(definition) = equipped {
                let name_width = d.measure_text(definition.name, 10);
                d.draw_text(
                    definition.name,
                    center.x as i32 - name_width / 2,
                    (button.y + button.height + 2.0) as i32,
                    10,
                    Color::LIGHTGRAY,
                );
            }
        }
    }

    fn draw_part_list(&self, d: &mut RaylibDrawHandle, layout: &CraftingLayout) {
        let panel = layout.panel();
        d.draw_text(
            "Select Part:",
            (panel.x + 10.0) as i32,
            (panel.y + 220.0) as i32,
            16,
            Color::WHITE,
        );

        let list = layout.list_background();
        d.draw_rectangle_rec(rectangle(list), Color::new(20, 20, 30, 200));

        let mouse = d.get_mouse_position();
        let mouse = vec2(mouse.x, mouse.y);
        let rows = layout.part_rows(
            self.crafting.shows_remove_row(&self.tanks),
            self.catalog.len(),
            self.crafting.scroll_offset(),
        );
        let labels: Vec<RowLabel> = rows
            .iter()
            .map(|row| self.row_label(d, row.entry, row.rect))
            .collect();

        let mut clipped = d.begin_scissor_mode(
            list.x as i32,
            list.y as i32,
            list.width as i32,
            list.height as i32,
        );
        for label in &labels {
            let rect = label.rect;
            let fill = if point_in_bounds(mouse, &rect) {
                ROW_HOVER
            } else {
                ROW_FILL
            };
            clipped.draw_rectangle_rec(rectangle(rect), fill);
            if let Some(accent) = label.accent {
                clipped.draw_rectangle(
                    rect.x as i32,
                    rect.y as i32,
                    4,
                    rect.height as i32,
                    color(accent),
                );
            }

            let (x, y) = (rect.x as i32 + 10, rect.y as i32);
            let title_color = if label.remove { Color::RED } else { Color::WHITE };
            clipped.draw_text(&label.title, x, y + 8, 14, title_color);
            clipped.draw_text(label.subtitle, x, y + 26, 12, Color::GRAY);
            if !label.stat.is_empty() {
                clipped.draw_text(
                    &label.stat,
                    (rect.x + rect.width) as i32 - label.stat_width - 10,
                    y + 18,
                    12,
                    Color::LIME,
                );
            }
        }
    }

    fn row_label(&self, d: &RaylibDrawHandle, entry: ListEntry, rect: Rect) -> RowLabel {
        match entry {
            ListEntry::RemovePart => RowLabel {
                rect,
                title: "[ Remove Part ]".to_string(),
                subtitle: "Clear this slot",
                stat: String::new(),
                stat_width: 0,
                accent: None,
                remove: true,
            },
            ListEntry::Part(id) => {
                let definition = self.catalog.get(id);
                let stat = definition.map(quick_stat_label).unwrap_or_default();
                RowLabel {
                    rect,
                    title: definition.map_or("?", |def| def.name).to_string(),
                    subtitle: definition.map_or("", |def| type_name(def.kind)),
                    stat_width: d.measure_text(&stat, 12),
                    stat,
                    accent: definition.map(|def| def.color),
                    remove: false,
                }
            }
        }
    }
}

fn draw_stats(d: &mut RaylibDrawHandle, panel: Rect, tank: &Tank) {
    let top = panel.y + panel.height - 120.0;
    let left = panel.x as i32 + 10;
    let right = panel.x as i32 + 150;
    d.draw_line(
        left,
        top as i32 - 10,
        (panel.x + panel.width) as i32 - 10,
        top as i32 - 10,
        Color::GRAY,
    );
    d.draw_text("STATS", left, top as i32, 14, Color::WHITE);

    let stats = &tank.current_stats;
    let rows = [
        (left, 20, format!("Health: {:.0}", stats.max_health)),
        (left, 35, format!("Speed: {:.0}", stats.move_speed)),
        (right, 20, format!("Damage: {:.0}", stats.damage)),
        (right, 35, format!("Reload: {:.1}/s", stats.reload_speed)),
    ];
    for (x, dy, text) in &rows {
        d.draw_text(text, *x, top as i32 + dy, 12, Color::LIGHTGRAY);
    }
}
