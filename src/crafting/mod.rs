//! Modal tank editor: pick a slot, then pick what goes in it.

mod layout;

use glam::Vec2;
use log::{debug, info, warn};

use crate::config::{PREVIEW_SPIN_DEG, SCROLL_STEP};
use crate::entities::{PartInstance, PartSlot, TankId};
use crate::math::wrap_degrees;
use crate::parts::PartCatalog;
use crate::tanks::{TankError, TankPool};

pub use layout::{CraftingLayout, ListEntry, PartRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CraftMode {
    SelectingSlot,
    SelectingPart,
}

/// Pointer and key edges the editor reacts to, sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiInput {
    /// Screen-space cursor.
    pub pointer: Vec2,
    pub clicked: bool,
    pub cancel: bool,
    pub scroll: f32,
    pub viewport: Vec2,
}

/// The one editing session. The frame driver owns it and hands it the pool
/// each frame; it only ever changes a tank through attach/remove.
#[derive(Clone, Debug)]
pub struct CraftingSession {
    open: bool,
    tank: Option<TankId>,
    mode: CraftMode,
    selected_slot: PartSlot,
    scroll_offset: i32,
    preview_rotation: f32,
}

impl CraftingSession {
    pub fn new() -> Self {
        Self {
            open: false,
            tank: None,
            mode: CraftMode::SelectingSlot,
            selected_slot: PartSlot::Front,
            scroll_offset: 0,
            preview_rotation: 0.0,
        }
    }

    pub fn open(&mut self, tank: TankId) {
        self.open = true;
        self.tank = Some(tank);
        self.mode = CraftMode::SelectingSlot;
        self.selected_slot = PartSlot::Front;
        self.scroll_offset = 0;
        self.preview_rotation = 0.0;
        info!("crafting opened for tank {tank:?}");
    }

    pub fn close(&mut self) {
        if self.open {
            info!("crafting closed");
        }
        self.open = false;
        self.tank = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn tank(&self) -> Option<TankId> {
        self.tank
    }

    pub fn mode(&self) -> CraftMode {
        self.mode
    }

    pub fn selected_slot(&self) -> PartSlot {
        self.selected_slot
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    pub fn preview_rotation(&self) -> f32 {
        self.preview_rotation
    }

    /// Whether the picker leads with a "Remove Part" row, i.e. the selected
    /// slot currently holds something.
    pub fn shows_remove_row(&self, pool: &TankPool) -> bool {
        self.tank
            .and_then(|id| pool.get(id))
            .is_some_and(|tank| tank.part_in_slot(self.selected_slot).is_some())
    }

    pub fn update(&mut self, input: &UiInput, dt: f32, pool: &mut TankPool, catalog: &PartCatalog) {
        if !self.open {
            return;
        }
        let Some(tank_id) = self.tank else {
            return;
        };
        if pool.get(tank_id).is_none() {
            warn!("crafting target {tank_id:?} no longer exists");
            self.close();
            return;
        }

        self.preview_rotation = wrap_degrees(self.preview_rotation + PREVIEW_SPIN_DEG * dt);

        if input.cancel {
            match self.mode {
                CraftMode::SelectingSlot => self.close(),
                CraftMode::SelectingPart => self.mode = CraftMode::SelectingSlot,
            }
            return;
        }

        let layout = CraftingLayout::new(input.viewport);
        match self.mode {
            CraftMode::SelectingSlot => {
                if !input.clicked {
                    return;
                }
                if let Some(slot) = layout.slot_at(input.pointer) {
                    debug!("crafting: editing {} slot", slot.name());
                    self.selected_slot = slot;
                    self.mode = CraftMode::SelectingPart;
                    self.scroll_offset = 0;
                }
            }
            CraftMode::SelectingPart => {
                if input.clicked {
                    self.pick_part(&layout, input.pointer, tank_id, pool, catalog);
                }
                self.scroll_by(input.scroll);
            }
        }
    }

    /// Wheel up (positive) moves the list back towards the top. The float to
    /// int cast saturates and maps NaN to zero.
    fn scroll_by(&mut self, wheel: f32) {
        let step = (wheel * SCROLL_STEP) as i32;
        self.scroll_offset = self.scroll_offset.saturating_sub(step).max(0);
    }

    fn pick_part(
        &mut self,
        layout: &CraftingLayout,
        pointer: Vec2,
        tank_id: TankId,
        pool: &mut TankPool,
        catalog: &PartCatalog,
    ) {
        let slot = self.selected_slot;
        let show_remove = self.shows_remove_row(pool);
        let Some(entry) = layout.row_at(pointer, show_remove, catalog.len(), self.scroll_offset)
        else {
            return;
        };

        match entry {
            ListEntry::RemovePart => {
                if let Err(err) = pool.remove_part(tank_id, slot, catalog) {
                    debug!("crafting: nothing removed: {err}");
                }
            }
            ListEntry::Part(definition_id) => {
                let previous = match pool.remove_part(tank_id, slot, catalog) {
                    Ok(removed) => Some(removed),
                    Err(TankError::SlotEmpty(_)) => None,
                    Err(err) => {
                        warn!("crafting: could not clear {} slot: {err}", slot.name());
                        None
                    }
                };
                let part = PartInstance::new(definition_id, slot);
                if let Err(err) = pool.attach_part(tank_id, part, catalog) {
                    warn!("crafting: could not fit part {definition_id}: {err}");
                    // Put back what was there so a failed swap loses nothing.
                    if let Some(previous) = previous {
                        if let Err(err) = pool.attach_part(tank_id, previous, catalog) {
                            warn!("crafting: could not restore {} slot: {err}", slot.name());
                        }
                    }
                }
            }
        }
        self.mode = CraftMode::SelectingSlot;
    }
}

impl Default for CraftingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2;
    use rstest::rstest;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn setup() -> (PartCatalog, TankPool, TankId, CraftingSession) {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let id = pool.create(Vec2::ZERO, true, &catalog).unwrap();
        let mut session = CraftingSession::new();
        session.open(id);
        (catalog, pool, id, session)
    }

    fn idle() -> UiInput {
        UiInput {
            viewport: VIEWPORT,
            ..UiInput::default()
        }
    }

    fn click(pointer: Vec2) -> UiInput {
        UiInput {
            pointer,
            clicked: true,
            ..idle()
        }
    }

    fn cancel() -> UiInput {
        UiInput {
            cancel: true,
            ..idle()
        }
    }

    fn slot_centre(slot: PartSlot) -> Vec2 {
        CraftingLayout::new(VIEWPORT).slot_button(slot).center()
    }

    #[test]
    fn open_starts_on_front_slot_selection() {
        let (_catalog, _pool, id, session) = setup();
        assert!(session.is_open());
        assert_eq!(session.tank(), Some(id));
        assert_eq!(session.mode(), CraftMode::SelectingSlot);
        assert_eq!(session.selected_slot(), PartSlot::Front);
        assert_eq!(session.scroll_offset(), 0);
    }

    #[test]
    fn cancel_backs_out_one_level_then_closes() {
        let (catalog, mut pool, _id, mut session) = setup();
        session.update(&click(slot_centre(PartSlot::Left)), 0.016, &mut pool, &catalog);
        assert_eq!(session.mode(), CraftMode::SelectingPart);

        session.update(&cancel(), 0.016, &mut pool, &catalog);
        assert!(session.is_open());
        assert_eq!(session.mode(), CraftMode::SelectingSlot);

        session.update(&cancel(), 0.016, &mut pool, &catalog);
        assert!(!session.is_open());
        assert_eq!(session.tank(), None);
    }

    #[test]
    fn close_leaves_the_tank_alone() {
        let (catalog, mut pool, id, mut session) = setup();
        pool.attach_part(id, PartInstance::new(0, PartSlot::Front), &catalog).unwrap();
        session.close();
        assert_eq!(pool.get(id).unwrap().parts.len(), 1);
    }

    #[test]
    fn clicking_a_slot_selects_it_and_resets_scroll() {
        let (catalog, mut pool, _id, mut session) = setup();
        session.update(&click(slot_centre(PartSlot::Back)), 0.016, &mut pool, &catalog);
        assert_eq!(session.selected_slot(), PartSlot::Back);
        assert_eq!(session.mode(), CraftMode::SelectingPart);
        assert_eq!(session.scroll_offset(), 0);
    }

    #[test]
    fn clicks_outside_any_control_are_ignored() {
        let (catalog, mut pool, id, mut session) = setup();
        session.update(&click(vec2(5.0, 5.0)), 0.016, &mut pool, &catalog);
        assert_eq!(session.mode(), CraftMode::SelectingSlot);

        session.update(&click(slot_centre(PartSlot::Top)), 0.016, &mut pool, &catalog);
        session.update(&click(vec2(5.0, 5.0)), 0.016, &mut pool, &catalog);
        assert_eq!(session.mode(), CraftMode::SelectingPart);
        assert!(pool.get(id).unwrap().parts.is_empty());
    }

    #[test]
    fn hovering_without_click_does_nothing() {
        let (catalog, mut pool, _id, mut session) = setup();
        let hover = UiInput {
            pointer: slot_centre(PartSlot::Front),
            ..idle()
        };
        session.update(&hover, 0.016, &mut pool, &catalog);
        assert_eq!(session.mode(), CraftMode::SelectingSlot);
    }

    #[test]
    fn scroll_never_goes_negative() {
        let (catalog, mut pool, _id, mut session) = setup();
        session.update(&click(slot_centre(PartSlot::Front)), 0.016, &mut pool, &catalog);

        let wheel = |scroll| UiInput { scroll, ..idle() };
        session.update(&wheel(-2.0), 0.016, &mut pool, &catalog);
        assert_eq!(session.scroll_offset(), 60);
        session.update(&wheel(1.0), 0.016, &mut pool, &catalog);
        assert_eq!(session.scroll_offset(), 30);
        session.update(&wheel(5.0), 0.016, &mut pool, &catalog);
        assert_eq!(session.scroll_offset(), 0);
    }

    #[test]
    fn huge_scroll_saturates_instead_of_overflowing() {
        let (catalog, mut pool, _id, mut session) = setup();
        session.update(&click(slot_centre(PartSlot::Front)), 0.016, &mut pool, &catalog);

        let wheel = |scroll| UiInput { scroll, ..idle() };
        for _ in 0..3 {
            session.update(&wheel(-3.0e7), 0.016, &mut pool, &catalog);
            assert!(session.scroll_offset() >= 0);
        }
        assert_eq!(session.scroll_offset(), i32::MAX);

        session.update(&wheel(f32::NEG_INFINITY), 0.016, &mut pool, &catalog);
        assert_eq!(session.scroll_offset(), i32::MAX);
        assert_eq!(session.mode(), CraftMode::SelectingPart);
    }

    #[rstest]
    #[case::nan(f32::NAN, 30)]
    #[case::up_infinity(f32::INFINITY, 0)]
    #[case::huge_up(3.0e7, 0)]
    fn odd_wheel_values_keep_offset_in_range(#[case] scroll: f32, #[case] expected: i32) {
        let (catalog, mut pool, _id, mut session) = setup();
        session.update(&click(slot_centre(PartSlot::Front)), 0.016, &mut pool, &catalog);
        session.update(&UiInput { scroll: -1.0, ..idle() }, 0.016, &mut pool, &catalog);
        assert_eq!(session.scroll_offset(), 30);

        session.update(&UiInput { scroll, ..idle() }, 0.016, &mut pool, &catalog);
        assert_eq!(session.scroll_offset(), expected);
    }

    #[test]
    fn failed_swap_restores_the_removed_part() {
        let (catalog, mut pool, id, mut session) = setup();
        let mut angled = PartInstance::new(1, PartSlot::Front);
        angled.angle_offset = 30.0;
        pool.attach_part(id, angled, &catalog).unwrap();
        pool.attach_part(id, PartInstance::new(0, PartSlot::Front), &catalog).unwrap();
        let stats_before = pool.get(id).unwrap().current_stats;

        session.update(&click(slot_centre(PartSlot::Front)), 0.016, &mut pool, &catalog);
        let rows = CraftingLayout::new(VIEWPORT).part_rows(true, catalog.len(), 0);
        let machine_gun = rows
            .iter()
            .find(|row| row.entry == ListEntry::Part(2))
            .unwrap();
        session.update(&click(machine_gun.rect.center()), 0.016, &mut pool, &catalog);

        let tank = pool.get(id).unwrap();
        let mut held: Vec<_> = tank
            .parts
            .iter()
            .map(|part| (part.definition_id, part.angle_offset))
            .collect();
        held.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(held, [(0, 0.0), (1, 30.0)]);
        assert_eq!(tank.current_stats, stats_before);
        assert_eq!(session.mode(), CraftMode::SelectingSlot);
    }

    #[test]
    fn scrolled_out_rows_ignore_clicks() {
        let (catalog, mut pool, id, mut session) = setup();
        session.update(&click(slot_centre(PartSlot::Front)), 0.016, &mut pool, &catalog);
        session.update(&UiInput { scroll: -2.0, ..idle() }, 0.016, &mut pool, &catalog);

        let rows = CraftingLayout::new(VIEWPORT).part_rows(false, catalog.len(), 60);
        assert!(!rows[0].clickable);
        session.update(&click(rows[0].rect.center()), 0.016, &mut pool, &catalog);
        assert_eq!(session.mode(), CraftMode::SelectingPart);
        assert!(pool.get(id).unwrap().parts.is_empty());
    }

    #[test]
    fn picking_a_part_replaces_what_was_there() {
        let (catalog, mut pool, id, mut session) = setup();
        pool.attach_part(id, PartInstance::new(0, PartSlot::Front), &catalog).unwrap();
        session.update(&click(slot_centre(PartSlot::Front)), 0.016, &mut pool, &catalog);

        let rows = CraftingLayout::new(VIEWPORT).part_rows(true, catalog.len(), 0);
        let sniper = rows
            .iter()
            .find(|row| row.entry == ListEntry::Part(1))
            .unwrap();
        session.update(&click(sniper.rect.center()), 0.016, &mut pool, &catalog);

        let tank = pool.get(id).unwrap();
        assert_eq!(tank.parts.len(), 1);
        assert_eq!(tank.parts[0].definition_id, 1);
        assert_eq!(tank.current_stats.damage, 25.0);
        assert_eq!(session.mode(), CraftMode::SelectingSlot);
    }

    #[test]
    fn vanished_target_closes_the_session() {
        let (catalog, mut pool, id, mut session) = setup();
        pool.destroy(id).unwrap();
        session.update(&idle(), 0.016, &mut pool, &catalog);
        assert!(!session.is_open());
    }

    #[test]
    fn preview_spins_while_open() {
        let (catalog, mut pool, _id, mut session) = setup();
        session.update(&idle(), 0.5, &mut pool, &catalog);
        assert_eq!(session.preview_rotation(), 15.0);
    }
}
