//! `TimePeriodSelector` widget: header with clear link, the slot grid and
//! the optional summary text.
//!
//! Raw pointer input is forwarded to `InteractionController` as press,
//! enter and release events. Enter events are only sent when the pointer
//! moves onto a different cell, matching per-cell enter semantics.

use egui::{Align, CursorIcon, Layout, RichText, Sense};

use super::palette::SlotGridPalette;
use super::slot_grid::{paint_slot_grid, SlotGridLayout};
use crate::models::language::Language;
use crate::models::selection::{SelectedTime, Slot};
use crate::models::settings::SelectorSettings;
use crate::services::interaction::{InteractionController, PointerOutcome};
use crate::services::range_format::format_all;
use crate::services::selection::SelectionService;

pub struct TimePeriodSelector {
    title: Option<String>,
    language: Language,
    show_time: bool,
    value: SelectedTime,
    controller: InteractionController,
    /// Last cell the pointer was seen over while the button was held.
    last_entered: Option<Slot>,
}

impl TimePeriodSelector {
    pub fn new(settings: SelectorSettings) -> Self {
        Self {
            title: settings.title,
            language: settings.language,
            show_time: settings.show_time,
            value: SelectionService::initialize(settings.value),
            controller: InteractionController::new(),
            last_entered: None,
        }
    }

    pub fn value(&self) -> &SelectedTime {
        &self.value
    }

    /// Replace the value from outside (controlled usage). Any drag in
    /// progress is dropped.
    pub fn set_value(&mut self, value: SelectedTime) {
        self.controller.cancel();
        self.last_entered = None;
        self.value = value;
    }

    /// Draw the selector. Returns the new value when it changed this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<SelectedTime> {
        let mut changed = false;

        ui.horizontal(|ui| {
            if let Some(title) = &self.title {
                ui.heading(title);
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.link(self.language.clear_label()).clicked() {
                    self.set_value(SelectionService::clear(&self.value));
                    changed = true;
                }
            });
        });
        ui.add_space(6.0);

        let (rect, response) = ui.allocate_exact_size(SlotGridLayout::size(), Sense::click_and_drag());
        let layout = SlotGridLayout::new(rect.min);
        let pointer_in_grid = ui.rect_contains_pointer(rect);
        changed |= self.handle_pointer(ui, &layout, pointer_in_grid);

        let hovered = ui
            .input(|i| i.pointer.hover_pos())
            .filter(|_| response.hovered() || self.controller.is_dragging())
            .and_then(|pos| layout.visible_slot_at(pos, ui.clip_rect()));
        if hovered.is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        let palette = SlotGridPalette::from_visuals(ui.visuals());
        paint_slot_grid(
            ui.painter(),
            &layout,
            &self.value,
            hovered,
            self.controller.anchor(),
            self.language,
            &palette,
        );

        if self.show_time {
            ui.add_space(8.0);
            ui.separator();
            ui.label(RichText::new(self.language.summary_heading()).strong());
            ui.label(RichText::new(format_all(&self.value, self.language)).monospace());
        }

        changed.then(|| self.value.clone())
    }

    fn handle_pointer(&mut self, ui: &egui::Ui, layout: &SlotGridLayout, pointer_in_grid: bool) -> bool {
        let (pressed, down, released, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        let clip = ui.clip_rect();
        let slot = pos.and_then(|pos| layout.visible_slot_at(pos, clip));
        let mut changed = false;

        if pressed && pointer_in_grid {
            if let Some(slot) = slot {
                self.controller.on_press(slot);
                self.last_entered = Some(slot);
            }
        }

        if down && self.controller.is_dragging() {
            if let Some(slot) = slot.filter(|slot| self.last_entered != Some(*slot)) {
                self.last_entered = Some(slot);
                changed |= self.apply(|controller, value| controller.on_enter(value, slot));
            }
        }

        if released && self.controller.is_dragging() {
            self.last_entered = None;
            changed |= self.apply(|controller, value| controller.on_release(value, slot));
        }

        changed
    }

    fn apply(
        &mut self,
        event: impl FnOnce(&mut InteractionController, &SelectedTime) -> PointerOutcome,
    ) -> bool {
        match event(&mut self.controller, &self.value) {
            PointerOutcome::Updated(value) => {
                self.value = value;
                true
            }
            PointerOutcome::SessionChanged | PointerOutcome::Ignored => false,
        }
    }
}
