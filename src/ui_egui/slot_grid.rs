//! Weekly slot grid geometry and painting.
//!
//! The grid is one allocated rect: a two-row header (half-day spans, then
//! hour numbers) above seven day rows of 24 hour cells. Geometry lives in
//! `SlotGridLayout` so pointer hit-testing can be checked without a UI.

use egui::{Align2, FontId, Pos2, Rect, Stroke, Vec2};

use super::palette::SlotGridPalette;
use crate::models::hour::{HourIndex, HOURS_PER_DAY};
use crate::models::language::Language;
use crate::models::selection::{SelectedTime, Slot};
use crate::models::week_day::WeekDay;

pub const DAY_LABEL_WIDTH: f32 = 92.0;
pub const CELL_WIDTH: f32 = 26.0;
pub const CELL_HEIGHT: f32 = 30.0;
pub const HEADER_ROW_HEIGHT: f32 = 24.0;

const HALF_DAY: u8 = HOURS_PER_DAY / 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotGridLayout {
    origin: Pos2,
}

impl SlotGridLayout {
    pub fn new(origin: Pos2) -> Self {
        Self { origin }
    }

    pub fn size() -> Vec2 {
        Vec2::new(
            DAY_LABEL_WIDTH + CELL_WIDTH * HOURS_PER_DAY as f32,
            HEADER_ROW_HEIGHT * 2.0 + CELL_HEIGHT * WeekDay::ALL.len() as f32,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Self::size())
    }

    fn cells_origin(&self) -> Pos2 {
        self.origin + Vec2::new(DAY_LABEL_WIDTH, HEADER_ROW_HEIGHT * 2.0)
    }

    pub fn cell_rect(&self, slot: Slot) -> Rect {
        let min = self.cells_origin()
            + Vec2::new(
                slot.hour.value() as f32 * CELL_WIDTH,
                slot.day.index() as f32 * CELL_HEIGHT,
            );
        Rect::from_min_size(min, Vec2::new(CELL_WIDTH, CELL_HEIGHT))
    }

    pub fn day_label_rect(&self, day: WeekDay) -> Rect {
        let min = self.origin
            + Vec2::new(0.0, HEADER_ROW_HEIGHT * 2.0 + day.index() as f32 * CELL_HEIGHT);
        Rect::from_min_size(min, Vec2::new(DAY_LABEL_WIDTH, CELL_HEIGHT))
    }

    fn corner_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::new(DAY_LABEL_WIDTH, HEADER_ROW_HEIGHT * 2.0))
    }

    fn half_day_rect(&self, second_half: bool) -> Rect {
        let offset = if second_half { HALF_DAY as f32 * CELL_WIDTH } else { 0.0 };
        let min = self.origin + Vec2::new(DAY_LABEL_WIDTH + offset, 0.0);
        Rect::from_min_size(min, Vec2::new(HALF_DAY as f32 * CELL_WIDTH, HEADER_ROW_HEIGHT))
    }

    fn hour_header_rect(&self, hour: HourIndex) -> Rect {
        let min = self.origin
            + Vec2::new(DAY_LABEL_WIDTH + hour.value() as f32 * CELL_WIDTH, HEADER_ROW_HEIGHT);
        Rect::from_min_size(min, Vec2::new(CELL_WIDTH, HEADER_ROW_HEIGHT))
    }

    /// Cell under `pos`, or `None` over headers, day labels or outside.
    pub fn slot_at(&self, pos: Pos2) -> Option<Slot> {
        let local = pos - self.cells_origin();
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }

        let column = (local.x / CELL_WIDTH).floor() as usize;
        let row = (local.y / CELL_HEIGHT).floor() as usize;
        let hour = u8::try_from(column).ok().and_then(|c| HourIndex::new(c).ok())?;
        let day = WeekDay::from_index(row)?;
        Some(Slot::new(day, hour))
    }

    /// Like `slot_at`, but only for positions inside the visible `clip`
    /// area, so cells scrolled out of view are never hit.
    pub fn visible_slot_at(&self, pos: Pos2, clip: Rect) -> Option<Slot> {
        if !clip.contains(pos) {
            return None;
        }
        self.slot_at(pos)
    }
}

pub(crate) fn paint_slot_grid(
    painter: &egui::Painter,
    layout: &SlotGridLayout,
    selected: &SelectedTime,
    hovered: Option<Slot>,
    anchor: Option<Slot>,
    language: Language,
    palette: &SlotGridPalette,
) {
    let line = Stroke::new(1.0, palette.grid_line);
    let header_font = FontId::proportional(12.0);
    let hour_font = FontId::proportional(11.0);

    // Header
    let corner = layout.corner_rect();
    painter.rect_filled(corner, 0.0, palette.header_bg);
    painter.rect_stroke(corner, 0.0, line);
    painter.text(
        corner.center(),
        Align2::CENTER_CENTER,
        language.corner_label(),
        header_font.clone(),
        palette.header_text,
    );

    for (second_half, label) in [(false, "00:00~12:00"), (true, "12:00~24:00")] {
        let rect = layout.half_day_rect(second_half);
        painter.rect_filled(rect, 0.0, palette.header_bg);
        painter.rect_stroke(rect, 0.0, line);
        painter.text(rect.center(), Align2::CENTER_CENTER, label, header_font.clone(), palette.header_text);
    }

    for hour in HourIndex::all() {
        let rect = layout.hour_header_rect(hour);
        painter.rect_filled(rect, 0.0, palette.header_bg);
        painter.rect_stroke(rect, 0.0, line);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            hour.to_string(),
            hour_font.clone(),
            palette.header_text,
        );
    }

    // Day rows
    for day in WeekDay::ALL {
        let label = layout.day_label_rect(day);
        painter.rect_filled(label, 0.0, palette.day_label_bg);
        painter.rect_stroke(label, 0.0, line);
        painter.text(
            label.center(),
            Align2::CENTER_CENTER,
            day.display_name(language),
            header_font.clone(),
            palette.text,
        );

        for hour in HourIndex::all() {
            let slot = Slot::new(day, hour);
            let rect = layout.cell_rect(slot);
            let fill = if selected.contains(slot) {
                palette.selected_bg
            } else {
                palette.cell_bg
            };
            painter.rect_filled(rect, 0.0, fill);
            if hovered == Some(slot) {
                painter.rect_filled(rect, 0.0, palette.hover_overlay);
            }
            painter.rect_stroke(rect, 0.0, line);
        }
    }

    if let Some(anchor) = anchor {
        painter.rect_stroke(
            layout.cell_rect(anchor).shrink(1.0),
            0.0,
            Stroke::new(2.0, palette.anchor_border),
        );
    }
}
