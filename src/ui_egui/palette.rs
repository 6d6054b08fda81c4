use egui::{Color32, Rgba, Visuals};

/// Move `base` toward `toward` by `amount` (0..=1), mixing in linear space.
fn tint(base: Color32, toward: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let mixed = Rgba::from(base) * (1.0 - amount) + Rgba::from(toward) * amount;
    Color32::from(mixed)
}

/// Colors for the weekly slot grid, derived from the active egui visuals.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SlotGridPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub day_label_bg: Color32,
    pub cell_bg: Color32,
    pub selected_bg: Color32,
    pub anchor_border: Color32,
    pub hover_overlay: Color32,
    pub grid_line: Color32,
    pub text: Color32,
}

impl SlotGridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let base = visuals.extreme_bg_color;
        let panel = visuals.panel_fill;
        let accent = visuals.selection.bg_fill;
        let text = visuals.text_color();

        Self {
            header_bg: tint(panel, text, if visuals.dark_mode { 0.12 } else { 0.06 }),
            header_text: text,
            day_label_bg: tint(panel, text, 0.04),
            cell_bg: base,
            selected_bg: accent,
            anchor_border: visuals.selection.stroke.color,
            hover_overlay: accent.gamma_multiply(if visuals.dark_mode { 0.3 } else { 0.2 }),
            grid_line: visuals.widgets.noninteractive.bg_stroke.color,
            text,
        }
    }
}
