use crate::models::selection::SelectedTime;
use crate::models::settings::SelectorSettings;
use crate::ui_egui::selector::TimePeriodSelector;

const MIN_ROOT_WIDTH: f32 = 760.0;

/// Desktop shell hosting a single selector, the way an embedding page would:
/// it keeps its own copy of the value and updates it from change callbacks.
pub struct TimePeriodApp {
    selector: TimePeriodSelector,
    selected_time: SelectedTime,
}

impl eframe::App for TimePeriodApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.set_min_width(MIN_ROOT_WIDTH);
                if let Some(value) = self.selector.show(ui) {
                    self.on_change(value);
                }
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        match serde_json::to_string(&self.selected_time) {
            Ok(json) => log::info!("Final selection: {}", json),
            Err(e) => log::warn!("Failed to serialize final selection: {}", e),
        }
    }
}

impl TimePeriodApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: SelectorSettings) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        let selector = TimePeriodSelector::new(settings);
        let selected_time = selector.value().clone();
        Self {
            selector,
            selected_time,
        }
    }

    fn on_change(&mut self, value: SelectedTime) {
        log::debug!("Selection changed: {} slots selected", value.slot_count());
        self.selected_time = value;
    }
}
