use eframe::egui;

/// Full-width menu entry with a large centred label
pub struct MenuButton<'a> {
    pub label: &'a str,
    pub height: f32,
    pub accent: bool,
}

impl<'a> MenuButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            height: 56.0,
            accent: false,
        }
    }

    /// Highlight the entry in the accent colour
    pub fn accent(mut self, accent: bool) -> Self {
        self.accent = accent;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.accent {
                egui::Color32::from_rgb(33, 150, 243)
            } else if response.hovered() {
                egui::Color32::from_gray(60)
            } else {
                egui::Color32::from_gray(40)
            };

            ui.painter().rect_filled(rect, 6.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(22.0),
                egui::Color32::WHITE,
            );

            if response.has_focus() {
                ui.painter().rect_stroke(
                    rect,
                    6.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(100, 181, 246)),
                );
            }
        }

        response
    }
}
