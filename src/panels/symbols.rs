use super::back_button;
use crate::flows::details::{self, EXAMPLE_SLOTS};
use crate::flows::training::{self, TrainOutcome};
use crate::navigator::{ScreenId, SlideDirection};
use crate::symbols::SYMBOLS;
use crate::TextifyApp;

const SYMBOLS_PER_ROW: usize = 6;
const SLOT_SIZE: f32 = 120.0;

pub fn symbols_panel(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64) {
    ui.horizontal(|ui| {
        back_button(app, ui, now, ScreenId::Menu);
        if ui.button("Train model").clicked() {
            match training::train(&app.context) {
                Ok(TrainOutcome::LoginRequired) => {
                    app.slide_to(ScreenId::Login, SlideDirection::Right, now);
                }
                Ok(TrainOutcome::Started(notice)) => app.show_notice(notice),
                Err(notice) => app.show_notice(notice),
            }
        }
    });
    ui.heading("Symbols");
    ui.add_space(12.0);

    let selected = app.context.symbol.index();
    let mut chosen = None;
    egui::Grid::new("symbol_grid").spacing([8.0, 8.0]).show(ui, |ui| {
        for (index, symbol) in SYMBOLS.iter().enumerate() {
            let button = egui::Button::new(egui::RichText::new(*symbol).size(28.0))
                .min_size(egui::vec2(56.0, 56.0))
                .selected(index == selected);
            if ui.add(button).clicked() {
                chosen = Some(index);
            }
            if (index + 1) % SYMBOLS_PER_ROW == 0 {
                ui.end_row();
            }
        }
    });

    if let Some(index) = chosen {
        app.context.symbol.select(index);
        app.slide_to(ScreenId::SymbolDetails, SlideDirection::Left, now);
    }
}

pub fn details_panel(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64) {
    back_button(app, ui, now, ScreenId::Symbols);

    ui.horizontal(|ui| {
        let cursor = app.context.symbol;
        if ui.add_enabled(cursor.has_previous(), egui::Button::new("◀")).clicked() {
            let result = details::previous(&mut app.context);
            if app.report(result).is_some() {
                app.textures.reload();
            }
        }
        ui.heading(egui::RichText::new(app.context.symbol.symbol()).size(40.0));
        if ui.add_enabled(cursor.has_next(), egui::Button::new("▶")).clicked() {
            let result = details::next(&mut app.context);
            if app.report(result).is_some() {
                app.textures.reload();
            }
        }
    });
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        for slot in 1..=EXAMPLE_SLOTS {
            let path = app.context.config().sample_image_path(slot);
            let size = egui::vec2(SLOT_SIZE, SLOT_SIZE);
            match app.textures.slot_texture(slot, &path, ui.ctx()) {
                Some(texture) => {
                    ui.add(egui::Image::new((texture, size)));
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 4.0, egui::Color32::from_gray(50));
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "no sample",
                        egui::FontId::proportional(14.0),
                        egui::Color32::GRAY,
                    );
                }
            }
        }
    });

    ui.add_space(12.0);
    if ui.button("Draw samples").clicked() {
        let destination = training::paint_destination(&app.context);
        app.slide_to(destination, SlideDirection::Left, now);
    }
}
