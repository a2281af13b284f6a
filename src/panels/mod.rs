mod auth;
mod menu;
mod paint;
mod recognition;
mod symbols;

pub use auth::{LoginForm, RegisterForm};
pub use paint::PaintScreen;
pub use recognition::RecognitionScreen;

use crate::navigator::{ScreenId, SlideDirection};
use crate::TextifyApp;

/// Draw the active screen into `ui`
pub fn show_screen(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64) {
    match app.navigator.current() {
        ScreenId::Menu => menu::menu_panel(app, ui, now),
        ScreenId::Login => auth::login_panel(app, ui, now),
        ScreenId::Register => auth::register_panel(app, ui, now),
        ScreenId::Symbols => symbols::symbols_panel(app, ui, now),
        ScreenId::SymbolDetails => symbols::details_panel(app, ui, now),
        ScreenId::Paint => paint::paint_panel(app, ui, now),
        ScreenId::TextRecognition => recognition::recognition_panel(app, ui, now, false),
        ScreenId::HandwritingRecognition => recognition::recognition_panel(app, ui, now, true),
    }
}

/// "Back" link sliding to `target` from the left
fn back_button(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64, target: ScreenId) {
    if ui.button("⬅ Back").clicked() {
        app.slide_to(target, SlideDirection::Right, now);
    }
}
