use crate::components::MenuButton;
use crate::flows::auth;
use crate::navigator::{ScreenId, SlideDirection};
use crate::TextifyApp;

pub fn menu_panel(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("Textify");
        ui.add_space(24.0);
    });

    let entries = [
        ("Text recognition", ScreenId::TextRecognition),
        ("Handwriting recognition", ScreenId::HandwritingRecognition),
        ("Symbols", ScreenId::Symbols),
    ];
    for (label, screen) in entries {
        if MenuButton::new(label).show(ui).clicked() {
            app.slide_to(screen, SlideDirection::Left, now);
        }
        ui.add_space(8.0);
    }

    ui.separator();

    // Authentication entries depend on the session
    if app.context.is_logged_in() {
        ui.label(format!("Logged in as user {}", app.context.token()));
        if MenuButton::new("Logout").show(ui).clicked() {
            let result = auth::logout(&mut app.context);
            app.report(result);
        }
    } else {
        if MenuButton::new("Login").accent(true).show(ui).clicked() {
            app.slide_to(ScreenId::Login, SlideDirection::Left, now);
        }
        ui.add_space(8.0);
        if MenuButton::new("Register").show(ui).clicked() {
            app.slide_to(ScreenId::Register, SlideDirection::Left, now);
        }
    }
}
