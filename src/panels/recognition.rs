use super::back_button;
use crate::flows::recognition::{self, RecognitionMode, PLACEHOLDER};
use crate::navigator::ScreenId;
use crate::request::Notice;
use crate::state::AppContext;
use crate::TextifyApp;
use std::path::PathBuf;

/// State of a recognition screen: the chosen file and the last result
#[derive(Debug, Clone)]
pub struct RecognitionScreen {
    pub mode: RecognitionMode,
    pub path_input: String,
    pub result: String,
}

impl RecognitionScreen {
    pub fn new(mode: RecognitionMode) -> Self {
        Self {
            mode,
            path_input: String::new(),
            result: PLACEHOLDER.to_owned(),
        }
    }

    /// Send the image at `path` and show what came back
    pub fn recognize_path(&mut self, ctx: &AppContext, path: PathBuf) -> Result<(), Notice> {
        self.path_input = path.display().to_string();
        self.result = recognition::recognize(ctx, self.mode, &path)?;
        Ok(())
    }
}

pub fn recognition_panel(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64, handwritten: bool) {
    back_button(app, ui, now, ScreenId::Menu);

    let screen = if handwritten {
        &mut app.handwritten
    } else {
        &mut app.printed
    };
    ui.heading(screen.mode.title());
    ui.add_space(12.0);

    let mut load = false;
    ui.horizontal(|ui| {
        ui.label("Image file");
        let response = ui.add(
            egui::TextEdit::singleline(&mut screen.path_input)
                .hint_text("path/to/image.png or drop a file here")
                .desired_width(f32::INFINITY),
        );
        load |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    });
    load |= ui.button("Load").clicked();

    ui.add_space(12.0);
    ui.separator();
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(egui::RichText::new(screen.result.as_str()).size(18.0));
    });

    let input = screen.path_input.trim().to_owned();
    if load && !input.is_empty() {
        let result = screen.recognize_path(&app.context, PathBuf::from(input));
        app.report(result);
    }
}
