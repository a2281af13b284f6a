use super::back_button;
use crate::document::Document;
use crate::flows::training::{self, SaveOutcome, TrainingRound, SAMPLES_PER_ROUND};
use crate::navigator::ScreenId;
use crate::tools::{DrawError, DrawStrokeTool};
use crate::TextifyApp;

/// Drawing state of the paint screen
#[derive(Debug, Default)]
pub struct PaintScreen {
    pub document: Document,
    pub tool: DrawStrokeTool,
    pub round: TrainingRound,
}

pub fn paint_panel(app: &mut TextifyApp, ui: &mut egui::Ui, now: f64) {
    back_button(app, ui, now, ScreenId::SymbolDetails);
    ui.heading(format!(
        "Draw \"{}\" (sample {} of {})",
        app.context.symbol.symbol(),
        app.paint.round.index(),
        SAMPLES_PER_ROUND
    ));

    let mut save = false;
    ui.horizontal(|ui| {
        save = ui.button("Save").clicked();
        if ui.button("Clear").clicked() {
            app.paint.tool.cancel();
            training::clear(&mut app.paint.document);
        }
    });
    ui.add_space(8.0);

    canvas(app, ui);

    if save {
        let result = app.paint.round.save(&app.context, &mut app.paint.document);
        if let Some(SaveOutcome::RoundComplete) = app.report(result) {
            app.jump_to(ScreenId::SymbolDetails);
        }
    }
}

fn canvas(app: &mut TextifyApp, ui: &mut egui::Ui) {
    let side = ui.available_width().min(ui.available_height()).max(64.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::drag());
    let rect = response.rect;

    let paint = &mut app.paint;
    paint.document.set_canvas_size(rect.size());

    // Points are kept relative to the canvas
    let local = |pos: egui::Pos2| (pos - rect.min).to_pos2();

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            paint.tool.on_pointer_down(local(pos));
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Err(DrawError::NoActiveStroke) = paint.tool.on_pointer_move(local(pos)) {
                log::trace!("Drag without an active stroke ignored");
            }
        }
    }
    if response.drag_stopped() {
        if let Err(DrawError::NoActiveStroke) = paint.tool.on_pointer_up(&mut paint.document) {
            log::trace!("Release without an active stroke ignored");
        }
    }

    if paint.tool.is_drawing() || response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
    }

    app.renderer.render(&painter, rect, &app.paint.document, app.paint.tool.preview());
}
