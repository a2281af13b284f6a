use crate::api::ApiRequest;
use crate::config::sample_image_name;
use crate::document::Document;
use crate::navigator::ScreenId;
use crate::raster;
use crate::request::{dispatch, Notice};
use crate::state::AppContext;

/// Samples drawn per symbol before the examples are shown
pub const SAMPLES_PER_ROUND: usize = 4;

/// What a successful save leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Keep drawing; `next_index` is the sample number now expected
    Saved { next_index: usize },
    /// The fourth sample went out; show the symbol details
    RoundComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainOutcome {
    LoginRequired,
    Started(Notice),
}

/// Rotating sample counter of the paint screen, cycling 1..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingRound {
    index: usize,
}

impl Default for TrainingRound {
    fn default() -> Self {
        Self { index: 1 }
    }
}

impl TrainingRound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the sample the next save produces
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rasterize `doc` into the current sample slot and upload it for the
    /// selected symbol.
    ///
    /// The drawing is cleared and the counter advances once the upload
    /// completes, whatever the status code. When the server cannot be
    /// reached nothing changes.
    pub fn save(&mut self, ctx: &AppContext, doc: &mut Document) -> Result<SaveOutcome, Notice> {
        let name = sample_image_name(self.index);
        let path = ctx.config().sample_image_path(self.index);
        let png = raster::export_png(doc, &path).map_err(|e| {
            log::error!("Failed to export drawing: {}", e);
            Notice::error(e.to_string())
        })?;

        let request = ApiRequest::upload_drawing(
            ctx.token().as_form_value(),
            ctx.symbol.index(),
            &name,
            png,
        );
        let reply = ctx.api().post(request).map_err(Notice::from)?;
        if !reply.is_ok() {
            log::warn!("Upload of {} answered {}: {}", name, reply.status, reply.body);
        }

        doc.clear();
        self.index += 1;
        if self.index > SAMPLES_PER_ROUND {
            self.index = 1;
            log::info!("Training round for {} complete", ctx.symbol.symbol());
            return Ok(SaveOutcome::RoundComplete);
        }
        Ok(SaveOutcome::Saved {
            next_index: self.index,
        })
    }
}

/// Discard the drawing without uploading it
pub fn clear(doc: &mut Document) {
    doc.clear();
}

/// Paint screen for logged-in users, login otherwise
pub fn paint_destination(ctx: &AppContext) -> ScreenId {
    if ctx.is_logged_in() {
        ScreenId::Paint
    } else {
        ScreenId::Login
    }
}

/// Ask the server to retrain the user's model
pub fn train(ctx: &AppContext) -> Result<TrainOutcome, Notice> {
    if !ctx.is_logged_in() {
        return Ok(TrainOutcome::LoginRequired);
    }
    let request = ApiRequest::train(ctx.token().as_form_value());
    dispatch(ctx.api(), request, |body| Ok(TrainOutcome::Started(Notice::success(body))))
}
