use crate::api::ApiRequest;
use crate::image_store::save_image_from_base64;
use crate::request::{dispatch, Notice};
use crate::state::AppContext;
use crate::symbols::SymbolCursor;

/// Image slots on the symbol details screen
pub const EXAMPLE_SLOTS: usize = 4;

/// Download the stored samples of the selected symbol into the image slots.
/// Returns how many slots were refreshed.
pub fn fetch_examples(ctx: &AppContext) -> Result<usize, Notice> {
    let request = ApiRequest::drawings(ctx.token().as_form_value(), ctx.symbol.index());
    let images: Vec<String> = dispatch(ctx.api(), request, |body| {
        serde_json::from_str(&body).map_err(|e| {
            log::error!("Unexpected drawings payload: {}", e);
            Notice::error(format!("Unexpected reply from server: {}", e))
        })
    })?;

    if images.len() > EXAMPLE_SLOTS {
        log::debug!("Server sent {} examples, keeping {}", images.len(), EXAMPLE_SLOTS);
    }

    let mut saved = 0;
    for (i, encoded) in images.iter().take(EXAMPLE_SLOTS).enumerate() {
        let path = ctx.config().sample_image_path(i + 1);
        save_image_from_base64(encoded, &path).map_err(|e| {
            log::error!("Failed to store example {}: {}", i + 1, e);
            Notice::error(e.to_string())
        })?;
        saved += 1;
    }

    log::info!("Loaded {} examples for {}", saved, ctx.symbol.symbol());
    Ok(saved)
}

/// Step to the previous symbol and refresh its examples. `Ok(false)` at
/// the start of the catalog.
pub fn previous(ctx: &mut AppContext) -> Result<bool, Notice> {
    step(ctx, SymbolCursor::previous)
}

/// Step to the next symbol and refresh its examples. `Ok(false)` at the
/// end of the catalog.
pub fn next(ctx: &mut AppContext) -> Result<bool, Notice> {
    step(ctx, SymbolCursor::next)
}

fn step(ctx: &mut AppContext, advance: fn(&mut SymbolCursor) -> bool) -> Result<bool, Notice> {
    let before = ctx.symbol;
    if !advance(&mut ctx.symbol) {
        return Ok(false);
    }
    match fetch_examples(ctx) {
        Ok(_) => Ok(true),
        Err(notice) => {
            // Unreachable server: stay on the symbol whose examples are shown
            if notice.is_connection_error() {
                ctx.symbol = before;
            }
            Err(notice)
        }
    }
}
