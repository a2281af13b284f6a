use crate::api::ApiRequest;
use crate::request::{dispatch, Notice};
use crate::state::{AppContext, Token};

/// Log in with email and password. On success the token is adopted and
/// persisted; the caller returns to the menu.
pub fn login(ctx: &mut AppContext, email: &str, password: &str) -> Result<(), Notice> {
    let token = dispatch(ctx.api(), ApiRequest::login(email, password), token_from_body)?;
    adopt(ctx, token);
    Ok(())
}

/// Create an account; behaves like [`login`] on success
pub fn register(
    ctx: &mut AppContext,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), Notice> {
    let request = ApiRequest::register(email, password, confirmation);
    let token = dispatch(ctx.api(), request, token_from_body)?;
    adopt(ctx, token);
    Ok(())
}

pub fn logout(ctx: &mut AppContext) -> Result<(), Notice> {
    ctx.logout()
        .map_err(|e| Notice::error(format!("Failed to forget the session: {}", e)))
}

fn token_from_body(body: String) -> Result<Token, Notice> {
    match Token::from_reply(&body) {
        Token::Unauthenticated => Err(Notice::error("The server did not return a user id")),
        token => Ok(token),
    }
}

fn adopt(ctx: &mut AppContext, token: Token) {
    // The session stays usable for this run even if it cannot be persisted
    if let Err(e) = ctx.login(token) {
        log::error!("Failed to persist session: {}", e);
    }
}
