//! Shared interpretation of server replies.
//!
//! All screens follow the same pattern: send one request, run a success
//! callback on HTTP 200, otherwise show the server's body in an error modal,
//! and show a fixed message when the server cannot be reached.

use crate::api::{ApiRequest, Reply, TextifyApi};
use crate::error::RequestError;

pub const ERROR_TITLE: &str = "Error!";
pub const SUCCESS_TITLE: &str = "Success!";
pub const CONNECTION_ERROR_TITLE: &str = "Connection error!";
pub const CONNECTION_ERROR_MESSAGE: &str = "Please check your internet connection!";

/// A modal message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ERROR_TITLE, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(SUCCESS_TITLE, message)
    }

    pub fn connection() -> Self {
        Self::new(CONNECTION_ERROR_TITLE, CONNECTION_ERROR_MESSAGE)
    }

    pub fn is_connection_error(&self) -> bool {
        self.title == CONNECTION_ERROR_TITLE
    }
}

impl From<RequestError> for Notice {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Transport(reason) => {
                log::warn!("Request failed: {}", reason);
                Notice::connection()
            }
            other => {
                log::error!("{}", other);
                Notice::error(other.to_string())
            }
        }
    }
}

/// Turn a request outcome into either the success value or a user notice.
///
/// `on_success` only runs for an HTTP 200 reply and receives its body.
pub fn interpret<T, F>(outcome: Result<Reply, RequestError>, on_success: F) -> Result<T, Notice>
where
    F: FnOnce(String) -> Result<T, Notice>,
{
    let reply = outcome.map_err(Notice::from)?;
    if reply.is_ok() {
        on_success(reply.body)
    } else {
        log::warn!("Server replied {}: {}", reply.status, reply.body);
        Err(Notice::error(reply.body))
    }
}

/// Send `request` through `api` and [`interpret`] the result
pub fn dispatch<A, T, F>(api: &A, request: ApiRequest, on_success: F) -> Result<T, Notice>
where
    A: TextifyApi + ?Sized,
    F: FnOnce(String) -> Result<T, Notice>,
{
    let endpoint = request.endpoint;
    log::info!("Sending request to {}", endpoint.path());
    interpret(api.post(request), on_success)
}
