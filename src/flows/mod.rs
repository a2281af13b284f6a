//! Screen actions, independent of rendering.
//!
//! Each flow takes the [`AppContext`](crate::AppContext) explicitly, sends at
//! most one request through [`request::dispatch`](crate::request::dispatch)
//! and reports what the UI should do next. Failures come back as a
//! [`Notice`](crate::Notice) for the modal.

pub mod auth;
pub mod details;
pub mod recognition;
pub mod training;

pub use recognition::{format_text, RecognitionMode};
pub use training::{SaveOutcome, TrainOutcome, TrainingRound};
