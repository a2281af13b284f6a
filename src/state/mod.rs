pub mod context;
mod persistence;
mod session;

pub use context::AppContext;
pub use persistence::{JsonStore, StoreError, StoreResult};
pub use session::{Token, LOGGED_KEY, UNAUTHENTICATED_ID};
