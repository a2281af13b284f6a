//! Everything a screen action needs: settings, the transport to the
//! recognition service, the local store and the user's session.
//!
//! The context is owned by the application and handed to each flow by
//! mutable reference. Flows only change the session through the methods
//! here, which keep the persisted `logged` record in step with the token.
//!
//! # Example
//!
//! ```rust,no_run
//! use textify::{AppContext, Config, HttpApi};
//!
//! let config = Config::default();
//! let api = HttpApi::new(&config).expect("client");
//! let ctx = AppContext::open(config, Box::new(api)).expect("store");
//! println!("logged in: {}", ctx.is_logged_in());
//! ```

use super::persistence::{JsonStore, StoreError, StoreResult};
use super::session::{Token, LOGGED_KEY};
use crate::api::TextifyApi;
use crate::config::Config;
use crate::symbols::SymbolCursor;

pub struct AppContext {
    config: Config,
    api: Box<dyn TextifyApi>,
    store: JsonStore,
    token: Token,
    /// Symbol shown on the details and paint screens
    pub symbol: SymbolCursor,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("store", &self.store.path())
            .field("token", &self.token)
            .field("symbol", &self.symbol)
            .finish()
    }
}

impl AppContext {
    /// Creates a context over an already opened store. A persisted `logged`
    /// record restores the session without a new login.
    pub fn new(config: Config, api: Box<dyn TextifyApi>, store: JsonStore) -> Self {
        let token = store
            .get(LOGGED_KEY)
            .map(Token::from_record)
            .unwrap_or_default();

        if token.is_authenticated() {
            log::info!("Restored session from {}", store.path().display());
        }

        Self {
            config,
            api,
            store,
            token,
            symbol: SymbolCursor::default(),
        }
    }

    /// Opens the store named by `config`
    pub fn open(config: Config, api: Box<dyn TextifyApi>) -> Result<Self, StoreError> {
        let store = JsonStore::open(config.store_path())?;
        Ok(Self::new(config, api, store))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api(&self) -> &dyn TextifyApi {
        self.api.as_ref()
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_authenticated()
    }

    /// Adopt `token` and persist it. The in-memory session is updated even
    /// when writing the store fails.
    pub fn login(&mut self, token: Token) -> StoreResult<()> {
        log::info!("Logged in as user {}", token);
        self.token = token;
        self.store.put(LOGGED_KEY, self.token.to_record())
    }

    /// Forget the session and its persisted record
    pub fn logout(&mut self) -> StoreResult<()> {
        self.token = Token::Unauthenticated;
        if self.store.delete(LOGGED_KEY)? {
            log::info!("Logged out");
        }
        Ok(())
    }
}
