#![warn(clippy::all, rust_2018_idioms)]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod flows;
pub mod image_store;
pub mod navigator;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod request;
pub mod state;
pub mod stroke;
pub mod symbols;
pub mod texture_manager;
pub mod tools;

pub use api::{ApiRequest, Endpoint, HttpApi, Reply, TextifyApi};
pub use app::TextifyApp;
pub use config::Config;
pub use document::Document;
pub use error::RequestError;
pub use navigator::{Navigator, ScreenId, SlideDirection};
pub use request::Notice;
pub use state::{AppContext, JsonStore, Token};
pub use stroke::Stroke;
pub use tools::DrawStrokeTool;
