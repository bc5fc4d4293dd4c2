pub mod api;
pub mod config;
pub mod consts;
pub mod dictionary;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod question;
pub mod scoring;
pub mod segmenter;
pub mod session;
pub mod text;
// cmd and reports belong to the binary (main.rs).

pub use crate::api::GameData;
pub use crate::error::{StrikeError, StrikeResult};
