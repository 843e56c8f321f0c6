pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod headless;
pub mod host;
pub mod overlay;
pub mod scan;
pub mod scoring;
pub mod stats;
pub mod text;
// cmd and reports are binary modules (see main.rs).

pub use client::{ClientHandlers, ClientRegistry, HorseDebug};
pub use error::{HdResult, HorseDebugError};
