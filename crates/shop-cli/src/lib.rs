//! # shop-cli
//!
//! Console presentation layer for storefront-rs.
//!
//! This crate provides:
//! - `Prompter`: the blocking prompt/response boundary
//! - `Session`: the menu state machine over a `shop-core` catalog, cart
//!   and account directory
//! - `CliConfig` and catalog loading with a seeded demo fallback

pub mod config;
pub mod prompt;
pub mod session;

pub use config::{demo_catalog, load_catalog, CliConfig};
pub use prompt::Prompter;
pub use session::Session;
