//! Browser client for a REST item collection: lists items, and creates,
//! edits and deletes them, re-fetching the collection after every change.
//!
//! Everything except the Leptos front end is target independent; the front end
//! is only built for `wasm32`.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod escape;
pub mod item;
pub mod markup;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod web;

pub use api::{HttpItemApi, ItemApi};
pub use config::ClientConfig;
pub use controller::{EditSession, ItemController};
pub use error::{ApiError, ConfigError};
pub use item::{Item, ItemDraft, ItemId};
pub use view::{Dialogs, FormFields, ItemView};

#[cfg(target_arch = "wasm32")]
pub use web::App;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod api_tests;
