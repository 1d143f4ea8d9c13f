//! CBAA EcoTag site
//!
//! Server-rendered pages for the university's tree-tagging (QR code) initiative.
//!
//! Layout:
//! - `content/`: catalog and detail resolution, defaulting, derived values, view models
//! - `store/`: read-only access to the hosted tree database
//! - `web/`: page handlers and the components they render
//! - `api_server`: router, application state, JSON endpoints

pub mod config;
pub mod content;

#[cfg(feature = "api")]
pub mod store;
#[cfg(feature = "api")]
pub mod web;
pub mod api_server;

// Re-export commonly used types
pub use config::Config;
pub use content::{TreeSummary, TreeDetail, ResolveError};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
