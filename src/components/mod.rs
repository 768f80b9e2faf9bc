//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`library`] - Library listing with per-folder selection
//! - [`media`] - Media viewer orchestrator
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod library;
pub mod media;
pub mod router;

pub use router::AppRouter;
