//! Media viewer for the browser.
//!
//! Resolves a renderer per file extension, keeps transient playback state,
//! switches between floating and maximized layouts and lets a multi-file
//! selection take over from the directly opened file.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
