//! Core viewer logic, independent of the UI layer.
//!
//! This module provides:
//! - [`RendererRegistry`] and the table-backed [`StaticRegistry`]
//! - [`ResolveGuard`] generation tokens for asynchronous resolution
//! - [`SelectionTracker`] and [`effective_target`] for multi-file viewing
//! - [`ViewerGeometry`] derivation per placement
//! - [`builtin_library`] listing for the demo shell

pub mod error;
pub mod geometry;
mod library;
pub mod registry;
mod resolve;
mod selection;

pub use geometry::{ViewerGeometry, fit_floating, floating_resolution};
pub use library::{builtin_library, group_by_source, parse_library};
pub use registry::{
    RendererDescriptor, RendererKind, RendererRegistry, Resolution, ResolveFuture,
    SharedRegistry, StaticRegistry,
};
pub use resolve::{ResolveGuard, ResolveTicket};
pub use selection::{SelectionTracker, effective_target};
