//! Renderer registry.
//!
//! Maps a file extension to a [`RendererDescriptor`]. The built-in
//! [`StaticRegistry`] is loaded from the embedded renderer table; hosts can
//! provide their own [`RendererRegistry`] through context.

use std::collections::HashMap;
use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::RENDERER_TABLE;
use crate::core::error::ConfigError;

/// Supported renderer kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    Image,
    Video,
    Audio,
    Book,
    Pdf,
    Markdown,
    Text,
}

/// Floating (picture-in-picture) size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub width: f64,
    pub height: f64,
}

impl Resolution {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Capability record for a resolved renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct RendererDescriptor {
    /// Which renderer handles the file
    pub kind: RendererKind,
    /// Human-readable renderer name
    pub label: String,
    /// Preferred floating size
    pub floating: Option<Resolution>,
    /// Time-based media that reports a duration
    pub transport: bool,
}

/// Future returned by [`RendererRegistry::resolve`].
pub type ResolveFuture = Pin<Box<dyn Future<Output = Option<RendererDescriptor>>>>;

/// Registry shared through Leptos context.
pub type SharedRegistry = Arc<dyn RendererRegistry>;

/// Source of renderer descriptors.
///
/// Resolution is asynchronous and completions may arrive in any order;
/// callers guard them with [`crate::core::ResolveGuard`].
pub trait RendererRegistry: Send + Sync {
    /// Resolve the renderer for `extension` (lowercase, without the dot).
    fn resolve(&self, extension: &str) -> ResolveFuture;
}

// =============================================================================
// Renderer Table
// =============================================================================

#[derive(Debug, Deserialize)]
struct RendererTable {
    #[serde(default)]
    renderer: Vec<RendererEntry>,
}

#[derive(Debug, Deserialize)]
struct RendererEntry {
    kind: RendererKind,
    label: String,
    extensions: Vec<String>,
    floating: Option<[f64; 2]>,
    #[serde(default)]
    transport: bool,
}

/// Registry backed by an in-memory extension table.
#[derive(Clone, Debug, Default)]
pub struct StaticRegistry {
    by_extension: HashMap<String, RendererDescriptor>,
}

impl StaticRegistry {
    /// Registry loaded from the embedded renderer table.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(RENDERER_TABLE)
    }

    /// Parse a renderer table.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let table: RendererTable = toml::from_str(source).map_err(|e| ConfigError::Parse {
            table: "renderer",
            message: e.message().to_string(),
        })?;

        let mut by_extension = HashMap::new();
        for entry in table.renderer {
            let descriptor = RendererDescriptor {
                kind: entry.kind,
                label: entry.label,
                floating: entry.floating.map(|[w, h]| Resolution::new(w, h)),
                transport: entry.transport,
            };
            for ext in entry.extensions {
                let ext = normalize(&ext);
                if by_extension.insert(ext.clone(), descriptor.clone()).is_some() {
                    return Err(ConfigError::DuplicateExtension(ext));
                }
            }
        }

        Ok(Self { by_extension })
    }

    /// Synchronous lookup.
    pub fn lookup(&self, extension: &str) -> Option<RendererDescriptor> {
        self.by_extension.get(&normalize(extension)).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

impl RendererRegistry for StaticRegistry {
    fn resolve(&self, extension: &str) -> ResolveFuture {
        Box::pin(future::ready(self.lookup(extension)))
    }
}

fn normalize(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_parses() {
        let registry = StaticRegistry::builtin().expect("embedded table must parse");
        assert!(!registry.is_empty());

        let video = registry.lookup("mp4").unwrap();
        assert_eq!(video.kind, RendererKind::Video);
        assert!(video.transport);
        assert_eq!(video.floating, Some(Resolution::new(360.0, 203.0)));

        assert_eq!(registry.lookup("epub").unwrap().kind, RendererKind::Book);
        assert_eq!(registry.lookup("md").unwrap().kind, RendererKind::Markdown);
        assert!(!registry.lookup("png").unwrap().transport);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = StaticRegistry::builtin().unwrap();
        assert_eq!(registry.lookup("FLAC").unwrap().kind, RendererKind::Audio);
        assert_eq!(registry.lookup(".Jpg").unwrap().kind, RendererKind::Image);
    }

    #[test]
    fn test_unknown_extension_is_absent() {
        let registry = StaticRegistry::builtin().unwrap();
        assert!(registry.lookup("tar").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_duplicate_extension_rejected() {
        let source = r#"
            [[renderer]]
            kind = "video"
            label = "Video"
            extensions = ["mp4"]

            [[renderer]]
            kind = "audio"
            label = "Audio"
            extensions = ["MP4"]
        "#;
        assert_eq!(
            StaticRegistry::from_toml(source).unwrap_err(),
            ConfigError::DuplicateExtension("mp4".into())
        );
    }

    #[test]
    fn test_invalid_table_rejected() {
        let source = r#"
            [[renderer]]
            kind = "hologram"
            label = "Hologram"
            extensions = ["holo"]
        "#;
        assert!(matches!(
            StaticRegistry::from_toml(source),
            Err(ConfigError::Parse { table: "renderer", .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_future() {
        let registry = StaticRegistry::builtin().unwrap();
        let descriptor = registry.resolve("webm").await.unwrap();
        assert_eq!(descriptor.kind, RendererKind::Video);
        assert!(registry.resolve("exe").await.is_none());
    }
}
