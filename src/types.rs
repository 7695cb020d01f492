//! Common types used throughout help-center-articles
//!
//! This module contains shared type definitions and type aliases used across
//! multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type. Key order follows the API response (`preserve_order`).
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One Help Center article, exactly as the API returned it.
///
/// The article shape evolves on the server side, so fields are not typed
/// individually here. Selecting and rendering fields is the job of
/// [`crate::output`].
pub type Article = JsonObject;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Output Format
// ============================================================================

/// Serialization used for exported articles
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Tab-separated values with a header row
    #[default]
    Tsv,
    /// JSON Lines (one object per line)
    Jsonl,
    /// One HTML file per article
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}
