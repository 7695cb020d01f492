//! Output module
//!
//! Renders the article sequence for the user.
//!
//! # Overview
//!
//! This module provides:
//! - `FieldSelection` - which article fields are exported
//! - `TsvWriter` - tab-separated values with a header row
//! - `JsonlWriter` - newline-delimited JSON
//! - `HtmlFilesWriter` - one HTML file per article body

mod fields;
mod writer;

pub use fields::{FieldSelection, ARTICLE_FIELDS};
pub use writer::{
    create_writer, render_cell, HtmlFilesWriter, JsonlWriter, RecordWriter, TsvWriter,
    DEFAULT_OUTPUT_DIR,
};
