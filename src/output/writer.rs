//! Article writers
//!
//! Writers receive articles one at a time as the paginator yields them, so
//! an export never holds more than the current page in memory.

use super::fields::ARTICLE_FIELDS;
use crate::error::{Error, Result, ResultExt};
use crate::types::{Article, JsonObject, JsonValue, OutputFormat};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default directory for the HTML writer
pub const DEFAULT_OUTPUT_DIR: &str = "articles";

/// Sink for a sequence of articles
pub trait RecordWriter {
    /// Called once before the first article
    fn begin(&mut self) -> Result<()>;

    /// Write one article
    fn write_article(&mut self, article: &Article) -> Result<()>;

    /// Called once after the last article; flushes buffered output
    fn finish(&mut self) -> Result<()>;
}

/// Render a JSON value as a single text cell
///
/// Strings are written as is, null as an empty cell, everything else as
/// compact JSON.
pub fn render_cell(value: Option<&JsonValue>) -> Cow<'_, str> {
    match value {
        None | Some(JsonValue::Null) => Cow::Borrowed(""),
        Some(JsonValue::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

// ============================================================================
// TSV
// ============================================================================

/// Tab-separated output with a header row
///
/// Follows the Excel tab dialect: fields containing tabs, quotes or line
/// breaks are quoted, quotes are doubled, rows end with CRLF.
pub struct TsvWriter<W: Write> {
    writer: csv::Writer<W>,
    fields: Vec<String>,
}

impl<W: Write> TsvWriter<W> {
    /// Create a TSV writer over `out`
    pub fn new(out: W, fields: Vec<String>) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::CRLF)
            .from_writer(out);
        Self { writer, fields }
    }

    /// Unwrap the inner writer, flushing first
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

impl<W: Write> RecordWriter for TsvWriter<W> {
    fn begin(&mut self) -> Result<()> {
        self.writer.write_record(&self.fields)?;
        Ok(())
    }

    fn write_article(&mut self, article: &Article) -> Result<()> {
        let row = self
            .fields
            .iter()
            .map(|f| render_cell(article.get(f)).into_owned());
        self.writer.write_record(row)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

// ============================================================================
// JSON Lines
// ============================================================================

/// One JSON object per line, restricted to the requested fields
///
/// Only known article fields are written, in [`ARTICLE_FIELDS`] order
/// whatever order they were requested in. A known field the server left out
/// is written as `null`.
pub struct JsonlWriter<W: Write> {
    out: W,
    keys: Vec<&'static str>,
}

impl<W: Write> JsonlWriter<W> {
    /// Create a JSON Lines writer over `out`
    pub fn new(out: W, fields: Vec<String>) -> Self {
        let keys = ARTICLE_FIELDS
            .iter()
            .copied()
            .filter(|known| fields.iter().any(|f| f.as_str() == *known))
            .collect();
        Self { out, keys }
    }

    /// Unwrap the inner writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordWriter for JsonlWriter<W> {
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_article(&mut self, article: &Article) -> Result<()> {
        let selected: JsonObject = self
            .keys
            .iter()
            .map(|&key| {
                let value = article.get(key).cloned().unwrap_or(JsonValue::Null);
                (key.to_string(), value)
            })
            .collect();
        serde_json::to_writer(&mut self.out, &selected)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

// ============================================================================
// HTML files
// ============================================================================

/// Writes each article's `body` to `<dir>/<title>[<id>].html`
pub struct HtmlFilesWriter {
    dir: PathBuf,
    written: usize,
}

impl HtmlFilesWriter {
    /// Create a writer targeting `dir` (created on `begin`)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: 0,
        }
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of files written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// File name for an article: `<title>[<id>].html`, `/` replaced by `:`
    pub fn file_name(article: &Article) -> String {
        let title = render_cell(article.get("title"));
        let id = render_cell(article.get("id"));
        format!("{title}[{id}].html").replace('/', ":")
    }
}

impl RecordWriter for HtmlFilesWriter {
    fn begin(&mut self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::output(format!("cannot create {}: {e}", self.dir.display()))
        })?;
        Ok(())
    }

    fn write_article(&mut self, article: &Article) -> Result<()> {
        let path = self.dir.join(Self::file_name(article));
        fs::write(&path, render_cell(article.get("body")).as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Create the writer for `format`
///
/// `out` receives TSV and JSON Lines output; `output_dir` is only used by
/// the HTML writer.
pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    fields: Vec<String>,
    out: W,
    output_dir: &Path,
) -> Box<dyn RecordWriter + 'a> {
    match format {
        OutputFormat::Tsv => Box::new(TsvWriter::new(out, fields)),
        OutputFormat::Jsonl => Box::new(JsonlWriter::new(out, fields)),
        OutputFormat::Html => Box::new(HtmlFilesWriter::new(output_dir)),
    }
}
