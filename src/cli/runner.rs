//! CLI runner - executes an export

use crate::cli::commands::Cli;
use crate::config::{parse_header, ExportConfig};
use crate::error::Result;
use crate::http::HttpClient;
use crate::options::ListArticlesOptions;
use crate::output::{create_writer, FieldSelection, RecordWriter, DEFAULT_OUTPUT_DIR};
use crate::pagination::ArticlePaginator;
use crate::types::OutputFormat;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Export completed
    Ok = 0,
    /// Any failure, including a closed output pipe
    Error = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Summary of a finished export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    /// Articles written
    pub articles: u64,
    /// Pages fetched
    pub pages: usize,
    /// Format used
    pub format: OutputFormat,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the export, writing to stdout
    pub async fn run(&self) -> Result<ExportStats> {
        let stdout = BufWriter::new(io::stdout());
        self.export(stdout).await
    }

    /// Effective settings: config file first, then command-line flags
    pub fn settings(&self) -> Result<ExportConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };

        // Scope flags replace the file's scope as a whole so a file section
        // and a flag category don't end up combined by accident.
        if self.cli.category_id.is_some() || self.cli.section_id.is_some() {
            if config.category_id.is_some() || config.section_id.is_some() {
                warn!("Scope from command line overrides scope in config file");
            }
            config.category_id = self.cli.category_id;
            config.section_id = self.cli.section_id;
        }
        if let Some(locale) = &self.cli.locale {
            config.locale = Some(locale.clone());
        }
        if let Some(format) = self.cli.format {
            config.format = Some(format);
        }
        if let Some(size) = self.cli.page_size {
            config.page_size = Some(size);
        }
        if let Some(timeout) = self.cli.timeout {
            config.timeout_secs = Some(timeout);
        }
        if let Some(dir) = &self.cli.output_dir {
            config.output_dir = Some(dir.clone());
        }
        for raw in &self.cli.headers {
            let (name, value) = parse_header(raw)?;
            config.headers.insert(name, value);
        }

        config.validate()?;
        Ok(config)
    }

    /// Run the export, writing TSV/JSONL output to `out`
    pub async fn export<W: Write>(&self, out: W) -> Result<ExportStats> {
        let start = Instant::now();
        let config = self.settings()?;

        let options = ListArticlesOptions::build(
            &self.cli.url,
            config.locale.as_deref(),
            config.category_id,
            config.section_id,
        )?;
        let start_url = options.first_page_url(config.page_size());
        let client = HttpClient::with_config(config.http_config())?;

        let fields = FieldSelection::from_lists(
            self.cli.include_fields.clone(),
            self.cli.exclude_fields.clone(),
        )
        .resolve();
        let format = config.format();
        let output_dir = config
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        info!("Exporting articles from {start_url} as {format}");

        let mut writer = create_writer(format, fields, out, &output_dir);
        let mut paginator = ArticlePaginator::new(&client, start_url.as_str());

        let written = write_all(&mut paginator, writer.as_mut()).await;
        // Flush what was already written even if a later page failed
        let flushed = writer.finish();
        let articles = written?;
        flushed?;

        let stats = ExportStats {
            articles,
            pages: paginator.pages_fetched(),
            format,
        };
        info!(
            "Exported {} articles from {} pages in {:?}",
            stats.articles,
            stats.pages,
            start.elapsed()
        );
        Ok(stats)
    }
}

async fn write_all(
    paginator: &mut ArticlePaginator<&HttpClient>,
    writer: &mut (dyn RecordWriter + '_),
) -> Result<u64> {
    writer.begin()?;
    let mut count = 0;
    while let Some(article) = paginator.next_article().await {
        writer.write_article(&article?)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["help-center-articles", "https://support.example.com"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Ok as u8, 0);
        assert_eq!(ExitCode::Error as u8, 1);
    }

    #[test]
    fn test_settings_defaults() {
        let config = runner(&[]).settings().unwrap();
        assert_eq!(config.page_size(), 100);
        assert_eq!(config.format(), OutputFormat::Tsv);
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_settings_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.yaml");
        std::fs::write(
            &path,
            "locale: fr\nsection_id: 3\nformat: jsonl\nheaders:\n  X-Team: docs\n",
        )
        .unwrap();

        let config = runner(&[
            "--config",
            path.to_str().unwrap(),
            "--category-id",
            "8",
            "--page-size",
            "10",
            "-H",
            "Authorization: Bearer t",
        ])
        .settings()
        .unwrap();

        assert_eq!(config.locale.as_deref(), Some("fr"));
        assert_eq!(config.category_id, Some(8));
        assert_eq!(config.section_id, None);
        assert_eq!(config.format(), OutputFormat::Jsonl);
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.headers.get("X-Team").map(String::as_str), Some("docs"));
        assert_eq!(
            config.headers.get("Authorization").map(String::as_str),
            Some("Bearer t")
        );
    }

    #[test]
    fn test_settings_rejects_bad_header() {
        let err = runner(&["-H", "nonsense"]).settings().unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[tokio::test]
    async fn test_export_rejects_conflicting_scope_before_any_request() {
        let mut out = Vec::new();
        let err = runner(&["--category-id", "1", "--section-id", "2"])
            .export(&mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidScopeConfiguration { .. }));
        assert!(out.is_empty());
    }
}
