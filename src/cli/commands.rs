//! CLI argument parsing

use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Retrieve articles from a Help Center
#[derive(Parser, Debug, Clone)]
#[command(name = "help-center-articles")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Help Center URL (e.g. https://support.example.com/hc/en-us)
    pub url: String,

    /// Output format [default: tsv]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include only these fields in the output
    #[arg(long, num_args = 1.., value_delimiter = ',', conflicts_with = "exclude_fields")]
    pub include_fields: Option<Vec<String>>,

    /// Exclude these fields from the output
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub exclude_fields: Option<Vec<String>>,

    /// Only list articles in this locale (e.g. en-us)
    #[arg(long)]
    pub locale: Option<String>,

    /// Only list articles of this category
    #[arg(long)]
    pub category_id: Option<u64>,

    /// Only list articles of this section
    #[arg(long)]
    pub section_id: Option<u64>,

    /// Articles per page [default: 100]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: Option<u32>,

    /// Extra request header, passed through unmodified (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory for `--format html` output [default: articles]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["help-center-articles", "https://support.example.com"])
            .unwrap();
        assert_eq!(cli.url, "https://support.example.com");
        assert!(cli.format.is_none());
        assert!(cli.include_fields.is_none());
        assert!(cli.headers.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_format_and_fields() {
        let cli = Cli::try_parse_from([
            "help-center-articles",
            "https://support.example.com",
            "--format",
            "jsonl",
            "--include-fields",
            "id",
            "title,html_url",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Jsonl));
        assert_eq!(
            cli.include_fields,
            Some(vec![
                "id".to_string(),
                "title".to_string(),
                "html_url".to_string()
            ])
        );
    }

    #[test]
    fn test_include_and_exclude_conflict() {
        let result = Cli::try_parse_from([
            "help-center-articles",
            "https://support.example.com",
            "--include-fields",
            "id",
            "--exclude-fields",
            "body",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Cli::try_parse_from([
            "help-center-articles",
            "https://support.example.com",
            "--format",
            "xml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_range() {
        let result = Cli::try_parse_from([
            "help-center-articles",
            "https://support.example.com",
            "--page-size",
            "500",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_scope_and_headers() {
        let cli = Cli::try_parse_from([
            "help-center-articles",
            "https://support.example.com",
            "--locale",
            "de",
            "--section-id",
            "12",
            "-H",
            "Authorization: Bearer x",
            "--header",
            "X-Trace: 1",
        ])
        .unwrap();
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert_eq!(cli.section_id, Some(12));
        assert_eq!(cli.headers, vec!["Authorization: Bearer x", "X-Trace: 1"]);
    }
}
