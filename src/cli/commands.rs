use clap::{Parser, Subcommand, Args};

use crate::config::RuntimeOverrides;
use crate::dashboard::PageId;

#[derive(Parser)]
#[command(name = "wow-audit", version, about = "WOW Coach Q3 2025 marketing audit dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a dashboard page
    Report(ReportArgs),
    /// List the audit findings behind the executive summary
    Findings(FindingsArgs),
    /// Generate the AI executive summary once
    Summarize(SummarizeArgs),
    /// Start the HTTP JSON API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
    /// Show version and build information
    Version,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// Page to render
    #[arg(value_enum, default_value = "overview")]
    pub page: PageId,

    /// Render every page in navigation order
    #[arg(long, conflicts_with = "page")]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct FindingsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Flags shared by every command that talks to the generative-text service.
#[derive(Args, Clone)]
pub struct LlmArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// API key (or set GEMINI_API_KEY / API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Args, Clone)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub llm: LlmArgs,

    /// JSON file with findings to summarize instead of the dashboard list
    #[arg(short, long)]
    pub findings: Option<String>,

    /// Output the final state as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub llm: LlmArgs,

    /// Listen port (default 8090)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

impl SummarizeArgs {
    pub fn overrides(&self) -> RuntimeOverrides {
        RuntimeOverrides { api_key: self.llm.api_key.clone(), ..Default::default() }
    }
}

impl ServeArgs {
    pub fn overrides(&self) -> RuntimeOverrides {
        RuntimeOverrides {
            api_key: self.llm.api_key.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults_to_overview() {
        let cli = Cli::try_parse_from(["wow-audit", "report"]).unwrap();
        let Commands::Report(args) = cli.command else { panic!("expected report") };
        assert_eq!(args.page, PageId::Overview);
        assert!(!args.json);
    }

    #[test]
    fn test_report_page_value() {
        let cli = Cli::try_parse_from(["wow-audit", "report", "dev-checklist", "--json"]).unwrap();
        let Commands::Report(args) = cli.command else { panic!("expected report") };
        assert_eq!(args.page, PageId::DevChecklist);
        assert!(args.json);
    }

    #[test]
    fn test_report_rejects_unknown_page() {
        assert!(Cli::try_parse_from(["wow-audit", "report", "pricing"]).is_err());
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["wow-audit", "serve", "--port", "9000", "--api-key", "k"]).unwrap();
        let Commands::Serve(args) = cli.command else { panic!("expected serve") };
        let overrides = args.overrides();
        assert_eq!(overrides.port, Some(9000));
        assert_eq!(overrides.api_key.as_deref(), Some("k"));
        assert!(overrides.host.is_none());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["wow-audit", "-vv", "--no-color", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }
}
