use clap::Parser;
use tracing_subscriber::EnvFilter;
use wow_audit::cli::{self, Commands};
use wow_audit::config;
use wow_audit::errors::AuditError;
use wow_audit::render;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let result = match cli.command {
        Commands::Report(args) => cli::report::handle_report(args).await,
        Commands::Findings(args) => cli::findings::handle_findings(args).await,
        Commands::Summarize(args) => cli::summarize::handle_summarize(args, cli.quiet).await,
        Commands::Serve(args) => cli::serve::handle_serve(args).await,
        Commands::Validate(args) => handle_validate(args).await,
        Commands::Version => {
            print!("{}", render::render_version());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.classify().exit_code());
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), AuditError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("{}", render::render_success(&format!("Configuration is valid: {}", args.config)));
    Ok(())
}
