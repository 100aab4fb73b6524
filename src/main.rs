use std::path::PathBuf;
use clap::Parser;
use phishguard::{cli, config, errors::PhishGuardError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.with_ansi(!cli.no_color).init();
    }

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            PhishGuardError::Config(_) | PhishGuardError::Yaml(_) => 2,
            PhishGuardError::InvalidInput(_) => 3,
            PhishGuardError::Authentication(_) => 4,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: cli::Cli) -> Result<(), PhishGuardError> {
    if let cli::Commands::Validate(args) = &cli.command {
        return handle_validate(args).await;
    }

    let config_path = cli.config.as_deref().map(PathBuf::from);
    let config = config::load_config(config_path.as_deref()).await?;

    match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args, config).await,
        cli::Commands::Ui(args) => cli::ui::handle_ui(args, config).await,
        cli::Commands::Check(args) => cli::check::handle_check(args, config).await,
        cli::Commands::Validate(_) => Ok(()),
    }
}

async fn handle_validate(args: &cli::commands::ValidateArgs) -> Result<(), PhishGuardError> {
    let path = PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
