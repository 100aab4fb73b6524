use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "phishguard", version, about = "LLM-backed phishing email classifier")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the analysis API and the web UI
    Serve(ServeArgs),
    /// Serve only the web UI, pointed at a remote backend
    Ui(UiArgs),
    /// Classify one email from the terminal
    Check(CheckArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides PORT and the config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Serve only the JSON API, without the web UI
    #[arg(long)]
    pub api_only: bool,
}

#[derive(Args, Clone)]
pub struct UiArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Base URL of the analysis backend (overrides BACKEND_URL)
    #[arg(long)]
    pub backend_url: Option<String>,
}

#[derive(Args, Clone)]
pub struct CheckArgs {
    /// Sender email address
    #[arg(short, long)]
    pub sender: String,

    /// Subject line
    #[arg(long, default_value = "")]
    pub subject: String,

    /// File holding the email body; `-` reads standard input
    #[arg(short, long)]
    pub body: String,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
