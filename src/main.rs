use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use theology_enroll::cli::{handle_options_command, handle_submit_command, SubmitArgs};
use theology_enroll::config::{EnrollPaths, Settings};
use theology_enroll::logging;
use theology_enroll::submission::HttpSubmitter;
use theology_enroll::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "enroll",
    author = "Igreja Evangélica Apostólica",
    version,
    about = "Pre-registration form for the theology course",
    long_about = "Fill in the theology course pre-registration from the terminal, \
                  either interactively (the default) or from a JSON/YAML file."
)]
struct Cli {
    /// Override the submission endpoint
    #[arg(long, global = true, env = "THEOLOGY_ENROLL_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive form (default)
    #[command(alias = "ui")]
    Tui,

    /// Submit a registration from a file
    Submit(SubmitArgs),

    /// List the accepted option codes
    Options,

    /// Write the default settings file
    Init,

    /// Show paths and settings
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = EnrollPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_endpoint_override(cli.endpoint);

    // Only the commands that talk to the endpoint write a log file
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let _log_guard = logging::init(&paths, &settings.log_filter)?;
            let runtime = tokio::runtime::Runtime::new()?;
            let submitter = Arc::new(HttpSubmitter::from_settings(&settings)?);
            run_tui(&settings, submitter, runtime.handle().clone())?;
        }
        Commands::Submit(args) => {
            let _log_guard = logging::init(&paths, &settings.log_filter)?;
            let runtime = tokio::runtime::Runtime::new()?;
            if !runtime.block_on(handle_submit_command(&settings, args))? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Options => handle_options_command(),
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Enrollment Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log directory:   {}", paths.log_dir().display());
            println!(
                "Initialized:     {}",
                if paths.is_initialized() { "yes" } else { "no (run 'enroll init')" }
            );
            println!();
            println!("Settings:");
            println!("  Endpoint:        {}", settings.endpoint);
            match settings.request_timeout_secs {
                Some(secs) => println!("  Request timeout: {}s", secs),
                None => println!("  Request timeout: client default"),
            }
            println!("  Support contact: {}", settings.support_contact);
            println!("  Log filter:      {}", settings.log_filter);
        }
    }

    Ok(ExitCode::SUCCESS)
}
