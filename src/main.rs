use clap::{Parser, Subcommand};
use doxnav::{IndexConfig, IndexError, commands};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Inspect and check generated documentation navigation scripts.
#[derive(Parser, Debug)]
#[command(name = "doxnav", version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, env = "DOXNAV_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a navigation index as an outline or JSON
    Show {
        /// Script to read; the built-in web3intf.h index when omitted
        file: Option<PathBuf>,

        /// Print JSON instead of an outline
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Inline deferred child scripts before printing
        #[arg(long, default_value_t = false)]
        resolve: bool,
    },

    /// Parse and validate scripts
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the built-in index in the generator's script format
    Emit,
}

fn main() -> ExitCode {
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "doxnav=warn");
        }
    }
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when a check failed.
fn run(cli: Cli) -> Result<bool, IndexError> {
    let config = match &cli.config {
        Some(path) => IndexConfig::from_file(path)?,
        None => IndexConfig::default(),
    };
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Show {
            file,
            json,
            resolve,
        } => {
            commands::show(file.as_deref(), json, resolve, &config, &mut out)?;
            Ok(true)
        }
        Commands::Check { files } => commands::check(&files, &config, &mut out),
        Commands::Emit => {
            commands::emit(&mut out)?;
            Ok(true)
        }
    }
}
