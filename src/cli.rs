//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: Flutter project template instantiation tool", long_about = None)]
pub struct Args {
    /// Name of the project to create
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Path to the template project directory
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Organization identifier used for package and bundle ids
    #[arg(short, long, default_value = "com.example")]
    pub org: String,

    /// Directory the new project is created under
    #[arg(short, long, default_value = ".")]
    pub dest: PathBuf,

    /// Align the local Flutter toolchain to this version or channel
    /// before creating the project
    #[arg(long, value_name = "VERSION")]
    pub flutter_version: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the confirmation prompt before switching toolchain versions
    #[arg(long)]
    pub skip_version_check: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
