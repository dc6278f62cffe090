//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the optional toolchain
//! alignment pre-step, and project creation.

use stencil::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::create_project,
    toolchain::switch_version,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Aligns the Flutter toolchain when a version was requested
/// 2. Creates the project from the template
fn run(args: Args) -> Result<()> {
    if let Some(requested) = &args.flutter_version {
        switch_version(requested, args.skip_version_check)?;
    }

    println!(
        "Creating project '{}' from template '{}'",
        args.name,
        args.template.display()
    );

    let project_root = create_project(&args.name, &args.template, &args.org, &args.dest)?;

    println!("Project created successfully in {}.", project_root.display());
    Ok(())
}
