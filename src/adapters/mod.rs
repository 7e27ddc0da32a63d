#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, execute, init_logging, print_output};

    let args = Args::parse();
    init_logging(args.verbose);

    let out = execute(&args)?;
    print_output(&out, &args)?;

    Ok(())
}
