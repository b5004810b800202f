use clap::Parser;
use cryptolens::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
