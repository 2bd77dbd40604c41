use clap::Parser;
use dirsort::cli::{Cli, run_cli};

fn main() {
    run_cli(Cli::parse());
}
