use clap::Parser;

use code_counter::cli::Cli;
use code_counter::commands::run_count;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_count(&cli));
}
