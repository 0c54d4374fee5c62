mod cli;
mod error;
mod fmt;
mod models;
mod parser;
mod settings;
mod statement;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir, user } => cli::init::run(data_dir, user),
        Commands::Parse {
            file,
            format,
            output,
        } => cli::parse::run(&file, format.as_deref(), output.as_deref()),
        Commands::Period { file } => cli::period::run(&file),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
