mod cli;
mod commands;
mod logging;
mod settings;

use clap::Parser;
use log::info;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    info!("Starting jobweek v{}", env!("CARGO_PKG_VERSION"));

    let config = match settings::resolve_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let book = config.open_book();
    let json = cli.global.json;

    let result = match cli.command {
        Command::List(args) => commands::list(&book, &args, json),
        Command::Add(form) => commands::add(&book, &form, json),
        Command::Preview(form) => commands::preview(&book, &form, json),
        Command::Update(args) => commands::update(&book, &args, json),
        Command::Delete(args) => commands::delete(&book, &args, json),
        Command::Week(args) => commands::week(&args, json),
    };

    if let Err(e) = result {
        if json {
            commands::print_json(&commands::ApiResponse::<()>::err(e.to_string()));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(commands::exit_code(&e));
    }
}
