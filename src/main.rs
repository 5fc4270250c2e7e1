use std::process;
use log::error;

use svy21kit::api::Svy21Kit;
use svy21kit::cli::{build_cli, console_level, resolve_config};
use svy21kit::commands::{CommandFactory, Svy21CommandFactory};
use svy21kit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let config = match resolve_config(&matches) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger(&config.log_file, config.log_level, console_level(&matches)) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let kit = Svy21Kit::new(config);
    let factory = Svy21CommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("{} conversion failed: {}", command.name(), e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
