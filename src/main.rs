use std::io;
use std::process;

use log::{error, LevelFilter};

use rectkit::cli::build_cli;
use rectkit::commands::{CommandFactory, RectkitCommandFactory};
use rectkit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }

    let factory = RectkitCommandFactory::new();

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = command.execute(&mut out) {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
