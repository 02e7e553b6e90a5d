use clap::Parser;
use std::error::Error;
use vlsm_calculator::config::CliConfig;
use vlsm_calculator::logger::init_logger;
use vlsm_calculator::output::{print_message, MessageKind};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = CliConfig::parse();
    init_logger(config.verbose)?;
    log::info!("#Start main()");

    if let Err(e) = vlsm_calculator::run(&config) {
        log::error!("{e}");
        print_message(&e.to_string(), MessageKind::Error);
        std::process::exit(1);
    }

    Ok(())
}
