use clap::Parser;
use ht_driver::{DriverConfig, DriverError};
use log::{error, trace};

fn main() -> Result<(), DriverError> {
    env_logger::builder().init();

    let config = DriverConfig::parse();
    trace!("{:#?}", config);
    config.validate().inspect_err(|e| error!("{e}"))?;

    let stdout = std::io::stdout();
    ht_driver::run(&config, &mut stdout.lock()).inspect_err(|e| error!("{e}"))
}
