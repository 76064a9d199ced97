use log::{debug, info};
use std::process;

use check_netbotz::agent::UdpSnmpClient;
use check_netbotz::config::ProbeConfig;
use check_netbotz::report::Outcome;
use check_netbotz::run_check;

fn main() {
    // A panic must still produce a plugin line and the UNKNOWN exit code
    std::panic::set_hook(Box::new(|panic| {
        let outcome = Outcome::from_panic(panic.payload());
        println!("{}", outcome.message);
        process::exit(outcome.exit_code());
    }));

    let outcome = match ProbeConfig::new() {
        Ok(config) => {
            // Initialize logging; stdout is reserved for the status line
            env_logger::Builder::new()
                .filter_level(config.log_level())
                .parse_default_env()
                .format_timestamp_secs()
                .init();

            info!(
                "Checking {:?} sensors on {}:{}",
                config.kind, config.host, config.port
            );

            match UdpSnmpClient::connect(&config) {
                Ok(mut client) => run_check(&mut client, &config),
                Err(e) => Outcome::failure(&e),
            }
        }
        Err(e) => Outcome::usage(&e),
    };

    debug!("Exiting with {}", outcome.state);
    println!("{}", outcome.message);
    process::exit(outcome.exit_code());
}
