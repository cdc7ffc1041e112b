#![forbid(unsafe_code)]

use std::process::ExitCode;

use fform_demo::Preferences;
use fform_demo::session::{CONFIG_ENV, init_tracing, load_config, run_script};
use fform_runtime::LogLevel;

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogLevel::Error);
            tracing::error!(target: "fform::demo", "{CONFIG_ENV}: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_level);

    for (i, screen) in run_script(&config, Preferences::detect()).iter().enumerate() {
        if i > 0 {
            println!("{}", "-".repeat(60));
        }
        print!("{screen}");
    }
    ExitCode::SUCCESS
}
