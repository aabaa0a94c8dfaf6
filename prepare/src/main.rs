use std::env;
use std::process::ExitCode;

use unicode_tables_prepare::config::{Config, USAGE};
use unicode_tables_prepare::{logging, run};

fn main() -> ExitCode
{
    logging::init();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(files) => {
            tracing::info!(files = files.len(), out = %config.out_dir.display(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
