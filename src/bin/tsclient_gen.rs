use tsclient_gen::cli::run_cli;
use tsclient_gen::logging::{init_logging, LogConfig};

fn main() {
    if let Err(err) = init_logging(&LogConfig::from_env()) {
        eprintln!("Warning: {err:#}");
    }

    if let Err(err) = run_cli() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
