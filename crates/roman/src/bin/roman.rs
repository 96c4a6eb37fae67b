use clap::Parser;

use roman::cli::Cli;
use roman::commands::dispatch;
use roman::exit_codes;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            std::process::exit(code);
        }
    };
    log::debug!("{:?}", cli);
    std::process::exit(dispatch(&cli));
}
