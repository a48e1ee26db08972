// lcsharp - C# coding-practice workspace scaffolder
// Main CLI entry point

use clap::Parser;
use std::process;
use lcsharp::cli::{Cli, CliDispatcher};
use lcsharp::utils::error::UserError;
use lcsharp::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = CliDispatcher::execute(cli.command, &cli.global).await;

    if let Err(err) = result {
        let user_error = UserError::from_lc_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
