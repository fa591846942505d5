use std::{io, process::ExitCode};

use clap::Parser;
use deploy_scripts::{cli::Cli, commands::deploy_contract, report::report};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, leaving stdout to the deployment report
    tracing_subscriber::fmt().pretty().with_writer(io::stderr).init();

    let res = deploy_contract(&cli).await;
    let code = report(&cli.contract, &res, &mut io::stdout(), &mut io::stderr());

    ExitCode::from(code)
}
