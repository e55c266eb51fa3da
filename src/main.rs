// cosmos-crud - Single-record CRUD CLI for Azure Cosmos DB
// Copyright (c) 2025 cosmos-crud Contributors
// Licensed under the MIT License

use cosmos_crud::cli::commands::run;
use cosmos_crud::cli::Cli;
use cosmos_crud::logging::{init_logging, report_failure};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_normalized(std::env::args_os());

    if let Err(e) = init_logging(&cli.logging_config()) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(e.exit_code());
    }

    let exit_code = match run(&cli).await {
        Ok(Some(output)) => {
            println!("{output}");
            0
        }
        Ok(None) => 0,
        Err(e) => report_failure(&e, "run"),
    };

    process::exit(exit_code);
}
