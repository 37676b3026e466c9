use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use itemql::cli::handlers::{handle_list, handle_mutate, handle_query, handle_schema, handle_serve};
use itemql::cli::{Cli, Commands};
use itemql::logging;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    match cli.command {
        Commands::Serve { addr, store_uri } => handle_serve(addr, store_uri)?,
        Commands::List { endpoint } => return handle_list(endpoint),
        Commands::Query {
            query,
            variables,
            store_uri,
        } => handle_query(query, variables, store_uri)?,
        Commands::Mutate {
            mutation,
            variables,
            store_uri,
        } => handle_mutate(mutation, variables, store_uri)?,
        Commands::Schema => handle_schema(),
    }

    Ok(ExitCode::SUCCESS)
}
