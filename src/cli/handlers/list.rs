use crate::client::ItemsClient;
use crate::view::{ViewState, render};
use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use url::Url;

pub fn handle_list(endpoint: Url) -> Result<ExitCode> {
    let client = ItemsClient::new(endpoint)?;

    eprintln!("{}", render(&ViewState::Loading).dimmed());
    let state = tokio::runtime::Runtime::new()?.block_on(client.fetch_view());

    match state {
        ViewState::Failed(_) => {
            println!("{}", render(&state).red());
            Ok(ExitCode::FAILURE)
        }
        _ => {
            print!("{}", render(&state));
            Ok(ExitCode::SUCCESS)
        }
    }
}
