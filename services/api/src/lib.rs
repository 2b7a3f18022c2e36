mod cli;
mod commands;
mod history;
mod infra;
mod routes;
mod server;
mod service;

use bridge17::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
