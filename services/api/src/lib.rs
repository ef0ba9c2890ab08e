mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use referral_pipeline::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
