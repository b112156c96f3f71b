mod cli;
mod infra;
mod report;
mod routes;
mod server;

use paint_office::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
