mod cli;
mod demo;
mod infra;
mod report;

use supplier_radar::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
