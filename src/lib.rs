pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod profile;
pub mod render;
pub mod resolver;
pub mod tag;

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
