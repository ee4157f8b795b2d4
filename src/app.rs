use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        respath,
        profile,
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(respath, profile, json)?;

    match command {
        Command::Resolve(args) => commands::resolve::run(&ctx, args),
        Command::Check(args) => commands::check::run(&ctx, args),
        Command::Profiles => commands::profiles::run(&ctx),
    }
}
