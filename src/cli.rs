use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "strman", version, about = "Profile-backed string tag resolver")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Resource directory searched for profile files"
    )]
    pub respath: Option<PathBuf>,
    #[arg(long, global = true, help = "Default profile name")]
    pub profile: Option<String>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Resolve(ResolveArgs),
    Check(CheckArgs),
    Profiles,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(help = "Dotted tag to resolve, e.g. greetings.morning")]
    pub tag: String,
    #[arg(help = "Positional substitution values")]
    pub values: Vec<String>,
    #[arg(
        long = "arg",
        value_name = "KEY=VALUE",
        help = "Named substitution value"
    )]
    pub named: Vec<String>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Resolve against this profile file or directory instead of the configured profile"
    )]
    pub profile_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(help = "Profile name to check (defaults to the configured profile)")]
    pub name: Option<String>,
}
