use std::path::PathBuf;

use clap::Parser;
use strman::cli::{Cli, Command};

#[test]
fn parses_resolve_with_named_args() {
    let cli = Cli::try_parse_from([
        "strman",
        "resolve",
        "testchamber.keyword",
        "--arg",
        "Subject=fox",
        "--arg",
        "object=dog",
        "--profile",
        "test",
    ])
    .expect("cli parse should work");

    assert_eq!(cli.profile.as_deref(), Some("test"));
    match cli.command {
        Command::Resolve(resolve) => {
            assert_eq!(resolve.tag, "testchamber.keyword");
            assert_eq!(resolve.named, ["Subject=fox", "object=dog"]);
            assert!(resolve.values.is_empty());
        }
        _ => panic!("expected resolve command"),
    }
}

#[test]
fn parses_resolve_positional_values() {
    let cli = Cli::try_parse_from(["strman", "resolve", "testchamber.positional", "a", "b"])
        .expect("cli parse should work");

    match cli.command {
        Command::Resolve(resolve) => {
            assert_eq!(resolve.tag, "testchamber.positional");
            assert_eq!(resolve.values, ["a", "b"]);
        }
        _ => panic!("expected resolve command"),
    }
}

#[test]
fn parses_resolve_profile_file_override() {
    let cli = Cli::try_parse_from([
        "strman",
        "resolve",
        "test.dirname",
        "--profile-file",
        "/tmp/profiles/other.yaml",
    ])
    .expect("cli parse should work");

    match cli.command {
        Command::Resolve(resolve) => {
            assert_eq!(
                resolve.profile_file,
                Some(PathBuf::from("/tmp/profiles/other.yaml"))
            );
        }
        _ => panic!("expected resolve command"),
    }
}

#[test]
fn parses_check_with_name() {
    let cli = Cli::try_parse_from(["strman", "check", "other"]).expect("cli parse should work");

    match cli.command {
        Command::Check(check) => assert_eq!(check.name.as_deref(), Some("other")),
        _ => panic!("expected check command"),
    }
}

#[test]
fn parses_profiles_with_global_flags() {
    let cli = Cli::try_parse_from(["strman", "--respath", "/tmp/res", "--json", "profiles"])
        .expect("cli parse should work");

    assert_eq!(cli.respath, Some(PathBuf::from("/tmp/res")));
    assert!(cli.json);
    assert!(matches!(cli.command, Command::Profiles));
}

#[test]
fn parses_verbose_count() {
    let cli = Cli::try_parse_from(["strman", "-vv", "profiles"]).expect("cli parse should work");
    assert_eq!(cli.verbose, 2);
}
