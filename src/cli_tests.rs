use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_without_paths_discovers() {
    let cli = Cli::parse_from(["style-grade", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.paths.is_empty());
            assert!(!args.no_template);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths() {
    let cli = Cli::parse_from(["style-grade", "check", "subs/alice", "subs/bob"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.paths,
                vec![PathBuf::from("subs/alice"), PathBuf::from("subs/bob")]
            );
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_reports() {
    let cli = Cli::parse_from([
        "style-grade",
        "check",
        "-c",
        "course.toml",
        "--csv",
        "scores.csv",
        "--json",
        "report.json",
        "--no-template",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.config, Some(PathBuf::from("course.toml")));
            assert_eq!(args.csv, Some(PathBuf::from("scores.csv")));
            assert_eq!(args.json, Some(PathBuf::from("report.json")));
            assert!(args.no_template);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["style-grade", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".style-grade.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_init_with_output_and_force() {
    let cli = Cli::parse_from(["style-grade", "init", "-o", "grading.toml", "--force"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from("grading.toml"));
            assert!(args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_catalog() {
    let cli = Cli::parse_from(["style-grade", "catalog"]);
    assert!(matches!(cli.command, Commands::Catalog));
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["style-grade", "-vv", "--quiet", "--color", "never", "catalog"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["style-grade", "check", "-v", "--color", "always"]);
    assert_eq!(cli.verbose, 1);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Always);
}

#[test]
fn cli_rejects_unknown_color() {
    assert!(Cli::try_parse_from(["style-grade", "--color", "sometimes", "catalog"]).is_err());
}
