// tests/cli_args.rs

use std::path::PathBuf;

use clap::Parser;
use procargs::cli::CliArgs;
use procargs::config::default_config_path;
use procargs::types::ProcessArgumentQuoting;

#[test]
fn config_defaults_to_the_standard_file_name() {
    let args = CliArgs::try_parse_from(["procargs"]).unwrap();
    assert_eq!(args.config, default_config_path());
    assert_eq!(args.config, PathBuf::from("Procargs.toml"));
    assert!(args.tools.is_empty());
    assert!(args.quoting.is_none());
    assert!(!args.dry_run);
}

#[test]
fn flags_override_the_defaults() {
    let args = CliArgs::try_parse_from([
        "procargs",
        "--config",
        "ci/tools.toml",
        "--tool",
        "restore",
        "--tool",
        "push",
        "--quoting",
        "always",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.config, PathBuf::from("ci/tools.toml"));
    assert_eq!(args.tools, vec!["restore", "push"]);
    assert_eq!(args.quoting, Some(ProcessArgumentQuoting::Always));
    assert!(args.dry_run);
}
