// tests/config_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;

use procargs::args::REDACTED_MARKER;
use procargs::config::{load_and_validate, load_from_str};
use procargs::errors::ProcArgsError;
use procargs::types::ProcessArgumentQuoting;
use procargs_test_utils::builders::{ArgumentSpecBuilder, ConfigFileBuilder, ToolConfigBuilder};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn loads_tools_and_renders_their_arguments() {
    let file = write_config(
        r#"
[render]
quoting = "auto"

[tool.push]
program = "nuget"
args = [
  { value = "push" },
  { value = "My Package.nupkg" },
  { switch = "-ApiKey", value = "s3cr3t", secret = true },
  { switch = "--source", separator = "=", value = "https://example/feed" },
  { value = "-NonInteractive", raw = true },
  { value = "out\\", quoting = "always" },
]
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.render.quoting, ProcessArgumentQuoting::Auto);

    let tool = &cfg.tool["push"];
    assert_eq!(tool.program, "nuget");

    let builder = tool.to_builder(&cfg.render);
    assert_eq!(
        builder.render().unwrap(),
        "push \"My Package.nupkg\" -ApiKey s3cr3t --source=https://example/feed -NonInteractive \"out\\\\\""
    );
    assert_eq!(
        builder.render_safe().unwrap(),
        format!(
            "push \"My Package.nupkg\" -ApiKey {REDACTED_MARKER} --source=https://example/feed -NonInteractive \"out\\\\\""
        )
    );
}

#[test]
fn render_section_sets_the_default_policy() {
    let raw = load_from_str(
        r#"
[render]
quoting = "always"

[tool.echo]
program = "echo"
args = [{ value = "a" }, { value = "b", quoting = "auto" }]
"#,
    )
    .unwrap();
    let cfg = procargs::config::ConfigFile::try_from(raw).unwrap();

    let builder = cfg.tool["echo"].to_builder(&cfg.render);
    assert_eq!(builder.render().unwrap(), "\"a\" b");
}

#[test]
fn never_policy_is_accepted_under_both_names() {
    for name in ["never", "never_and_throw"] {
        let raw = load_from_str(&format!(
            "[render]\nquoting = \"{name}\"\n[tool.t]\nprogram = \"t\"\n"
        ))
        .unwrap();
        assert_eq!(raw.render.quoting, ProcessArgumentQuoting::NeverAndThrow);
    }
}

#[test]
fn unknown_policy_is_a_toml_error() {
    let result = load_from_str("[render]\nquoting = \"sometimes\"\n[tool.t]\nprogram = \"t\"\n");
    assert!(matches!(result, Err(ProcArgsError::TomlError(_))));
}

#[test]
fn quoting_parses_from_cli_strings() {
    assert_eq!("Auto".parse(), Ok(ProcessArgumentQuoting::Auto));
    assert_eq!(" always ".parse(), Ok(ProcessArgumentQuoting::Always));
    assert_eq!("never".parse(), Ok(ProcessArgumentQuoting::NeverAndThrow));
    assert!("bogus".parse::<ProcessArgumentQuoting>().is_err());
    assert_eq!(ProcessArgumentQuoting::NeverAndThrow.to_string(), "never");
}

#[test]
fn config_without_tools_is_rejected() {
    let file = write_config("[render]\nquoting = \"auto\"\n");
    match load_and_validate(file.path()) {
        Err(ProcArgsError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        other => panic!("expected ConfigError, got {:?}", other),
    }
}

#[test]
fn blank_program_is_rejected() {
    let raw = ConfigFileBuilder::new()
        .with_tool("bad", ToolConfigBuilder::new("  ").build())
        .build_raw();
    match procargs::config::ConfigFile::try_from(raw) {
        Err(ProcArgsError::ConfigError(msg)) => {
            assert!(msg.contains("bad"));
            assert!(msg.contains("program"));
        }
        other => panic!("expected ConfigError, got {:?}", other),
    }
}

#[test]
fn incompatible_argument_keys_are_rejected() {
    let cases = [
        (ArgumentSpecBuilder::value("x").separator("=").build(), "separator"),
        (
            ArgumentSpecBuilder::value("x")
                .raw()
                .quoting(ProcessArgumentQuoting::Always)
                .build(),
            "raw",
        ),
        (ArgumentSpecBuilder::empty().build(), "expected"),
    ];

    for (spec, needle) in cases {
        let raw = ConfigFileBuilder::new()
            .with_tool("t", ToolConfigBuilder::new("t").value("ok").arg(spec).build())
            .build_raw();
        match procargs::config::ConfigFile::try_from(raw) {
            Err(ProcArgsError::ConfigError(msg)) => {
                assert!(msg.contains("argument #1"), "{msg}");
                assert!(msg.contains(needle), "{msg}");
            }
            other => panic!("expected ConfigError containing {needle:?}, got {:?}", other),
        }
    }
}

#[test]
fn switch_without_value_renders_an_empty_argument() {
    let cfg = ConfigFileBuilder::new()
        .with_tool(
            "t",
            ToolConfigBuilder::new("t")
                .arg(ArgumentSpecBuilder::empty().switch("--name").build())
                .build(),
        )
        .build();
    let builder = cfg.tool["t"].to_builder(&cfg.render);
    assert_eq!(builder.render().unwrap(), "--name \"\"");
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ProcArgsError::IoError(_))));
}
