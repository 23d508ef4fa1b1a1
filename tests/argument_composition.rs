// tests/argument_composition.rs

use procargs::args::{
    Argument, REDACTED_MARKER, SecretArgument, StandardRenderer, SwitchArgument, TextArgument,
};
use procargs::errors::ProcArgsError;
use procargs::types::ProcessArgumentQuoting;

#[test]
fn text_argument_renders_the_same_safe_and_unsafe() {
    let arg = TextArgument::new("hello world");
    assert_eq!(arg.render().unwrap(), "\"hello world\"");
    assert_eq!(arg.render_safe().unwrap(), "\"hello world\"");
}

#[test]
fn raw_text_is_never_quoted() {
    let arg = TextArgument::raw("a \"b\" c\\");
    assert_eq!(arg.render().unwrap(), "a \"b\" c\\");

    // An empty raw token stays empty.
    assert_eq!(TextArgument::raw("").render().unwrap(), "");
}

#[test]
fn text_with_explicit_renderer_uses_it() {
    let arg = TextArgument::with_renderer(
        "123",
        StandardRenderer::new(ProcessArgumentQuoting::Always).shared(),
    );
    assert_eq!(arg.render().unwrap(), "\"123\"");
    assert_eq!(arg.text(), "123");
}

#[test]
fn switch_joins_name_separator_and_value() {
    let arg = SwitchArgument::new("--output", TextArgument::new("out dir"));
    assert_eq!(arg.render().unwrap(), "--output \"out dir\"");
    assert_eq!(arg.render_safe().unwrap(), "--output \"out dir\"");
    assert_eq!(arg.switch(), "--output");
    assert_eq!(arg.separator(), " ");

    let arg = SwitchArgument::with_separator("--source", "=", TextArgument::new("feed"));
    assert_eq!(arg.render().unwrap(), "--source=feed");
}

#[test]
fn secret_renders_value_for_execution_and_marker_for_logs() {
    let arg = SecretArgument::new(TextArgument::new("hunter2"));
    assert_eq!(arg.render().unwrap(), "hunter2");
    assert_eq!(arg.render_safe(), REDACTED_MARKER);
}

#[test]
fn switch_over_secret_keeps_the_switch_visible() {
    let arg = Argument::switch("-p", Argument::secret(TextArgument::new("pass word")));
    assert_eq!(arg.render().unwrap(), "-p \"pass word\"");
    assert_eq!(arg.render_safe().unwrap(), format!("-p {REDACTED_MARKER}"));
}

#[test]
fn secret_over_switch_hides_the_whole_switch() {
    let arg = Argument::secret(Argument::switch("--token", TextArgument::new("abc")));
    assert_eq!(arg.render().unwrap(), "--token abc");
    assert_eq!(arg.render_safe().unwrap(), REDACTED_MARKER);
}

#[test]
fn deeply_nested_secret_never_leaks() {
    let inner = Argument::secret(TextArgument::new("topsecret"));
    let arg = Argument::switch(
        "--outer",
        Argument::switch("--middle", Argument::switch("--inner", inner)),
    );

    let rendered = arg.render().unwrap();
    let safe = arg.render_safe().unwrap();

    assert_eq!(rendered, "--outer --middle --inner topsecret");
    assert!(!safe.contains("topsecret"), "{safe}");
    assert_eq!(safe, format!("--outer --middle --inner {REDACTED_MARKER}"));
}

#[test]
fn redaction_marker_does_not_depend_on_the_secret() {
    let short = SecretArgument::new(TextArgument::new("a"));
    let long = SecretArgument::new(TextArgument::new("a".repeat(200)));
    assert_eq!(short.render_safe(), long.render_safe());
}

#[test]
fn safe_rendering_of_a_secret_never_invokes_its_renderer() {
    // The inner value would violate the policy; logging it must still work.
    let inner = TextArgument::with_renderer(
        "has space",
        StandardRenderer::new(ProcessArgumentQuoting::NeverAndThrow).shared(),
    );
    let arg = SecretArgument::new(inner);

    assert_eq!(arg.render_safe(), REDACTED_MARKER);
    assert!(matches!(
        arg.render(),
        Err(ProcArgsError::InvalidUnquotedArgument(_))
    ));
}

#[test]
fn display_writes_the_safe_rendering() {
    let arg = Argument::switch("--key", Argument::secret(TextArgument::new("xyz")));
    assert_eq!(arg.to_string(), format!("--key {REDACTED_MARKER}"));
}

#[test]
fn debug_output_does_not_contain_secrets() {
    let arg = Argument::switch("--key", Argument::secret(TextArgument::new("xyz-secret")));
    let debug = format!("{:?}", arg);
    assert!(!debug.contains("xyz-secret"), "{debug}");
    assert!(debug.contains(REDACTED_MARKER), "{debug}");
}

#[test]
fn display_marks_arguments_that_cannot_render() {
    let arg: Argument = TextArgument::with_renderer(
        "",
        StandardRenderer::new(ProcessArgumentQuoting::NeverAndThrow).shared(),
    )
    .into();
    assert_eq!(arg.to_string(), "<invalid argument>");
}

#[test]
fn switch_propagates_inner_render_errors() {
    let inner = TextArgument::with_renderer(
        "a b",
        StandardRenderer::new(ProcessArgumentQuoting::NeverAndThrow).shared(),
    );
    let arg = SwitchArgument::new("-x", inner);
    assert!(arg.render().is_err());
    assert!(arg.render_safe().is_err());
}

#[test]
fn raw_constructor_on_argument() {
    assert_eq!(Argument::raw("a b").render().unwrap(), "a b");
    assert_eq!(Argument::text("a b").render().unwrap(), "\"a b\"");
}
