use strman::error::AppError;
use strman::render::{FormatArgs, format_str};

#[test]
fn substitutes_named_arguments() {
    let args = FormatArgs::new()
        .named("Subject", "The quick brown fox")
        .named("ACTION", "jumps over")
        .named("object", "the lazy dog");

    let out = format_str("{Subject} {ACTION} {object}.", &args).expect("format");
    assert_eq!(out, "The quick brown fox jumps over the lazy dog.");
}

#[test]
fn substitutes_automatic_positionals() {
    let args = FormatArgs::new()
        .arg("Prepare for")
        .arg("unforeseen")
        .arg("consequences");

    let out = format_str("{} {} {}.", &args).expect("format");
    assert_eq!(out, "Prepare for unforeseen consequences.");
}

#[test]
fn substitutes_indexed_positionals() {
    let args = FormatArgs::new().arg("can").arg("canner").arg("Can");

    let out = format_str("{2} you {0} a {0} as a {1} {0} {0} a {0}?", &args).expect("format");
    assert_eq!(out, "Can you can a can as a canner can can a can?");
}

#[test]
fn mixes_positional_and_named() {
    let args = FormatArgs::new().arg("positional").named("kw", "keyword");

    let out = format_str("{0} {kw}", &args).expect("format");
    assert_eq!(out, "positional keyword");
}

#[test]
fn automatic_counter_skips_indexed_placeholders() {
    let args = FormatArgs::new().arg("first").arg("second");

    let out = format_str("{1} {}", &args).expect("format");
    assert_eq!(out, "second first");
}

#[test]
fn renders_escaped_braces() {
    let out = format_str("{{not a placeholder}}", &FormatArgs::new()).expect("format");
    assert_eq!(out, "{not a placeholder}");
}

#[test]
fn surplus_arguments_are_ignored() {
    let args = FormatArgs::new().arg("used").arg("unused").named("extra", "unused");

    let out = format_str("{0}", &args).expect("format");
    assert_eq!(out, "used");
}

#[test]
fn numeric_arguments_render_canonically() {
    let args = FormatArgs::new().arg(42).named("flag", true);

    let out = format_str("{0} {flag}", &args).expect("format");
    assert_eq!(out, "42 true");
}

#[test]
fn missing_named_argument_is_an_error() {
    let err = format_str("{kw}", &FormatArgs::new()).expect_err("must fail");
    assert!(matches!(err, AppError::Substitution(_)));
}

#[test]
fn missing_positional_argument_is_an_error() {
    let err = format_str("{} {}", &FormatArgs::new().arg("only")).expect_err("must fail");
    assert!(matches!(err, AppError::Substitution(_)));
}

#[test]
fn unclosed_placeholder_is_an_error() {
    let err = format_str("{open", &FormatArgs::new()).expect_err("must fail");
    assert!(matches!(err, AppError::Substitution(_)));
}

#[test]
fn stray_closing_brace_is_an_error() {
    let err = format_str("oops}", &FormatArgs::new()).expect_err("must fail");
    assert!(matches!(err, AppError::Substitution(_)));
}

#[test]
fn format_specs_are_rejected() {
    let args = FormatArgs::new().named("value", 6.3505);

    let err = format_str("{value:.2}", &args).expect_err("must fail");
    assert!(matches!(err, AppError::Substitution(_)));
}
