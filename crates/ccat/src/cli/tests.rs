use ccat_highlight::{Kind, StyleConfig};
use clap::error::ErrorKind;
use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("ccat").chain(args.iter().copied()))
}

fn options(args: &[&str]) -> Options {
    parse(args).unwrap().into_options().unwrap()
}

#[test]
fn defaults_read_stdin_with_light_palette() {
    let opts = options(&[]);
    assert_eq!(opts.files, vec![PathBuf::from("-")]);
    assert_eq!(opts.palette, StyleConfig::light());
    assert_eq!(opts.color, ColorMode::Auto);
    assert_eq!(opts.output, OutputMode::Ansi);
    assert_eq!(opts.max_size, None);
}

#[test]
fn files_keep_their_order() {
    let opts = options(&["b.go", "-", "a.rb"]);
    assert_eq!(
        opts.files,
        vec![PathBuf::from("b.go"), PathBuf::from("-"), PathBuf::from("a.rb")]
    );
}

#[test]
fn dark_background() {
    assert_eq!(options(&["--bg", "dark"]).palette, StyleConfig::dark());
    assert!(parse(&["--bg", "purple"]).is_err());
}

#[test]
fn color_codes_override_palette() {
    let opts = options(&["--bg", "dark", "-G", "String=*red*", "--color-code", "Decimal=_blue_"]);
    assert_eq!(opts.palette.style(Kind::String), "*red*");
    assert_eq!(opts.palette.style(Kind::Decimal), "_blue_");
    assert_eq!(opts.palette.style(Kind::Keyword), "blue");
}

#[test]
fn color_code_value_may_contain_equals() {
    let opts = options(&["-G", "Comment=a=b"]);
    assert_eq!(opts.palette.style(Kind::Comment), "a=b");
}

#[test]
fn color_code_without_equals_is_a_usage_error() {
    let err = parse(&["-G", "String"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn unknown_color_code_kind_is_rejected() {
    let err = parse(&["-G", "Foo=red"]).unwrap().into_options().unwrap_err();
    assert!(matches!(err, CliError::BadColorCode { ref name } if name == "Foo"));
}

#[test]
fn output_modes() {
    assert_eq!(options(&["--html"]).output, OutputMode::Html);
    assert_eq!(options(&["--json"]).output, OutputMode::Json);
    assert!(parse(&["--html", "--json"]).is_err());
}

#[test]
fn color_and_size_flags() {
    let opts = options(&["--color", "never", "--max-size", "1024"]);
    assert_eq!(opts.color, ColorMode::Never);
    assert_eq!(opts.max_size, Some(1024));
}

#[test]
fn short_v_prints_version() {
    let err = parse(&["-v"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn palette_flag() {
    assert!(parse(&["--palette"]).unwrap().palette);
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
