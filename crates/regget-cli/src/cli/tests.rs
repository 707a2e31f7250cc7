//! CLI parse tests.

use super::Cli;
use clap::Parser;

#[test]
fn url_argument_is_captured() {
    let cli = Cli::try_parse_from(["regget", "http://example.com/app/en.html"]).unwrap();
    assert_eq!(cli.url.as_deref(), Some("http://example.com/app/en.html"));
}

#[test]
fn url_argument_is_optional() {
    let cli = Cli::try_parse_from(["regget"]).unwrap();
    assert!(cli.url.is_none());
}

#[test]
fn extra_positional_arguments_are_rejected() {
    assert!(Cli::try_parse_from(["regget", "http://a/x.html", "http://b/y.html"]).is_err());
}
