//! Environment fallbacks for the command line flags.
//!
//! Kept in its own test binary: the process environment is shared by every
//! test in a binary.

use clap::Parser;
use roman::cli::{Cli, Command};

#[test]
fn env_flags_parse_boolish_values() {
    std::env::set_var("ROMAN_JSON", "1");
    std::env::set_var("ROMAN_LITERAL", "yes");
    std::env::set_var("ROMAN_LOWERCASE", "off");

    let cli = Cli::try_parse_from(["roman", "decode", "0rXIV"]).unwrap();
    assert!(cli.json);
    match &cli.cmd {
        Command::Decode(args) => assert!(args.literal),
        other => panic!("expected decode, got {other:?}"),
    }

    let cli = Cli::try_parse_from(["roman", "encode", "14"]).unwrap();
    match &cli.cmd {
        Command::Encode(args) => assert!(!args.lowercase),
        other => panic!("expected encode, got {other:?}"),
    }

    std::env::set_var("ROMAN_JSON", "0");
    let cli = Cli::try_parse_from(["roman", "encode", "14"]).unwrap();
    assert!(!cli.json);

    std::env::remove_var("ROMAN_JSON");
    std::env::remove_var("ROMAN_LITERAL");
    std::env::remove_var("ROMAN_LOWERCASE");
}
