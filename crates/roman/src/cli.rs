use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "roman",
    version,
    about = "Convert integers to Roman numerals and back"
)]
pub struct Cli {
    /// Print one JSON object per input instead of plain values
    #[arg(long, global = true, env = "ROMAN_JSON", value_parser = BoolishValueParser::new())]
    pub json: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode integers in 1..=3999 as Roman numerals
    Encode(EncodeArgs),
    /// Decode Roman numerals (or 0r literals) to integers
    Decode(DecodeArgs),
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Integers to encode
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Print numerals in lower case
    #[arg(long, env = "ROMAN_LOWERCASE", value_parser = BoolishValueParser::new())]
    pub lowercase: bool,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Numerals to decode
    #[arg(required = true, allow_hyphen_values = true)]
    pub numerals: Vec<String>,

    /// Parse signed 0r literals such as `-0rXIV` instead of bare numerals
    #[arg(long, env = "ROMAN_LITERAL", value_parser = BoolishValueParser::new())]
    pub literal: bool,
}
