//! Conversion commands behind the `roman` binary.

use log::debug;
use roman_literal::{format_literal, parse_literal};
use roman_numerals::{parse_roman, to_roman};
use serde::Serialize;

use crate::cli::{Cli, Command, DecodeArgs, EncodeArgs};
use crate::exit_codes;

/// Outcome of converting one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Record {
    fn ok(input: &str, value: i32, numeral: String) -> Self {
        Self {
            input: input.to_string(),
            value: Some(value),
            numeral: Some(numeral),
            error: None,
        }
    }

    fn failed(input: &str, error: impl ToString) -> Self {
        Self {
            input: input.to_string(),
            value: None,
            numeral: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub fn encode_one(input: &str, lowercase: bool) -> Record {
    let n = match input.trim().parse::<i32>() {
        Ok(n) => n,
        Err(err) => return Record::failed(input, format!("invalid integer: {err}")),
    };
    match to_roman(n) {
        Ok(numeral) if lowercase => Record::ok(input, n, numeral.to_ascii_lowercase()),
        Ok(numeral) => Record::ok(input, n, numeral),
        Err(err) => Record::failed(input, err),
    }
}

pub fn decode_one(input: &str, literal: bool) -> Record {
    let text = input.trim();
    if literal {
        let decoded = parse_literal(text).and_then(|n| Ok((n, format_literal(n)?)));
        return match decoded {
            Ok((n, canonical)) => Record::ok(input, n, canonical),
            Err(err) => Record::failed(input, err),
        };
    }
    let decoded = parse_roman(text).and_then(|n| Ok((n, to_roman(n)?)));
    match decoded {
        Ok((n, canonical)) => Record::ok(input, n, canonical),
        Err(err) => Record::failed(input, err),
    }
}

pub fn encode(args: &EncodeArgs) -> Vec<Record> {
    args.numbers
        .iter()
        .map(|input| encode_one(input, args.lowercase))
        .collect()
}

pub fn decode(args: &DecodeArgs) -> Vec<Record> {
    args.numerals
        .iter()
        .map(|input| decode_one(input, args.literal))
        .collect()
}

/// Line printed on stdout for a record, or `None` for a failed plain record.
pub fn render(record: &Record, json: bool, cmd: &Command) -> Option<String> {
    if json {
        return match serde_json::to_string(record) {
            Ok(line) => Some(line),
            Err(err) => {
                debug!("failed to serialize record for {:?}: {}", record.input, err);
                None
            }
        };
    }
    match cmd {
        Command::Encode(_) => record.numeral.clone(),
        Command::Decode(_) => record.value.map(|n| n.to_string()),
    }
}

/// Runs the parsed command line, printing results, and returns the exit code.
pub fn dispatch(cli: &Cli) -> i32 {
    let records = match &cli.cmd {
        Command::Encode(args) => encode(args),
        Command::Decode(args) => decode(args),
    };

    let mut code = exit_codes::SUCCESS;
    for record in &records {
        if let Some(line) = render(record, cli.json, &cli.cmd) {
            println!("{line}");
        }
        if let Some(err) = &record.error {
            if !cli.json {
                eprintln!("roman: {}: {}", record.input, err);
            }
            code = exit_codes::CONVERSION_FAILED;
        }
    }
    code
}
