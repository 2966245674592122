use clap::Parser;
use std::{fmt::Write, path::PathBuf};
use urlencode::{parse_kind, Kind};

/// Encodes/decodes the input value for HTTP URLs.
///
/// Reads from the given file, or from STDIN when none is given, and prints
/// the encoded/decoded value to STDOUT.
#[derive(Debug, Parser)]
#[command(name = "urlencode", version, after_help = kinds_help())]
pub struct Args {
    /// Encode/decode format
    #[arg(
        short,
        long,
        value_name = "KIND",
        default_value = "path-segment",
        env = "URLENCODE_ENCODING",
        value_parser = parse_kind
    )]
    pub encoding: Kind,

    /// Decodes, instead of encodes
    #[arg(short, long)]
    pub decode: bool,

    /// Use all input at once, instead of line-by-line
    #[arg(short, long)]
    pub all: bool,

    /// Input file
    pub file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Every line is a value of its own.
    Lines,
    /// The whole input is a single value.
    All,
}

/// Everything a run needs to know, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub kind: Kind,
    pub direction: Direction,
    pub mode: Mode,
    pub input: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            kind: args.encoding,
            direction: if args.decode {
                Direction::Decode
            } else {
                Direction::Encode
            },
            mode: if args.all { Mode::All } else { Mode::Lines },
            input: args.file,
        }
    }
}

/// Lists every kind with a sample URL in which its component is marked.
pub fn kinds_help() -> String {
    let mut out = String::from("Valid encodings, and their intended usages:\n");

    let mut uris: Vec<&str> = Vec::new();
    for kind in Kind::ALL {
        if !uris.contains(&kind.example().uri) {
            uris.push(kind.example().uri);
        }
    }

    for (i, uri) in uris.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{:25}{uri}", "");

        for kind in Kind::ALL.into_iter().filter(|k| k.example().uri == uri) {
            let example = kind.example();
            let span = example.span();
            let flags = format!("-e {}, -e {}", kind.alias(), kind.name());
            let _ = writeln!(
                out,
                "  {flags:23}{}{}{}  {}",
                "-".repeat(span.start),
                example.component,
                "-".repeat(uri.len() - span.end),
                kind.description()
            );
        }
    }
    out
}
