//! Token dump CLI.
//!
//! Prints one token per line as `start-end KIND text`, where `start` and
//! `end` are `line:column` locations.

use std::io::Read;

use strscan::LineColumn;
use strscan_tok::{init_tracing, TokenRules, Tokenizer};

const USAGE: &str = "Usage: strscan-tok <file|-> [--spaces] [--one-based]";

struct Options {
    path: String,
    spaces: bool,
    one_based: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut path = None;
    let mut spaces = false;
    let mut one_based = false;

    for arg in args {
        match arg.as_str() {
            "--spaces" | "-s" => spaces = true,
            "--one-based" | "-1" => one_based = true,
            "-" => path = Some(arg.clone()),
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            _ if path.is_none() => path = Some(arg.clone()),
            _ => return Err(format!("unexpected argument '{arg}'")),
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(Options {
        path,
        spaces,
        one_based,
    })
}

fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        return std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
            .map_err(|e| format!("error reading stdin: {e}"));
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

fn display(loc: LineColumn, one_based: bool) -> LineColumn {
    if one_based {
        LineColumn::new(loc.line + 1, loc.column + 1)
    } else {
        loc
    }
}

fn run(options: &Options) -> Result<(), String> {
    let source = read_source(&options.path)?;
    let rules = TokenRules::new().map_err(|e| e.to_string())?;
    let tokenizer = Tokenizer::new(source, &rules).keep_spaces(options.spaces);

    for token in tokenizer {
        let token = token.map_err(|e| e.to_string())?;
        println!(
            "{}-{} {} {:?}",
            display(token.start, options.one_based),
            display(token.end, options.one_based),
            token.kind,
            token.text
        );
    }
    Ok(())
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(msg) = run(&options) {
        eprintln!("error: {msg}");
        std::process::exit(1);
    }
}
