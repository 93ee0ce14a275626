use std::{fs, io::Read, path::PathBuf, process::ExitCode};

use clap::Parser;

use calc_front::{
    lexer::lexer::{tokenize, Lexer},
    parser::parser::parse,
};

/// Syntax checker for the calc language.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Source file to check; reads standard input when omitted
    file: Option<PathBuf>,

    /// Echo the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = match read_source(args.file.as_deref()) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read input: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if args.tokens {
        for token in tokenize(&source) {
            println!("{}", token);
        }
    }

    match parse(Lexer::new(&source)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn read_source(file: Option<&std::path::Path>) -> std::io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
