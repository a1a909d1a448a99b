/*
 * ==========================================================================
 * SCOPE - Everything Is A Block
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  `scopelang` command-line front end.
 *
 *   scopelang tokens  <FILE | -e SRC>
 *   scopelang parse   <FILE | -e SRC> [--format tree|json|debug]
 *   scopelang check   <FILE>...
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the SCOPE programming language project.
 *
 * SCOPE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use scopelang::diagnostics::DiagnosticPrinter;
use scopelang::{parse_source, tokenize_with, Config, FrontendError, TreeNode, UnmatchedInput};

#[derive(Parser, Debug)]
#[command(name = "scopelang")]
#[command(version, about = "Tokenize and parse SCOPE source")]
struct Cli {
    /// Raise verbosity (-v phases, -vv tokens and nodes, -vvv whitespace and comments)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Skip characters that match no token instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    /// Load settings from a JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token stream
    Tokens(Input),

    /// Print the parsed AST forest
    Parse {
        #[command(flatten)]
        input: Input,

        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,
    },

    /// Parse each file and report ok / error
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Source file
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Source text given inline
    #[arg(short, long, value_name = "SRC")]
    eval: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Indented tagged tree
    Tree,
    /// Typed AST as JSON
    Json,
    /// Rust debug output
    Debug,
}

/// Source text plus the name shown in diagnostics.
struct Source {
    name: String,
    text: String,
}

impl Input {
    fn load(&self) -> Result<Source, String> {
        match (&self.eval, &self.file) {
            (Some(text), _) => Ok(Source {
                name: "<eval>".to_string(),
                text: text.clone(),
            }),
            (None, Some(path)) => read_source(path),
            (None, None) => Err("no input given".to_string()),
        }
    }
}

fn read_source(path: &PathBuf) -> Result<Source, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("could not read {}: {}", path.display(), err))?;
    Ok(Source {
        name: path.display().to_string(),
        text,
    })
}

/// Library logs stay off unless the effective verbosity (`-v` or the
/// config file) or `RUST_LOG` asks for them; errors reach the user through
/// `DiagnosticPrinter` instead.
fn init_tracing(verbosity: u8) {
    let default = if verbosity > 0 {
        "scopelang=debug"
    } else {
        "scopelang=off"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => Config::from_path(path).map_err(|err| format!("{}: {}", path.display(), err))?,
        None => Config::default(),
    };

    if cli.verbose > 0 {
        config = config.with_verbosity(cli.verbose);
    }
    if cli.lenient {
        config = config.with_unmatched(UnmatchedInput::Skip);
    }
    Ok(config)
}

fn report(source: &Source, err: &FrontendError) {
    DiagnosticPrinter::new(source.name.as_str(), source.text.as_str()).print(err);
}

fn run_tokens(input: &Input, config: &Config) -> Result<ExitCode, String> {
    let source = input.load()?;

    match tokenize_with(&source.text, config) {
        Ok(tokens) => {
            for token in tokens {
                let kind = format!("{:?}", token.kind);
                println!("{:<16} '{}' @{}", kind, token.lexeme, token.span);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report(&source, &err.into());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_parse(input: &Input, format: Format, config: &Config) -> Result<ExitCode, String> {
    let source = input.load()?;

    let forest = match parse_source(&source.text, config) {
        Ok(forest) => forest,
        Err(err) => {
            report(&source, &err);
            return Ok(ExitCode::FAILURE);
        }
    };

    match format {
        Format::Tree => {
            for tree in TreeNode::forest(&forest) {
                print!("{}", tree);
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&forest).map_err(|err| err.to_string())?;
            println!("{}", json);
        }
        Format::Debug => println!("{:#?}", forest),
    }

    Ok(ExitCode::SUCCESS)
}

/// Unreadable files count as failures; the rest of the batch still runs.
fn run_check(files: &[PathBuf], config: &Config) -> Result<ExitCode, String> {
    let mut failed = 0usize;

    for path in files {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(message) => {
                failed += 1;
                println!("{}: error", path.display());
                eprintln!("error: {}", message);
                continue;
            }
        };

        match parse_source(&source.text, config) {
            Ok(_) => println!("{}: ok", source.name),
            Err(err) => {
                failed += 1;
                println!("{}: error", source.name);
                report(&source, &err);
            }
        }
    }

    println!("{} checked, {} failed", files.len(), failed);
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            return ExitCode::from(2);
        }
    };
    init_tracing(config.verbosity);

    let outcome = match &cli.command {
        Command::Tokens(input) => run_tokens(input, &config),
        Command::Parse { input, format } => run_parse(input, *format, &config),
        Command::Check { files } => run_check(files, &config),
    };

    outcome.unwrap_or_else(|message| {
        eprintln!("error: {}", message);
        ExitCode::from(2)
    })
}
