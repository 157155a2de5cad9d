mod command;
mod error;
mod session;

use clap::Parser;
use env_logger::Env;
use exprtree_compute::Bindings;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};

/// Evaluate, simplify and differentiate mathematical expressions.
///
/// Each line of input is one of:
///
///   name = <expr>       bind the value of <expr> to a variable
///   :d <var> <expr>     print the derivative of <expr> with respect to <var>
///   :s <expr>           print <expr> with its constant parts folded
///   :latex <expr>       print <expr> as LaTeX
///   <expr>              evaluate <expr>
#[derive(Parser, Debug)]
#[command(name = "exprtree", version, verbatim_doc_comment)]
struct Cli {
    /// File to run line by line. Input is read from stdin when omitted.
    file: Option<PathBuf>,

    /// Bind a variable before running, as `name=value`. May be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,
}

/// Parses a `name=value` pair given on the command line.
fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, got `{}`", arg))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid value for `{}`: {}", name.trim(), err))?;
    Ok((name.trim().to_string(), value))
}

/// Runs a line and prints the result or the error. Returns false if the line failed.
fn run_line(session: &mut Session, line: &str) -> bool {
    if line.trim().is_empty() {
        return true;
    }

    match session.run(line) {
        Ok(output) => {
            println!("{}", output);
            true
        },
        Err(err) => {
            err.report_to_stderr();
            false
        },
    }
}

/// Runs every line of the input, continuing past failed lines.
fn run_batch(session: &mut Session, input: &str) -> ExitCode {
    let mut ok = true;
    for line in input.lines() {
        ok &= run_line(session, line);
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Runs the interactive loop until end of input.
fn run_interactive(session: &mut Session) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("error: could not start the line editor: {}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        run_line(session, &input);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, session) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut session = Session::new(cli.vars.into_iter().collect::<Bindings>());

    if let Some(path) = cli.file {
        // run source file
        match fs::read_to_string(&path) {
            Ok(input) => run_batch(&mut session, &input),
            Err(err) => {
                eprintln!("error: could not read `{}`: {}", path.display(), err);
                ExitCode::FAILURE
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("error: could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }
        run_batch(&mut session, &input)
    } else {
        // run the repl / interactive mode
        run_interactive(&mut session)
    }
}
