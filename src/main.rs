use std::io::{self, BufRead, Write};

use calcyard::Evaluator;
use clap::Parser;

/// calcyard is an easy to use console calculator with variables, functions
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// An expression to evaluate in one shot. Without it, calcyard starts an
    /// interactive session.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut evaluator = Evaluator::new();

    if let Some(expression) = args.expression {
        match evaluator.eval(&expression) {
            Ok(result) => println!("{} = {}", result.binding, result.value),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    repl(&mut evaluator);
}

/// Runs the interactive session, one expression per line.
///
/// Lines starting with `:` are session commands: `:vars` lists the current
/// bindings, `:clear [name ...]` removes the named bindings (all of them
/// when no name is given), and `:quit` ends the session. Blank lines are
/// ignored, and a failing expression prints its error without ending the
/// session.
fn repl(evaluator: &mut Evaluator) {
    let stdin = io::stdin();

    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();

        if line.is_empty() {
            prompt();
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            if !run_command(command, evaluator) {
                break;
            }
            prompt();
            continue;
        }

        match evaluator.eval(line) {
            Ok(result) => println!("{} = {}", result.binding, result.value),
            Err(e) => eprintln!("{e}"),
        }
        prompt();
    }
}

/// Executes a session command. Returns `false` when the session should end.
fn run_command(command: &str, evaluator: &mut Evaluator) -> bool {
    let mut words = command.split_whitespace();

    match words.next() {
        Some("vars") => {
            for (name, value) in evaluator.bindings() {
                println!("{name} = {value}");
            }
        },
        Some("clear") => {
            let names: Vec<&str> = words.collect();
            if names.is_empty() {
                evaluator.clear_bindings();
            } else {
                evaluator.remove_bindings(&names);
            }
        },
        Some("quit" | "q") => return false,
        Some(other) => eprintln!("Unknown command ':{other}'. Try :vars, :clear or :quit."),
        None => eprintln!("Missing command. Try :vars, :clear or :quit."),
    }

    true
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
