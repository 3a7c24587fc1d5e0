//! REPL Module
//!
//! The interactive read-eval-print loop: prompt, tokenize, dispatch.

mod commands;
mod input;

pub use commands::App;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::error::Result;

const PROMPT: &str = "Pokedex > ";

// == Repl Flow ==
/// Whether the loop keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
enum ReplFlow {
    Continue,
    Exit,
}

// == Run ==
/// Runs the read loop until `exit`, Ctrl-C, or end of input.
///
/// Command failures (network errors, bad JSON) are printed and the session
/// continues; only a broken terminal ends the loop with an error.
pub async fn run(app: &mut App) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let words = input::tokenize(&line);
                if words.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match dispatch(app, &words).await {
                    Ok(ReplFlow::Continue) => {}
                    Ok(ReplFlow::Exit) => break,
                    Err(err) => println!("{err}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Closing the Pokedex... Goodbye!");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

// == Dispatch ==
/// Routes one tokenized line to its command handler.
async fn dispatch(app: &mut App, words: &[String]) -> Result<ReplFlow> {
    let command = words[0].as_str();
    let args = &words[1..];
    debug!(command, ?args, "dispatching command");

    match command {
        "help" => {
            if expect_args(args, 0) {
                commands::command_help();
            }
        }
        "exit" => {
            if expect_args(args, 0) {
                println!("Closing the Pokedex... Goodbye!");
                return Ok(ReplFlow::Exit);
            }
        }
        "map" => {
            if expect_args(args, 0) {
                commands::command_map(app).await?;
            }
        }
        "mapb" => {
            if expect_args(args, 0) {
                commands::command_mapb(app).await?;
            }
        }
        "explore" => {
            if expect_args(args, 1) {
                commands::command_explore(app, &args[0]).await?;
            }
        }
        "catch" => {
            if expect_args(args, 1) {
                commands::command_catch(app, &args[0]).await?;
            }
        }
        "inspect" => {
            if expect_args(args, 1) {
                commands::command_inspect(app, &args[0]).await?;
            }
        }
        "pokedex" => {
            if expect_args(args, 0) {
                commands::command_pokedex(app);
            }
        }
        "cache" => {
            if expect_args(args, 0) {
                commands::command_cache(app).await;
            }
        }
        _ => println!("Unknown command"),
    }

    Ok(ReplFlow::Continue)
}

/// Checks the argument count, complaining like the original CLI on a
/// mismatch. Returns true when the handler should run.
fn expect_args(args: &[String], expected: usize) -> bool {
    if args.len() == expected {
        return true;
    }
    let plural = if expected == 1 { "argument" } else { "arguments" };
    println!("Expected {expected} {plural}, but found {}", args.len());
    false
}
