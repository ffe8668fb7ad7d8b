//! Interactive line-oriented chat loop.
//!
//! Renders the transcript to stdout, reads queries from stdin, and streams
//! each reply fragment as it arrives. Chat content goes to stdout; warnings
//! and diagnostics go to stderr so they never interleave with a streaming
//! reply.

use std::error::Error;
use std::io::{self, Write};

use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::core::client::GeminiModel;
use crate::core::message::Turn;
use crate::core::session::ChatSession;
use crate::logging::LoggingState;

pub async fn run_chat(
    mut session: ChatSession,
    mut logging: LoggingState,
) -> Result<(), Box<dyn Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !session.has_credential() && !session.adopt_env_credential() {
        prompt_for_credential(&mut session, &mut lines).await?;
    }

    for turn in session.transcript().turns() {
        render_turn(turn);
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // stdin closed
        };
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if let Some(command) = input.strip_prefix('/') {
            if handle_command(command, &mut session, &mut logging) {
                break;
            }
            continue;
        }

        run_turn(&mut session, &logging, input).await;
    }

    Ok(())
}

/// Drive one turn: open the stream, print fragments as they arrive, and
/// settle the transcript. Every failure is fatal to this turn only.
async fn run_turn(session: &mut ChatSession, logging: &LoggingState, query: &str) {
    let mut stream = match session.begin_turn(query).await {
        Ok(stream) => stream,
        Err(err) => {
            eprintln!("⚠️  {err}");
            return;
        }
    };

    let mut full_response = String::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => {
                print!("{fragment}");
                let _ = io::stdout().flush();
                full_response.push_str(&fragment);
            }
            Err(err) => {
                session.abort_turn();
                println!();
                eprintln!("⚠️  {err}");
                eprintln!("Partial output was not added to the conversation; resend to retry.");
                return;
            }
        }
    }
    println!();

    if let Err(err) = session.complete_turn(full_response) {
        eprintln!("⚠️  {err}");
        return;
    }

    // Mirror the completed round-trip to the chat log, if enabled.
    let turns = session.transcript().turns();
    for turn in &turns[turns.len().saturating_sub(2)..] {
        if let Err(err) = logging.log_turn(turn) {
            eprintln!("⚠️  chat log write failed: {err}");
        }
    }
}

/// Returns true when the loop should exit.
fn handle_command(command: &str, session: &mut ChatSession, logging: &mut LoggingState) -> bool {
    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let argument = parts.next().map(str::trim).unwrap_or_default();

    match name {
        "quit" | "exit" => return true,
        "model" => match GeminiModel::try_from(argument) {
            Ok(model) => {
                session.select_model(model);
                println!("Model set to {model} (takes effect on the next turn)");
            }
            Err(err) => {
                eprintln!("⚠️  {err}");
                eprintln!("Supported: {}", supported_models());
            }
        },
        "temp" => match argument.parse::<f32>() {
            Ok(value) => match session.set_temperature(value) {
                Ok(()) => println!("Temperature set to {value}"),
                Err(err) => eprintln!("⚠️  {err}"),
            },
            Err(_) => eprintln!("⚠️  usage: /temp <0..1>"),
        },
        "key" => {
            if argument.is_empty() {
                eprintln!("⚠️  usage: /key <secret>");
            } else {
                match session.submit_credential(argument) {
                    Ok(()) => println!("API key accepted."),
                    Err(err) => eprintln!("⚠️  {err}"),
                }
            }
        }
        "log" => {
            let result = if argument.is_empty() {
                logging.toggle_logging()
            } else {
                logging.set_log_file(argument.to_string())
            };
            match result {
                Ok(status) => println!("{status}"),
                Err(err) => eprintln!("⚠️  {err}"),
            }
        }
        "status" => {
            println!("Model: {}", session.config().model);
            println!("Temperature: {}", session.config().temperature);
            println!("Chat log: {}", logging.get_status_string());
        }
        _ => {
            eprintln!("⚠️  unknown command: /{name}");
            eprintln!("Commands: /model <id>, /temp <0..1>, /key <secret>, /log [file], /status, /quit");
        }
    }
    false
}

async fn prompt_for_credential(
    session: &mut ChatSession,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<(), Box<dyn Error>> {
    loop {
        print!("Enter your Google API key: ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            return Err("no API key provided".into());
        };
        match session.submit_credential(line.trim()) {
            Ok(()) => {
                println!("API key accepted.");
                return Ok(());
            }
            Err(err) => eprintln!("⚠️  {err}"),
        }
    }
}

fn render_turn(turn: &Turn) {
    match turn.role {
        crate::core::message::Role::User => println!("You: {}", turn.content),
        crate::core::message::Role::Assistant => println!("{}", turn.content),
    }
}

fn supported_models() -> String {
    GeminiModel::ALL
        .into_iter()
        .map(GeminiModel::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
