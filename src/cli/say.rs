//! One-shot "say" command: send a single prompt and stream the reply.

use std::error::Error;
use std::io::{self, Write};

use futures_util::StreamExt;

use crate::core::constants::CREDENTIAL_ENV_VAR;
use crate::core::session::ChatSession;

pub async fn run_say(mut session: ChatSession, prompt: Vec<String>) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: gemchat say <prompt>");
        std::process::exit(1);
    }

    if !session.has_credential() && !session.adopt_env_credential() {
        eprintln!("❌ No API credential available\n");
        eprintln!("Set your Google API key:");
        eprintln!("  export {CREDENTIAL_ENV_VAR}=\"your-api-key-here\"");
        std::process::exit(2);
    }

    let mut stream = match session.begin_turn(&prompt).await {
        Ok(stream) => stream,
        Err(err) => {
            eprintln!("❌ Error: {err}");
            std::process::exit(1);
        }
    };

    let mut full_response = String::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => {
                print!("{fragment}");
                io::stdout().flush()?;
                full_response.push_str(&fragment);
            }
            Err(err) => {
                session.abort_turn();
                eprintln!("\n\n❌ Error: {err}");
                std::process::exit(1);
            }
        }
    }
    println!();

    session.complete_turn(full_response)?;
    Ok(())
}
