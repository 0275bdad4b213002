//! Line-oriented shell for the companion engine.
//!
//! Stands in for the desktop window: it speaks the same channel protocol
//! (actions in, events out) a windowing front end uses, mapping stdin
//! lines to inputs and printing what the frog says. Plain lines are
//! questions; slash commands cover the mouse and menu inputs.

use froggy_common::{Action, Event};
use froggy_companion::CompanionHandle;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read stdin and print events until the companion shuts down or stdin
/// closes. EOF is treated as a dismissal.
pub async fn run(handle: CompanionHandle, name: String, placeholder: String) {
    let mut events = handle.subscribe();
    let speaker = name.clone();
    let printer = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                Event::SpeechShown { text, .. } => {
                    for line in text.lines() {
                        println!("{speaker} │ {line}");
                    }
                }
                Event::ThinkingStarted => println!("{speaker} is thinking..."),
                Event::PromptShown => println!("({placeholder})"),
                Event::Shutdown => break,
                _ => {}
            }
        }
    });

    println!("{name} is here. Ask anything, or /poke /inquiry /hide /dismiss.");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if !dispatch(&handle, line.trim()).await {
                    break;
                }
            }
            Ok(None) => {
                let _ = handle.send(Action::Quit).await;
                break;
            }
            Err(e) => {
                tracing::warn!("stdin read failed: {e}");
                let _ = handle.send(Action::Quit).await;
                break;
            }
        }
    }

    let _ = printer.await;
}

/// Map one input line to an action. Returns `false` when reading should
/// stop.
async fn dispatch(handle: &CompanionHandle, line: &str) -> bool {
    let action = match line {
        "" => return true,
        "/dismiss" | "/quit" => {
            let _ = handle.send(Action::Quit).await;
            return false;
        }
        "/inquiry" => Action::OpenPrompt,
        "/hide" => Action::HidePrompt,
        "/poke" => Action::Poke,
        "/help" => {
            println!("/poke      double-click the frog (random fact)");
            println!("/inquiry   open the prompt input");
            println!("/hide      hide the prompt input (Escape)");
            println!("/dismiss   quit");
            println!("anything else is sent to the frog as a question");
            return true;
        }
        _ if line.starts_with('/') => {
            println!("unknown command: {line} (try /help)");
            return true;
        }
        _ => Action::SubmitPrompt(line.to_string()),
    };

    handle.send(action).await
}
