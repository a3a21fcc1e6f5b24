//! Terminal I/O helpers.

use std::io::Write;

use rustyline::{
    Cmd, ConditionalEventHandler, DefaultEditor, Event, EventContext, EventHandler, KeyCode,
    KeyEvent, RepeatCount, error::ReadlineError,
};
use tokio::sync::mpsc;

/// What the readline thread reports to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// First character typed on an empty line
    Typing,
    /// A finished, non-empty line
    Line(String),
}

/// Reports `UserInput::Typing` when a character lands on an empty line
struct TypingNotifier {
    input_tx: mpsc::UnboundedSender<UserInput>,
}

impl ConditionalEventHandler for TypingNotifier {
    fn handle(&self, evt: &Event, _: RepeatCount, _: bool, ctx: &EventContext) -> Option<Cmd> {
        if let Some(KeyEvent(KeyCode::Char(_), _)) = evt.get(0)
            && ctx.line().is_empty()
        {
            self.input_tx.send(UserInput::Typing).ok();
        }
        // fall through to the default key binding
        None
    }
}

/// Redisplay the prompt after receiving a message
pub fn redisplay_prompt(prompt: &str) {
    print!("{}> ", prompt);
    std::io::stdout().flush().ok();
}

/// Read lines on a dedicated thread for the lifetime of the process.
///
/// The returned channel closes on Ctrl+C, Ctrl+D or a readline error.
pub fn spawn_readline(prompt: String) -> mpsc::UnboundedReceiver<UserInput> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<UserInput>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        rl.bind_sequence(
            Event::Any,
            EventHandler::Conditional(Box::new(TypingNotifier {
                input_tx: input_tx.clone(),
            })),
        );

        let prompt = format!("{}> ", prompt);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(UserInput::Line(line.to_string())).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}
