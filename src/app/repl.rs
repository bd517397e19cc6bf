use crate::core::coordinator::Coordinator;
use crate::core::{FareSource, SessionStore, TextGenerator};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const BANNER: &str = "Ski Trip Airfare Concierge\nType 'quit' to exit.\n\nExamples:\n  \
Set my home airport to DEN\n  \
Plan a ski trip from Feb 15 to Feb 20\n  \
Plan a ski trip from Mar 5 to Mar 12 with a $400 budget";

pub const FAREWELL: &str = "Goodbye!";

fn is_exit_command(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit")
}

/// Line-oriented conversation loop for a single user.
pub struct ConciergeRepl<S: SessionStore, F: FareSource, G: TextGenerator> {
    coordinator: Coordinator<S, F, G>,
    user_id: String,
}

impl<S: SessionStore, F: FareSource, G: TextGenerator> ConciergeRepl<S, F, G> {
    pub fn new(coordinator: Coordinator<S, F, G>, user_id: impl Into<String>) -> Self {
        Self {
            coordinator,
            user_id: user_id.into(),
        }
    }

    pub fn coordinator(&self) -> &Coordinator<S, F, G> {
        &self.coordinator
    }

    /// Runs until `quit`/`exit` or end of input and returns how many
    /// messages were answered.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<usize> {
        writeln!(output, "{}", BANNER)?;

        let mut handled = 0;
        let mut line = String::new();
        loop {
            write!(output, "\nYou: ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input, closing conversation");
                writeln!(output)?;
                break;
            }

            let message = line.trim();
            if is_exit_command(message) {
                break;
            }

            let response = self.coordinator.handle_message(&self.user_id, message);
            writeln!(output, "\nAgent:\n{}", response)?;
            handled += 1;
        }

        writeln!(output, "{}", FAREWELL)?;
        output.flush()?;
        tracing::info!("Conversation for {} ended after {} messages", self.user_id, handled);
        Ok(handled)
    }
}
