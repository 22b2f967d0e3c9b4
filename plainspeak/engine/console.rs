//! Console command ingestion for interactive callers.

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::UnboundedSender,
};

use crate::{
    module::{ComplexityTier, Domain},
    telemetry::EngineTelemetry,
};

/// Commands accepted from the console as JSON lines.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleCommand {
    /// Simplify inline text toward a tier.
    Simplify {
        /// Source text.
        text: String,
        /// Declared domain.
        domain: Domain,
        /// Target tier.
        tier: ComplexityTier,
    },
    /// Extract key points from inline text.
    KeyPoints {
        /// Source text.
        text: String,
    },
    /// Score readability of inline text.
    Readability {
        /// Source text.
        text: String,
    },
    /// Exit the loop.
    Quit,
}

/// Receives JSON line commands from stdin, dispatching to the caller's
/// worker via the channel.
pub struct ConsoleCommandReceiver {
    sender: UnboundedSender<ConsoleCommand>,
    telemetry: Option<EngineTelemetry>,
}

impl ConsoleCommandReceiver {
    /// Creates a new receiver.
    #[must_use]
    pub fn new(sender: UnboundedSender<ConsoleCommand>, telemetry: Option<EngineTelemetry>) -> Self {
        Self { sender, telemetry }
    }

    /// Runs the loop until `Quit` or stdin closes.
    pub async fn run(&self) -> Result<()> {
        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin).lines();
        while let Some(line) = reader.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let cmd: ConsoleCommand =
                serde_json::from_str(&line).with_context(|| "invalid console command JSON")?;
            if matches!(cmd, ConsoleCommand::Quit) {
                break;
            }
            self.sender.send(cmd)?;
        }
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(
                shared_logging::LogLevel::Info,
                "engine.console.receiver_shutdown",
                serde_json::json!({}),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_deserialize_from_tagged_json() {
        let cmd: ConsoleCommand = serde_json::from_str(
            r#"{"type":"simplify","text":"Patient has gastritis","domain":"medical","tier":"simple"}"#,
        )
        .unwrap();
        match cmd {
            ConsoleCommand::Simplify { domain, tier, .. } => {
                assert_eq!(domain, Domain::Medical);
                assert_eq!(tier, ComplexityTier::Simple);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn quit_round_trips() {
        let cmd: ConsoleCommand = serde_json::from_str(r#"{"type":"quit"}"#).unwrap();
        assert!(matches!(cmd, ConsoleCommand::Quit));
    }
}
