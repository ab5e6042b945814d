//! CLI command definitions.

pub mod attendees;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// CLI client for the gunita RSVP API.
#[derive(Debug, Parser)]
#[command(name = "gunita-client")]
#[command(about = "CLI client for the gunita RSVP API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "GUNITA_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Attendee listing and registration.
    Attendees(attendees::AttendeesCommand),
    /// Show dashboard fill-rate figures.
    Dashboard,
    /// Show event details and the countdown.
    Event,
    /// Query liveness and readiness probes.
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendees::AttendeesAction;

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from([
            "gunita-client",
            "--base-url",
            "http://rsvp.local",
            "--format",
            "json",
            "attendees",
            "register",
            "--name",
            "Ana",
            "--email",
            "ana@x.com",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://rsvp.local");
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Attendees(cmd) => match cmd.action {
                AttendeesAction::Register { name, email } => {
                    assert_eq!(name, "Ana");
                    assert_eq!(email, "ana@x.com");
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_register_requires_both_fields() {
        let result =
            Cli::try_parse_from(["gunita-client", "attendees", "register", "--name", "Ana"]);
        assert!(result.is_err());
    }
}
