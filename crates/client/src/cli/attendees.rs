//! Attendee CLI commands.

use clap::{Parser, Subcommand};

/// Attendee commands.
#[derive(Debug, Parser)]
pub struct AttendeesCommand {
    #[command(subcommand)]
    pub action: AttendeesAction,
}

/// Available attendee actions.
#[derive(Debug, Subcommand)]
pub enum AttendeesAction {
    /// List confirmed attendees.
    List,
    /// Confirm attendance.
    Register {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Contact email.
        #[arg(long)]
        email: String,
    },
}
