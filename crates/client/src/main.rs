//! gunita-client CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gunita_client::cli::attendees::AttendeesAction;
use gunita_client::cli::{Cli, Commands, OutputFormat};
use gunita_client::output::{format_output, pretty};
use gunita_client::{ClientError, GunitaClient};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = GunitaClient::new(&cli.base_url);

    match run(&client, cli.command, cli.format).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ClientError::Rejected { kind, message, .. }) => {
            eprintln!("Rejected ({kind:?}): {message}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    client: &GunitaClient,
    command: Commands,
    format: OutputFormat,
) -> Result<(), ClientError> {
    match command {
        Commands::Attendees(attendees_cmd) => match attendees_cmd.action {
            AttendeesAction::List => {
                let list = client.list_attendees().await?;
                match format {
                    OutputFormat::Json => println!("{}", format_output(&list, format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_attendees(&list)),
                }
            }
            AttendeesAction::Register { name, email } => {
                let attendee = client.register(&name, &email).await?;
                match format {
                    OutputFormat::Json => println!("{}", format_output(&attendee, format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_registered(&attendee)),
                }
            }
        },
        Commands::Dashboard => {
            let stats = client.dashboard().await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&stats, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_dashboard(&stats)),
            }
        }
        Commands::Event => {
            let info = client.event().await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&info, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_event(&info)),
            }
        }
        Commands::Health => {
            let live = client.live().await?;
            let ready = client.ready().await?;
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    format_output(
                        &serde_json::json!({ "live": live, "ready": ready }),
                        format
                    )
                ),
                OutputFormat::Pretty => println!("{}", pretty::format_health(live, &ready)),
            }
        }
    }

    Ok(())
}
