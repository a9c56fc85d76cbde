//! booktracker-client CLI entry point.

use booktracker_client::cli::{Cli, Commands, OutputFormat};
use booktracker_client::client::BooktrackerClient;
use booktracker_client::output::{format_output, pretty};
use booktracker_core::book::NewBook;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = BooktrackerClient::new(&cli.base_url);

    match cli.command {
        Commands::Books(books_cmd) => {
            use booktracker_client::cli::books::BooksAction;
            match books_cmd.action {
                BooksAction::List => {
                    let books = client.list_books().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&books, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_books(&books)),
                    }
                }
                BooksAction::Create {
                    title,
                    author,
                    description,
                } => {
                    let mut payload = NewBook::new(title, author);
                    if let Some(description) = description {
                        payload = payload.with_description(description);
                    }
                    let book = client.create_book(&payload).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&book, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_book(&book))
                        }
                    }
                }
                BooksAction::Get { id } => {
                    let book = client.get_book(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&book, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_book(&book)),
                    }
                }
                BooksAction::Delete { id } => {
                    let deleted = client.delete_book(id).await?;
                    if !cli.quiet {
                        println!("Deleted book {}", deleted);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use booktracker_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.live().await?;
                    if !cli.quiet {
                        println!("OK");
                    }
                }
                HealthAction::Check => {
                    let report = client.health_check().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&report, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_health(&report)),
                    }
                }
            }
        }
    }

    Ok(())
}
