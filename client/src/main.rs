//! Jokebox - a terminal dad joke list.
//!
//! Fetches jokes from icanhazdadjoke.com, lets the user vote on them, and keeps
//! the list on disk between runs.

use jokebox_client::command::{Command, Target};
use jokebox_client::render;
use jokebox_client::source::{HttpJokeSource, JokeSource};
use jokebox_client::storage::{FileStorage, KeyValueStorage};
use jokebox_client::{AppError, Config, JokeController};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so it stays out of the list
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jokebox=info,jokebox_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!(
        api = %config.api_url,
        data_dir = %config.data_dir.display(),
        "starting jokebox"
    );

    let storage = FileStorage::open(&config.data_dir)?;
    let source = HttpJokeSource::new(&config.api_url, config.request_timeout)?;
    let mut controller = JokeController::hydrate(source, storage, &config);

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    if config.fetch_on_empty && controller.store().is_empty() {
        println!("{}", render::loading(controller.default_count()));
        if let Err(e) = controller.fetch_if_empty().await {
            notify(&e, &mut input).await?;
        }
    }

    println!("{}", render::jokes(controller.store()));
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = input.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Fetch(count) => {
                let count = count.unwrap_or(controller.default_count());
                println!("{}", render::loading(count));
                if let Err(e) = controller.fetch_more(count).await {
                    notify(&e, &mut input).await?;
                }
                println!("{}", render::jokes(controller.store()));
            }
            Command::Vote { target, vote } => {
                handle_vote(&mut controller, &target, vote);
            }
            Command::List => println!("{}", render::jokes(controller.store())),
            Command::Help => println!("{}", render::help()),
            Command::Quit => break,
        }
    }

    tracing::info!(jokes = controller.store().len(), "bye");
    Ok(())
}

fn handle_vote<S, K>(
    controller: &mut JokeController<S, K>,
    target: &Target,
    vote: jokebox_engine::Vote,
) where
    S: JokeSource,
    K: KeyValueStorage,
{
    let Some(id) = target.resolve(controller.store()).map(str::to_owned) else {
        println!("No joke at that position.");
        return;
    };

    match controller.vote(&id, vote) {
        Ok(true) => println!("{}", render::jokes(controller.store())),
        Ok(false) => {}
        Err(e) => println!("{e}"),
    }
}

/// Show an error and, on a terminal, wait for the user to acknowledge it.
async fn notify(error: &AppError, input: &mut Input) -> std::io::Result<()> {
    if !error.is_user_facing() {
        println!("{error}");
        return Ok(());
    }

    println!("{}", render::alert(&error.to_string()));
    if std::io::stdin().is_terminal() {
        print!("Press Enter to continue.");
        std::io::stdout().flush()?;
        input.next_line().await?;
    }
    Ok(())
}
