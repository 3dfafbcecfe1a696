//! Caseflow CLI - Complaint workflow tracker

use caseflow::cli::commands::{self, list::ListArgs, GlobalOptions};
use caseflow::cli::{Cli, Commands};
use caseflow::errors::to_exit_code;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise --verbose / --quiet pick the level
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> caseflow::Result<()> {
    let opts = GlobalOptions {
        cwd: cli.cwd.as_deref(),
        data_file: cli.data_file.as_deref(),
        actor: cli.actor.as_deref(),
    };

    match cli.command {
        Some(Commands::Serve { port, bind }) => {
            commands::serve::run(&opts, port, bind.as_deref()).await
        }
        Some(Commands::List {
            view,
            quick,
            filter,
            sort,
            desc,
            json,
        }) => {
            let args = ListArgs {
                view,
                quick,
                filter,
                sort,
                desc,
                json,
            };
            commands::list::run(&opts, &args).await
        }
        Some(Commands::Show { id, json }) => commands::show::run(&opts, &id, json).await,
        Some(Commands::Create { id, title }) => {
            commands::create::run(&opts, id.as_deref(), title.as_deref()).await
        }
        Some(Commands::Allocate { id, handler }) => {
            commands::allocate::run(&opts, &id, &handler).await
        }
        Some(Commands::PickUp { id }) => commands::pick_up::run(&opts, &id).await,
        Some(Commands::Move { id, status }) => commands::move_cmd::run(&opts, &id, &status).await,
        Some(Commands::Comment { id, text }) => commands::comment::run(&opts, &id, &text).await,
        Some(Commands::Delete { id }) => commands::delete::run(&opts, &id).await,
        Some(Commands::Statuses { json }) => commands::statuses::run(json).await,
        Some(Commands::Summary { json }) => commands::summary::run(&opts, json).await,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
