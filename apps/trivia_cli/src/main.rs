use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{HttpQuestionService, Outcome, QueryError, QuestionListController, DELETE_PROMPT};
use shared::{
    domain::{CategoryId, QuestionId},
    protocol::NewQuestion,
};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod browse;
mod config;
mod render;

use config::load_settings;
use render::{read_confirmation, TerminalRenderer};

#[derive(Parser, Debug)]
#[command(name = "trivia", about = "Browse and manage trivia questions")]
struct Cli {
    /// Backend base url; overrides config file and environment.
    #[arg(long)]
    server_url: Option<String>,
    /// Settings file (defaults to ./trivia.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One page of every question.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// One page of a single category.
    Category {
        id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Questions whose text contains TERM.
    Search {
        term: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    Categories,
    Add {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        difficulty: i64,
    },
    /// Draw a random question not seen before.
    Quiz {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_delimiter = ',')]
        previous: Vec<i64>,
    },
    /// Interactive session.
    Browse,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(result: std::result::Result<Outcome, QueryError>) -> ExitCode {
    match result {
        Ok(Outcome::Declined) => {
            println!("deletion cancelled");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        // The renderer has already shown the alert.
        Err(_) => ExitCode::FAILURE,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }
    init_tracing(&settings.log_filter);
    tracing::debug!(server_url = %settings.server_url, "starting trivia client");

    let service = Arc::new(HttpQuestionService::new(&settings.server_url)?);
    let controller =
        QuestionListController::new_with_renderer(service.clone(), Arc::new(TerminalRenderer));

    let code = match cli.command {
        Command::List { page } => exit_code(controller.load_all(page).await),
        Command::Category { id, page } => {
            exit_code(controller.load_by_category(CategoryId::new(id), page).await)
        }
        Command::Search { term, page } => exit_code(controller.search(&term, page).await),
        Command::Delete { id, yes } => {
            let confirmed = yes
                || read_confirmation(DELETE_PROMPT, &mut BufReader::new(tokio::io::stdin()))
                    .await?;
            exit_code(
                controller
                    .delete_question(QuestionId(id), &move |_: &str| confirmed)
                    .await,
            )
        }
        Command::Categories => {
            for (id, name) in service.list_categories().await? {
                println!("{id:>4}  {name}");
            }
            ExitCode::SUCCESS
        }
        Command::Add {
            question,
            answer,
            category,
            difficulty,
        } => {
            let created = service
                .create_question(&NewQuestion {
                    question,
                    answer,
                    category: CategoryId::new(category),
                    difficulty,
                })
                .await?;
            println!("created question {created}");
            ExitCode::SUCCESS
        }
        Command::Quiz { category, previous } => {
            let previous: Vec<QuestionId> = previous.into_iter().map(QuestionId).collect();
            let category = category.map(CategoryId::new);
            match service
                .next_quiz_question(&previous, category.as_ref())
                .await?
            {
                Some(question) => {
                    println!("#{} {}", question.id, question.question);
                    println!("answer: {}", question.answer);
                }
                None => println!("no unseen questions left"),
            }
            ExitCode::SUCCESS
        }
        Command::Browse => {
            println!("{}", browse::HELP);
            browse::run(&controller, BufReader::new(tokio::io::stdin())).await?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
