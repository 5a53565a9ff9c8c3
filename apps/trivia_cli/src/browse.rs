//! Interactive loop: one line in, one controller action out.

use std::str::FromStr;

use client_core::{Outcome, QuestionListController, DELETE_PROMPT};
use shared::domain::{CategoryId, QuestionId};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::render::is_yes;

pub const HELP: &str = "\
commands:
  all              first page of every question
  cat <id>         first page of a category
  search <term>    search question text
  page <n>         go to page n of the current listing
  delete <id>      delete a question (asks first)
  help             show this text
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    All,
    Category(CategoryId),
    Search(String),
    Page(u32),
    Delete(QuestionId),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

impl FromStr for BrowseCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "cat" | "category" => {
                if rest.is_empty() {
                    return Err(ParseCommandError::MissingArgument {
                        command: "cat",
                        expected: "a category id",
                    });
                }
                Ok(Self::Category(CategoryId::new(rest)))
            }
            "search" => {
                if rest.is_empty() {
                    return Err(ParseCommandError::MissingArgument {
                        command: "search",
                        expected: "a search term",
                    });
                }
                Ok(Self::Search(rest.to_string()))
            }
            "page" => {
                let page = parse_number::<u32>("page", "a page number", rest)?;
                if page == 0 {
                    return Err(ParseCommandError::InvalidNumber(rest.to_string()));
                }
                Ok(Self::Page(page))
            }
            "delete" => Ok(Self::Delete(QuestionId(parse_number(
                "delete",
                "a question id",
                rest,
            )?))),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_number<T: FromStr>(
    command: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ParseCommandError> {
    if raw.is_empty() {
        return Err(ParseCommandError::MissingArgument { command, expected });
    }
    raw.parse()
        .map_err(|_| ParseCommandError::InvalidNumber(raw.to_string()))
}

/// Loads the first page, then executes commands read from `input` until it
/// ends or `quit` arrives. Query failures are alerted by the controller's
/// renderer and do not stop the loop.
pub async fn run<R>(controller: &QuestionListController, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    if let Err(err) = controller.load_all(1).await {
        debug!(error = %err, "initial load failed");
    }

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let result = match command {
            BrowseCommand::All => controller.load_all(1).await,
            BrowseCommand::Category(id) => controller.load_by_category(id, 1).await,
            BrowseCommand::Search(term) => {
                controller.set_query(&term).await;
                controller.search(&term, 1).await
            }
            BrowseCommand::Page(page) => controller.select_page(page).await,
            BrowseCommand::Delete(id) => {
                println!("{DELETE_PROMPT} [y/N]");
                let answer = lines.next_line().await?.unwrap_or_default();
                let confirmed = is_yes(&answer);
                controller
                    .delete_question(id, &move |_: &str| confirmed)
                    .await
            }
            BrowseCommand::Help => {
                println!("{HELP}");
                continue;
            }
            BrowseCommand::Quit => break,
        };

        match result {
            Ok(Outcome::Declined) => println!("deletion cancelled"),
            Ok(_) => {}
            Err(err) => debug!(error = %err, "browse command failed"),
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/browse_tests.rs"]
mod tests;
