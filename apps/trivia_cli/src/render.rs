//! Plain-text presentation of the question list.

use std::{
    fmt::Write as _,
    io::{self, Write},
};

use client_core::{pagination, FilterMode, Renderer, ViewState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&self, state: &ViewState) {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(format_view(state).as_bytes());
        let _ = stdout.flush();
    }

    fn alert(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Prints `prompt` and reads one answer line from `input`; anything but
/// `y`/`yes`, including end of input, is a no.
pub async fn read_confirmation<R>(prompt: &str, input: &mut R) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer).await?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn filter_label(filter: FilterMode) -> &'static str {
    match filter {
        FilterMode::All => "all",
        FilterMode::Search => "search",
        FilterMode::Category => "category",
    }
}

pub fn format_view(state: &ViewState) -> String {
    let mut out = String::new();

    if !state.categories.is_empty() {
        let listed = state
            .categories
            .iter()
            .map(|(id, name)| {
                if state.current_category.as_ref() == Some(id) {
                    format!("<{id}> {name}")
                } else {
                    format!("[{id}] {name}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Categories: {listed}");
    }

    let _ = write!(
        out,
        "Questions ({}, {} total",
        filter_label(state.filter),
        state.total_questions
    );
    if state.filter == FilterMode::Search {
        let _ = write!(out, ", query \"{}\"", state.query);
    }
    let _ = writeln!(out, ")");

    if state.questions.is_empty() {
        let _ = writeln!(out, "  (no questions)");
    }
    for question in &state.questions {
        let category = state
            .category_name(&question.category)
            .unwrap_or(question.category.as_str());
        let _ = writeln!(
            out,
            "  #{} [{category}, difficulty {}] {}",
            question.id, question.difficulty, question.question
        );
        let _ = writeln!(out, "      answer: {}", question.answer);
    }

    let pages = pagination(state)
        .into_iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.number)
            } else {
                link.number.to_string()
            }
        })
        .collect::<Vec<_>>();
    if !pages.is_empty() {
        let _ = writeln!(out, "Pages: {}", pages.join(" "));
    }

    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
