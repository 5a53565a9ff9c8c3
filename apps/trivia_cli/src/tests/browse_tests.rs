use super::*;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use client_core::{FilterMode, QuestionService};
use shared::protocol::QuestionPage;

#[derive(Default)]
struct RecordingService {
    calls: Mutex<Vec<String>>,
}

impl RecordingService {
    fn record(&self, call: String) {
        self.calls.lock().expect("calls").push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls").clone()
    }
}

fn listing(total: u64) -> QuestionPage {
    QuestionPage {
        success: true,
        total_questions: Some(total),
        ..QuestionPage::default()
    }
}

#[async_trait]
impl QuestionService for RecordingService {
    async fn list_questions(&self, page: u32) -> Result<QuestionPage> {
        self.record(format!("list {page}"));
        Ok(listing(30))
    }

    async fn questions_by_category(
        &self,
        category: &CategoryId,
        page: u32,
    ) -> Result<QuestionPage> {
        self.record(format!("category {category} {page}"));
        Ok(listing(12))
    }

    async fn search_questions(&self, term: &str, page: u32) -> Result<QuestionPage> {
        self.record(format!("search {term} {page}"));
        Ok(listing(25))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<()> {
        self.record(format!("delete {id}"));
        Ok(())
    }
}

#[test]
fn parses_commands_and_arguments() {
    assert_eq!("all".parse(), Ok(BrowseCommand::All));
    assert_eq!(
        "cat 5".parse(),
        Ok(BrowseCommand::Category(CategoryId::new("5")))
    );
    assert_eq!(
        "  search   title of the book ".parse(),
        Ok(BrowseCommand::Search("title of the book".to_string()))
    );
    assert_eq!("PAGE 3".parse(), Ok(BrowseCommand::Page(3)));
    assert_eq!(
        "delete 12".parse(),
        Ok(BrowseCommand::Delete(QuestionId(12)))
    );
    assert_eq!("q".parse(), Ok(BrowseCommand::Quit));
}

#[test]
fn rejects_bad_input() {
    assert_eq!(
        "dance".parse::<BrowseCommand>(),
        Err(ParseCommandError::Unknown("dance".to_string()))
    );
    assert!(matches!(
        "page".parse::<BrowseCommand>(),
        Err(ParseCommandError::MissingArgument { command: "page", .. })
    ));
    assert_eq!(
        "page two".parse::<BrowseCommand>(),
        Err(ParseCommandError::InvalidNumber("two".to_string()))
    );
    assert_eq!(
        "page 0".parse::<BrowseCommand>(),
        Err(ParseCommandError::InvalidNumber("0".to_string()))
    );
    assert!("search".parse::<BrowseCommand>().is_err());
}

#[tokio::test]
async fn scripted_session_drives_controller() {
    let service = Arc::new(RecordingService::default());
    let controller = QuestionListController::new(service.clone());
    let input: &[u8] =
        b"cat 2\npage 2\nsearch art\npage 3\nbogus\ndelete 4\nn\ndelete 4\nyes\nquit\nall\n";

    run(&controller, input).await.expect("session");

    assert_eq!(
        service.calls(),
        vec![
            "list 1",
            "category 2 1",
            "category 2 2",
            "search art 1",
            "search art 3",
            "delete 4",
            "list 1",
        ]
    );
    let view = controller.snapshot().await;
    assert_eq!(view.filter, FilterMode::All);
    assert_eq!(view.page, 1);
}

#[tokio::test]
async fn session_ends_with_input() {
    let service = Arc::new(RecordingService::default());
    let controller = QuestionListController::new(service.clone());
    let input: &[u8] = b"search bird\n\n";

    run(&controller, input).await.expect("session");

    assert_eq!(service.calls(), vec!["list 1", "search bird 1"]);
    assert_eq!(controller.snapshot().await.query, "bird");
}
