use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, Question, QuestionId};

fn default_success() -> bool {
    true
}

/// Paginated question listing shared by `/questions`,
/// `/categories/{id}/questions` and `/search`.
///
/// The category endpoint only sends `questions`, so everything else is
/// optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPage {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<CategoryId, String>>,
    #[serde(default)]
    pub current_category: Option<CategoryId>,
}

impl Default for QuestionPage {
    fn default() -> Self {
        Self {
            success: true,
            questions: Vec::new(),
            total_questions: None,
            categories: None,
            current_category: None,
        }
    }
}

impl QuestionPage {
    /// Total reported by the backend, or the size of this page when omitted.
    pub fn total_or_len(&self) -> u64 {
        self.total_questions.unwrap_or(self.questions.len() as u64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search_term: String,
    pub page: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub categories: BTreeMap<CategoryId, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteQuestionResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub deleted: QuestionId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub created: QuestionId,
}

/// Category selector for quiz play. Id `0` selects every category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl QuizCategory {
    pub fn all() -> Self {
        Self {
            id: 0,
            kind: "click".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub question: Option<Question>,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
