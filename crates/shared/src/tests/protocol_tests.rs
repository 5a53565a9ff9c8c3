use super::*;

#[test]
fn decodes_full_listing_with_string_category_keys() {
    let raw = r#"{
        "success": true,
        "questions": [
            {"id": 5, "question": "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
             "answer": "Maya Angelou", "category": "4", "difficulty": 2}
        ],
        "total_questions": 19,
        "categories": {"1": "Science", "4": "History"},
        "current_category": null
    }"#;

    let page: QuestionPage = serde_json::from_str(raw).expect("decode");

    assert_eq!(page.questions.len(), 1);
    assert_eq!(page.questions[0].id, QuestionId(5));
    assert_eq!(page.questions[0].category, CategoryId::new("4"));
    assert_eq!(page.total_or_len(), 19);
    let categories = page.categories.expect("categories");
    assert_eq!(categories.get(&CategoryId::new("4")).map(String::as_str), Some("History"));
    assert!(page.current_category.is_none());
}

#[test]
fn category_listing_without_totals_falls_back_to_page_len() {
    let raw = r#"{
        "success": true,
        "questions": [
            {"id": 1, "question": "q1", "answer": "a1", "category": 3, "difficulty": 1},
            {"id": 2, "question": "q2", "answer": "a2", "category": "3", "difficulty": 4}
        ]
    }"#;

    let page: QuestionPage = serde_json::from_str(raw).expect("decode");

    assert_eq!(page.total_questions, None);
    assert_eq!(page.total_or_len(), 2);
    assert!(page.categories.is_none());
    assert_eq!(page.questions[0].category, page.questions[1].category);
}

#[test]
fn numeric_current_category_normalizes_to_string() {
    let page: QuestionPage =
        serde_json::from_str(r#"{"questions": [], "current_category": 5}"#).expect("decode");
    assert_eq!(page.current_category, Some(CategoryId::new("5")));
    assert!(page.success);
}

#[test]
fn quiz_request_uses_type_key() {
    let body = QuizRequest {
        previous_questions: vec![QuestionId(3), QuestionId(9)],
        quiz_category: QuizCategory::all(),
    };
    let value = serde_json::to_value(&body).expect("encode");
    assert_eq!(value["previous_questions"], serde_json::json!([3, 9]));
    assert_eq!(value["quiz_category"]["id"], 0);
    assert_eq!(value["quiz_category"]["type"], "click");
}
