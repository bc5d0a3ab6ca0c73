//! Trivia payload decoding and validation.
//!
//! `POST /questions` serves two purposes: a body carrying a `searchTerm` key
//! is a search, anything else is a request to create a question. The body is
//! decoded once at the boundary into [`QuestionSubmission`] so handlers match
//! on a tagged union instead of probing a dynamic JSON object.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/// JSON key that switches `POST /questions` into search mode.
pub const SEARCH_TERM_KEY: &str = "searchTerm";

/// A decoded and validated `POST /questions` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSubmission {
    Search(SearchRequest),
    Create(CreateRequest),
}

/// Case-insensitive substring search over question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
}

/// A new question. Category and difficulty are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub question: String,
    pub answer: String,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

/// Wire shape of a create body. Fields are all optional here so that a
/// missing field is reported as a validation error rather than a decode error.
#[derive(Debug, Deserialize)]
struct RawCreate {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default)]
    category: Option<NumberOrString>,
    #[serde(default)]
    difficulty: Option<NumberOrString>,
}

/// Clients send numeric fields either as JSON numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    fn into_i64(self, field: &str) -> Result<Option<i64>, CoreError> {
        match self {
            NumberOrString::Number(n) => Ok(Some(n)),
            NumberOrString::Text(s) if s.trim().is_empty() => Ok(None),
            NumberOrString::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| CoreError::Validation(format!("{field} must be an integer"))),
        }
    }
}

impl TryFrom<Value> for QuestionSubmission {
    type Error = CoreError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = body else {
            return Err(CoreError::Validation("body must be a JSON object".into()));
        };

        if let Some(term) = map.get(SEARCH_TERM_KEY) {
            let term = match term {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                _ => {
                    return Err(CoreError::Validation(
                        "searchTerm must be a string".into(),
                    ))
                }
            };
            if term.trim().is_empty() {
                return Err(CoreError::Validation("searchTerm must not be empty".into()));
            }
            return Ok(QuestionSubmission::Search(SearchRequest { term }));
        }

        let raw: RawCreate = serde_json::from_value(Value::Object(map))
            .map_err(|e| CoreError::Validation(format!("invalid question payload: {e}")))?;

        let question = require_text(raw.question, "question")?;
        let answer = require_text(raw.answer, "answer")?;
        let category = raw
            .category
            .map(|c| c.into_i64("category"))
            .transpose()?
            .flatten();
        let difficulty = raw
            .difficulty
            .map(|d| d.into_i64("difficulty"))
            .transpose()?
            .flatten()
            .map(|d| {
                i32::try_from(d)
                    .map_err(|_| CoreError::Validation("difficulty is out of range".into()))
            })
            .transpose()?;

        Ok(QuestionSubmission::Create(CreateRequest {
            question,
            answer,
            category,
            difficulty,
        }))
    }
}

/// Deserialize an optional id sent either as a number or a numeric string.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => value.into_i64("id").map_err(serde::de::Error::custom),
    }
}

fn require_text(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere in the column.
///
/// `%`, `_` and `\` in the user's term are escaped so they match literally.
pub fn substring_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn search_key_selects_search() {
        let sub = QuestionSubmission::try_from(json!({ "searchTerm": "title" })).unwrap();
        assert_eq!(
            sub,
            QuestionSubmission::Search(SearchRequest {
                term: "title".into()
            })
        );
    }

    #[test]
    fn search_key_wins_over_create_fields() {
        let sub = QuestionSubmission::try_from(
            json!({ "searchTerm": "tom", "question": "q", "answer": "a" }),
        )
        .unwrap();
        assert_matches!(sub, QuestionSubmission::Search(_));
    }

    #[test]
    fn search_term_keeps_surrounding_spaces() {
        let sub = QuestionSubmission::try_from(json!({ "searchTerm": " of " })).unwrap();
        assert_eq!(
            sub,
            QuestionSubmission::Search(SearchRequest {
                term: " of ".into()
            })
        );
        assert_eq!(substring_pattern(" of "), "% of %");
    }

    #[test]
    fn empty_search_term_is_rejected() {
        assert_matches!(
            QuestionSubmission::try_from(json!({ "searchTerm": "" })),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            QuestionSubmission::try_from(json!({ "searchTerm": "   " })),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            QuestionSubmission::try_from(json!({ "searchTerm": null })),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn create_with_only_required_fields() {
        let sub =
            QuestionSubmission::try_from(json!({ "question": "Why?", "answer": "Because" }))
                .unwrap();
        assert_eq!(
            sub,
            QuestionSubmission::Create(CreateRequest {
                question: "Why?".into(),
                answer: "Because".into(),
                category: None,
                difficulty: None,
            })
        );
    }

    #[test]
    fn create_accepts_numeric_strings() {
        let sub = QuestionSubmission::try_from(json!({
            "question": "Which country won the soccer World Cup in 2010",
            "answer": "Spain",
            "category": "6",
            "difficulty": "2"
        }))
        .unwrap();
        assert_matches!(
            sub,
            QuestionSubmission::Create(CreateRequest {
                category: Some(6),
                difficulty: Some(2),
                ..
            })
        );
    }

    #[test]
    fn create_without_question_or_answer_is_rejected() {
        assert_matches!(
            QuestionSubmission::try_from(json!({ "question": "", "answer": "Spain" })),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            QuestionSubmission::try_from(json!({ "question": "Who?", "answer": "" })),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            QuestionSubmission::try_from(json!({ "answer": "Spain" })),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn non_numeric_category_is_rejected() {
        assert_matches!(
            QuestionSubmission::try_from(
                json!({ "question": "q", "answer": "a", "category": "science" })
            ),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert_matches!(
            QuestionSubmission::try_from(json!(["question"])),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn substring_pattern_escapes_wildcards() {
        assert_eq!(substring_pattern("tom"), "%tom%");
        assert_eq!(substring_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
