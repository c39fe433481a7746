use serde::{Deserialize, Serialize};

use crate::question::{Question, QuestionType};

fn default_points() -> u32 {
    1
}

/// A question as written in a bank file. Everything except the id, name and
/// type may be omitted.
#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct RawQuestionData {
    pub id: u32,

    pub name: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expected: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default)]
    pub published: bool,
}

impl From<Question> for RawQuestionData {
    fn from(data: Question) -> Self {
        Self {
            id: data.id,
            name: data.name,
            kind: data.kind,
            body: data.body,
            expected: data.expected,
            options: data.options,
            points: data.points,
            published: data.published,
        }
    }
}

impl From<RawQuestionData> for Question {
    fn from(raw: RawQuestionData) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            kind: raw.kind,
            body: raw.body,
            expected: raw.expected,
            options: raw.options,
            points: raw.points,
            published: raw.published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_take_defaults() {
        let raw: RawQuestionData =
            serde_json::from_str(r#"{"id": 3, "name": "Shapes", "type": "short_answer_question"}"#)
                .unwrap();
        let question = Question::from(raw);

        assert_eq!(
            question,
            Question::blank(3, "Shapes", QuestionType::ShortAnswerQuestion)
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<RawQuestionData>(
            r#"{"id": 3, "name": "Shapes", "type": "short_answer_question", "hint": "x"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn empty_fields_are_not_written() {
        let raw = RawQuestionData::from(Question::blank(
            1,
            "Addition",
            QuestionType::ShortAnswerQuestion,
        ));
        let json = serde_json::to_value(raw).unwrap();

        assert!(json.get("body").is_none());
        assert!(json.get("options").is_none());
        assert_eq!(json["points"], 1);
        assert_eq!(json["published"], false);
    }
}
