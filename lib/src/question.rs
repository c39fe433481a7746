use std::fmt;

use serde::{Deserialize, Serialize};

/// Prepended to the name of a duplicated question.
pub const COPY_PREFIX: &str = "Copy of ";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoiceQuestion,
    ShortAnswerQuestion,
}

impl QuestionType {
    pub fn toggled(self) -> Self {
        match self {
            Self::MultipleChoiceQuestion => Self::ShortAnswerQuestion,
            Self::ShortAnswerQuestion => Self::MultipleChoiceQuestion,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoiceQuestion => "multiple_choice_question",
            Self::ShortAnswerQuestion => "short_answer_question",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single quiz question.
///
/// `Clone` produces a fully independent copy, including a freshly allocated
/// `options` list, so every transformation in [`crate::nested`] clones before
/// it touches a field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: u32,

    pub name: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub body: String,
    pub expected: String,
    pub options: Vec<String>,
    pub points: u32,
    pub published: bool,
}

impl Question {
    pub fn blank(id: u32, name: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            body: String::new(),
            expected: String::new(),
            options: Vec::new(),
            points: 1,
            published: false,
        }
    }

    /// A question is empty only when body, expected answer and options are
    /// all unset at once.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }

    pub fn duplicate(&self, new_id: u32) -> Self {
        Self {
            id: new_id,
            name: format!("{COPY_PREFIX}{}", self.name),
            published: false,
            ..self.clone()
        }
    }

    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();

        hasher.update(&self.id.to_le_bytes());
        hash_field(&mut hasher, &self.name);
        hash_field(&mut hasher, self.kind.as_str());
        hash_field(&mut hasher, &self.body);
        hash_field(&mut hasher, &self.expected);

        hasher.update(&(self.options.len() as u64).to_le_bytes());
        for option in &self.options {
            hash_field(&mut hasher, option);
        }

        hasher.update(&self.points.to_le_bytes());
        hasher.update(&[self.published as u8]);

        hasher.finalize().to_string()
    }
}

/// Length-prefixed so text cannot shift between neighbouring fields.
fn hash_field(hasher: &mut blake3::Hasher, field: &str) {
    hasher.update(&(field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,

    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    pub fn for_question(question: &Question) -> Self {
        Self {
            question_id: question.id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }

    /// Records a submission. Correctness is an exact match against
    /// `expected`.
    pub fn submit(&self, text: impl Into<String>, expected: &str) -> Self {
        let text = text.into();
        let correct = text == expected;

        Self {
            question_id: self.question_id,
            text,
            submitted: true,
            correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Question {
        Question {
            id: 5,
            name: "Colors".to_owned(),
            kind: QuestionType::MultipleChoiceQuestion,
            body: "Which is a primary color?".to_owned(),
            expected: "red".to_owned(),
            options: vec!["red".to_owned(), "apple".to_owned(), "firetruck".to_owned()],
            points: 1,
            published: true,
        }
    }

    #[test]
    fn toggled_swaps_between_the_two_types() {
        assert_eq!(
            QuestionType::MultipleChoiceQuestion.toggled(),
            QuestionType::ShortAnswerQuestion
        );
        assert_eq!(
            QuestionType::ShortAnswerQuestion.toggled(),
            QuestionType::MultipleChoiceQuestion
        );
    }

    #[test]
    fn question_type_serializes_as_snake_case() {
        let json = serde_json::to_string(&QuestionType::ShortAnswerQuestion).unwrap();

        assert_eq!(json, "\"short_answer_question\"");
        assert_eq!(
            QuestionType::MultipleChoiceQuestion.to_string(),
            "multiple_choice_question"
        );
    }

    #[test]
    fn blank_question_has_defaults() {
        let question = Question::blank(9, "New", QuestionType::ShortAnswerQuestion);

        assert_eq!(question.id, 9);
        assert_eq!(question.name, "New");
        assert_eq!(question.points, 1);
        assert!(!question.published);
        assert!(question.is_empty());
    }

    #[test]
    fn any_filled_field_makes_question_non_empty() {
        let mut question = Question::blank(1, "Q", QuestionType::ShortAnswerQuestion);
        question.expected = "4".to_owned();
        assert!(!question.is_empty());

        let mut question = Question::blank(1, "Q", QuestionType::MultipleChoiceQuestion);
        question.options.push("a".to_owned());
        assert!(!question.is_empty());
    }

    #[test]
    fn duplicate_renames_and_unpublishes() {
        let original = colors();
        let copy = original.duplicate(27);

        assert_eq!(copy.id, 27);
        assert_eq!(copy.name, "Copy of Colors");
        assert!(!copy.published);
        assert_eq!(copy.options, original.options);
        assert_eq!(copy.expected, original.expected);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let original = colors();
        let mut changed = colors();
        changed.options[0] = "blue".to_owned();

        assert_eq!(original.fingerprint(), colors().fingerprint());
        assert_ne!(original.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn fingerprint_separates_option_boundaries() {
        let mut joined = colors();
        joined.options = vec!["ab".to_owned()];
        let mut split = colors();
        split.options = vec!["a".to_owned(), "b".to_owned()];

        assert_ne!(joined.fingerprint(), split.fingerprint());
    }

    #[test]
    fn fingerprint_separates_text_fields() {
        let mut left = colors();
        left.body = "ab".to_owned();
        left.expected = String::new();
        let mut right = colors();
        right.body = "a".to_owned();
        right.expected = "b".to_owned();

        assert_ne!(left.fingerprint(), right.fingerprint());
    }

    #[test]
    fn submit_checks_exact_match() {
        let answer = Answer::for_question(&colors());
        assert_eq!(answer.question_id, 5);
        assert!(!answer.submitted);

        let right = answer.submit("red", "red");
        assert!(right.submitted);
        assert!(right.correct);

        let wrong = answer.submit("Red", "red");
        assert!(wrong.submitted);
        assert!(!wrong.correct);
        assert_eq!(wrong.text, "Red");
    }

    #[test]
    fn answer_serializes_question_id_in_camel_case() {
        let json = serde_json::to_value(Answer::for_question(&colors())).unwrap();

        assert_eq!(json["questionId"], 5);
        assert_eq!(json["text"], "");
    }
}
