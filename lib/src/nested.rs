//! Transformations over a list of questions.
//!
//! None of these functions modify their input. Every returned question is a
//! fresh clone, so edits to the output never reach the caller's list.

use crate::question::{Answer, Question, QuestionType};

const CSV_HEADER: &str = "id,name,options,points,published";

/// Where [`edit_option`] writes the new option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionSlot {
    Append,
    Replace(usize),
}

impl OptionSlot {
    /// `-1` appends; any other negative index has no slot.
    pub fn from_index(index: isize) -> Option<Self> {
        match index {
            -1 => Some(Self::Append),
            index if index >= 0 => Some(Self::Replace(index as usize)),
            _ => None,
        }
    }
}

pub fn published_questions(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| question.published)
        .cloned()
        .collect()
}

pub fn non_empty_questions(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| !question.is_empty())
        .cloned()
        .collect()
}

pub fn find_question(questions: &[Question], id: u32) -> Option<&Question> {
    questions.iter().find(|question| question.id == id)
}

pub fn remove_question(questions: &[Question], id: u32) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| question.id != id)
        .cloned()
        .collect()
}

pub fn names(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .map(|question| question.name.clone())
        .collect()
}

/// Summed as `u64`, so large `u32` point values cannot overflow.
pub fn sum_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .map(|question| u64::from(question.points))
        .sum()
}

pub fn sum_published_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .filter(|question| question.published)
        .map(|question| u64::from(question.points))
        .sum()
}

/// Renders `id,name,options,points,published` rows, where `options` is the
/// option count. No quoting, no trailing newline. An empty list yields only
/// the header.
pub fn to_csv(questions: &[Question]) -> String {
    let rows = questions.iter().map(|question| {
        format!(
            "{},{},{},{},{}",
            question.id,
            question.name,
            question.options.len(),
            question.points,
            question.published
        )
    });

    std::iter::once(CSV_HEADER.to_owned())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions.iter().map(Answer::for_question).collect()
}

pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|question| Question {
            published: true,
            ..question.clone()
        })
        .collect()
}

/// Vacuously true for an empty list.
pub fn same_type(questions: &[Question]) -> bool {
    match questions.split_first() {
        Some((first, rest)) => rest.iter().all(|question| question.kind == first.kind),
        None => true,
    }
}

pub fn add_new_question(
    questions: &[Question],
    id: u32,
    name: &str,
    kind: QuestionType,
) -> Vec<Question> {
    let mut new_questions = questions.to_vec();
    new_questions.push(Question::blank(id, name, kind));

    new_questions
}

pub fn rename_question_by_id(
    questions: &[Question],
    target_id: u32,
    new_name: &str,
) -> Vec<Question> {
    map_target(questions, target_id, |question| {
        question.name = new_name.to_owned();
    })
}

/// Switching away from multiple choice drops the options.
pub fn change_question_type_by_id(
    questions: &[Question],
    target_id: u32,
    new_kind: QuestionType,
) -> Vec<Question> {
    map_target(questions, target_id, |question| {
        question.kind = new_kind;

        if new_kind != QuestionType::MultipleChoiceQuestion {
            question.options.clear();
        }
    })
}

/// # Panics
///
/// Panics if `slot` is [`OptionSlot::Replace`] with an index past the end of
/// the target question's options.
pub fn edit_option(
    questions: &[Question],
    target_id: u32,
    slot: OptionSlot,
    new_option: &str,
) -> Vec<Question> {
    map_target(questions, target_id, |question| match slot {
        OptionSlot::Append => question.options.push(new_option.to_owned()),
        OptionSlot::Replace(index) => question.options[index] = new_option.to_owned(),
    })
}

/// Inserts the duplicate directly after every question matching `target_id`.
pub fn duplicate_question_in_array(
    questions: &[Question],
    target_id: u32,
    new_id: u32,
) -> Vec<Question> {
    let mut new_questions = Vec::with_capacity(questions.len() + 1);

    for question in questions {
        new_questions.push(question.clone());

        if question.id == target_id {
            new_questions.push(question.duplicate(new_id));
        }
    }

    new_questions
}

fn map_target<F>(questions: &[Question], target_id: u32, mut edit: F) -> Vec<Question>
where
    F: FnMut(&mut Question),
{
    questions
        .iter()
        .map(|question| {
            let mut question = question.clone();

            if question.id == target_id {
                edit(&mut question);
            }

            question
        })
        .collect()
}
