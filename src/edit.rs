use std::path::Path;

use anyhow::{bail, Context, Result};
use question_store::nested::{
    add_new_question, change_question_type_by_id, duplicate_question_in_array, edit_option,
    find_question, publish_all, remove_question, rename_question_by_id,
};
use question_store::{OptionSlot, Question, QuestionBank, QuestionType};

/// An in-place change to a bank file.
#[derive(Debug)]
pub enum Edit {
    PublishAll,
    Add {
        id: u32,
        name: String,
        kind: QuestionType,
    },
    Remove {
        id: u32,
    },
    Rename {
        id: u32,
        name: String,
    },
    ChangeType {
        id: u32,
        kind: QuestionType,
    },
    EditOption {
        id: u32,
        index: isize,
        text: String,
    },
    Duplicate {
        id: u32,
        new_id: u32,
    },
}

impl Edit {
    /// Validates the edit against `questions` before applying it, so the
    /// library's preconditions hold.
    pub fn apply(&self, questions: &[Question]) -> Result<Vec<Question>> {
        let edited = match self {
            Self::PublishAll => publish_all(questions),
            Self::Add { id, name, kind } => {
                ensure_free(questions, *id)?;
                add_new_question(questions, *id, name, *kind)
            }
            Self::Remove { id } => {
                target(questions, *id)?;
                remove_question(questions, *id)
            }
            Self::Rename { id, name } => {
                target(questions, *id)?;
                rename_question_by_id(questions, *id, name)
            }
            Self::ChangeType { id, kind } => {
                target(questions, *id)?;
                change_question_type_by_id(questions, *id, *kind)
            }
            Self::EditOption { id, index, text } => {
                let question = target(questions, *id)?;
                let slot = option_slot(question, *index)?;
                edit_option(questions, *id, slot, text)
            }
            Self::Duplicate { id, new_id } => {
                target(questions, *id)?;
                ensure_free(questions, *new_id)?;
                duplicate_question_in_array(questions, *id, *new_id)
            }
        };

        Ok(edited)
    }
}

pub fn edit(file: &Path, edit: Edit) -> Result<()> {
    let bank = QuestionBank::load(file)?;
    bank.check()?;

    let questions = edit
        .apply(&bank.questions)
        .with_context(|| format!("cannot edit {}", bank.key))?;
    let old_hash = bank.hash.clone();
    let bank = bank.with_questions(questions);

    bank.check()?;
    bank.write(file)?;

    log::info!("{:?} on {}: {} -> {}", edit, bank.key, old_hash, bank.hash);

    Ok(())
}

fn target(questions: &[Question], id: u32) -> Result<&Question> {
    find_question(questions, id).with_context(|| format!("question {id} not found"))
}

fn ensure_free(questions: &[Question], id: u32) -> Result<()> {
    if find_question(questions, id).is_some() {
        bail!("question id {id} is already taken");
    }

    Ok(())
}

fn option_slot(question: &Question, index: isize) -> Result<OptionSlot> {
    match OptionSlot::from_index(index) {
        Some(OptionSlot::Replace(index)) if index >= question.options.len() => bail!(
            "question {} has {} option(s), no option {index}",
            question.id,
            question.options.len()
        ),
        Some(slot) => Ok(slot),
        None => bail!("option index must be -1 or a valid position, got {index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        let mut colors = Question::blank(5, "Colors", QuestionType::MultipleChoiceQuestion);
        colors.options = vec!["red".to_owned(), "blue".to_owned()];

        vec![
            Question::blank(1, "Addition", QuestionType::ShortAnswerQuestion),
            colors,
        ]
    }

    #[test]
    fn missing_target_is_an_error() {
        let edit = Edit::Rename {
            id: 42,
            name: "Nope".to_owned(),
        };

        let err = edit.apply(&questions()).unwrap_err();

        assert_eq!(err.to_string(), "question 42 not found");
    }

    #[test]
    fn taken_ids_are_rejected() {
        let add = Edit::Add {
            id: 5,
            name: "Again".to_owned(),
            kind: QuestionType::ShortAnswerQuestion,
        };
        let duplicate = Edit::Duplicate { id: 1, new_id: 5 };

        assert!(add.apply(&questions()).is_err());
        assert!(duplicate.apply(&questions()).is_err());
    }

    #[test]
    fn option_index_is_validated() {
        let out_of_range = Edit::EditOption {
            id: 5,
            index: 2,
            text: "green".to_owned(),
        };
        let negative = Edit::EditOption {
            id: 5,
            index: -3,
            text: "green".to_owned(),
        };

        assert!(out_of_range.apply(&questions()).is_err());
        assert!(negative.apply(&questions()).is_err());
    }

    #[test]
    fn valid_edits_apply() {
        let append = Edit::EditOption {
            id: 5,
            index: -1,
            text: "green".to_owned(),
        };
        let edited = append.apply(&questions()).unwrap();
        assert_eq!(edited[1].options, vec!["red", "blue", "green"]);

        let duplicated = Edit::Duplicate { id: 5, new_id: 6 }
            .apply(&questions())
            .unwrap();
        assert_eq!(duplicated[2].name, "Copy of Colors");

        let published = Edit::PublishAll.apply(&questions()).unwrap();
        assert!(published.iter().all(|question| question.published));
    }
}
