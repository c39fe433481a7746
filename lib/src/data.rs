use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::helpers::{read_data, write_data};
use crate::question::Question;
use crate::raw_data::RawQuestionData;

/// A named list of questions backed by one JSON file.
#[derive(Clone, Debug)]
pub struct QuestionBank {
    pub key: String,

    pub questions: Vec<Question>,

    pub hash: String,
}

impl QuestionBank {
    pub fn new(key: String, questions: Vec<Question>) -> Self {
        let hash = Self::hash_data(&key, &questions[..]);

        Self {
            key,
            questions,
            hash,
        }
    }

    fn hash_data(key: &str, questions: &[Question]) -> String {
        let mut hasher = blake3::Hasher::new();

        hasher.update(key.as_bytes());
        hasher.update(
            questions
                .iter()
                .map(Question::fingerprint)
                .collect::<Vec<_>>()
                .join("")
                .as_bytes(),
        );

        hasher.finalize().to_string()
    }

    /// Swaps in a new question list and recomputes the hash.
    pub fn with_questions(self, questions: Vec<Question>) -> Self {
        Self::new(self.key, questions)
    }

    pub fn load_and_write_formatted(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = Self::load(path)?;

        data.check()?;
        data.write(path)?;

        Ok(data)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw_data = read_data(path)?;

        let key = match path.file_stem().and_then(|name| name.to_str()) {
            Some(key) => key.to_owned(),
            None => bail!("invalid file name {}", path.display()),
        };
        let questions = Self::from_slice(&raw_data[..])
            .with_context(|| format!("cannot parse {}", path.display()))?;

        log::debug!("loaded {} question(s) from {}", questions.len(), path.display());

        Ok(Self::new(key, questions))
    }

    pub fn from_slice(raw_data: &[u8]) -> Result<Vec<Question>> {
        let raw_questions: Vec<RawQuestionData> = serde_json::from_slice(raw_data)?;

        Ok(raw_questions.into_iter().map(Into::into).collect())
    }

    pub fn to_json(&self) -> Result<String> {
        let raw_questions = self
            .questions
            .iter()
            .cloned()
            .map(Into::into)
            .collect::<Vec<RawQuestionData>>();

        Ok(serde_json::to_string_pretty(&raw_questions)?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_data(path, self.to_json()?)?;

        log::debug!("wrote {} ({})", path.display(), self.hash);

        Ok(())
    }

    /// Question ids must be unique within a bank.
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for question in &self.questions {
            if !seen.insert(question.id) {
                bail!("Bank {} has duplicate question id {}", self.key, question.id);
            }
        }

        Ok(())
    }
}
