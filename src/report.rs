use std::path::Path;

use anyhow::{Context, Result};
use question_store::nested::{
    find_question, make_answers, names, non_empty_questions, published_questions, same_type,
    sum_points, sum_published_points, to_csv,
};
use question_store::{QuestionBank, RawQuestionData};

#[derive(Clone, Copy, Debug)]
pub enum Filter {
    Published,
    NonEmpty,
}

pub fn csv(file: &Path) -> Result<()> {
    let bank = QuestionBank::load(file)?;

    println!("{}", to_csv(&bank.questions));

    Ok(())
}

pub fn summary(file: &Path) -> Result<()> {
    let bank = QuestionBank::load(file)?;
    let questions = &bank.questions[..];

    println!("bank:             {}", bank.key);
    println!("hash:             {}", bank.hash);
    println!("questions:        {}", questions.len());
    println!("points:           {}", sum_points(questions));
    println!("published points: {}", sum_published_points(questions));
    println!("same type:        {}", same_type(questions));

    for name in names(questions) {
        println!("  {name}");
    }

    Ok(())
}

pub fn answers(file: &Path) -> Result<()> {
    let bank = QuestionBank::load(file)?;

    println!("{}", serde_json::to_string_pretty(&make_answers(&bank.questions))?);

    Ok(())
}

pub fn filtered(file: &Path, filter: Filter) -> Result<()> {
    let bank = QuestionBank::load(file)?;
    let questions = match filter {
        Filter::Published => published_questions(&bank.questions),
        Filter::NonEmpty => non_empty_questions(&bank.questions),
    };

    log::info!(
        "{:?}: kept {} of {} question(s)",
        filter,
        questions.len(),
        bank.questions.len()
    );

    println!("{}", bank.with_questions(questions).to_json()?);

    Ok(())
}

pub fn show(file: &Path, id: u32) -> Result<()> {
    let bank = QuestionBank::load(file)?;
    let question = find_question(&bank.questions, id)
        .with_context(|| format!("question {id} not found in {}", bank.key))?;

    let raw = RawQuestionData::from(question.clone());
    println!("{}", serde_json::to_string_pretty(&raw)?);

    Ok(())
}
