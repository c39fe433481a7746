use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use question_store::QuestionType;

use crate::edit::Edit;
use crate::report::Filter;

mod edit;
mod format;
mod report;

#[derive(Parser)]
#[clap(version, about = "Inspect and edit JSON question banks")]
struct QuestionStore {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Args)]
struct BankFile {
    /// Question bank JSON file
    #[clap(short, long, value_parser, value_name = "FILE", env = "QUESTIONS_FILE")]
    file: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Check and rewrite every bank in a directory
    Format {
        #[clap(short, long, value_parser, value_name = "PATH", env = "QUESTIONS_DATA_PATH")]
        data_path: PathBuf,
    },
    /// Print the bank as CSV
    Csv(BankFile),
    /// Print names and point totals
    Summary(BankFile),
    /// Print a blank answer sheet as JSON
    Answers(BankFile),
    /// Print only published questions
    Published(BankFile),
    /// Print only questions with a body, expected answer or options
    NonEmpty(BankFile),
    /// Print a single question
    Show {
        #[clap(flatten)]
        bank: BankFile,
        #[clap(long, value_parser)]
        id: u32,
    },
    /// Mark every question published
    PublishAll(BankFile),
    /// Append a blank question
    Add {
        #[clap(flatten)]
        bank: BankFile,
        #[clap(long, value_parser)]
        id: u32,
        #[clap(long, value_parser)]
        name: String,
        #[clap(long = "type", value_enum, default_value = "short-answer")]
        kind: TypeArg,
    },
    /// Delete a question
    Remove {
        #[clap(flatten)]
        bank: BankFile,
        #[clap(long, value_parser)]
        id: u32,
    },
    /// Give a question a new name
    Rename {
        #[clap(flatten)]
        bank: BankFile,
        #[clap(long, value_parser)]
        id: u32,
        #[clap(long, value_parser)]
        name: String,
    },
    /// Change a question's type; leaving multiple choice drops its options
    ChangeType {
        #[clap(flatten)]
        bank: BankFile,
        #[clap(long, value_parser)]
        id: u32,
        #[clap(long = "type", value_enum)]
        kind: TypeArg,
    },
    /// Replace an option, or append it with `--index -1`
    EditOption {
        #[clap(flatten)]
        bank: BankFile,
        #[clap(long, value_parser)]
        id: u32,
        #[clap(long, value_parser, allow_hyphen_values = true)]
        index: isize,
        #[clap(long, value_parser)]
        text: String,
    },
    /// Insert an unpublished copy right after a question
    Duplicate {
        #[clap(flatten)]
        bank: BankFile,
        #[clap(long, value_parser)]
        id: u32,
        #[clap(long, value_parser)]
        new_id: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    MultipleChoice,
    ShortAnswer,
}

impl From<TypeArg> for QuestionType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::MultipleChoice => QuestionType::MultipleChoiceQuestion,
            TypeArg::ShortAnswer => QuestionType::ShortAnswerQuestion,
        }
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "env-file")]
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let question_store = QuestionStore::parse();

    match question_store.command {
        Command::Format { data_path } => format::format(data_path),
        Command::Csv(bank) => report::csv(&bank.file),
        Command::Summary(bank) => report::summary(&bank.file),
        Command::Answers(bank) => report::answers(&bank.file),
        Command::Published(bank) => report::filtered(&bank.file, Filter::Published),
        Command::NonEmpty(bank) => report::filtered(&bank.file, Filter::NonEmpty),
        Command::Show { bank, id } => report::show(&bank.file, id),
        Command::PublishAll(bank) => edit::edit(&bank.file, Edit::PublishAll),
        Command::Add {
            bank,
            id,
            name,
            kind,
        } => edit::edit(
            &bank.file,
            Edit::Add {
                id,
                name,
                kind: kind.into(),
            },
        ),
        Command::Remove { bank, id } => edit::edit(&bank.file, Edit::Remove { id }),
        Command::Rename { bank, id, name } => edit::edit(&bank.file, Edit::Rename { id, name }),
        Command::ChangeType { bank, id, kind } => edit::edit(
            &bank.file,
            Edit::ChangeType {
                id,
                kind: kind.into(),
            },
        ),
        Command::EditOption {
            bank,
            id,
            index,
            text,
        } => edit::edit(&bank.file, Edit::EditOption { id, index, text }),
        Command::Duplicate { bank, id, new_id } => {
            edit::edit(&bank.file, Edit::Duplicate { id, new_id })
        }
    }
}
