mod data;
mod helpers;
pub mod nested;
mod question;
mod raw_data;

pub use data::QuestionBank;
pub use helpers::{load_banks_and_write_formatted, read_data, read_data_dir, write_data};
pub use nested::OptionSlot;
pub use question::{Answer, Question, QuestionType, COPY_PREFIX};
pub use raw_data::RawQuestionData;
