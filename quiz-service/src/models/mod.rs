pub mod question;

pub use question::{QuestionSet, QuizQuestion};
