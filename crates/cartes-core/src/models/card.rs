use serde::{Deserialize, Serialize};

/// One question/answer pair. Either side may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl<Q: Into<String>, A: Into<String>> From<(Q, A)> for Card {
    fn from((question, answer): (Q, A)) -> Self {
        Card::new(question, answer)
    }
}
