use crate::domain::model::Bookmark;

/// The single operation one invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Bookmark),
    List,
    Delete { index: i64 },
    Open { index: i64 },
    Help,
}

impl Command {
    /// Whether the run goes through load and persist at all.
    pub fn touches_store(&self) -> bool {
        !matches!(self, Command::Help)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { index: usize },
    Listed,
    Deleted { index: usize, bookmark: Bookmark },
    Opened { index: usize, link: String },
    Help,
}
