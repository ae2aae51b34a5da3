/// Invalid fixture input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// An 8-puzzle board string is not a permutation of `0..=8`.
    #[error("invalid board {board:?}: {detail}")]
    InvalidBoard { board: String, detail: String },
    /// A route endpoint is not a node of the graph.
    #[error("unknown node {name:?}")]
    UnknownNode { name: String },
}
