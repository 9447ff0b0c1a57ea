#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown move '{0}', expected one of U, D, L, R or X")]
    UnknownMove(char),
    #[error("replay needs a move string, e.g. `replay UURR`")]
    MissingMoves,
}
