use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("query execution error: {0}")]
    Query(String),

    #[error("transaction error: {0}")]
    Transaction(String),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("player already registered: {0}")]
    DuplicatePlayer(String),

    #[error("match id already exists: {0}")]
    DuplicateMatch(String),

    #[error("corrupt row: {0}")]
    CorruptRow(String),
}
