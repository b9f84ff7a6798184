#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("corrupt stored data: {0}")]
    Corrupt(String),
    #[error("{0}")]
    Unknown(String),
}
