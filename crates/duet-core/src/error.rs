use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutexError {
    /// Generic pairs are built from exactly two values.
    #[error("a mutex pair needs exactly two values, got {found}")]
    Arity { found: usize },
}
