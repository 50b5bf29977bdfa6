use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("phrase book parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
