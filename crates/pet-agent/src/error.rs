use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("pet {name:?}: chatter probability {got} outside [0, 1]")]
    ProbabilityOutOfRange { name: String, got: f64 },

    #[error("pet {name:?}: {what} must be at least one tick")]
    ZeroInterval { name: String, what: &'static str },

    #[error("pet {name:?}: chatter phrase list is empty")]
    NoChatterPhrases { name: String },
}

pub type DescriptorResult<T> = Result<T, DescriptorError>;
