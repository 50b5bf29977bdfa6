use pet_core::PetId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no pet with id {0}")]
    UnknownPet(PetId),
}

pub type SimResult<T> = Result<T, SimError>;
