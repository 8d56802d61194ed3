use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Trap count must leave at least one trap and one safe cell")]
    InvalidTrapCount,
}

pub type Result<T> = core::result::Result<T, GameError>;
