use thiserror::Error;

/// Errors raised while constructing a game from configuration
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("board_size out of range [5..24]: {size}")]
    BoardSize { size: usize },

    #[error("discount must be in (0.0, 1.0]: {discount}")]
    Discount { discount: f64 },
}
