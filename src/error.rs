use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid quantity for {name}: {quantity} (must be a finite number >= 0)")]
    InvalidQuantity { name: String, quantity: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Day not found: #{0}")]
    DayNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
