use contagion_core::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("game error: {0}")]
    Game(#[from] GameError),
    #[error("cannot plan from a finished game")]
    TerminalRoot,
    #[error("no legal action at the current state")]
    NoLegalAction,
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for PlanError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
