use crate::LocationId;
use serde::{Deserialize, Serialize};

/// One agent action. Move and Fly carry their destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Move(LocationId),
    Fly(LocationId),
    Treat,
    Build,
    Cure,
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Self::Move(target) => format!("move:{target}"),
            Self::Fly(target) => format!("fly:{target}"),
            Self::Treat => "treat".to_string(),
            Self::Build => "build".to_string(),
            Self::Cure => "cure".to_string(),
        }
    }
}
