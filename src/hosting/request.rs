use crate::PlayerId;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveRequest {
    pub player_id: PlayerId,
    pub word: String,
}
