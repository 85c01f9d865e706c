use crate::PlayerId;
use crate::SessionId;
use crate::session::Seat;
use crate::session::Table;
use serde::Serialize;

/// What a polling player sees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    /// Still in the lobby.
    Waiting { message: &'static str },
    InGame {
        session_id: SessionId,
        current_city: Option<String>,
        your_turn: bool,
        players: Vec<String>,
    },
    GameOver {
        message: &'static str,
        winner: Option<String>,
        eliminated: Vec<String>,
    },
}

impl Status {
    pub const WAITING: &'static str = "Ожидание подключения к игре...";
    pub const GAME_OVER: &'static str = "Игра окончена.";

    pub fn waiting() -> Self {
        Self::Waiting {
            message: Self::WAITING,
        }
    }

    /// Project a table snapshot for one viewer.
    pub fn project(session: SessionId, table: &Table, viewer: PlayerId) -> Self {
        match table.is_over() {
            true => Self::GameOver {
                message: Self::GAME_OVER,
                winner: table.winner().map(|s| s.name().to_string()),
                eliminated: table.eliminated().to_vec(),
            },
            false => Self::InGame {
                session_id: session,
                current_city: table.source().map(String::from),
                your_turn: table.active().is_some_and(|s| s.id() == viewer),
                players: table.roster().iter().map(Seat::name).map(String::from).collect(),
            },
        }
    }
}
