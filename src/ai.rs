//! Bridge to the external move endpoint. The client sends the whole board and
//! the selected difficulty and gets back a single coordinate pair.

use gloo::net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Board, GameMode};

#[derive(Debug, Serialize)]
pub struct AiMoveRequest {
    pub board: Vec<Vec<u8>>,
    pub mode: GameMode,
}

impl AiMoveRequest {
    pub fn new(board: &Board, mode: GameMode) -> Self {
        Self { board: board.to_wire(), mode }
    }
}

/// `{ "move": [row, col] }`, `{ "move": null }` or `{}`.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AiMoveResponse {
    #[serde(rename = "move", default)]
    pub mv: Option<[i64; 2]>,
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error("could not encode move request: {0}")]
    Encode(#[source] gloo::net::Error),
    #[error("move request failed: {0}")]
    Transport(#[source] gloo::net::Error),
    #[error("move endpoint answered HTTP {status}")]
    Status { status: u16 },
    #[error("could not decode move reply: {0}")]
    Decode(#[source] gloo::net::Error),
}

/// Posts the board to `endpoint`. `Ok(None)` means the endpoint had no move
/// to offer. The returned coordinates are passed through as-is.
pub async fn request_ai_move(
    endpoint: &str,
    board: &Board,
    mode: GameMode,
) -> Result<Option<(i64, i64)>, AiError> {
    let body = AiMoveRequest::new(board, mode);
    let response = Request::post(endpoint)
        .json(&body)
        .map_err(AiError::Encode)?
        .send()
        .await
        .map_err(AiError::Transport)?;
    if !response.ok() {
        return Err(AiError::Status { status: response.status() });
    }
    let reply: AiMoveResponse = response.json().await.map_err(AiError::Decode)?;
    Ok(reply.mv.map(|[row, col]| (row, col)))
}
