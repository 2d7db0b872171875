//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable so clients can evolve independently.

use serde::{Deserialize, Serialize};

use crate::domain::{AdviceResult, Category, ParsedProblem};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Advise { problem: String },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Advice { advice: AdviceResult },
    Error { message: String },
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct ProblemIn {
    pub problem: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyOut {
    pub problem: String,
    pub category: Category,
    pub encoded: String,
}

impl From<ParsedProblem> for ClassifyOut {
    fn from(p: ParsedProblem) -> Self {
        Self { problem: p.original, category: p.category, encoded: p.encoded }
    }
}

#[derive(Serialize)]
pub struct CategoriesOut {
    pub categories: Vec<Category>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
