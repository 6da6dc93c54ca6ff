use serde::{Deserialize, Serialize};

/// TEMP request shape: just a number for now, full reaction data later.
#[derive(Debug, Deserialize)]
pub struct StoichRequest {
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct StoichResponse {
    pub result: f64,
}
