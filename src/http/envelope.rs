//! JSON response envelopes.

use serde::Serialize;

/// `{ "data": ... }`
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

/// `{ "message": ..., "data": ... }`
#[derive(Debug, Serialize)]
pub struct MessageBody<T> {
    pub message: &'static str,
    pub data: T,
}

/// `{ "error": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}
