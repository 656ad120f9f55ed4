//! JSON-encoded reading requests.
//!
//! A request names an optional counter and a quantity given as a JSON number or
//! string. Without a counter the bare numeral is read. One request per line in
//! JSONL input.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use josu_core::{counter_to_kana, read_numeral, NumeralError, Quantity};

#[derive(Debug, Clone, Deserialize)]
pub struct ReadingRequest {
    #[serde(default)]
    pub counter: Option<String>,
    pub quantity: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter: Option<String>,
    pub quantity: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Interpret a JSON value as a quantity. Only numbers and strings qualify.
pub fn quantity_from_json(value: &Value) -> Result<Quantity<'_>, NumeralError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Quantity::Int(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Quantity::Int(u.into()))
            } else {
                n.as_f64().map(Quantity::Float).ok_or(NumeralError::NotNumeric)
            }
        }
        Value::String(s) => Ok(Quantity::Text(Cow::Borrowed(s.as_str()))),
        _ => Err(NumeralError::NotNumeric),
    }
}

/// Read the quantity of a request, with its counter if one is named.
pub fn read_request(request: &ReadingRequest) -> Result<String, String> {
    let quantity = quantity_from_json(&request.quantity).map_err(|e| e.to_string())?;
    match request.counter.as_deref() {
        Some(counter) => counter_to_kana(counter, quantity).map_err(|e| e.to_string()),
        None => read_numeral(quantity).map_err(|e| e.to_string()),
    }
}

pub fn handle(request: ReadingRequest) -> ReadingResponse {
    let (reading, error) = match read_request(&request) {
        Ok(reading) => (Some(reading), None),
        Err(e) => (None, Some(e)),
    };
    ReadingResponse {
        counter: request.counter,
        quantity: request.quantity,
        reading,
        error,
    }
}

/// Handle one JSON request per line. Blank lines and `#` comments are skipped;
/// a line that is not a valid request yields a response carrying the parse error.
pub fn process_jsonl(input: &str) -> Vec<ReadingResponse> {
    let responses: Vec<ReadingResponse> = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|line| match serde_json::from_str::<ReadingRequest>(line) {
            Ok(request) => handle(request),
            Err(e) => ReadingResponse {
                counter: None,
                quantity: Value::Null,
                reading: None,
                error: Some(format!("invalid request: {e}")),
            },
        })
        .collect();
    debug!(
        count = responses.len(),
        failed = responses.iter().filter(|r| r.error.is_some()).count()
    );
    responses
}
