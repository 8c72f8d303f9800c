use serde::Deserialize;

use super::TransportError;
use crate::domain::{ApiError, ApiErrorCode};

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorJson {
    code: i64,
    description: String,
    #[serde(default)]
    parameter: Option<String>,
}

pub fn decode_api_error_json(body: &[u8]) -> Result<ApiError, TransportError> {
    let parsed: ApiErrorJson = serde_json::from_slice(body)?;
    let code = ApiErrorCode::from_code(parsed.code)
        .ok_or(TransportError::UnknownErrorCode { code: parsed.code })?;

    Ok(ApiError {
        code,
        description: parsed.description,
        parameter: parsed.parameter,
    })
}
