//! Custom JSON extractor that rejects malformed bodies as JSON
//!
//! The submission contract classifies an absent, unparseable or
//! wrongly-typed body as one client-error class: 400 with an
//! `invalid_request_error` JSON body. axum's default rejection answers with
//! plain text and varies the status by rejection kind, so this wrapper
//! flattens all of that to the documented shape.

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection carrying the flattened 400 response.
#[derive(Debug)]
pub struct JsonPayloadRejection {
    message: String,
}

impl IntoResponse for JsonPayloadRejection {
    fn into_response(self) -> Response {
        ApiError::bad_request(self.message).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonPayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonPayloadRejection {
                message: format!("Invalid or missing JSON payload: {}", rejection.body_text()),
            }),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
