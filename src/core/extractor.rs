use axum::{
    body::{Body, Bytes},
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that answers malformed bodies with the shared error shape
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(AppJsonRejection::Body)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppJsonRejection::EmptyBody);
        }

        let mut req = Request::new(Body::from(bytes));
        *req.headers_mut() = headers;

        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection::Json(rejection)),
        }
    }
}

pub enum AppJsonRejection {
    EmptyBody,
    Body(BytesRejection),
    Json(JsonRejection),
}

impl AppJsonRejection {
    /// True when the request carried no JSON document at all: an empty body
    /// or a body sent without a JSON content type
    pub fn is_missing_body(&self) -> bool {
        matches!(
            self,
            Self::EmptyBody | Self::Json(JsonRejection::MissingJsonContentType(_))
        )
    }
}

impl From<AppJsonRejection> for AppError {
    fn from(rejection: AppJsonRejection) -> Self {
        let message = match rejection {
            AppJsonRejection::EmptyBody => "Request body is empty".to_string(),
            AppJsonRejection::Body(err) => format!("Failed to read request body: {}", err.body_text()),
            AppJsonRejection::Json(JsonRejection::JsonDataError(err)) => {
                format!("Invalid JSON data: {}", err.body_text())
            }
            AppJsonRejection::Json(JsonRejection::JsonSyntaxError(err)) => {
                format!("Invalid JSON syntax: {}", err.body_text())
            }
            AppJsonRejection::Json(JsonRejection::MissingJsonContentType(err)) => {
                format!("Missing JSON content type: {}", err)
            }
            AppJsonRejection::Json(_) => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message)
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// Query string extractor with the same JSON error shape as [`AppJson`]
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppQueryRejection(rejection)),
        }
    }
}

pub struct AppQueryRejection(QueryRejection);

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        AppError::BadRequest(format!("Invalid query string: {}", self.0.body_text())).into_response()
    }
}
