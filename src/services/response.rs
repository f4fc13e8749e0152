use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::message::Message;

/// Every failure a repository or controller may report. Each kind is bound to
/// exactly one status code, and its message is what clients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
	// 400s
	#[error("Bad Request: Invalid JSON")]
	InvalidJson,
	#[error("Bad Request: Message must contain a title and content")]
	MessageMissingRequiredFields,
	#[error("Not Found")]
	NotFound,
	// 500s
	#[error("Internal Server Error: Failed to insert new record into database")]
	DbInsert,
	#[error("Internal Server Error: Failed to delete record from database")]
	DbDelete,
	#[error("Internal Server Error: Something went wrong executing an SQL statement")]
	SqlError,
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::InvalidJson | ServiceError::MessageMissingRequiredFields => StatusCode::BAD_REQUEST,
			ServiceError::NotFound => StatusCode::NOT_FOUND,
			ServiceError::DbInsert | ServiceError::DbDelete | ServiceError::SqlError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	pub fn message(&self) -> String {
		self.to_string()
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let body = serde_json::json!({ "error": self.message() });
		(self.status_code(), Json(body)).into_response()
	}
}

/// Whether a successful body actually carries anything worth returning.
pub trait Emptiness {
	fn is_empty_body(&self) -> bool;
}

impl<T> Emptiness for Vec<T> {
	fn is_empty_body(&self) -> bool {
		self.is_empty()
	}
}

impl<T: Emptiness> Emptiness for Option<T> {
	fn is_empty_body(&self) -> bool {
		match self {
			Some(inner) => inner.is_empty_body(),
			None => true,
		}
	}
}

impl Emptiness for String {
	fn is_empty_body(&self) -> bool {
		self.is_empty()
	}
}

impl Emptiness for &str {
	fn is_empty_body(&self) -> bool {
		self.is_empty()
	}
}

impl Emptiness for () {
	fn is_empty_body(&self) -> bool {
		true
	}
}

impl Emptiness for serde_json::Value {
	fn is_empty_body(&self) -> bool {
		match self {
			serde_json::Value::Null => true,
			serde_json::Value::String(s) => s.is_empty(),
			serde_json::Value::Array(items) => items.is_empty(),
			serde_json::Value::Object(fields) => fields.is_empty(),
			_ => false,
		}
	}
}

impl Emptiness for Message {
	fn is_empty_body(&self) -> bool {
		*self == Message::default()
	}
}

/// Turns a controller outcome into the wire response. All status-code policy
/// lives here: errors carry their own code, an empty body becomes `NotFound`,
/// anything else is a 200 with the body as JSON.
///
/// Endpoints that succeed without a body (create, delete) answer with
/// [`no_content`] instead, since an empty body here always means 404.
pub fn construct<T>(outcome: Result<T, ServiceError>) -> Response
where
	T: Serialize + Emptiness,
{
	match outcome {
		Err(err) => err.into_response(),
		Ok(body) if body.is_empty_body() => ServiceError::NotFound.into_response(),
		Ok(body) => Json(body).into_response(),
	}
}

pub fn no_content() -> Response {
	StatusCode::NO_CONTENT.into_response()
}
