use std::sync::Arc;

use axum::response::Response;

use crate::{
	adapters::repositories::MessageStore,
	domain::message::Message,
	services::response::{construct, no_content, ServiceError},
};

/// Per-endpoint orchestration for `/api/message`. Holds only the store
/// contract, so tests can swap in fakes with canned outcomes.
#[derive(Clone)]
pub struct MessageController {
	store: Arc<dyn MessageStore>,
}

impl MessageController {
	pub fn new(store: Arc<dyn MessageStore>) -> Self {
		Self { store }
	}

	/// GET /api/message
	pub async fn get_all_messages(&self) -> Response {
		construct(self.store.fetch_all().await)
	}

	/// GET /api/message/:id
	pub async fn get_message_by_id(
		&self,
		id: &str,
	) -> Response {
		let id = match parse_id(id) {
			Ok(id) => id,
			Err(err) => return construct::<Option<Message>>(Err(err)),
		};
		construct(self.store.fetch_by_id(id).await)
	}

	/// POST /api/message
	///
	/// Succeeds with 204 and no body, so the success path skips `construct`.
	pub async fn create_message(
		&self,
		body: &[u8],
	) -> Response {
		// A bare `null` body decodes to an empty message and fails the field check.
		let new_message = match serde_json::from_slice::<Option<Message>>(body) {
			Ok(message) => message.unwrap_or_default(),
			Err(err) => {
				tracing::warn!("Rejected message body :{}", err);
				return construct::<()>(Err(ServiceError::InvalidJson));
			}
		};

		if !new_message.has_required_fields() {
			tracing::debug!("Rejected message without title or content");
			return construct::<()>(Err(ServiceError::MessageMissingRequiredFields));
		}

		if let Err(err) = self.store.insert(new_message).await {
			return construct::<()>(Err(err));
		}

		no_content()
	}

	/// DELETE /api/message/:id
	pub async fn delete_message_by_id(
		&self,
		id: &str,
	) -> Response {
		let result = match parse_id(id) {
			Ok(id) => self.store.delete_by_id(id).await,
			Err(err) => Err(err),
		};

		match result {
			Ok(()) => no_content(),
			Err(err) => construct::<()>(Err(err)),
		}
	}

	/// GET /health
	pub async fn health(&self) -> Response {
		construct(self.store.ping().await.map(|_| serde_json::json!({ "status": "ok" })))
	}
}

/// Ids are storage-assigned integers, so anything else cannot name a row.
fn parse_id(raw: &str) -> Result<i32, ServiceError> {
	raw.parse::<i32>().map_err(|_| {
		tracing::debug!("Unparsable message id `{}`", raw);
		ServiceError::NotFound
	})
}
