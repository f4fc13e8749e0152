pub mod message_repository;
#[cfg(test)]
pub(crate) mod fakes;

use async_trait::async_trait;

pub use message_repository::MessageRepository;

use crate::{domain::message::Message, services::response::ServiceError};

/// Storage contract the controller depends on. Implementations only ever
/// report taxonomy errors; driver errors stay behind this boundary.
#[async_trait]
pub trait MessageStore: Send + Sync {
	/// Every stored message, in whatever order storage returns them. An empty
	/// table is `Ok(vec![])`.
	async fn fetch_all(&self) -> Result<Vec<Message>, ServiceError>;

	/// `Ok(None)` when no row has this id.
	async fn fetch_by_id(
		&self,
		id: i32,
	) -> Result<Option<Message>, ServiceError>;

	/// Stores a new message. The id and creation time are assigned here, not
	/// taken from the caller.
	async fn insert(
		&self,
		message: Message,
	) -> Result<(), ServiceError>;

	/// `Err(ServiceError::NotFound)` when no row has this id.
	async fn delete_by_id(
		&self,
		id: i32,
	) -> Result<(), ServiceError>;

	/// Health check against the backing storage.
	async fn ping(&self) -> Result<(), ServiceError>;
}
