use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::MessageStore;
use crate::{domain::message::Message, services::response::ServiceError};

pub(crate) fn sample_messages() -> Vec<Message> {
	vec![
		Message {
			id: 1,
			title: "message 1".to_string(),
			content: "contents of message 1".to_string(),
			upvotes: 2,
			downvotes: 1,
			flags: 0,
			creation_time: Utc.with_ymd_and_hms(2019, 8, 30, 14, 50, 0).unwrap(),
		},
		Message {
			id: 2,
			title: "message 2".to_string(),
			content: "contents of message 2".to_string(),
			upvotes: 4,
			downvotes: 0,
			flags: 0,
			creation_time: Utc.with_ymd_and_hms(2019, 8, 30, 15, 20, 0).unwrap(),
		},
	]
}

/// Answers every call with the same canned outcome.
pub(crate) enum CannedStore {
	HappyPath,
	NotFound,
	Failing,
}

#[async_trait]
impl MessageStore for CannedStore {
	async fn fetch_all(&self) -> Result<Vec<Message>, ServiceError> {
		match self {
			Self::HappyPath => Ok(sample_messages()),
			Self::NotFound => Ok(vec![]),
			Self::Failing => Err(ServiceError::SqlError),
		}
	}

	async fn fetch_by_id(
		&self,
		_id: i32,
	) -> Result<Option<Message>, ServiceError> {
		match self {
			Self::HappyPath => Ok(sample_messages().into_iter().next()),
			Self::NotFound => Ok(None),
			Self::Failing => Err(ServiceError::SqlError),
		}
	}

	async fn insert(
		&self,
		_message: Message,
	) -> Result<(), ServiceError> {
		match self {
			Self::HappyPath | Self::NotFound => Ok(()),
			Self::Failing => Err(ServiceError::DbInsert),
		}
	}

	async fn delete_by_id(
		&self,
		_id: i32,
	) -> Result<(), ServiceError> {
		match self {
			Self::HappyPath => Ok(()),
			Self::NotFound => Err(ServiceError::NotFound),
			Self::Failing => Err(ServiceError::DbDelete),
		}
	}

	async fn ping(&self) -> Result<(), ServiceError> {
		match self {
			Self::Failing => Err(ServiceError::SqlError),
			_ => Ok(()),
		}
	}
}

/// Keeps messages in memory, assigning ids and creation times the way the
/// Postgres repository does.
#[derive(Default)]
pub(crate) struct MemoryStore {
	rows: Mutex<Vec<Message>>,
	next_id: Mutex<i32>,
}

#[async_trait]
impl MessageStore for MemoryStore {
	async fn fetch_all(&self) -> Result<Vec<Message>, ServiceError> {
		Ok(self.rows.lock().unwrap().clone())
	}

	async fn fetch_by_id(
		&self,
		id: i32,
	) -> Result<Option<Message>, ServiceError> {
		Ok(self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned())
	}

	async fn insert(
		&self,
		message: Message,
	) -> Result<(), ServiceError> {
		let mut next_id = self.next_id.lock().unwrap();
		*next_id += 1;
		self.rows.lock().unwrap().push(Message {
			id: *next_id,
			creation_time: Utc::now(),
			..message
		});
		Ok(())
	}

	async fn delete_by_id(
		&self,
		id: i32,
	) -> Result<(), ServiceError> {
		let mut rows = self.rows.lock().unwrap();
		let Some(position) = rows.iter().position(|m| m.id == id) else {
			return Err(ServiceError::NotFound);
		};
		rows.remove(position);
		Ok(())
	}

	async fn ping(&self) -> Result<(), ServiceError> {
		Ok(())
	}
}
