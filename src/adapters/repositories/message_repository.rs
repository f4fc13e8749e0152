use async_trait::async_trait;
use chrono::Utc;

use crate::{
	database::DatabaseExecutor,
	domain::message::{entity::MessageRow, Message},
	services::response::ServiceError,
};

use super::MessageStore;

pub struct MessageRepository {
	pub executor: DatabaseExecutor,
}

impl MessageRepository {
	pub fn new(executor: DatabaseExecutor) -> Self {
		Self { executor }
	}

	async fn exists(
		&self,
		id: i32,
	) -> Result<bool, ServiceError> {
		let (exists,): (bool,) = sqlx::query_as("select exists(select 1 from message where id=$1);")
			.bind(id)
			.fetch_one(self.executor.connection())
			.await
			.map_err(|err| {
				tracing::error!("Existence check failed for message {} :{:?}", id, err);
				ServiceError::SqlError
			})?;
		Ok(exists)
	}
}

#[async_trait]
impl MessageStore for MessageRepository {
	async fn fetch_all(&self) -> Result<Vec<Message>, ServiceError> {
		let rows = sqlx::query_as::<_, MessageRow>(
			"select id, title, content, upvotes, downvotes, flags, creation_time from message;",
		)
		.fetch_all(self.executor.connection())
		.await
		.map_err(|err| {
			tracing::error!("Fetching messages failed :{:?}", err);
			ServiceError::SqlError
		})?;

		Ok(rows.into_iter().map(Message::from).collect())
	}

	async fn fetch_by_id(
		&self,
		id: i32,
	) -> Result<Option<Message>, ServiceError> {
		let row = sqlx::query_as::<_, MessageRow>(
			"select id, title, content, upvotes, downvotes, flags, creation_time from message where id=$1;",
		)
		.bind(id)
		.fetch_optional(self.executor.connection())
		.await
		.map_err(|err| {
			tracing::error!("Fetching message {} failed :{:?}", id, err);
			ServiceError::SqlError
		})?;

		Ok(row.map(Message::from))
	}

	async fn insert(
		&self,
		message: Message,
	) -> Result<(), ServiceError> {
		sqlx::query(
			"insert into message (title, content, upvotes, downvotes, flags, creation_time)
			values($1, $2, $3, $4, $5, $6);",
		)
		.bind(&message.title)
		.bind(&message.content)
		.bind(message.upvotes.max(0))
		.bind(message.downvotes.max(0))
		.bind(message.flags.max(0))
		.bind(Utc::now().naive_utc())
		.execute(self.executor.connection())
		.await
		.map_err(|err| {
			tracing::error!("Inserting message failed :{:?}", err);
			ServiceError::DbInsert
		})?;

		Ok(())
	}

	async fn delete_by_id(
		&self,
		id: i32,
	) -> Result<(), ServiceError> {
		// A delete against a missing id succeeds with zero rows affected, so
		// absence has to be checked first. The two round trips are not atomic.
		if !self.exists(id).await? {
			return Err(ServiceError::NotFound);
		}

		sqlx::query("delete from message where id=$1;")
			.bind(id)
			.execute(self.executor.connection())
			.await
			.map_err(|err| {
				tracing::error!("Deleting message {} failed :{:?}", id, err);
				ServiceError::DbDelete
			})?;

		Ok(())
	}

	async fn ping(&self) -> Result<(), ServiceError> {
		self.executor.ping().await.map_err(|err| {
			tracing::error!("Storage ping failed :{:?}", err);
			ServiceError::SqlError
		})
	}
}
