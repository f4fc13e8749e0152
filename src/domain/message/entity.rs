use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A post on the board.
///
/// No time zone is kept for `creation_time`: consumers only show how long ago
/// a message was posted ("Posted 8 hours ago"), so storing it as naive UTC is
/// enough.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
	pub id: i32,
	#[serde(deserialize_with = "null_as_empty")]
	pub title: String,
	#[serde(deserialize_with = "null_as_empty")]
	pub content: String,
	pub upvotes: i32,
	pub downvotes: i32,
	#[serde(skip_serializing)]
	pub flags: i32,
	pub creation_time: DateTime<Utc>,
}

// `null` reads as an empty string so it fails the required-field check
// rather than the decode.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Message {
	pub fn has_required_fields(&self) -> bool {
		!self.title.is_empty() && !self.content.is_empty()
	}
}

/// Row layout of the `message` table.
#[derive(Debug, sqlx::FromRow)]
pub struct MessageRow {
	pub id: i32,
	pub title: String,
	pub content: String,
	pub upvotes: i32,
	pub downvotes: i32,
	pub flags: i32,
	pub creation_time: NaiveDateTime,
}

impl From<MessageRow> for Message {
	fn from(row: MessageRow) -> Self {
		Self {
			id: row.id,
			title: row.title,
			content: row.content,
			upvotes: row.upvotes,
			downvotes: row.downvotes,
			flags: row.flags,
			creation_time: row.creation_time.and_utc(),
		}
	}
}
