use sqlx::postgres::PgPool;

/// Storage client handed to the repository. Wraps the connection pool, which
/// does its own locking, so clones are cheap and safe to share across requests.
#[derive(Clone, Debug)]
pub struct DatabaseExecutor {
	pool: PgPool,
}

impl DatabaseExecutor {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}

	pub fn connection(&self) -> &PgPool {
		&self.pool
	}

	pub async fn ping(&self) -> Result<(), sqlx::Error> {
		sqlx::query("select 1;").execute(&self.pool).await?;
		Ok(())
	}
}

impl From<PgPool> for DatabaseExecutor {
	fn from(value: PgPool) -> Self {
		Self::new(value)
	}
}
