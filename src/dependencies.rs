use std::sync::OnceLock;

use sqlx::postgres::PgPoolOptions;

use crate::{
	config::{Config, ConfigError},
	database::DatabaseExecutor,
};

pub fn config() -> Result<&'static Config, ConfigError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

/// Opens the pool and checks it with a ping. Callers own the returned executor;
/// nothing here keeps a process-wide handle to it.
pub async fn connection_pool(config: &Config) -> Result<DatabaseExecutor, sqlx::Error> {
	let pool = PgPoolOptions::new()
		.max_connections(config.max_connections)
		.connect(&config.database_url)
		.await?;

	let executor: DatabaseExecutor = pool.into();
	executor.ping().await?;
	Ok(executor)
}
