use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{0} has an invalid value: {1}")]
	Invalid(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub database_url: String,
	pub max_connections: u32,
	pub allow_origins: String,
}

impl Config {
	pub fn new() -> Result<Config, ConfigError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the config from any key lookup. `new` feeds it the process environment.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("warn".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT").unwrap_or("0.0.0.0:8080".into());
		let allow_origins = lookup("ALLOW_ORIGINS").unwrap_or("http://localhost:3000".to_string());

		let max_connections = match lookup("DB_MAX_CONNECTIONS") {
			Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::Invalid("DB_MAX_CONNECTIONS", raw))?,
			None => 30,
		};

		let database_url = match lookup("DATABASE_URL") {
			Some(url) => url,
			None => {
				let user = lookup("POSTGRES_USERNAME").ok_or(ConfigError::Missing("POSTGRES_USERNAME"))?;
				let password = lookup("POSTGRES_PASSWORD").ok_or(ConfigError::Missing("POSTGRES_PASSWORD"))?;
				let db_name = lookup("POSTGRES_DB_NAME").ok_or(ConfigError::Missing("POSTGRES_DB_NAME"))?;
				let host = lookup("POSTGRES_HOST").unwrap_or("localhost".to_string());
				format!("postgres://{user}:{password}@{host}/{db_name}?sslmode=disable")
			}
		};

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			max_connections,
			allow_origins,
		})
	}
}
