use std::{net::SocketAddr, process::ExitCode, str::FromStr, sync::Arc};

use axum::{
	http::{HeaderValue, Method},
	Router,
};

use kindling::{
	adapters::repositories::MessageRepository,
	dependencies::{config, connection_pool},
	routes::create_routes,
	services::handlers::MessageController,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
	let config = match config() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Configuration error: {err}");
			return ExitCode::FAILURE;
		}
	};

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Connections Are Being Pooled...");
	let executor = match connection_pool(config).await {
		Ok(executor) => executor,
		Err(err) => {
			tracing::error!("Could not connect to Postgres :{:?}", err);
			return ExitCode::FAILURE;
		}
	};
	tracing::info!("Successfully connected to Postgres");

	let controller = MessageController::new(Arc::new(MessageRepository::new(executor)));

	let origins: Vec<HeaderValue> = config.allow_origins.split(',').filter_map(|origin| origin.trim().parse().ok()).collect();
	let app: Router = create_routes(controller)
		.layer(CorsLayer::new().allow_origin(origins).allow_methods([Method::GET, Method::POST, Method::DELETE]))
		.layer(TraceLayer::new_for_http());

	let addr = match SocketAddr::from_str(&config.server_ip_port) {
		Ok(addr) => addr,
		Err(err) => {
			tracing::error!("Invalid SERVER_IP_PORT `{}` :{}", config.server_ip_port, err);
			return ExitCode::FAILURE;
		}
	};

	tracing::info!("Listening @ {}....", addr);
	let server = axum::Server::bind(&addr).serve(app.into_make_service()).with_graceful_shutdown(async {
		tokio::signal::ctrl_c().await.ok();
	});

	if let Err(err) = server.await {
		tracing::error!("Server error :{:?}", err);
		return ExitCode::FAILURE;
	}
	ExitCode::SUCCESS
}
