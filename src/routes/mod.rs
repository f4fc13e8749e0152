use axum::{
	body::Bytes,
	extract::{Path, State},
	response::Response,
	routing::get,
	Router,
};

use crate::services::handlers::MessageController;

async fn get_all_messages(State(controller): State<MessageController>) -> Response {
	controller.get_all_messages().await
}

async fn get_message_by_id(
	State(controller): State<MessageController>,
	Path(id): Path<String>,
) -> Response {
	controller.get_message_by_id(&id).await
}

// The body is taken raw so that decode failures go through the error taxonomy
// instead of axum's own JSON rejection.
async fn create_message(
	State(controller): State<MessageController>,
	body: Bytes,
) -> Response {
	controller.create_message(&body).await
}

async fn delete_message_by_id(
	State(controller): State<MessageController>,
	Path(id): Path<String>,
) -> Response {
	controller.delete_message_by_id(&id).await
}

async fn health(State(controller): State<MessageController>) -> Response {
	controller.health().await
}

pub fn create_routes(controller: MessageController) -> Router {
	Router::new()
		.route("/api/message", get(get_all_messages).post(create_message))
		.route("/api/message/:id", get(get_message_by_id).delete(delete_message_by_id))
		.route("/health", get(health))
		.with_state(controller)
}
