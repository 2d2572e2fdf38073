use std::sync::Arc;

use axum::{middleware, routing::get, routing::post, Router};

use repository::Repository;
use tracing::info;

use crate::post::service::PostService;

mod cors;
pub mod healthz;
pub mod not_found;
pub mod post;
mod response;

pub enum ApiError {
    ServerError(String),
}

pub async fn serve(
    repository: Repository,
    client_url: String,
) -> anyhow::Result<Router> {
    info!(task = "start api serving", client_url);

    let service = PostService::new(Arc::new(repository.post));

    Ok(app(service))
}

/// Assembles the router. The CORS middleware is the outermost layer so it
/// sees every request before routing, preflights included.
pub fn app(service: PostService) -> Router {
    let post_router = Router::new()
        .route("/savePost", post(post::save_post))
        .route("/getPosts", get(post::get_posts))
        .fallback(not_found::get_404)
        .with_state(service);

    Router::new()
        .route("/healthz", get(healthz::get_health))
        .nest("/api/posts", post_router)
        .fallback(not_found::get_404)
        .layer(middleware::from_fn(cors::cors))
}
