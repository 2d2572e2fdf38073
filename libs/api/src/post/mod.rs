use axum::{extract::State, http::StatusCode, Json};

pub mod request;
pub mod response;
pub mod service;

use crate::response::{ApiResponse, IntoApiResponse};

use self::request::SavePostReq;
use self::response::PostResp;
use self::service::PostService;

pub async fn save_post(
    State(service): State<PostService>,
    Json(req): Json<SavePostReq>,
) -> ApiResponse<(StatusCode, Json<PostResp>)> {
    let post = service
        .create_post(req.into_post())
        .await
        .into_response("in save post")?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

pub async fn get_posts(
    State(service): State<PostService>,
) -> ApiResponse<Json<Vec<PostResp>>> {
    let posts = service.list_posts().await.into_response("in get posts")?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}
