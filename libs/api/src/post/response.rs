use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResp {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub liked_count: i32,
    pub view_count: i32,
    pub date: DateTime<Utc>,
}

impl From<PostEntity> for PostResp {
    fn from(value: PostEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            liked_count: value.liked_count,
            view_count: value.view_count,
            date: value.date,
        }
    }
}
