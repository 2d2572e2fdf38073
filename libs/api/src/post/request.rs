use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Deserialize;

/// Body accepted by savePost. Counter and date fields are tolerated but
/// the service overwrites them; missing title/content come through as
/// empty strings rather than being rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavePostReq {
    pub title: String,
    pub content: String,
    pub liked_count: i32,
    pub view_count: i32,
    pub date: Option<DateTime<Utc>>,
}

impl SavePostReq {
    pub fn into_post(self) -> PostEntity {
        PostEntity {
            title: self.title,
            content: self.content,
            liked_count: self.liked_count,
            view_count: self.view_count,
            date: self.date.unwrap_or_default(),
            ..Default::default()
        }
    }
}
