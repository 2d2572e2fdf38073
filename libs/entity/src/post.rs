use chrono::{DateTime, Utc};

/// A single blog post. `id` is assigned by the database on insert;
/// `liked_count`, `view_count` and `date` are stamped by the service
/// layer, whatever the caller supplied.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub liked_count: i32,
    pub view_count: i32,
    pub date: DateTime<Utc>,
}
