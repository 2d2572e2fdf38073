use async_trait::async_trait;
use sea_orm::{
    ActiveValue, DatabaseConnection, EntityTrait, IntoActiveValue,
};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse as _, RepositoryError};
use entity::prelude::*;

/// The two persistence operations this system needs. The service layer
/// depends on this trait, never on the sea-orm connection directly.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persists one post and returns it with its database-assigned id.
    async fn save(&self, post: PostEntity)
        -> Result<PostEntity, RepositoryError>;

    /// Returns every stored post. Order is whatever the database yields.
    async fn find_all(&self) -> Result<Vec<PostEntity>, RepositoryError>;
}

#[derive(Debug)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<post::Model> for PostEntity {
    fn from(value: post::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            liked_count: value.liked_count,
            view_count: value.view_count,
            date: value.date.and_utc(),
        }
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn save(
        &self,
        post: PostEntity,
    ) -> Result<PostEntity, RepositoryError> {
        let model = post::ActiveModel {
            id: ActiveValue::NotSet,
            title: post.title.into_active_value(),
            content: post.content.into_active_value(),
            liked_count: post.liked_count.into_active_value(),
            view_count: post.view_count.into_active_value(),
            date: post.date.naive_utc().into_active_value(),
        };

        let stored = Post::insert(model)
            .exec_with_returning(&self.db)
            .await
            .into_response("in post insert")?;

        Ok(stored.into())
    }

    async fn find_all(&self) -> Result<Vec<PostEntity>, RepositoryError> {
        let posts = Post::find()
            .all(&self.db)
            .await
            .into_response("in post find all")?;

        Ok(posts.into_iter().map(Into::into).collect())
    }
}
