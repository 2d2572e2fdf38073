use std::sync::Arc;

use chrono::Utc;
use entity::prelude::*;
use repository::{PostStore, RepositoryError};

/// Applies the create-time field rules, then hands the record to the
/// store. The store comes in through the constructor so tests can swap
/// in a fake.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Counters start at zero and `date` is the server clock, whatever
    /// the caller put in the body.
    pub async fn create_post(
        &self,
        mut post: PostEntity,
    ) -> Result<PostEntity, RepositoryError> {
        post.liked_count = 0;
        post.view_count = 0;
        post.date = Utc::now();

        self.store.save(post).await
    }

    pub async fn list_posts(
        &self,
    ) -> Result<Vec<PostEntity>, RepositoryError> {
        self.store.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        posts: Mutex<Vec<PostEntity>>,
        next_id: AtomicI32,
    }

    #[async_trait]
    impl PostStore for MemoryStore {
        async fn save(
            &self,
            mut post: PostEntity,
        ) -> Result<PostEntity, RepositoryError> {
            post.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            self.posts.lock().unwrap().push(post.clone());
            Ok(post)
        }

        async fn find_all(&self) -> Result<Vec<PostEntity>, RepositoryError> {
            Ok(self.posts.lock().unwrap().clone())
        }
    }

    fn input_post() -> PostEntity {
        PostEntity {
            title: "Hello".to_string(),
            content: "World".to_string(),
            liked_count: 99,
            view_count: 50,
            date: Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_post_zeroes_counters_and_stamps_date() {
        let service = PostService::new(Arc::new(MemoryStore::default()));

        let before = Utc::now();
        let stored = service.create_post(input_post()).await.unwrap();

        assert_eq!(stored.liked_count, 0);
        assert_eq!(stored.view_count, 0);
        assert!(stored.date >= before);
        assert!(stored.date <= Utc::now() + Duration::seconds(1));
    }

    #[tokio::test]
    async fn create_post_assigns_fresh_ids() {
        let service = PostService::new(Arc::new(MemoryStore::default()));

        let first = service.create_post(input_post()).await.unwrap();
        let second = service.create_post(input_post()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn list_posts_returns_everything_saved() {
        let service = PostService::new(Arc::new(MemoryStore::default()));

        for _ in 0..3 {
            service.create_post(input_post()).await.unwrap();
        }
        let posts = service.list_posts().await.unwrap();

        assert_eq!(posts.len(), 3);
    }
}
