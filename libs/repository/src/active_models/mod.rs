pub mod post;

pub mod prelude {
    pub use super::post::Entity as Post;
}
