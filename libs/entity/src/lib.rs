pub mod post;

pub mod prelude {
    pub use crate::post::Post as PostEntity;
}
