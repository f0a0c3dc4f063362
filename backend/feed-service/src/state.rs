/// Shared handler state
use crate::llm::CompletionProvider;
use crate::repository::{
    CommentRepository, CommentStore, LikeRepository, LikeStore, PostRepository, PostStore,
};
use crate::services::{CommentService, LikeService, PostService, SuggestionService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub comments: CommentService,
    pub likes: LikeService,
    pub suggestions: SuggestionService,
}

impl AppState {
    pub fn new(
        post_store: Arc<dyn PostStore>,
        comment_store: Arc<dyn CommentStore>,
        like_store: Arc<dyn LikeStore>,
        completion: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            posts: PostService::new(post_store, comment_store.clone(), like_store.clone()),
            comments: CommentService::new(comment_store),
            likes: LikeService::new(like_store),
            suggestions: SuggestionService::new(completion),
        }
    }

    /// State backed by the PostgreSQL repositories
    pub fn with_pool(pool: PgPool, completion: Arc<dyn CompletionProvider>) -> Self {
        Self::new(
            Arc::new(PostRepository::new(pool.clone())),
            Arc::new(CommentRepository::new(pool.clone())),
            Arc::new(LikeRepository::new(pool)),
            completion,
        )
    }
}
