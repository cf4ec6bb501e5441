//! In-memory document store - used by tests and as fallback when no
//! connection string is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post store backed by a Vec under an async RwLock.
///
/// Preserves insertion order for `find_all`. Ids are assigned with
/// `Uuid::new_v4`, so a deleted id is never handed out again.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let post = draft.into_post(Uuid::new_v4());
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, drafts: Vec<PostDraft>) -> Result<Vec<BlogPost>, RepoError> {
        let mut posts = self.posts.write().await;
        let mut inserted = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let post = draft.into_post(Uuid::new_v4());
            posts.push(post.clone());
            inserted.push(post);
        }
        Ok(inserted)
    }

    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let existing = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        existing.title = draft.title;
        existing.content = draft.content;
        existing.author = draft.author;
        // `created` keeps its stored value unless explicitly overwritten
        if let Some(created) = draft.created {
            existing.created = created;
        }

        Ok(existing.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.len() as u64)
    }

    async fn clear(&self) -> Result<(), RepoError> {
        tracing::warn!("Clearing post store");
        let mut posts = self.posts.write().await;
        posts.clear();
        Ok(())
    }
}
