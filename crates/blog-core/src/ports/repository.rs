use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostDraft};
use crate::error::RepoError;

/// Post repository - the seam between the domain and the document store.
///
/// Implementations assign ids on insert and default `created` to the
/// insertion instant when the draft leaves it unset.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts currently in the store, in insertion order.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Insert one post; the store assigns the id.
    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError>;

    /// Bulk-insert drafts in one shot. Used by fixture seeding.
    async fn insert_many(&self, drafts: Vec<PostDraft>) -> Result<Vec<BlogPost>, RepoError>;

    /// Replace title/content/author of an existing post in place.
    ///
    /// `id` is preserved; `created` keeps its stored value unless the draft
    /// carries an explicit one. Returns `RepoError::NotFound` for unknown ids.
    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<BlogPost, RepoError>;

    /// Permanently remove a post. Returns `RepoError::NotFound` for unknown ids.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Number of posts currently in the store.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Irreversibly erase the entire store content. Test teardown hook.
    async fn clear(&self) -> Result<(), RepoError>;
}
