//! MongoDB document store adapter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

const COLLECTION: &str = "posts";

/// Stored shape of an author sub-document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorDocument {
    first_name: String,
    last_name: String,
}

/// Stored shape of a post document. Ids are uuids rendered as strings so
/// they stay opaque to the driver.
#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    content: String,
    author: AuthorDocument,
    created: chrono::DateTime<chrono::Utc>,
}

impl From<&BlogPost> for PostDocument {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: AuthorDocument {
                first_name: post.author.first_name.clone(),
                last_name: post.author.last_name.clone(),
            },
            created: post.created,
        }
    }
}

impl TryFrom<PostDocument> for BlogPost {
    type Error = RepoError;

    fn try_from(document: PostDocument) -> Result<Self, RepoError> {
        let id = Uuid::parse_str(&document.id)
            .map_err(|e| RepoError::Query(format!("malformed document id: {e}")))?;

        Ok(BlogPost {
            id,
            title: document.title,
            content: document.content,
            author: Author::new(document.author.first_name, document.author.last_name),
            created: document.created,
        })
    }
}

/// MongoDB-backed post store.
pub struct MongoPostStore {
    db: Database,
    posts: Collection<PostDocument>,
}

impl MongoPostStore {
    /// Connect using a connection string. The database name comes from the
    /// connection string path, falling back to `blog`.
    pub async fn connect(url: &str) -> Result<Self, RepoError> {
        tracing::info!("Connecting to document store...");

        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let db = client
            .default_database()
            .unwrap_or_else(|| client.database("blog"));

        tracing::info!(database = %db.name(), "Document store connected");

        let posts = db.collection::<PostDocument>(COLLECTION);
        Ok(Self { db, posts })
    }
}

#[async_trait]
impl PostRepository for MongoPostStore {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let documents: Vec<PostDocument> = self
            .posts
            .find(doc! {})
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        documents.into_iter().map(BlogPost::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let document = self
            .posts
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        document.map(BlogPost::try_from).transpose()
    }

    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let post = draft.into_post(Uuid::new_v4());

        self.posts
            .insert_one(PostDocument::from(&post))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(post)
    }

    async fn insert_many(&self, drafts: Vec<PostDraft>) -> Result<Vec<BlogPost>, RepoError> {
        let posts: Vec<BlogPost> = drafts
            .into_iter()
            .map(|draft| draft.into_post(Uuid::new_v4()))
            .collect();

        self.posts
            .insert_many(posts.iter().map(PostDocument::from))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(posts)
    }

    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let existing = self.find_by_id(id).await?.ok_or(RepoError::NotFound)?;

        let replacement = BlogPost {
            id,
            created: draft.created.unwrap_or(existing.created),
            title: draft.title,
            content: draft.content,
            author: draft.author,
        };

        let result = self
            .posts
            .replace_one(
                doc! { "_id": id.to_string() },
                PostDocument::from(&replacement),
            )
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(replacement)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = self
            .posts
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.posts
            .count_documents(doc! {})
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn clear(&self) -> Result<(), RepoError> {
        tracing::warn!(database = %self.db.name(), "Dropping document store database");
        self.db
            .drop()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }
}
