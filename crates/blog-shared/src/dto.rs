//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, PostDraft};

/// Author as it appears in request bodies - a structured pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Author::new(dto.first_name, dto.last_name)
    }
}

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl From<CreatePostRequest> for PostDraft {
    fn from(req: CreatePostRequest) -> Self {
        PostDraft {
            title: req.title,
            content: req.content,
            author: req.author.into(),
            created: req.created,
        }
    }
}

/// Request to fully replace an existing post. Carries the resource id,
/// which must match the id in the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl From<UpdatePostRequest> for PostDraft {
    fn from(req: UpdatePostRequest) -> Self {
        PostDraft {
            title: req.title,
            content: req.content,
            author: req.author.into(),
            created: req.created,
        }
    }
}

/// A post as it appears in API responses - author flattened to a
/// space-joined display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author.display_name(),
            content: post.content,
            created: post.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_uses_camel_case_on_the_wire() {
        let dto: AuthorDto =
            serde_json::from_str(r#"{"firstName":"Jane","lastName":"Doe"}"#).unwrap();
        assert_eq!(dto.first_name, "Jane");
        assert_eq!(dto.last_name, "Doe");
    }

    #[test]
    fn response_flattens_author_to_display_string() {
        let post = BlogPost {
            id: Uuid::new_v4(),
            title: "Clickbait #3".to_string(),
            content: "Prose".to_string(),
            author: Author::new("Jane", "Doe"),
            created: Utc::now(),
        };

        let response = PostResponse::from(post);
        assert_eq!(response.author, "Jane Doe");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["author"], "Jane Doe");
    }

    #[test]
    fn create_request_tolerates_missing_created() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"title":"T","content":"C","author":{"firstName":"A","lastName":"B"}}"#,
        )
        .unwrap();
        assert!(req.created.is_none());
    }
}
