//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::PostDraft;
use blog_core::error::DomainError;
use blog_core::ports::PostRepository;
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
///
/// The full collection, no pagination.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "post",
            id,
        })?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let draft = PostDraft::from(body.into_inner());
    draft.validate()?;

    let post = state.posts.insert(draft).await?;
    tracing::debug!(post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /posts/{id}
///
/// Full replace. The body carries the resource id and must agree with the
/// path. Responds 201 on success - nonstandard for a replace, but it is the
/// established contract and the test oracle encodes it.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.id != id {
        return Err(AppError::BadRequest(format!(
            "path id {} and body id {} must refer to the same post",
            id, req.id
        )));
    }

    let draft = PostDraft::from(req);
    draft.validate()?;

    let post = state.posts.replace(id, draft).await?;
    tracing::debug!(post_id = %post.id, "Updated post");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// DELETE /posts/{id} (and the legacy DELETE /{id} alias)
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;
    tracing::debug!(post_id = %id, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}
