//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    domain::{PostContent, PostId, UserId, Username},
    infrastructure::dto::http::{
        ConnectionsDto, CreatePostRequest, CreateUserRequest, LikeDto, LikeRequest,
        PostDetailDto, PostDto, UserDto,
    },
    ui::{
        error::ApiError,
        extract::{ApiJson, ApiPath},
        state::AppState,
    },
    usecase::{
        CreatePostUseCase, DeletePostUseCase, LikePostUseCase, RegisterUserUseCase,
        UnlikePostUseCase,
    },
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Number of live notification streams (for testing purposes)
pub async fn debug_connections(State(state): State<Arc<AppState>>) -> Json<ConnectionsDto> {
    Json(ConnectionsDto {
        connections: state.registry.count().await,
    })
}

/// Register a user
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let username = Username::new(request.username)?;

    let usecase = RegisterUserUseCase::new(state.users.clone());
    let user = usecase.execute(username).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(&user))))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<UserDto>, ApiError> {
    let user_id = UserId::new(user_id)?;
    let user = state.users.find_user(user_id).await?;
    Ok(Json(UserDto::from(&user)))
}

/// Create a post
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostDto>), ApiError> {
    let author_id = UserId::new(request.user_id)?;
    let content = PostContent::new(request.content)?;

    let usecase = CreatePostUseCase::new(state.users.clone(), state.posts.clone());
    let post = usecase.execute(author_id, content).await?;

    Ok((StatusCode::CREATED, Json(PostDto::from(&post))))
}

/// Get a post with its like count
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<PostDetailDto>, ApiError> {
    let post_id = PostId::new(post_id)?;
    let post = state.posts.find_post_with_author(post_id).await?;
    let like_count = state.likes.count_by_post(post_id).await?;

    Ok(Json(PostDetailDto {
        post: PostDto::from(&post),
        like_count,
    }))
}

/// Delete a post and its likes
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    let post_id = PostId::new(post_id)?;

    let usecase = DeletePostUseCase::new(state.posts.clone(), state.likes.clone());
    usecase.execute(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Like a post. Notifies the author if they have a stream open.
pub async fn like_post(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
    ApiJson(request): ApiJson<LikeRequest>,
) -> Result<(StatusCode, Json<LikeDto>), ApiError> {
    let post_id = PostId::new(post_id)?;
    let user_id = UserId::new(request.user_id)?;

    let usecase = LikePostUseCase::new(
        state.posts.clone(),
        state.likes.clone(),
        state.dispatcher.clone(),
    );
    let like = usecase.execute(user_id, post_id).await?;
    tracing::info!("User {} liked post {}", user_id, post_id);

    Ok((StatusCode::CREATED, Json(LikeDto::from(&like))))
}

/// Remove a like
pub async fn unlike_post(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
    ApiJson(request): ApiJson<LikeRequest>,
) -> Result<StatusCode, ApiError> {
    let post_id = PostId::new(post_id)?;
    let user_id = UserId::new(request.user_id)?;

    let usecase = UnlikePostUseCase::new(state.likes.clone());
    usecase.execute(user_id, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
