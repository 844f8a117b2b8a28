use crate::api::server::AppState;
use crate::error::ApiError;
use actix_web::{
    web::{self, delete, get, post, put, Data},
    HttpRequest, HttpResponse, Scope,
};
use log::{debug, info};
use shared::models::api::{ErrorResponse, SuccessResponse};
use shared::models::user::{CreateUserRequest, User};
use utoipa::IntoParams;

pub(crate) const DEFAULT_PAGE: i64 = 1;
pub(crate) const DEFAULT_LIMIT: i64 = 10;

/// Pagination parameters of the list endpoint. They are accepted and
/// reported but never applied to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct ListUsersQuery {
    /// Page number
    #[param(default = 1, minimum = 1)]
    page: Option<i64>,
    /// Number of items per page
    #[param(default = 10, minimum = 1)]
    limit: Option<i64>,
}

impl ListUsersQuery {
    /// Unparseable values are treated as absent rather than rejected.
    pub(crate) fn from_query_string(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => parsed.page = value.trim().parse().ok(),
                "limit" => parsed.limit = value.trim().parse().ok(),
                _ => {}
            }
        }
        parsed
    }

    pub(crate) fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub(crate) fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[utoipa::path(
    get,
    path = "/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    ),
    tag = "users",
    summary = "Get all users",
    description = "Get a list of all users. Pagination parameters are accepted but not applied."
)]
pub(crate) async fn get_users(req: HttpRequest, app_state: Data<AppState>) -> HttpResponse {
    let query = ListUsersQuery::from_query_string(req.query_string());
    debug!(
        "Listing users (page={}, limit={}, pagination not applied)",
        query.page(),
        query.limit()
    );
    HttpResponse::Ok().json(app_state.user_store.get_users())
}

/// Last path segment as sent by the client, before percent-decoding, so
/// `/users/%31` does not resolve to user `1`.
fn raw_path_id(req: &HttpRequest) -> &str {
    req.uri().path().rsplit('/').next().unwrap_or_default()
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "users",
    summary = "Get user by ID",
    description = "Get a single user by their ID"
)]
pub(crate) async fn get_user(req: HttpRequest, app_state: Data<AppState>) -> HttpResponse {
    let id = raw_path_id(&req);
    match app_state.user_store.get_user(id) {
        Some(user) => HttpResponse::Ok().json(user),
        None => {
            let err = ApiError::UserNotFound(id.to_string());
            debug!("{err}");
            err.into()
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    request_body(content = CreateUserRequest, description = "User data", content_type = "application/json"),
    responses(
        (status = 201, description = "User created", body = SuccessResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse)
    ),
    tag = "users",
    summary = "Create a new user",
    description = "Create a new user with the provided information"
)]
pub(crate) async fn create_user(body: web::Bytes, app_state: Data<AppState>) -> HttpResponse {
    let request = match CreateUserRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => {
            let err = ApiError::from(e);
            debug!("Rejecting create: {err}");
            return err.into();
        }
    };

    let user = app_state.user_store.create_user(request);
    HttpResponse::Created().json(SuccessResponse::with_user(
        "User created successfully",
        user,
    ))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body(content = CreateUserRequest, description = "Updated user data", content_type = "application/json"),
    responses(
        (status = 200, description = "User updated", body = SuccessResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse)
    ),
    tag = "users",
    summary = "Update an existing user",
    description = "Update user information by ID"
)]
pub(crate) async fn update_user(
    id: web::Path<String>,
    body: web::Bytes,
    app_state: Data<AppState>,
) -> HttpResponse {
    info!("Update user id: {id}");

    let request = match CreateUserRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => {
            let err = ApiError::from(e);
            debug!("Rejecting update of {id}: {err}");
            return err.into();
        }
    };

    let user = app_state.user_store.update_user(&id, request);
    HttpResponse::Ok().json(SuccessResponse::with_user(
        "User updated successfully",
        user,
    ))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = SuccessResponse)
    ),
    tag = "users",
    summary = "Delete a user",
    description = "Delete a user by ID"
)]
pub(crate) async fn delete_user(id: web::Path<String>, app_state: Data<AppState>) -> HttpResponse {
    info!("Delete user id: {id}");

    app_state.user_store.delete_user(&id);
    HttpResponse::Ok().json(SuccessResponse::message_only("User deleted successfully"))
}

pub(crate) fn users_routes() -> Scope {
    web::scope("/users")
        .service(
            web::resource("")
                .route(get().to(get_users))
                .route(post().to(create_user)),
        )
        .service(
            web::resource("/{id}")
                .route(get().to(get_user))
                .route(put().to(update_user))
                .route(delete().to(delete_user)),
        )
}
