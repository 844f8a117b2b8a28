use crate::api::routes::users;
use shared::models::api::{ErrorResponse, SuccessResponse};
use shared::models::user::{CreateUserRequest, User};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub(crate) const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub(crate) const SWAGGER_UI_PATH: &str = "/swagger/{_:.*}";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0",
        description = "A sample users API with generated OpenAPI documentation",
        terms_of_service = "http://swagger.io/terms/",
        contact(name = "API Support", email = "support@swagger.io"),
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "Versioned API base path")
    ),
    paths(
        users::get_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user
    ),
    components(
        schemas(User, CreateUserRequest, ErrorResponse, SuccessResponse)
    ),
    tags(
        (name = "users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the generated document it browses.
pub(crate) fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
