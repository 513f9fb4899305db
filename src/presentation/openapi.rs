use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::users::register,
        crate::presentation::http::users::login,
        crate::presentation::http::users::me,
        crate::presentation::http::users::logout,
        crate::presentation::http::todos::create_todo,
        crate::presentation::http::todos::list_todos,
        crate::presentation::http::todos::get_todo,
        crate::presentation::http::todos::delete_todo,
        crate::presentation::http::todos::update_todo,
        crate::presentation::http::health::health,
    ),
    components(schemas(
        crate::presentation::http::users::CredentialsRequest,
        crate::presentation::http::users::UserResponse,
        crate::presentation::http::todos::Todo,
        crate::presentation::http::todos::TodoListResponse,
        crate::presentation::http::todos::TodoResponse,
        crate::presentation::http::todos::CreateTodoRequest,
        crate::presentation::http::todos::UpdateTodoRequest,
        crate::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Users", description = "Registration, login and tokens"),
        (name = "Todos", description = "Per-user todo items"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;
