use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::export::*;
use crate::handlers::stats::*;
use crate::handlers::student::*;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/students", student_routes())
}

fn student_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_students, create_student))
        .routes(routes!(export_students))
        .routes(routes!(student_stats))
        .routes(routes!(get_student, update_student, delete_student))
}
