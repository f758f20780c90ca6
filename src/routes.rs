use crate::{
    maud_conveniences::title,
    routes::{
        index::{delete_student, get_index_route, internal_get_students},
        student_detail::{get_student, internal_get_student_detail},
        student_form::{get_add_student, get_edit_student, post_add_student, post_edit_student},
    },
    state::RosterState,
};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use maud::html;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub mod index;
pub mod student_detail;
pub mod student_form;

pub fn build_router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/add", get(get_add_student).post(post_add_student))
        .route("/edit/{id}", get(get_edit_student).post(post_edit_student))
        .route("/view/{id}", get(get_student))
        .route("/internal/students", get(internal_get_students))
        .route("/internal/students/{id}", delete(delete_student))
        .route("/internal/view/{id}", get(internal_get_student_detail))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(State(state): State<RosterState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        state.render(html! {
            div class="bg-gray-800 p-8 rounded shadow-md max-w-md w-full text-center" {
                (title("Page not found"))
                a href="/" class="text-blue-400 underline" {"Back to all students"}
            }
        }),
    )
}
