use crate::{
    data::student::{Student, StudentId},
    error::RosterResult,
    maud_conveniences::{ButtonColour, link_button, title},
    state::RosterState,
};
use axum::extract::{Path, State};
use maud::{Markup, Render, html};
use secrecy::ExposeSecret;

pub async fn get_student(State(state): State<RosterState>, Path(id): Path<String>) -> Markup {
    let id = StudentId::from(id);

    state.render(html! {
        div class="bg-gray-800 p-8 rounded-lg shadow-xl max-w-md w-full" {
            (title("Student Details"))
            div hx-get={"/internal/view/" (id)} hx-trigger="load" hx-swap="outerHTML" {
                p class="italic text-gray-400" {"Loading..."}
            }
            br;
            (link_button("/", "Back", ButtonColour::Blue))
        }
    })
}

pub async fn internal_get_student_detail(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Markup> {
    let student = state.get(&StudentId::from(id)).await?;
    Ok(student_details(&student))
}

fn field(label: &str, value: impl Render) -> Markup {
    html! {
        p class="text-gray-200" {
            strong class="font-semibold" {(label) ":"}
            " "
            span class="font-medium" {(value)}
        }
    }
}

fn student_details(student: &Student) -> Markup {
    html! {
        div class="py-4 space-y-2" {
            (field("ID", &student.id))
            (field("Name", &student.name))
            (field("Age", student.age))
            (field("Username", &student.username))
            (field("Password", student.password.expose_secret()))
        }
    }
}
