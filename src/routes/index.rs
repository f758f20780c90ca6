use crate::{
    data::student::{Student, StudentId},
    error::RosterResult,
    maud_conveniences::{ButtonColour, link_button, table, title},
    state::RosterState,
};
use axum::extract::{Path, State};
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<RosterState>) -> Markup {
    state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            div class="flex flex-row items-center justify-between" {
                (title("Student Management"))
                (link_button("/add", "Add Student", ButtonColour::Blue))
            }
            div id="all_students" hx-get="/internal/students" hx-trigger="load" {
                p class="italic text-gray-400" {"Loading..."}
            }
        }
    })
}

pub async fn internal_get_students(State(state): State<RosterState>) -> RosterResult<Markup> {
    let students = state.list().await?;
    Ok(students_table(students))
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Markup> {
    state.delete(&StudentId::from(id)).await?;

    internal_get_students(State(state)).await
}

fn students_table(students: Vec<Student>) -> Markup {
    let rows = students
        .into_iter()
        .map(|student| {
            let id = student.id;
            [
                html! {(id)},
                html! {(student.name)},
                html! {(student.age)},
                html! {(student.username)},
                html! {
                    div class="flex flex-row items-center" {
                        (link_button(html!{"/view/" (id)}, "View", ButtonColour::Teal))
                        (link_button(html!{"/edit/" (id)}, "Edit", ButtonColour::Amber))
                        button class={(ButtonColour::Red.classes()) " font-bold py-2 px-4 rounded"} hx-delete={"/internal/students/" (id)} hx-target="#all_students" {
                            "Delete"
                        }
                    }
                },
            ]
        })
        .collect();

    table(["ID", "Name", "Age", "Username", "Actions"], rows)
}
