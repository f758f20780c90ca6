use crate::{
    data::student::{StudentForm, StudentId},
    error::{FormInputSnafu, RosterResult},
    maud_conveniences::{form_submit_button, simple_form_element, title},
    state::RosterState,
};
use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::Redirect,
};
use maud::{Markup, html};
use secrecy::ExposeSecret;
use snafu::ResultExt;

/// The one form does both jobs: a blank create, or an edit of an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(StudentId),
}

impl FormMode {
    const fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Add Student",
            Self::Edit(_) => "Edit Student",
        }
    }

    fn action(&self) -> String {
        match self {
            Self::Create => "/add".to_string(),
            Self::Edit(id) => format!("/edit/{id}"),
        }
    }
}

pub async fn get_add_student(State(state): State<RosterState>) -> Markup {
    state.render(student_form(&FormMode::Create, None))
}

pub async fn get_edit_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Markup> {
    let id = StudentId::from(id);
    let current = StudentForm::from(state.get(&id).await?);

    Ok(state.render(student_form(&FormMode::Edit(id), Some(&current))))
}

pub async fn post_add_student(
    State(state): State<RosterState>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> RosterResult<Redirect> {
    let Form(form) = form.context(FormInputSnafu)?;
    submit(&state, &FormMode::Create, &form).await
}

pub async fn post_edit_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> RosterResult<Redirect> {
    let Form(form) = form.context(FormInputSnafu)?;
    submit(&state, &FormMode::Edit(StudentId::from(id)), &form).await
}

async fn submit(state: &RosterState, mode: &FormMode, form: &StudentForm) -> RosterResult<Redirect> {
    match mode {
        FormMode::Create => state.create(form).await?,
        FormMode::Edit(id) => state.update(id, form).await?,
    };

    Ok(Redirect::to("/"))
}

fn student_form(mode: &FormMode, current: Option<&StudentForm>) -> Markup {
    let age = current.map(|c| c.age.to_string());

    html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-md" {
            (title(mode.heading()))
            form method="post" action=(mode.action()) {
                (simple_form_element("name", "Name", true, None, current.map(|c| c.name.as_str())))
                (simple_form_element("age", "Age", true, Some("number"), age.as_deref()))
                (simple_form_element("username", "Username", true, None, current.map(|c| c.username.as_str())))
                (simple_form_element("password", "Password", true, Some("password"), current.map(|c| c.password.expose_secret())))
                (form_submit_button(Some("Submit")))
            }
        }
    }
}
