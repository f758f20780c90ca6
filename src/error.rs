use crate::data::student::StudentId;
use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use reqwest::Method;
use snafu::Snafu;
use std::num::ParseIntError;
use url::Url;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error building the HTTP client"))]
    BuildHttpClient { source: reqwest::Error },
    #[snafu(display("Error sending {} {} to the student API", method, url))]
    SendRequest {
        source: reqwest::Error,
        method: Method,
        url: Url,
    },
    #[snafu(display("Student API answered {} {} with status {}", method, url, status))]
    BackendStatus {
        method: Method,
        url: Url,
        status: reqwest::StatusCode,
    },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: StudentId },
    #[snafu(display("{:?} is not a usable student ID", id))]
    InvalidStudentId { id: StudentId },
    #[snafu(display("Error reading the submitted student form"))]
    FormInput { source: FormRejection },
    #[snafu(display("Error decoding the student API response from {}", url))]
    DecodeResponse { source: reqwest::Error, url: Url },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse student API base URL {:?}", raw))]
    ParseBaseUrl {
        source: url::ParseError,
        raw: String,
    },
    #[snafu(display("Student API base URL {:?} cannot have paths appended", raw))]
    BaseUrlCannotBeABase { raw: String },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseNumber {
        source: ParseIntError,
        name: &'static str,
    },
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //backend misbehaved
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::BuildHttpClient { .. } => ISE,
            Self::SendRequest { .. } | Self::BackendStatus { .. } => BG,
            Self::MissingStudent { .. } => NF,
            Self::InvalidStudentId { .. } => BI,
            Self::FormInput { source } => source.status(),
            Self::DecodeResponse { .. } => BG,
            Self::BadEnvVar { .. } | Self::ParseNumber { .. } => ISE,
            Self::ParseBaseUrl { .. } | Self::BaseUrlCannotBeABase { .. } => ISE,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        error!(?self, "Error!");
        let detail = match &self {
            Self::FormInput { source } => Some(source.body_text()),
            _ => None,
        };
        let body = html! {
            div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                strong class="font-bold" {"Roster Error: "}
                span {(self.to_string())}
                @if let Some(detail) = detail {
                    p class="text-sm" {(detail)}
                }
            }
        };
        (status_code, Html(body.into_string())).into_response()
    }
}
