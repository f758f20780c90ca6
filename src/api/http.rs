use crate::{
    api::StudentApi,
    config::ApiConfig,
    data::student::{Student, StudentBody, StudentForm, StudentId},
    error::{
        BackendStatusSnafu, BaseUrlCannotBeABaseSnafu, BuildHttpClientSnafu, DecodeResponseSnafu,
        InvalidStudentIdSnafu, MissingStudentSnafu, RosterResult, SendRequestSnafu,
    },
};
use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use snafu::{OptionExt, ResultExt, ensure};
use std::sync::Arc;
use url::Url;

/// Talks JSON to the student REST API over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl HttpStudentApi {
    pub fn new(config: Arc<ApiConfig>) -> RosterResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .context(BuildHttpClientSnafu)?;

        Ok(Self { http, config })
    }

    fn collection_url(&self) -> Url {
        self.config.base_url().clone()
    }

    fn record_url(&self, id: &StudentId) -> RosterResult<Url> {
        //dot segments would be normalised away into the collection path
        ensure!(
            !matches!(id.as_str(), "" | "." | ".."),
            InvalidStudentIdSnafu { id: id.clone() }
        );

        let base = self.config.base_url();
        let mut url = base.clone();
        url.path_segments_mut()
            .ok()
            .context(BaseUrlCannotBeABaseSnafu {
                raw: base.to_string(),
            })?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<StudentBody<'_>>,
        record: Option<&StudentId>,
    ) -> RosterResult<Response> {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.context(SendRequestSnafu {
            method: method.clone(),
            url: url.clone(),
        })?;

        let status = response.status();
        debug!(%method, %url, %status, "student API responded");

        if let Some(id) = record {
            ensure!(status != StatusCode::NOT_FOUND, MissingStudentSnafu { id: id.clone() });
        }
        ensure!(
            status.is_success(),
            BackendStatusSnafu {
                method,
                url,
                status
            }
        );

        Ok(response)
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<StudentBody<'_>>,
        record: Option<&StudentId>,
    ) -> RosterResult<T> {
        let response = self.send(method, url.clone(), body, record).await?;
        response.json().await.context(DecodeResponseSnafu { url })
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn list(&self) -> RosterResult<Vec<Student>> {
        let students: Vec<Student> = self
            .send_and_decode(Method::GET, self.collection_url(), None, None)
            .await?;
        debug!(count = students.len(), "fetched students");
        Ok(students)
    }

    async fn get(&self, id: &StudentId) -> RosterResult<Student> {
        self.send_and_decode(Method::GET, self.record_url(id)?, None, Some(id))
            .await
    }

    async fn create(&self, form: &StudentForm) -> RosterResult<Student> {
        let created: Student = self
            .send_and_decode(
                Method::POST,
                self.collection_url(),
                Some(form.as_body()),
                None,
            )
            .await?;
        info!(id = %created.id, username = %created.username, "created student");
        Ok(created)
    }

    async fn update(&self, id: &StudentId, form: &StudentForm) -> RosterResult<Student> {
        let updated = self
            .send_and_decode(Method::PUT, self.record_url(id)?, Some(form.as_body()), Some(id))
            .await?;
        info!(%id, "updated student");
        Ok(updated)
    }

    async fn delete(&self, id: &StudentId) -> RosterResult<()> {
        self.send(Method::DELETE, self.record_url(id)?, None, Some(id))
            .await?;
        info!(%id, "deleted student");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use axum::{
        Json, Router,
        extract::State,
        http::Uri,
        response::{IntoResponse, Response as AxumResponse},
        routing::any,
    };
    use secrecy::ExposeSecret;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use tokio::net::TcpListener;

    type Log = Arc<Mutex<Vec<(Method, String, Option<Value>)>>>;

    fn student_json(id: &str) -> Value {
        json!({"id": id.parse::<u64>().map_or_else(|_| json!(id), |n| json!(n)), "name": "Ada", "age": 20, "username": "ada", "password": "hunter2"})
    }

    async fn fake_backend(
        State(log): State<Log>,
        method: Method,
        uri: Uri,
        body: String,
    ) -> AxumResponse {
        let body: Option<Value> = (!body.is_empty()).then(|| serde_json::from_str(&body).expect("body should be json"));
        log.lock()
            .expect("log mutex should lock")
            .push((method.clone(), uri.path().to_string(), body.clone()));

        let id = uri.path().trim_start_matches("/api/student").trim_start_matches('/');
        match (method, id) {
            (_, "404") => StatusCode::NOT_FOUND.into_response(),
            (_, "500") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            (_, "garbled") => "this is not json".into_response(),
            (Method::GET, "") => Json(json!([student_json("1"), student_json("2")])).into_response(),
            (Method::POST, "") => {
                let mut created = body.unwrap_or_default();
                created["id"] = json!(9);
                (StatusCode::CREATED, Json(created)).into_response()
            }
            (Method::GET, id) => Json(student_json(id)).into_response(),
            (Method::PUT, id) => {
                let mut updated = body.unwrap_or_default();
                updated["id"] = json!(id);
                Json(updated).into_response()
            }
            (Method::DELETE, _) => StatusCode::NO_CONTENT.into_response(),
            _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        }
    }

    async fn spawn_backend() -> (HttpStudentApi, Log) {
        let log = Log::default();
        let app = Router::new()
            .route("/api/student/", any(fake_backend))
            .route("/api/student/{id}", any(fake_backend))
            .with_state(log.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        //no trailing slash on purpose
        let config = ApiConfig::with_base_url(&format!("http://{addr}/api/student")).unwrap();
        (HttpStudentApi::new(Arc::new(config)).unwrap(), log)
    }

    fn form() -> StudentForm {
        StudentForm {
            name: "A".into(),
            age: 20,
            username: "a".into(),
            password: "p".into(),
        }
    }

    #[tokio::test]
    async fn list_reads_the_collection_path() {
        let (api, log) = spawn_backend().await;

        let students = api.list().await.unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[1].id.as_str(), "2");
        assert_eq!(
            *log.lock().unwrap(),
            vec![(Method::GET, "/api/student/".to_string(), None)]
        );
    }

    #[tokio::test]
    async fn get_reads_the_record_path() {
        let (api, log) = spawn_backend().await;

        let student = api.get(&StudentId::from("7")).await.unwrap();

        assert_eq!(student.id.as_str(), "7");
        assert_eq!(student.password.expose_secret(), "hunter2");
        assert_eq!(log.lock().unwrap()[0].1, "/api/student/7");
    }

    #[tokio::test]
    async fn create_posts_exactly_the_form_body() {
        let (api, log) = spawn_backend().await;

        let created = api.create(&form()).await.unwrap();

        assert_eq!(created.id.as_str(), "9");
        assert_eq!(
            *log.lock().unwrap(),
            vec![(
                Method::POST,
                "/api/student/".to_string(),
                Some(json!({"name": "A", "age": 20, "username": "a", "password": "p"}))
            )]
        );
    }

    #[tokio::test]
    async fn update_puts_to_the_record_path() {
        let (api, log) = spawn_backend().await;

        let updated = api.update(&StudentId::from("7"), &form()).await.unwrap();

        assert_eq!(updated.id.as_str(), "7");
        let log = log.lock().unwrap();
        assert_eq!(log[0].0, Method::PUT);
        assert_eq!(log[0].1, "/api/student/7");
        assert_eq!(
            log[0].2,
            Some(json!({"name": "A", "age": 20, "username": "a", "password": "p"}))
        );
    }

    #[tokio::test]
    async fn delete_hits_the_record_path_without_a_body() {
        let (api, log) = spawn_backend().await;

        api.delete(&StudentId::from("7")).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![(Method::DELETE, "/api/student/7".to_string(), None)]
        );
    }

    #[tokio::test]
    async fn ids_are_percent_encoded_into_one_segment() {
        let (api, log) = spawn_backend().await;

        let _ = api.delete(&StudentId::from("a/b")).await;

        assert_eq!(log.lock().unwrap()[0].1, "/api/student/a%2Fb");
    }

    #[tokio::test]
    async fn dot_ids_never_reach_the_backend() {
        let (api, log) = spawn_backend().await;

        for raw in ["..", ".", ""] {
            let id = StudentId::from(raw);
            assert!(matches!(api.get(&id).await, Err(RosterError::InvalidStudentId { .. })));
            assert!(matches!(
                api.update(&id, &form()).await,
                Err(RosterError::InvalidStudentId { .. })
            ));
            assert!(matches!(api.delete(&id).await, Err(RosterError::InvalidStudentId { .. })));
        }

        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dotted_ids_are_still_ordinary_segments() {
        let (api, log) = spawn_backend().await;

        api.delete(&StudentId::from("...")).await.unwrap();

        assert_eq!(log.lock().unwrap()[0].1, "/api/student/...");
    }

    #[tokio::test]
    async fn not_found_becomes_missing_student() {
        let (api, _log) = spawn_backend().await;

        let err = api.get(&StudentId::from("404")).await.unwrap_err();

        assert!(matches!(err, RosterError::MissingStudent { id } if id.as_str() == "404"));
    }

    #[tokio::test]
    async fn server_errors_are_reported_with_status() {
        let (api, _log) = spawn_backend().await;

        let err = api.delete(&StudentId::from("500")).await.unwrap_err();

        assert!(matches!(
            err,
            RosterError::BackendStatus { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn garbled_bodies_fail_to_decode() {
        let (api, _log) = spawn_backend().await;

        let err = api.get(&StudentId::from("garbled")).await.unwrap_err();

        assert!(matches!(err, RosterError::DecodeResponse { .. }));
    }

    #[tokio::test]
    async fn unreachable_backend_fails_to_send() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ApiConfig::with_base_url(&format!("http://{addr}/api/student/")).unwrap();
        let api = HttpStudentApi::new(Arc::new(config)).unwrap();

        let err = api.list().await.unwrap_err();
        assert!(matches!(err, RosterError::SendRequest { .. }));
    }
}
