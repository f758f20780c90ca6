use crate::{
    data::student::{Student, StudentForm, StudentId},
    error::RosterResult,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

/// The external student backend. Every view goes through this, so nothing is cached on our side.
#[async_trait]
pub trait StudentApi: Send + Sync + Debug {
    async fn list(&self) -> RosterResult<Vec<Student>>;
    async fn get(&self, id: &StudentId) -> RosterResult<Student>;
    async fn create(&self, form: &StudentForm) -> RosterResult<Student>;
    async fn update(&self, id: &StudentId, form: &StudentForm) -> RosterResult<Student>;
    async fn delete(&self, id: &StudentId) -> RosterResult<()>;
}
