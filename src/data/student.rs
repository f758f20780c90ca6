use maud::Render;
use secrecy::{ExposeSecret, SecretString};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};
use std::fmt::{self, Display, Formatter};

/// Backend-assigned identifier. The API may hand these out as numbers or strings,
/// so we keep the textual form and splice it straight into paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StudentId(String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StudentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Render for StudentId {
    fn render_to(&self, buffer: &mut String) {
        self.0.render_to(buffer);
    }
}

struct StudentIdVisitor;

impl Visitor<'_> for StudentIdVisitor {
    type Value = StudentId;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a student id as a number or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(StudentId(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(StudentId(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StudentId(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(StudentId(v))
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StudentIdVisitor)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i64,
    pub username: String,
    pub password: SecretString,
}

/// What the add/edit form posts back, keyed by input name.
#[derive(Deserialize, Debug, Clone)]
pub struct StudentForm {
    pub name: String,
    pub age: i64,
    pub username: String,
    pub password: SecretString,
}

/// JSON body for create/update calls. Never carries the id.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StudentBody<'a> {
    pub name: &'a str,
    pub age: i64,
    pub username: &'a str,
    pub password: &'a str,
}

impl StudentForm {
    pub fn as_body(&self) -> StudentBody<'_> {
        StudentBody {
            name: &self.name,
            age: self.age,
            username: &self.username,
            password: self.password.expose_secret(),
        }
    }
}

impl From<Student> for StudentForm {
    fn from(
        Student {
            id: _,
            name,
            age,
            username,
            password,
        }: Student,
    ) -> Self {
        Self {
            name,
            age,
            username,
            password,
        }
    }
}
