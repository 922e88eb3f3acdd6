use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// A course, as listed in search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique identifier. The backend sends this as a number, older exports as a string.
    #[serde(deserialize_with = "string_or_number")]
    pub course_id: String,
    pub category: Category,
    pub ratings: Vec<Rating>,
    pub course_name: String,
    pub description_short: String,
    pub tutor: Tutor,

    /// Date-like strings, only parsed when displayed.
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_name: String,
}

/// A single score left by a learner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub points: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    pub first_name: String,
    pub last_name: String,
    pub is_verified: bool,
}

impl Course {
    /// Decode a single course record
    pub fn from_json(json: &str) -> Result<Self> {
        let course: Course = serde_json::from_str(json)?;
        course.validate()?;

        Ok(course)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.course_id.is_empty() {
            return Err(Error::EmptyCourseId);
        }

        Ok(())
    }

    pub fn tutor_name(&self) -> String {
        format!("{} {}", self.tutor.first_name, self.tutor.last_name)
    }
}

fn string_or_number<'de, D>(de: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Int(i64),
    }

    Ok(match Id::deserialize(de)? {
        Id::Str(s) => s,
        Id::Int(i) => i.to_string(),
    })
}
