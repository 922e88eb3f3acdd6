//! Data model for THUtorium course search results.
//!
//! Search results are produced elsewhere (the web backend, or a cached export of it)
//! and handed to us as JSON. This crate decodes and validates them.
pub mod course;

use std::io::Read;

use log::debug;
use thiserror::Error;

pub use course::{Category, Course, Rating, Tutor};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed course record")]
    MalformedInput(#[from] serde_json::Error),

    #[error("course record has an empty courseId")]
    EmptyCourseId,

    #[error("io error")]
    IOError(#[from] std::io::Error),
}

/// Decode a JSON array of course records, as returned by a course search.
pub fn parse_search_results(json: &str) -> Result<Vec<Course>> {
    let courses: Vec<Course> = serde_json::from_str(json)?;
    validate_all(&courses)?;
    debug!("decoded {} search results", courses.len());

    Ok(courses)
}

/// Read and decode search results from anything readable, ie a file or stdin.
pub fn load_search_results(mut reader: impl Read) -> Result<Vec<Course>> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    parse_search_results(&s)
}

fn validate_all(courses: &[Course]) -> Result<()> {
    courses.iter().try_for_each(Course::validate)
}
