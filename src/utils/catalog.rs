use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::models::{
    course::{Course, CourseDef},
    error::MogiError,
};

/// Leading marker for the alternate ("road") layout of a course.
pub const ALT_MARKER: char = '道';
pub const ALT_ID_PREFIX: &str = "alt:";

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Immutable lookup from normalized names and aliases to courses.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl CourseCatalog {
    /// Builds the index. On key collision the later course wins.
    pub fn build(courses: Vec<Course>) -> Self {
        let mut index = HashMap::new();
        for (position, course) in courses.iter().enumerate() {
            index.insert(normalize(&course.name), position);
            for alias in &course.aliases {
                let key = normalize(alias);
                if !key.is_empty() {
                    index.insert(key, position);
                }
            }
        }
        Self { courses, index }
    }

    /// Builds the index from raw catalog JSON, which must be an array of
    /// `{id, name, aliases?}` objects.
    pub fn from_json(value: Value) -> Result<Self, MogiError> {
        let Value::Array(entries) = value else {
            return Err(MogiError::CatalogLoadFailure(
                "catalog must be a JSON array".to_string(),
            ));
        };

        let mut courses = Vec::with_capacity(entries.len());
        for (position, entry) in entries.into_iter().enumerate() {
            let def: CourseDef = serde_json::from_value(entry).map_err(|e| {
                MogiError::CatalogLoadFailure(format!("entry {position}: {e}"))
            })?;
            match def.into_course() {
                Some(course) => courses.push(course),
                None => warn!("Skipping catalog entry {} without id or name", position),
            }
        }

        Ok(Self::build(courses))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn lookup(&self, value: &str) -> Option<&Course> {
        self.index
            .get(&normalize(value))
            .and_then(|&position| self.courses.get(position))
    }

    /// Resolves free-form course input. Empty input means no course.
    pub fn resolve(&self, raw: &str) -> Result<Option<Course>, MogiError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        if self.is_empty() {
            return Err(MogiError::CatalogNotLoaded);
        }

        let Some(rest) = raw.strip_prefix(ALT_MARKER) else {
            return self
                .lookup(raw)
                .cloned()
                .map(Some)
                .ok_or_else(|| MogiError::UnknownCourse(raw.to_string()));
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(MogiError::UnknownCourse(raw.to_string()));
        }
        let base = self
            .lookup(rest)
            .ok_or_else(|| MogiError::UnknownCourse(raw.to_string()))?;

        Ok(Some(Course {
            id: format!("{}{}", ALT_ID_PREFIX, base.id),
            name: format!("{}{}", ALT_MARKER, base.name),
            aliases: base.aliases.clone(),
        }))
    }
}
