use serde::{Deserialize, Serialize};

/// A catalog course. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Aliases arrive either as a list or as one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Aliases {
    List(Vec<String>),
    Joined(String),
}

impl Aliases {
    pub fn into_vec(self) -> Vec<String> {
        let raw = match self {
            Aliases::List(list) => list,
            Aliases::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|alias| alias.trim().to_string())
            .filter(|alias| !alias.is_empty())
            .collect()
    }
}

/// One raw catalog entry as it appears in the catalog JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseDef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub aliases: Option<Aliases>,
}

impl CourseDef {
    /// Entries without a usable id or name are dropped.
    pub fn into_course(self) -> Option<Course> {
        let name = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())?;
        let id = self.id.map(|i| i.trim().to_string()).filter(|i| !i.is_empty())?;
        Some(Course {
            id,
            name,
            aliases: self.aliases.map(Aliases::into_vec).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_aliases_are_split_and_trimmed() {
        let def: CourseDef = serde_json::from_value(serde_json::json!({
            "id": "mbc",
            "name": "Mario Bros. Circuit",
            "aliases": " MBC , mario circuit,, "
        }))
        .unwrap();
        let course = def.into_course().unwrap();
        assert_eq!(course.aliases, vec!["MBC", "mario circuit"]);
    }

    #[test]
    fn entry_without_name_is_dropped() {
        let def: CourseDef =
            serde_json::from_value(serde_json::json!({ "id": "x", "aliases": ["a"] })).unwrap();
        assert!(def.into_course().is_none());
    }
}
