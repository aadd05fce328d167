use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub const RACES_PER_MOGI: usize = 12;
pub const DEFAULT_PARTICIPANTS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub race_number: u32,
    pub race_rank: u32,
    pub overall_rank: u32,
    /// Cumulative points after this race.
    pub points: u32,
    pub course_id: Option<String>,
    pub course_name: Option<String>,
}

/// One session of twelve races.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mogi {
    pub id: Uuid,
    #[serde(deserialize_with = "date_or_today")]
    pub date: NaiveDate,
    pub participants: u32,
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub final_rank: Option<u32>,
    #[serde(default)]
    pub average_rank: Option<f64>,
}

/// A cleared date field is stored as `""`; read it as today.
fn date_or_today<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Utc::now().date_naive());
    }
    raw.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MogiStatus {
    InProgress,
    Complete,
}

impl Mogi {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now().date_naive(),
            participants: DEFAULT_PARTICIPANTS,
            races: Vec::new(),
            final_rank: None,
            average_rank: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.races.len() >= RACES_PER_MOGI
    }

    pub fn status(&self) -> MogiStatus {
        if self.is_complete() {
            MogiStatus::Complete
        } else {
            MogiStatus::InProgress
        }
    }

    pub fn total_points(&self) -> u32 {
        self.races.last().map(|race| race.points).unwrap_or(0)
    }

    pub fn used_course_names(&self) -> Vec<&str> {
        self.races
            .iter()
            .filter_map(|race| race.course_name.as_deref())
            .collect()
    }

    pub fn recompute_average(&mut self) {
        self.average_rank = if self.races.is_empty() {
            None
        } else {
            let total: u64 = self.races.iter().map(|race| u64::from(race.race_rank)).sum();
            Some(total as f64 / self.races.len() as f64)
        };
    }
}

impl Default for Mogi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mogi_json(date: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "date": date,
            "participants": 12,
            "races": [],
            "finalRank": null,
            "averageRank": null
        })
    }

    #[test]
    fn blank_date_reads_as_today() {
        let mogi: Mogi = serde_json::from_value(mogi_json("")).unwrap();
        assert_eq!(mogi.date, Utc::now().date_naive());
        let mogi: Mogi = serde_json::from_value(mogi_json("  ")).unwrap();
        assert_eq!(mogi.date, Utc::now().date_naive());
    }

    #[test]
    fn dates_still_parse_strictly() {
        let mogi: Mogi = serde_json::from_value(mogi_json("2025-06-05")).unwrap();
        assert_eq!(mogi.date, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
        assert!(serde_json::from_value::<Mogi>(mogi_json("June 5th")).is_err());
    }

    #[test]
    fn average_of_large_ranks_does_not_overflow() {
        let mut mogi = Mogi::new();
        mogi.races = (1..=2)
            .map(|n| Race {
                race_number: n,
                race_rank: 3_000_000_000,
                overall_rank: 1,
                points: 0,
                course_id: None,
                course_name: None,
            })
            .collect();
        mogi.recompute_average();
        assert_eq!(mogi.average_rank, Some(3_000_000_000.0));
    }
}
