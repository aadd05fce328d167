use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub participants: u32,
    pub count: usize,
    pub average_rank: Option<f64>,
    pub average_points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceStats {
    pub participants: u32,
    pub count: usize,
    pub average: Option<f64>,
    pub best: Option<u32>,
    pub worst: Option<u32>,
    /// Percentage of races won, 0..=100.
    pub win_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub course_id: String,
    pub course_name: Option<String>,
    pub count: usize,
    pub average_rank: f64,
    pub best: u32,
    pub worst: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub overall: Vec<OverallStats>,
    pub races: Vec<RaceStats>,
    pub courses: Vec<CourseStats>,
}
