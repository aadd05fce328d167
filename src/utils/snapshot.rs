use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{
    error::MogiError,
    mogi::{Mogi, RACES_PER_MOGI},
    tracker::TrackerState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    current_mogi: Option<Mogi>,
    history: Vec<Mogi>,
}

pub fn export_state(state: &TrackerState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(state)
}

/// File name offered for a snapshot download.
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!("mk_world_lounge_backup_{}.json", now.format("%Y-%m-%d-%H-%M-%S"))
}

/// Structural checks on one imported mogi. Ranks are not bounded by
/// `participants`, which may be edited after races are recorded.
fn check_mogi(mogi: &Mogi, label: &str) -> Result<(), MogiError> {
    let invalid = |reason: String| MogiError::InvalidImportFormat(format!("{label}: {reason}"));

    if mogi.participants == 0 {
        return Err(invalid("participants must be positive".to_string()));
    }
    if mogi.races.len() > RACES_PER_MOGI {
        return Err(invalid(format!(
            "{} races, at most {} allowed",
            mogi.races.len(),
            RACES_PER_MOGI
        )));
    }
    if mogi.final_rank == Some(0) {
        return Err(invalid("finalRank must be positive".to_string()));
    }

    let mut previous_points = 0;
    for (position, race) in mogi.races.iter().enumerate() {
        if race.race_number as usize != position + 1 {
            return Err(invalid(format!(
                "race {} has raceNumber {}",
                position + 1,
                race.race_number
            )));
        }
        if race.race_rank == 0 || race.overall_rank == 0 {
            return Err(invalid(format!("race {} has a zero rank", race.race_number)));
        }
        if race.points < previous_points {
            return Err(invalid(format!(
                "race {} points go down from {} to {}",
                race.race_number, previous_points, race.points
            )));
        }
        previous_points = race.points;
    }
    Ok(())
}

/// Validates an imported snapshot and turns it into tracker state.
///
/// The payload must be an object with a `history` array; `currentMogi` may
/// be absent or null (a fresh mogi is started) but otherwise must be an
/// object.
pub fn import_state(payload: &str) -> Result<TrackerState, MogiError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| MogiError::InvalidImportFormat(format!("not JSON: {e}")))?;

    let Value::Object(fields) = &value else {
        return Err(MogiError::InvalidImportFormat(
            "snapshot must be an object".to_string(),
        ));
    };
    if !fields.get("history").is_some_and(Value::is_array) {
        return Err(MogiError::InvalidImportFormat(
            "`history` must be an array".to_string(),
        ));
    }
    match fields.get("currentMogi") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(_) => {
            return Err(MogiError::InvalidImportFormat(
                "`currentMogi` must be an object".to_string(),
            ))
        }
    }

    let snapshot: Snapshot =
        serde_json::from_value(value).map_err(|e| MogiError::InvalidImportFormat(e.to_string()))?;

    if let Some(mogi) = &snapshot.current_mogi {
        check_mogi(mogi, "currentMogi")?;
    }
    for (position, mogi) in snapshot.history.iter().enumerate() {
        check_mogi(mogi, &format!("history[{position}]"))?;
    }

    let mut current_mogi = snapshot.current_mogi.unwrap_or_default();
    current_mogi.recompute_average();
    Ok(TrackerState {
        current_mogi,
        history: snapshot.history,
    })
}
