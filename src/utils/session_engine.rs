use tracing::debug;

use crate::{
    models::{
        error::{MogiError, RankKind},
        mogi::{Mogi, Race, RACES_PER_MOGI},
    },
    utils::{
        catalog::CourseCatalog,
        points::points_for,
        race_utils::{parse_race_input, validate_rank},
    },
};

pub fn validate_participants(participants: u32) -> Result<u32, MogiError> {
    if participants == 0 {
        return Err(MogiError::InvalidParticipants(participants.to_string()));
    }
    Ok(participants)
}

/// Validates one race and appends it to `mogi`.
///
/// Checks run in order: input format, race rank, overall rank, course
/// resolution, course reuse within this mogi, race cap. Nothing is changed
/// unless every check passes.
pub fn add_race(
    mogi: &mut Mogi,
    catalog: &CourseCatalog,
    race_input: &str,
    course_input: &str,
    participants: u32,
) -> Result<Race, MogiError> {
    let participants = validate_participants(participants)?;
    let parsed = parse_race_input(race_input)?;
    let race_rank = validate_rank(parsed.race_rank, participants, RankKind::Race)?;
    let overall_rank = validate_rank(parsed.overall_rank, participants, RankKind::Overall)?;

    let course = catalog.resolve(course_input)?;
    if let Some(course) = &course {
        let used = mogi
            .races
            .iter()
            .any(|race| race.course_id.as_deref() == Some(course.id.as_str()));
        if used {
            return Err(MogiError::DuplicateCourse(course.name.clone()));
        }
    }

    if mogi.races.len() >= RACES_PER_MOGI {
        return Err(MogiError::SessionFull);
    }

    let race = Race {
        race_number: mogi.races.len() as u32 + 1,
        race_rank,
        overall_rank,
        points: mogi.total_points() + points_for(race_rank, participants),
        course_id: course.as_ref().map(|c| c.id.clone()),
        course_name: course.map(|c| c.name),
    };
    debug!(
        "Race {} recorded: rank {} overall {} points {}",
        race.race_number, race.race_rank, race.overall_rank, race.points
    );

    mogi.races.push(race.clone());
    mogi.participants = participants;
    mogi.recompute_average();
    Ok(race)
}

/// Records the final rank of a complete mogi.
pub fn finalize(mogi: &mut Mogi, final_rank: f64, participants: u32) -> Result<(), MogiError> {
    if mogi.races.len() != RACES_PER_MOGI {
        return Err(MogiError::IncompleteSession(mogi.races.len()));
    }
    let final_rank = validate_rank(final_rank, participants, RankKind::Final)?;
    mogi.final_rank = Some(final_rank);
    mogi.recompute_average();
    Ok(())
}

/// Discards whatever is in progress. There is no undo.
pub fn reset() -> Mogi {
    Mogi::new()
}
