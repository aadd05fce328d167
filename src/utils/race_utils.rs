use crate::models::error::{MogiError, RankKind};

/// Ranks as typed, before range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceInput {
    pub race_rank: f64,
    pub overall_rank: f64,
}

/// Parses `"<raceRank> / <overallRank>"`. Both the ASCII and the full-width
/// slash separate the two numbers.
pub fn parse_race_input(value: &str) -> Result<RaceInput, MogiError> {
    let parts: Vec<&str> = value
        .split(['/', '／'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let [race, overall] = parts.as_slice() else {
        return Err(MogiError::BadFormat(value.trim().to_string()));
    };

    let parse = |token: &str| {
        token
            .parse::<f64>()
            .ok()
            .filter(|n| !n.is_nan())
            .ok_or_else(|| MogiError::BadFormat(value.trim().to_string()))
    };

    Ok(RaceInput {
        race_rank: parse(*race)?,
        overall_rank: parse(*overall)?,
    })
}

/// Accepts only whole numbers within `1..=participants`.
pub fn validate_rank(rank: f64, participants: u32, kind: RankKind) -> Result<u32, MogiError> {
    if rank.fract() == 0.0 && rank >= 1.0 && rank <= participants as f64 {
        Ok(rank as u32)
    } else {
        Err(MogiError::RankOutOfRange {
            kind,
            value: rank.to_string(),
            participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ascii_and_full_width_slash() {
        let ascii = parse_race_input(" 3 / 7 ").unwrap();
        assert_eq!(ascii.race_rank, 3.0);
        assert_eq!(ascii.overall_rank, 7.0);

        let wide = parse_race_input("1／2").unwrap();
        assert_eq!(wide.race_rank, 1.0);
        assert_eq!(wide.overall_rank, 2.0);
    }

    #[test]
    fn empty_tokens_are_ignored() {
        let parsed = parse_race_input("4 // 5").unwrap();
        assert_eq!(parsed.race_rank, 4.0);
        assert_eq!(parsed.overall_rank, 5.0);
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert!(matches!(parse_race_input("3"), Err(MogiError::BadFormat(_))));
        assert!(matches!(parse_race_input("1/2/3"), Err(MogiError::BadFormat(_))));
        assert!(matches!(parse_race_input(""), Err(MogiError::BadFormat(_))));
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert!(matches!(parse_race_input("a / 2"), Err(MogiError::BadFormat(_))));
        assert!(matches!(parse_race_input("NaN / 2"), Err(MogiError::BadFormat(_))));
    }

    #[test]
    fn rank_must_be_whole_and_in_range() {
        assert_eq!(validate_rank(12.0, 12, RankKind::Race), Ok(12));
        assert!(validate_rank(13.0, 12, RankKind::Race).is_err());
        assert!(validate_rank(0.0, 12, RankKind::Race).is_err());
        assert!(validate_rank(2.5, 12, RankKind::Overall).is_err());
    }
}
