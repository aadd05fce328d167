use std::collections::HashMap;

use crate::models::{
    mogi::Mogi,
    stats::{CourseStats, OverallStats, RaceStats, StatsSummary},
};

/// Participant counts shown on the dashboard.
pub const BRACKETS: [u32; 2] = [12, 24];

fn mean(total: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| total / count as f64)
}

/// Average final rank and points of archived mogis with `participants`.
///
/// Mogis without a final rank still count toward `count` and the point
/// average but not toward the rank average.
pub fn overall_stats(history: &[Mogi], participants: u32) -> OverallStats {
    let mogis: Vec<&Mogi> = history
        .iter()
        .filter(|mogi| mogi.participants == participants)
        .collect();

    let ranks: Vec<u32> = mogis.iter().filter_map(|mogi| mogi.final_rank).collect();
    let total_rank: u64 = ranks.iter().map(|&rank| u64::from(rank)).sum();
    let total_points: u64 = mogis.iter().map(|mogi| u64::from(mogi.total_points())).sum();

    OverallStats {
        participants,
        count: mogis.len(),
        average_rank: mean(total_rank as f64, ranks.len()),
        average_points: mean(total_points as f64, mogis.len()),
    }
}

pub fn race_stats(history: &[Mogi], participants: u32) -> RaceStats {
    let ranks: Vec<u32> = history
        .iter()
        .filter(|mogi| mogi.participants == participants)
        .flat_map(|mogi| mogi.races.iter().map(|race| race.race_rank))
        .collect();

    let count = ranks.len();
    let wins = ranks.iter().filter(|&&rank| rank == 1).count();
    let total: u64 = ranks.iter().map(|&rank| u64::from(rank)).sum();

    RaceStats {
        participants,
        count,
        average: mean(total as f64, count),
        best: ranks.iter().copied().min(),
        worst: ranks.iter().copied().max(),
        win_rate: mean(wins as f64 * 100.0, count),
    }
}

/// Per course results across every archived mogi, most played first.
pub fn course_stats(history: &[Mogi]) -> Vec<CourseStats> {
    let mut stats: Vec<CourseStats> = Vec::new();
    let mut totals: Vec<u64> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for race in history.iter().flat_map(|mogi| mogi.races.iter()) {
        let Some(course_id) = race.course_id.as_deref() else {
            continue;
        };
        let position = *positions.entry(course_id).or_insert_with(|| {
            stats.push(CourseStats {
                course_id: course_id.to_string(),
                course_name: race.course_name.clone(),
                count: 0,
                average_rank: 0.0,
                best: race.race_rank,
                worst: race.race_rank,
            });
            totals.push(0);
            stats.len() - 1
        });

        let entry = &mut stats[position];
        entry.count += 1;
        entry.best = entry.best.min(race.race_rank);
        entry.worst = entry.worst.max(race.race_rank);
        totals[position] += u64::from(race.race_rank);
    }

    for (entry, total) in stats.iter_mut().zip(&totals) {
        entry.average_rank = *total as f64 / entry.count as f64;
    }
    // sort_by is stable, ties keep first-seen order
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

pub fn summary(history: &[Mogi]) -> StatsSummary {
    StatsSummary {
        overall: BRACKETS.iter().map(|&p| overall_stats(history, p)).collect(),
        races: BRACKETS.iter().map(|&p| race_stats(history, p)).collect(),
        courses: course_stats(history),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mogi::Race;

    fn race(number: u32, rank: u32, points: u32, course: Option<&str>) -> Race {
        Race {
            race_number: number,
            race_rank: rank,
            overall_rank: rank,
            points,
            course_id: course.map(str::to_string),
            course_name: course.map(|c| c.to_uppercase()),
        }
    }

    fn mogi(participants: u32, final_rank: u32, races: Vec<Race>) -> Mogi {
        let mut mogi = Mogi::new();
        mogi.participants = participants;
        mogi.races = races;
        mogi.final_rank = Some(final_rank);
        mogi.recompute_average();
        mogi
    }

    fn history() -> Vec<Mogi> {
        vec![
            mogi(
                12,
                2,
                vec![
                    race(1, 1, 15, Some("rr")),
                    race(2, 3, 25, Some("mbc")),
                    race(3, 2, 37, None),
                ],
            ),
            mogi(12, 6, vec![race(1, 5, 8, Some("mbc")), race(2, 1, 23, Some("dkp"))]),
            mogi(24, 10, vec![race(1, 20, 3, Some("rr")), race(2, 1, 18, Some("mbc"))]),
        ]
    }

    #[test]
    fn overall_stats_on_empty_history() {
        let stats = overall_stats(&[], 12);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_rank, None);
        assert_eq!(stats.average_points, None);
    }

    #[test]
    fn overall_stats_filters_by_participants() {
        let history = history();
        let twelve = overall_stats(&history, 12);
        assert_eq!(twelve.count, 2);
        assert_eq!(twelve.average_rank, Some(4.0));
        assert_eq!(twelve.average_points, Some(30.0));

        let twenty_four = overall_stats(&history, 24);
        assert_eq!(twenty_four.count, 1);
        assert_eq!(twenty_four.average_points, Some(18.0));
    }

    #[test]
    fn race_stats_for_bracket() {
        let stats = race_stats(&history(), 12);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.average, Some(12.0 / 5.0));
        assert_eq!(stats.best, Some(1));
        assert_eq!(stats.worst, Some(5));
        assert_eq!(stats.win_rate, Some(40.0));
    }

    #[test]
    fn race_stats_without_races() {
        let stats = race_stats(&history(), 18);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average, None);
        assert_eq!(stats.best, None);
        assert_eq!(stats.win_rate, None);
    }

    #[test]
    fn course_stats_group_across_brackets() {
        let stats = course_stats(&history());
        let ids: Vec<&str> = stats.iter().map(|s| s.course_id.as_str()).collect();
        assert_eq!(ids, vec!["mbc", "rr", "dkp"]);

        let mbc = &stats[0];
        assert_eq!(mbc.count, 3);
        assert_eq!(mbc.course_name.as_deref(), Some("MBC"));
        assert_eq!(mbc.average_rank, 3.0);
        assert_eq!(mbc.best, 1);
        assert_eq!(mbc.worst, 5);

        let rr = &stats[1];
        assert_eq!(rr.best, 1);
        assert_eq!(rr.worst, 20);
    }

    #[test]
    fn course_stats_ties_keep_encounter_order() {
        let history = vec![mogi(
            12,
            1,
            vec![race(1, 4, 9, Some("b")), race(2, 2, 21, Some("a"))],
        )];
        let ids: Vec<String> = course_stats(&history).into_iter().map(|s| s.course_id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let history = vec![
            mogi(12, u32::MAX, vec![race(1, u32::MAX, u32::MAX, Some("rr"))]),
            mogi(12, u32::MAX, vec![race(1, u32::MAX, u32::MAX, Some("rr"))]),
        ];
        let summary = summary(&history);
        assert_eq!(summary.overall[0].average_rank, Some(u32::MAX as f64));
        assert_eq!(summary.overall[0].average_points, Some(u32::MAX as f64));
        assert_eq!(summary.races[0].average, Some(u32::MAX as f64));
        assert_eq!(summary.courses[0].average_rank, u32::MAX as f64);
    }

    #[test]
    fn summary_covers_both_brackets() {
        let summary = summary(&history());
        assert_eq!(summary.overall.len(), 2);
        assert_eq!(summary.races[1].participants, 24);
        assert_eq!(summary.courses.len(), 3);
    }
}
