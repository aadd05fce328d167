/// Points for ranks 1..=12 in a 12 player mogi.
const TWELVE_PLAYER_POINTS: [u32; 12] = [15, 12, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Points earned for a single race.
///
/// Twelve player mogis use their own table; every other participant count
/// uses the 24 player curve.
pub fn points_for(rank: u32, participants: u32) -> u32 {
    if participants == 12 {
        return match rank {
            1..=12 => TWELVE_PLAYER_POINTS[(rank - 1) as usize],
            _ => 0,
        };
    }

    match rank {
        1 => 15,
        2 => 12,
        3 => 10,
        4 | 5 => 9,
        6 | 7 => 8,
        8 | 9 => 7,
        10..=12 => 6,
        13..=15 => 5,
        16..=18 => 4,
        19..=21 => 3,
        22 | 23 => 2,
        24 => 1,
        _ => 0,
    }
}
