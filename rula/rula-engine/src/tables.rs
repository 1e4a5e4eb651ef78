//! The fixed RULA lookup tables A, B and C.
//!
//! Data is the published worksheet (McAtamney & Corlett, 1993), stored as
//! dense arrays indexed by `score - 1`. The `Option` lookups accept raw
//! integers and return `None` outside the table; the engine itself only
//! calls the infallible forms with [`PostureScores`], whose domain is
//! checked at construction.

use crate::posture::PostureScores;

/// Largest adjusted wrist-and-arm score accepted by Table C.
pub const TABLE_C_MAX_A: u8 = 8;

/// Largest adjusted neck-trunk-leg score accepted by Table C.
pub const TABLE_C_MAX_B: u8 = 7;

/// Table A: `[upper_arm][lower_arm][(wrist - 1) * 2 + (wrist_twist - 1)]`.
const TABLE_A: [[[u8; 8]; 3]; 6] = [
    // upper arm 1
    [
        [1, 2, 2, 2, 2, 3, 3, 3],
        [2, 2, 2, 2, 3, 3, 3, 3],
        [2, 3, 3, 3, 3, 3, 4, 4],
    ],
    // upper arm 2
    [
        [2, 3, 3, 3, 3, 4, 4, 4],
        [3, 3, 3, 3, 3, 4, 4, 4],
        [3, 4, 4, 4, 4, 4, 5, 5],
    ],
    // upper arm 3
    [
        [3, 3, 4, 4, 4, 4, 5, 5],
        [3, 4, 4, 4, 4, 4, 5, 5],
        [4, 4, 4, 4, 4, 5, 5, 5],
    ],
    // upper arm 4
    [
        [4, 4, 4, 4, 4, 5, 5, 5],
        [4, 4, 4, 4, 4, 5, 5, 5],
        [4, 4, 4, 5, 5, 5, 6, 6],
    ],
    // upper arm 5
    [
        [5, 5, 5, 5, 5, 6, 6, 7],
        [5, 6, 6, 6, 6, 7, 7, 7],
        [6, 6, 6, 7, 7, 7, 7, 8],
    ],
    // upper arm 6
    [
        [7, 7, 7, 7, 7, 8, 8, 9],
        [8, 8, 8, 8, 8, 9, 9, 9],
        [9, 9, 9, 9, 9, 9, 9, 9],
    ],
];

/// Table B: `[neck][(trunk - 1) * 2 + (legs - 1)]`.
const TABLE_B: [[u8; 12]; 6] = [
    [1, 3, 2, 3, 3, 4, 5, 5, 6, 6, 7, 7],
    [2, 3, 2, 3, 4, 5, 5, 5, 6, 7, 7, 7],
    [3, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 7],
    [5, 5, 5, 6, 6, 7, 7, 7, 7, 7, 8, 8],
    [7, 7, 7, 7, 7, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 9, 9, 9, 9, 9],
];

/// Table C: `[wrist_and_arm][neck_trunk_leg]`.
const TABLE_C: [[u8; 7]; 8] = [
    [1, 2, 3, 3, 4, 5, 5],
    [2, 2, 3, 4, 4, 5, 5],
    [3, 3, 3, 4, 4, 5, 6],
    [3, 3, 3, 4, 5, 6, 6],
    [4, 4, 4, 5, 6, 7, 7],
    [4, 4, 5, 6, 6, 7, 7],
    [5, 5, 6, 6, 7, 7, 7],
    [5, 5, 6, 7, 7, 7, 7],
];

/// Zero-based index of a 1-based score.
fn idx(score: u8) -> usize {
    usize::from(score) - 1
}

/// Table A lookup on raw scores.
///
/// Domain: upper arm 1–6, lower arm 1–3, wrist 1–4, wrist twist 1–2.
///
/// # Example
///
/// ```
/// use rula_engine::tables::lookup_table_a;
///
/// assert_eq!(lookup_table_a(1, 2, 1, 1), Some(2));
/// assert_eq!(lookup_table_a(6, 3, 4, 2), Some(9));
/// assert_eq!(lookup_table_a(7, 1, 1, 1), None);
/// ```
#[must_use]
pub fn lookup_table_a(upper_arm: u8, lower_arm: u8, wrist: u8, wrist_twist: u8) -> Option<u8> {
    if !(1..=6).contains(&upper_arm)
        || !(1..=3).contains(&lower_arm)
        || !(1..=4).contains(&wrist)
        || !(1..=2).contains(&wrist_twist)
    {
        return None;
    }
    Some(TABLE_A[idx(upper_arm)][idx(lower_arm)][idx(wrist) * 2 + idx(wrist_twist)])
}

/// Table B lookup on raw scores.
///
/// Domain: neck 1–6, trunk 1–6, legs 1–2.
#[must_use]
pub fn lookup_table_b(neck: u8, trunk: u8, legs: u8) -> Option<u8> {
    if !(1..=6).contains(&neck) || !(1..=6).contains(&trunk) || !(1..=2).contains(&legs) {
        return None;
    }
    Some(TABLE_B[idx(neck)][idx(trunk) * 2 + idx(legs)])
}

/// Table C lookup on raw scores.
///
/// Domain: wrist-and-arm 1–8, neck-trunk-leg 1–7. Callers clamp larger
/// adjusted scores to these maxima first.
#[must_use]
pub fn lookup_table_c(wrist_and_arm: u8, neck_trunk_leg: u8) -> Option<u8> {
    if !(1..=TABLE_C_MAX_A).contains(&wrist_and_arm)
        || !(1..=TABLE_C_MAX_B).contains(&neck_trunk_leg)
    {
        return None;
    }
    Some(TABLE_C[idx(wrist_and_arm)][idx(neck_trunk_leg)])
}

/// Table A on validated scores.
pub(crate) fn table_a(scores: &PostureScores, wrist_twist: u8) -> u8 {
    let twist = wrist_twist.clamp(1, 2);
    TABLE_A[idx(scores.upper_arm())][idx(scores.lower_arm())][idx(scores.wrist()) * 2 + idx(twist)]
}

/// Table B on validated scores.
pub(crate) fn table_b(scores: &PostureScores, legs: u8) -> u8 {
    let legs = legs.clamp(1, 2);
    TABLE_B[idx(scores.neck())][idx(scores.trunk()) * 2 + idx(legs)]
}

/// Table C after clamping both inputs into its domain.
pub(crate) fn table_c(wrist_and_arm: u8, neck_trunk_leg: u8) -> u8 {
    let a = wrist_and_arm.clamp(1, TABLE_C_MAX_A);
    let b = neck_trunk_leg.clamp(1, TABLE_C_MAX_B);
    TABLE_C[idx(a)][idx(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_a_worksheet_corners() {
        assert_eq!(lookup_table_a(1, 1, 1, 1), Some(1));
        assert_eq!(lookup_table_a(1, 2, 1, 1), Some(2));
        assert_eq!(lookup_table_a(1, 3, 4, 2), Some(4));
        assert_eq!(lookup_table_a(4, 2, 3, 1), Some(4));
        assert_eq!(lookup_table_a(5, 1, 4, 2), Some(7));
        assert_eq!(lookup_table_a(6, 3, 1, 1), Some(9));
    }

    /// Table A as printed on the worksheet, one row per upper/lower arm pair.
    /// Columns: wrist 1..=4, each with twist 1 then 2.
    const WORKSHEET_A: [(u8, u8, [u8; 8]); 18] = [
        (1, 1, [1, 2, 2, 2, 2, 3, 3, 3]),
        (1, 2, [2, 2, 2, 2, 3, 3, 3, 3]),
        (1, 3, [2, 3, 3, 3, 3, 3, 4, 4]),
        (2, 1, [2, 3, 3, 3, 3, 4, 4, 4]),
        (2, 2, [3, 3, 3, 3, 3, 4, 4, 4]),
        (2, 3, [3, 4, 4, 4, 4, 4, 5, 5]),
        (3, 1, [3, 3, 4, 4, 4, 4, 5, 5]),
        (3, 2, [3, 4, 4, 4, 4, 4, 5, 5]),
        (3, 3, [4, 4, 4, 4, 4, 5, 5, 5]),
        (4, 1, [4, 4, 4, 4, 4, 5, 5, 5]),
        (4, 2, [4, 4, 4, 4, 4, 5, 5, 5]),
        (4, 3, [4, 4, 4, 5, 5, 5, 6, 6]),
        (5, 1, [5, 5, 5, 5, 5, 6, 6, 7]),
        (5, 2, [5, 6, 6, 6, 6, 7, 7, 7]),
        (5, 3, [6, 6, 6, 7, 7, 7, 7, 8]),
        (6, 1, [7, 7, 7, 7, 7, 8, 8, 9]),
        (6, 2, [8, 8, 8, 8, 8, 9, 9, 9]),
        (6, 3, [9, 9, 9, 9, 9, 9, 9, 9]),
    ];

    /// Table B as printed. Columns: trunk 1..=6, each with legs 1 then 2.
    const WORKSHEET_B: [(u8, [u8; 12]); 6] = [
        (1, [1, 3, 2, 3, 3, 4, 5, 5, 6, 6, 7, 7]),
        (2, [2, 3, 2, 3, 4, 5, 5, 5, 6, 7, 7, 7]),
        (3, [3, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 7]),
        (4, [5, 5, 5, 6, 6, 7, 7, 7, 7, 7, 8, 8]),
        (5, [7, 7, 7, 7, 7, 8, 8, 8, 8, 8, 8, 8]),
        (6, [8, 8, 8, 8, 8, 8, 8, 9, 9, 9, 9, 9]),
    ];

    /// Table C as printed. Columns: neck-trunk-leg 1..=7.
    const WORKSHEET_C: [(u8, [u8; 7]); 8] = [
        (1, [1, 2, 3, 3, 4, 5, 5]),
        (2, [2, 2, 3, 4, 4, 5, 5]),
        (3, [3, 3, 3, 4, 4, 5, 6]),
        (4, [3, 3, 3, 4, 5, 6, 6]),
        (5, [4, 4, 4, 5, 6, 7, 7]),
        (6, [4, 4, 5, 6, 6, 7, 7]),
        (7, [5, 5, 6, 6, 7, 7, 7]),
        (8, [5, 5, 6, 7, 7, 7, 7]),
    ];

    #[test]
    fn table_a_matches_worksheet() {
        let mut checked = 0;
        for (ua, la, row) in WORKSHEET_A {
            for (col, &expected) in row.iter().enumerate() {
                let wrist = u8::try_from(col / 2 + 1).unwrap();
                let twist = u8::try_from(col % 2 + 1).unwrap();
                assert_eq!(
                    lookup_table_a(ua, la, wrist, twist),
                    Some(expected),
                    "upper arm {ua}, lower arm {la}, wrist {wrist}, twist {twist}"
                );
                checked += 1;
            }
        }
        assert_eq!(checked, 144);
    }

    #[test]
    fn table_b_matches_worksheet() {
        let mut checked = 0;
        for (neck, row) in WORKSHEET_B {
            for (col, &expected) in row.iter().enumerate() {
                let trunk = u8::try_from(col / 2 + 1).unwrap();
                let legs = u8::try_from(col % 2 + 1).unwrap();
                assert_eq!(
                    lookup_table_b(neck, trunk, legs),
                    Some(expected),
                    "neck {neck}, trunk {trunk}, legs {legs}"
                );
                checked += 1;
            }
        }
        assert_eq!(checked, 72);
    }

    #[test]
    fn table_c_matches_worksheet() {
        let mut checked = 0;
        for (a, row) in WORKSHEET_C {
            for (col, &expected) in row.iter().enumerate() {
                let b = u8::try_from(col + 1).unwrap();
                assert_eq!(lookup_table_c(a, b), Some(expected), "a {a}, b {b}");
                checked += 1;
            }
        }
        assert_eq!(checked, 56);
    }

    #[test]
    fn table_a_rejects_out_of_domain() {
        assert_eq!(lookup_table_a(0, 1, 1, 1), None);
        assert_eq!(lookup_table_a(1, 4, 1, 1), None);
        assert_eq!(lookup_table_a(1, 1, 5, 1), None);
        assert_eq!(lookup_table_a(1, 1, 1, 3), None);
    }

    #[test]
    fn table_b_worksheet_corners() {
        assert_eq!(lookup_table_b(1, 1, 1), Some(1));
        assert_eq!(lookup_table_b(1, 1, 2), Some(3));
        assert_eq!(lookup_table_b(1, 3, 1), Some(3));
        assert_eq!(lookup_table_b(3, 3, 1), Some(4));
        assert_eq!(lookup_table_b(3, 3, 2), Some(5));
        assert_eq!(lookup_table_b(6, 6, 2), Some(9));
        assert_eq!(lookup_table_b(7, 1, 1), None);
        assert_eq!(lookup_table_b(1, 1, 0), None);
    }

    #[test]
    fn table_c_worksheet_corners() {
        assert_eq!(lookup_table_c(1, 1), Some(1));
        assert_eq!(lookup_table_c(7, 3), Some(6));
        assert_eq!(lookup_table_c(7, 5), Some(7));
        assert_eq!(lookup_table_c(8, 7), Some(7));
        assert_eq!(lookup_table_c(9, 1), None);
        assert_eq!(lookup_table_c(1, 8), None);
    }

    #[test]
    fn table_c_is_monotone() {
        for a in 1..=TABLE_C_MAX_A {
            for b in 1..=TABLE_C_MAX_B {
                let here = table_c(a, b);
                if a < TABLE_C_MAX_A {
                    assert!(table_c(a + 1, b) >= here, "row {a} col {b}");
                }
                if b < TABLE_C_MAX_B {
                    assert!(table_c(a, b + 1) >= here, "row {a} col {b}");
                }
                assert!((1..=7).contains(&here));
            }
        }
    }

    #[test]
    fn table_c_clamps_oversized_inputs() {
        assert_eq!(table_c(12, 1), table_c(TABLE_C_MAX_A, 1));
        assert_eq!(table_c(1, 11), table_c(1, TABLE_C_MAX_B));
    }

    #[test]
    fn validated_lookups_match_raw() {
        for ua in 1..=6 {
            for la in 1..=3 {
                for w in 1..=4 {
                    let scores = PostureScores::new(ua, la, w, 1, 1).unwrap();
                    for wt in 1..=2 {
                        assert_eq!(Some(table_a(&scores, wt)), lookup_table_a(ua, la, w, wt));
                    }
                }
            }
        }
        for n in 1..=6 {
            for t in 1..=6 {
                let scores = PostureScores::new(1, 1, 1, n, t).unwrap();
                for legs in 1..=2 {
                    assert_eq!(Some(table_b(&scores, legs)), lookup_table_b(n, t, legs));
                }
            }
        }
    }
}
