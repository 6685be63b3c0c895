//! The fixed table of winning lines.

use crate::Position;

/// Three positions that win when uniformly marked.
pub type Line = [Position; 3];

/// All 8 winning lines in scan order: rows, then columns, then diagonals.
///
/// Scans that stop at the first match (two-in-a-row, winner) resolve ties
/// by this order.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_position_is_on_a_line() {
        for pos in Position::ALL {
            assert!(
                WINNING_LINES.iter().any(|line| line.contains(&pos)),
                "{} is on no line",
                pos.id()
            );
        }
    }

    #[test]
    fn test_lines_have_three_distinct_positions() {
        for line in WINNING_LINES {
            let distinct: HashSet<_> = line.iter().collect();
            assert_eq!(distinct.len(), 3);
        }
    }

    #[test]
    fn test_scan_order_matches_ids() {
        let ids: Vec<[u8; 3]> = WINNING_LINES
            .iter()
            .map(|l| [l[0].id(), l[1].id(), l[2].id()])
            .collect();
        assert_eq!(
            ids,
            vec![
                [1, 2, 3],
                [4, 5, 6],
                [7, 8, 9],
                [1, 4, 7],
                [2, 5, 8],
                [3, 6, 9],
                [1, 5, 9],
                [3, 5, 7],
            ]
        );
    }
}
