//! Enclosed-stone detection for a closed loop.
//!
//! A loop's interior is found by flood filling from its centroid with
//! 4-adjacency, treating the loop's own cells as walls. The fill is not
//! clipped to the loop's bounding box: a loop whose centroid lies outside it
//! fills everything the walls do not separate, exactly like any other seed.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::cycles::Path;
use crate::board::{Board, ORTHOGONAL_OFFSETS};
use crate::core::{Player, Point};

/// The outcome of one capturing loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The loop that closed.
    pub path: Path,
    /// Opponent stones flipped to captured, in row-major order.
    pub captured: Vec<Point>,
}

impl Capture {
    /// Number of stones taken.
    #[must_use]
    pub fn count(&self) -> usize {
        self.captured.len()
    }
}

/// Mean of `sum / n`, rounded to nearest with halves rounded up.
fn rounded_mean(sum: usize, n: usize) -> usize {
    (2 * sum + n) / (2 * n)
}

/// Average coordinate of a path, rounded per axis.
///
/// Returns `None` for an empty path.
#[must_use]
pub fn centroid(path: &Path) -> Option<Point> {
    let n = path.len();
    if n == 0 {
        return None;
    }
    let (rows, columns) = path
        .iter()
        .fold((0, 0), |(r, c), p| (r + p.row, c + p.column));
    Some(Point::new(rounded_mean(rows, n), rounded_mean(columns, n)))
}

/// Active opponent stones enclosed by `path`, from `mover`'s point of view.
///
/// A loop whose centroid falls on one of its own points has no interior and
/// encloses nothing. Each cell is filled at most once, so every stone is
/// reported once.
#[must_use]
pub fn enclosed_opponents(board: &Board, path: &Path, mover: Player) -> Vec<Point> {
    let Some(seed) = centroid(path) else {
        return Vec::new();
    };
    if path.contains(seed) {
        tracing::trace!(seed = %seed, len = path.len(), "degenerate loop, skipping");
        return Vec::new();
    }

    let walls: FxHashSet<Point> = path.iter().copied().collect();
    let mut filled: FxHashSet<Point> = FxHashSet::default();
    let mut pending = vec![seed];
    let mut opponents = Vec::new();
    filled.insert(seed);

    while let Some(point) = pending.pop() {
        if matches!(board.get(point), Ok(Some(stone)) if stone.is_capturable_by(mover)) {
            opponents.push(point);
        }
        for next in board.neighbours(point, &ORTHOGONAL_OFFSETS) {
            if !walls.contains(&next) && filled.insert(next) {
                pending.push(next);
            }
        }
    }

    opponents.sort_unstable();
    opponents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn path(points: &[(usize, usize)]) -> Path {
        points.iter().map(|&(r, c)| Point::new(r, c)).collect::<Vec<_>>().into()
    }

    fn diamond() -> Path {
        path(&[(2, 1), (1, 2), (0, 1), (1, 0)])
    }

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean(4, 4), 1);
        assert_eq!(rounded_mean(6, 5), 1);
        assert_eq!(rounded_mean(2, 4), 1);
        assert_eq!(rounded_mean(1, 4), 0);
        assert_eq!(rounded_mean(7, 2), 4);
    }

    #[test]
    fn test_centroid() {
        assert_eq!(centroid(&diamond()), Some(Point::new(1, 1)));
        assert_eq!(centroid(&Path::default()), None);

        // (0.5, 0.5) rounds up to (1, 1), which is on the square itself.
        let square = path(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert_eq!(centroid(&square), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_diamond_encloses_center() {
        let mut board = Board::new(3, 3);
        board.set(Point::new(1, 1), Stone::active(Player::Second)).unwrap();
        board.set(Point::new(0, 0), Stone::active(Player::Second)).unwrap();

        let inside = enclosed_opponents(&board, &diamond(), Player::First);
        assert_eq!(inside, vec![Point::new(1, 1)]);
    }

    #[test]
    fn test_own_and_captured_stones_ignored() {
        let mut board = Board::new(3, 3);
        board.set(Point::new(1, 1), Stone::captured(Player::Second)).unwrap();
        assert!(enclosed_opponents(&board, &diamond(), Player::First).is_empty());

        board.set(Point::new(1, 1), Stone::active(Player::First)).unwrap();
        assert!(enclosed_opponents(&board, &diamond(), Player::First).is_empty());
    }

    #[test]
    fn test_degenerate_square_encloses_nothing() {
        let mut board = Board::new(3, 3);
        board.set(Point::new(2, 2), Stone::active(Player::Second)).unwrap();
        let square = path(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert!(enclosed_opponents(&board, &square, Player::First).is_empty());
    }

    #[test]
    fn test_large_interior() {
        // 5x5 ring on a 7x7 board encloses the 3x3 block in the middle.
        let mut ring = Vec::new();
        for c in 1..=5 {
            ring.push((1, c));
        }
        for r in 2..=5 {
            ring.push((r, 5));
        }
        for c in (1..5).rev() {
            ring.push((5, c));
        }
        for r in (2..5).rev() {
            ring.push((r, 1));
        }
        let ring = path(&ring);
        assert!(ring.is_closed_loop());

        let mut board = Board::new(7, 7);
        for p in [(2, 2), (3, 3), (4, 4), (0, 0), (6, 6)] {
            board.set(Point::from(p), Stone::active(Player::First)).unwrap();
        }

        let inside = enclosed_opponents(&board, &ring, Player::Second);
        assert_eq!(inside, vec![Point::new(2, 2), Point::new(3, 3), Point::new(4, 4)]);
    }

    #[test]
    fn test_capture_count() {
        let capture = Capture { path: diamond(), captured: vec![Point::new(1, 1)] };
        assert_eq!(capture.count(), 1);
    }
}
