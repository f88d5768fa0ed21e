//! Loop enumeration through a newly placed stone.
//!
//! ## Algorithm
//!
//! Starting from the root, a depth-first search extends the current path
//! through unvisited 8-neighbours carrying the root's exact code (same owner
//! and same capture state). Whenever the path has at least four points and
//! its last point touches the root, the path is a closed loop and is
//! recorded. Visited marks belong to the current path only and are cleared
//! on backtrack, so one cell can appear in many loops.
//!
//! The search runs on an explicit stack of frames (point, neighbour list,
//! cursor) so its depth is bounded by the heap, not the call stack.
//!
//! The enumeration is exhaustive and therefore exponential in the size of
//! the root's connected component. Human-scale boards stay well within
//! interactive budgets.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Neighbours};
use crate::core::Point;

/// Smallest loop that can enclose anything.
pub const MIN_LOOP_LEN: usize = 4;

/// A closed loop of same-code stones, in visiting order.
///
/// The first point is the stone the loop was found from; the last point
/// touches it, closing the cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Wrap an ordered list of points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if a point is on the path.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Iterate over points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Check that this is a simple closed loop: at least four distinct
    /// points, each touching the next, the last touching the first.
    #[must_use]
    pub fn is_closed_loop(&self) -> bool {
        let n = self.points.len();
        if n < MIN_LOOP_LEN {
            return false;
        }
        let distinct: FxHashSet<_> = self.points.iter().collect();
        distinct.len() == n
            && (0..n).all(|i| self.points[i].touches(self.points[(i + 1) % n]))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// One level of the search.
struct Frame {
    point: Point,
    neighbours: Neighbours,
    cursor: usize,
}

/// Lazily built same-code adjacency.
///
/// Every cell reached from the root shares its code, so each cached list is
/// already restricted to the root's component.
struct Adjacency<'a> {
    board: &'a Board,
    cache: FxHashMap<Point, Neighbours>,
}

impl<'a> Adjacency<'a> {
    fn new(board: &'a Board) -> Self {
        Self {
            board,
            cache: FxHashMap::default(),
        }
    }

    fn of(&mut self, point: Point) -> Neighbours {
        let board = self.board;
        self.cache
            .entry(point)
            .or_insert_with(|| board.same_code_neighbours(point))
            .clone()
    }
}

/// Backtracking state for one enumeration.
struct Search<'a> {
    root: Point,
    adjacency: Adjacency<'a>,
    visited: FxHashSet<Point>,
    path: Vec<Point>,
    stack: Vec<Frame>,
    loops: Vec<Path>,
}

impl<'a> Search<'a> {
    fn new(board: &'a Board, root: Point) -> Self {
        Self {
            root,
            adjacency: Adjacency::new(board),
            visited: FxHashSet::default(),
            path: Vec::new(),
            stack: Vec::new(),
            loops: Vec::new(),
        }
    }

    /// Extend the path with `point`, recording a loop if it closes one.
    fn enter(&mut self, point: Point) {
        self.path.push(point);
        self.visited.insert(point);
        let neighbours = self.adjacency.of(point);
        if self.path.len() >= MIN_LOOP_LEN && neighbours.contains(&self.root) {
            self.loops.push(Path::new(self.path.clone()));
        }
        self.stack.push(Frame {
            point,
            neighbours,
            cursor: 0,
        });
    }

    /// Drop the deepest point, freeing it for other branches.
    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited.remove(&frame.point);
            self.path.pop();
        }
    }

    /// Next unexplored neighbour of the deepest frame, or `None` when the
    /// frame is exhausted.
    fn advance(&mut self) -> Option<Point> {
        let frame = self.stack.last_mut()?;
        let next = frame.neighbours.get(frame.cursor).copied()?;
        frame.cursor += 1;
        Some(next)
    }

    fn run(mut self) -> Vec<Path> {
        self.enter(self.root);
        while !self.stack.is_empty() {
            match self.advance() {
                Some(next) if !self.visited.contains(&next) => self.enter(next),
                Some(_) => {}
                None => self.leave(),
            }
        }
        self.loops.sort_by_key(Path::len);
        self.loops
    }
}

/// Enumerate every loop through `root`, shortest first.
///
/// Loops of equal length keep their discovery order. An empty or
/// out-of-bounds root has no loops.
#[must_use]
pub fn traverse(board: &Board, root: Point) -> Vec<Path> {
    if !matches!(board.get(root), Ok(Some(_))) {
        return Vec::new();
    }
    let loops = Search::new(board, root).run();
    tracing::trace!(root = %root, loops = loops.len(), "enumerated loops");
    loops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::core::Player;

    fn board_with(rows: usize, columns: usize, stones: &[(usize, usize, Stone)]) -> Board {
        let mut board = Board::new(rows, columns);
        for &(r, c, stone) in stones {
            board.set(Point::new(r, c), stone).unwrap();
        }
        board
    }

    fn ring(owner: Player) -> Vec<(usize, usize, Stone)> {
        [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
            .into_iter()
            .map(|(r, c)| (r, c, Stone::active(owner)))
            .collect()
    }

    #[test]
    fn test_empty_root_has_no_loops() {
        let board = Board::new(3, 3);
        assert!(traverse(&board, Point::new(1, 1)).is_empty());
        assert!(traverse(&board, Point::new(7, 7)).is_empty());
    }

    #[test]
    fn test_line_has_no_loops() {
        let s = Stone::active(Player::First);
        let board = board_with(1, 5, &[(0, 0, s), (0, 1, s), (0, 2, s), (0, 3, s)]);
        assert!(traverse(&board, Point::new(0, 3)).is_empty());
    }

    #[test]
    fn test_triangle_is_too_short() {
        let s = Stone::active(Player::First);
        let board = board_with(2, 2, &[(0, 0, s), (0, 1, s), (1, 0, s)]);
        assert!(traverse(&board, Point::new(0, 0)).is_empty());
    }

    #[test]
    fn test_diamond_is_found() {
        let s = Stone::active(Player::First);
        let board = board_with(3, 3, &[(0, 1, s), (1, 0, s), (1, 2, s), (2, 1, s)]);
        let loops = traverse(&board, Point::new(2, 1));

        // Clockwise and counter-clockwise traversals of the same diamond.
        assert_eq!(loops.len(), 2);
        for l in &loops {
            assert_eq!(l.len(), 4);
            assert_eq!(l.points()[0], Point::new(2, 1));
            assert!(l.is_closed_loop());
        }
        assert_eq!(
            loops[0].points(),
            &[Point::new(2, 1), Point::new(1, 2), Point::new(0, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn test_loops_sorted_by_length() {
        let board = board_with(3, 3, &ring(Player::First));
        let loops = traverse(&board, Point::new(2, 2));

        assert!(!loops.is_empty());
        assert!(loops.windows(2).all(|w| w[0].len() <= w[1].len()));
        assert!(loops.iter().all(Path::is_closed_loop));
        assert!(loops.iter().all(|l| l.points()[0] == Point::new(2, 2)));
        assert_eq!(loops.last().map(Path::len), Some(8));
    }

    #[test]
    fn test_loops_respect_capture_state() {
        let mut stones = ring(Player::First);
        stones[1].2 = Stone::captured(Player::First);
        let board = board_with(3, 3, &stones);

        for l in traverse(&board, Point::new(2, 2)) {
            assert!(!l.contains(Point::new(0, 1)));
        }
    }

    #[test]
    fn test_loops_ignore_opponent_stones() {
        let mut stones = ring(Player::First);
        stones[3].2 = Stone::active(Player::Second);
        stones[4].2 = Stone::active(Player::Second);
        let board = board_with(3, 3, &stones);

        // Without (1,0) and (1,2) the top and bottom rows cannot connect.
        assert!(traverse(&board, Point::new(2, 2)).is_empty());
    }

    #[test]
    fn test_path_validation() {
        let square: Path = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(1, 0),
        ]
        .into();
        assert!(square.is_closed_loop());

        let open: Path = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(0, 3),
        ]
        .into();
        assert!(!open.is_closed_loop());

        let repeated: Path = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 0),
            Point::new(0, 1),
        ]
        .into();
        assert!(!repeated.is_closed_loop());
        assert!(!Path::default().is_closed_loop());
    }
}
