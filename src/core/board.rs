//! Board module - owns the line and box grids
//!
//! A grid of `GRID_SIZE` × `GRID_SIZE` boxes. Lines are claim-once: an
//! unclaimed line can become owned by either side and never changes again.
//! A box belongs to whoever claimed its fourth bounding edge.
//!
//! Coordinates follow the dot grid: horizontal line (i, j) runs from dot
//! (i, j) to dot (i + 1, j); vertical line (i, j) runs from dot (i, j) to
//! dot (i, j + 1). Box (x, y) is bounded by horizontal (x, y) and
//! (x, y + 1) and vertical (x, y) and (x + 1, y).

use arrayvec::ArrayVec;

use crate::types::{InvalidMove, Line, Orientation, Side, GRID_SIZE};

const N: usize = GRID_SIZE as usize;

/// The game board: every line and every box, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Horizontal lines, indexed `[i][j]`, i in 0..N, j in 0..=N.
    horizontal: [[Option<Side>; N + 1]; N],
    /// Vertical lines, indexed `[i][j]`, i in 0..=N, j in 0..N.
    vertical: [[Option<Side>; N]; N + 1],
    /// Box owners, indexed `[x][y]`.
    boxes: [[Option<Side>; N]; N],
}

impl Board {
    /// Create a board with every line unclaimed and every box unowned.
    pub fn new() -> Self {
        Self {
            horizontal: [[None; N + 1]; N],
            vertical: [[None; N]; N + 1],
            boxes: [[None; N]; N],
        }
    }

    pub fn grid_size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get the state of a line.
    /// Returns `None` if the address is out of range for its orientation.
    pub fn get(&self, line: Line) -> Option<Option<Side>> {
        let (i, j) = (line.i as usize, line.j as usize);
        match line.orientation {
            Orientation::Horizontal => self.horizontal.get(i)?.get(j).copied(),
            Orientation::Vertical => self.vertical.get(i)?.get(j).copied(),
        }
    }

    /// In range and still unclaimed.
    pub fn is_unclaimed(&self, line: Line) -> bool {
        matches!(self.get(line), Some(None))
    }

    /// In range and owned by either side.
    pub fn is_claimed(&self, line: Line) -> bool {
        matches!(self.get(line), Some(Some(_)))
    }

    /// Claim a line for `side`.
    ///
    /// Fails with `OutOfRange` or `AlreadyClaimed`; a failed claim mutates
    /// nothing. A successful claim is permanent.
    pub fn claim_line(&mut self, line: Line, side: Side) -> Result<(), InvalidMove> {
        match self.get(line) {
            None => Err(InvalidMove::OutOfRange),
            Some(Some(_)) => Err(InvalidMove::AlreadyClaimed),
            Some(None) => {
                let (i, j) = (line.i as usize, line.j as usize);
                match line.orientation {
                    Orientation::Horizontal => self.horizontal[i][j] = Some(side),
                    Orientation::Vertical => self.vertical[i][j] = Some(side),
                }
                Ok(())
            }
        }
    }

    /// Owner of box (x, y); `None` if unowned or out of range.
    pub fn box_owner(&self, x: u8, y: u8) -> Option<Side> {
        self.boxes
            .get(x as usize)
            .and_then(|col| col.get(y as usize))
            .copied()
            .flatten()
    }

    /// The four bounding edges of box (x, y).
    pub fn box_edges(x: u8, y: u8) -> [Line; 4] {
        [
            Line::horizontal(x, y),
            Line::horizontal(x, y + 1),
            Line::vertical(x, y),
            Line::vertical(x + 1, y),
        ]
    }

    /// The boxes a line borders: two in the interior, one on the grid edge.
    pub fn adjacent_boxes(line: Line) -> ArrayVec<(u8, u8), 2> {
        let mut out = ArrayVec::new();
        match line.orientation {
            Orientation::Horizontal => {
                if line.j > 0 {
                    out.push((line.i, line.j - 1));
                }
                if line.j < GRID_SIZE {
                    out.push((line.i, line.j));
                }
            }
            Orientation::Vertical => {
                if line.i > 0 {
                    out.push((line.i - 1, line.j));
                }
                if line.i < GRID_SIZE {
                    out.push((line.i, line.j));
                }
            }
        }
        out
    }

    /// Number of claimed edges around box (x, y), 0..=4.
    pub fn claimed_edges(&self, x: u8, y: u8) -> u8 {
        Self::box_edges(x, y)
            .iter()
            .filter(|&&edge| self.is_claimed(edge))
            .count() as u8
    }

    /// Boxes that `line` closes: adjacent, still unowned, and with every
    /// bounding edge either claimed or equal to `line` itself.
    ///
    /// Treating the queried line as claimed makes this serve two callers
    /// with one definition: resolution after a committed claim, and the
    /// opponent's hypothetical lookahead on an unclaimed candidate.
    pub fn boxes_completed_by(&self, line: Line) -> ArrayVec<(u8, u8), 2> {
        let mut out = ArrayVec::new();
        for (x, y) in Self::adjacent_boxes(line) {
            if self.box_owner(x, y).is_some() {
                continue;
            }
            let closed = Self::box_edges(x, y)
                .iter()
                .all(|&edge| edge == line || self.is_claimed(edge));
            if closed {
                out.push((x, y));
            }
        }
        out
    }

    /// Set the owner of each given box. Only ever called on unowned boxes
    /// coming out of [`Board::boxes_completed_by`].
    pub fn apply_box_ownership(&mut self, boxes: &[(u8, u8)], side: Side) {
        for &(x, y) in boxes {
            if let Some(owner) = self
                .boxes
                .get_mut(x as usize)
                .and_then(|col| col.get_mut(y as usize))
            {
                *owner = Some(side);
            }
        }
    }

    /// True iff every line on the board is claimed.
    pub fn is_game_over(&self) -> bool {
        let horizontal_full = self
            .horizontal
            .iter()
            .all(|col| col.iter().all(|l| l.is_some()));
        let vertical_full = self
            .vertical
            .iter()
            .all(|col| col.iter().all(|l| l.is_some()));
        horizontal_full && vertical_full
    }

    /// Count of boxes owned by `side`.
    pub fn score(&self, side: Side) -> u8 {
        self.boxes
            .iter()
            .flatten()
            .filter(|&&owner| owner == Some(side))
            .count() as u8
    }

    /// All unclaimed lines in the fixed scan order the opponent searches:
    /// every horizontal line row-major, then every vertical line row-major.
    pub fn unclaimed_lines(&self) -> impl Iterator<Item = Line> + '_ {
        let horizontal =
            (0..GRID_SIZE).flat_map(|i| (0..=GRID_SIZE).map(move |j| Line::horizontal(i, j)));
        let vertical =
            (0..=GRID_SIZE).flat_map(|i| (0..GRID_SIZE).map(move |j| Line::vertical(i, j)));
        horizontal
            .chain(vertical)
            .filter(move |&line| self.is_unclaimed(line))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_unclaimed() {
        let board = Board::new();
        assert_eq!(board.unclaimed_lines().count(), 2 * N * (N + 1));
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                assert_eq!(board.box_owner(x, y), None);
            }
        }
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(Line::horizontal(GRID_SIZE, 0)), None);
        assert_eq!(board.get(Line::horizontal(0, GRID_SIZE + 1)), None);
        assert_eq!(board.get(Line::vertical(GRID_SIZE + 1, 0)), None);
        assert_eq!(board.get(Line::vertical(0, GRID_SIZE)), None);
    }

    #[test]
    fn test_claim_line() {
        let mut board = Board::new();
        let line = Line::horizontal(0, 0);

        assert!(board.is_unclaimed(line));
        assert_eq!(board.claim_line(line, Side::Player), Ok(()));
        assert_eq!(board.get(line), Some(Some(Side::Player)));
        assert!(board.is_claimed(line));
    }

    #[test]
    fn test_claim_is_monotonic() {
        let mut board = Board::new();
        let line = Line::vertical(1, 2);

        assert_eq!(board.claim_line(line, Side::Opponent), Ok(()));
        // A second claim by either side is rejected and changes nothing.
        assert_eq!(
            board.claim_line(line, Side::Player),
            Err(InvalidMove::AlreadyClaimed)
        );
        assert_eq!(board.get(line), Some(Some(Side::Opponent)));
    }

    #[test]
    fn test_claim_out_of_range() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.claim_line(Line::horizontal(0, GRID_SIZE + 1), Side::Player),
            Err(InvalidMove::OutOfRange)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_adjacent_boxes_interior_and_boundary() {
        // Top edge of the grid: one adjacent box.
        assert_eq!(
            Board::adjacent_boxes(Line::horizontal(0, 0)).as_slice(),
            &[(0, 0)]
        );
        // Bottom edge.
        assert_eq!(
            Board::adjacent_boxes(Line::horizontal(2, GRID_SIZE)).as_slice(),
            &[(2, GRID_SIZE - 1)]
        );
        // Interior horizontal line borders the box above and below.
        assert_eq!(
            Board::adjacent_boxes(Line::horizontal(1, 1)).as_slice(),
            &[(1, 0), (1, 1)]
        );
        // Left and right grid edges.
        assert_eq!(
            Board::adjacent_boxes(Line::vertical(0, 1)).as_slice(),
            &[(0, 1)]
        );
        assert_eq!(
            Board::adjacent_boxes(Line::vertical(GRID_SIZE, 0)).as_slice(),
            &[(GRID_SIZE - 1, 0)]
        );
        // Interior vertical line.
        assert_eq!(
            Board::adjacent_boxes(Line::vertical(1, 2)).as_slice(),
            &[(0, 2), (1, 2)]
        );
    }

    #[test]
    fn test_claimed_edges_counts() {
        let mut board = Board::new();
        assert_eq!(board.claimed_edges(0, 0), 0);

        board.claim_line(Line::horizontal(0, 0), Side::Player).unwrap();
        board.claim_line(Line::vertical(0, 0), Side::Opponent).unwrap();
        assert_eq!(board.claimed_edges(0, 0), 2);

        board.claim_line(Line::horizontal(0, 1), Side::Player).unwrap();
        board.claim_line(Line::vertical(1, 0), Side::Player).unwrap();
        assert_eq!(board.claimed_edges(0, 0), 4);
    }

    #[test]
    fn test_boxes_completed_by_hypothetical() {
        let mut board = Board::new();
        // Three edges of box (0, 0) claimed, fourth still open.
        board.claim_line(Line::horizontal(0, 0), Side::Player).unwrap();
        board.claim_line(Line::horizontal(0, 1), Side::Opponent).unwrap();
        board.claim_line(Line::vertical(0, 0), Side::Player).unwrap();

        let missing = Line::vertical(1, 0);
        assert!(board.is_unclaimed(missing));
        // Hypothetical check on the still-unclaimed candidate.
        assert_eq!(board.boxes_completed_by(missing).as_slice(), &[(0, 0)]);
        // Any other unclaimed line completes nothing.
        assert!(board.boxes_completed_by(Line::horizontal(1, 0)).is_empty());
    }

    #[test]
    fn test_boxes_completed_by_double_box() {
        let mut board = Board::new();
        // Boxes (1, 0) and (1, 1) each miss only the shared line h(1, 1).
        for line in [
            Line::horizontal(1, 0),
            Line::vertical(1, 0),
            Line::vertical(2, 0),
            Line::horizontal(1, 2),
            Line::vertical(1, 1),
            Line::vertical(2, 1),
        ] {
            board.claim_line(line, Side::Player).unwrap();
        }

        let shared = Line::horizontal(1, 1);
        assert_eq!(
            board.boxes_completed_by(shared).as_slice(),
            &[(1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_boxes_completed_by_skips_owned_box() {
        let mut board = Board::new();
        for line in Board::box_edges(0, 0) {
            board.claim_line(line, Side::Player).unwrap();
        }
        board.apply_box_ownership(&[(0, 0)], Side::Player);

        // Every edge of an already-owned box reports no new completion.
        for line in Board::box_edges(0, 0) {
            assert!(board.boxes_completed_by(line).is_empty());
        }
    }

    #[test]
    fn test_score_and_game_over() {
        let mut board = Board::new();
        assert_eq!(board.score(Side::Player), 0);
        assert_eq!(board.score(Side::Opponent), 0);

        // Claim every line; attribute all boxes to the opponent.
        let all: Vec<Line> = board.unclaimed_lines().collect();
        for line in all {
            board.claim_line(line, Side::Opponent).unwrap();
            let closed = board.boxes_completed_by(line);
            board.apply_box_ownership(&closed, Side::Opponent);
        }

        assert!(board.is_game_over());
        assert_eq!(board.score(Side::Opponent), GRID_SIZE * GRID_SIZE);
        assert_eq!(board.score(Side::Player), 0);
        assert_eq!(board.unclaimed_lines().count(), 0);
    }

    #[test]
    fn test_scan_order_is_horizontal_then_vertical_row_major() {
        let board = Board::new();
        let lines: Vec<Line> = board.unclaimed_lines().collect();

        assert_eq!(lines[0], Line::horizontal(0, 0));
        assert_eq!(lines[1], Line::horizontal(0, 1));
        assert_eq!(lines[(N * (N + 1)) - 1], Line::horizontal(2, GRID_SIZE));
        assert_eq!(lines[N * (N + 1)], Line::vertical(0, 0));
        assert_eq!(lines.last(), Some(&Line::vertical(GRID_SIZE, GRID_SIZE - 1)));
    }
}
