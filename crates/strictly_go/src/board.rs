//! Go board with capture resolution and a final-status overlay.

use super::types::{Color, FinalStatus, MoveError, Point};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Square board of `size * size` intersections in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    stones: Vec<Option<Color>>,
    status: Vec<Option<FinalStatus>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            stones: vec![None; size * size],
            status: vec![None; size * size],
        }
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the point lies on the board.
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.size && point.y < self.size
    }

    fn index(&self, point: Point) -> Option<usize> {
        self.contains(point).then(|| point.y * self.size + point.x)
    }

    fn point_at(&self, index: usize) -> Point {
        Point::new(index % self.size, index / self.size)
    }

    /// Stone color at a point, `None` if empty or off the board.
    pub fn get(&self, point: Point) -> Option<Color> {
        self.index(point).and_then(|i| self.stones[i])
    }

    /// Puts or removes a stone without any rule checks.
    pub fn set(&mut self, point: Point, stone: Option<Color>) -> Result<(), MoveError> {
        let i = self.index(point).ok_or(MoveError::OutOfBounds(point))?;
        self.stones[i] = stone;
        Ok(())
    }

    /// Returns true if the two boards hold the same stones.
    pub fn same_position(&self, other: &Board) -> bool {
        self.stones == other.stones
    }

    /// Number of stones of the given color.
    pub fn count(&self, color: Color) -> usize {
        self.stones.iter().filter(|s| **s == Some(color)).count()
    }

    fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let p = self.point_at(index);
        let size = self.size;
        [
            (p.x > 0).then(|| index - 1),
            (p.x + 1 < size).then(|| index + 1),
            (p.y > 0).then(|| index - size),
            (p.y + 1 < size).then(|| index + size),
        ]
        .into_iter()
        .flatten()
    }

    /// Flood-fills the group containing `start` and counts its liberties.
    fn group(&self, start: usize) -> (Vec<usize>, usize) {
        let Some(color) = self.stones[start] else {
            return (Vec::new(), 0);
        };

        let mut seen = vec![false; self.stones.len()];
        let mut liberty = vec![false; self.stones.len()];
        let mut stack = vec![start];
        let mut members = Vec::new();
        seen[start] = true;

        while let Some(i) = stack.pop() {
            members.push(i);
            for n in self.neighbors(i) {
                match self.stones[n] {
                    None => liberty[n] = true,
                    Some(c) if c == color && !seen[n] => {
                        seen[n] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }

        (members, liberty.iter().filter(|l| **l).count())
    }

    /// Places a stone, removes captured enemy groups and rejects suicide.
    ///
    /// Returns the number of captured stones. On error the board is unchanged.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, point: Point, color: Color) -> Result<usize, MoveError> {
        let i = self.index(point).ok_or(MoveError::OutOfBounds(point))?;
        if self.stones[i].is_some() {
            return Err(MoveError::Occupied(point));
        }

        self.stones[i] = Some(color);

        let mut captured = 0;
        let enemies: Vec<usize> = self
            .neighbors(i)
            .filter(|n| self.stones[*n] == Some(color.opponent()))
            .collect();
        for n in enemies {
            // A neighbor may already be gone if it shared a group with an earlier one.
            if self.stones[n].is_none() {
                continue;
            }
            let (members, liberties) = self.group(n);
            if liberties == 0 {
                captured += members.len();
                for m in members {
                    self.stones[m] = None;
                }
            }
        }

        if captured == 0 && self.group(i).1 == 0 {
            self.stones[i] = None;
            return Err(MoveError::Suicide(point));
        }

        trace!(captured, "Stone placed");
        Ok(captured)
    }

    /// Final-status tag at a point.
    pub fn final_status(&self, point: Point) -> Option<FinalStatus> {
        self.index(point).and_then(|i| self.status[i])
    }

    /// Tags a point with a final status. Points off the board are ignored.
    pub fn set_final_status(&mut self, point: Point, status: FinalStatus) {
        if let Some(i) = self.index(point) {
            self.status[i] = Some(status);
        }
    }

    /// Clears every final-status tag.
    pub fn clear_final_status(&mut self) {
        self.status.iter_mut().for_each(|s| *s = None);
    }

    /// All tagged points with their status, in row-major order.
    pub fn final_statuses(&self) -> Vec<(Point, FinalStatus)> {
        self.status
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|s| (self.point_at(i), s)))
            .collect()
    }

    /// Formats the board as text: `X` black, `O` white, `.` empty.
    ///
    /// Territory is shown as lowercase `x`/`o` and dead stones as `#`/`@`.
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size * 2 + 1));
        for y in 0..self.size {
            for x in 0..self.size {
                let i = y * self.size + x;
                let symbol = match (self.stones[i], self.status[i]) {
                    (_, Some(FinalStatus::DeadBlackStone)) => '#',
                    (_, Some(FinalStatus::DeadWhiteStone)) => '@',
                    (Some(Color::Black), _) => 'X',
                    (Some(Color::White), _) => 'O',
                    (None, Some(FinalStatus::BlackTerritory)) => 'x',
                    (None, Some(FinalStatus::WhiteTerritory)) => 'o',
                    (None, None) => '.',
                };
                out.push(symbol);
                if x + 1 < self.size {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new(9);
        board.place(Point::new(2, 2), Color::Black).unwrap();
        assert_eq!(
            board.place(Point::new(2, 2), Color::White),
            Err(MoveError::Occupied(Point::new(2, 2)))
        );
    }

    #[test]
    fn test_corner_capture() {
        let mut board = Board::new(9);
        board.place(Point::new(0, 0), Color::White).unwrap();
        board.place(Point::new(1, 0), Color::Black).unwrap();
        let captured = board.place(Point::new(0, 1), Color::Black).unwrap();
        assert_eq!(captured, 1);
        assert_eq!(board.get(Point::new(0, 0)), None);
    }

    #[test]
    fn test_suicide_rejected_and_board_unchanged() {
        let mut board = Board::new(9);
        board.place(Point::new(1, 0), Color::Black).unwrap();
        board.place(Point::new(0, 1), Color::Black).unwrap();
        let before = board.clone();
        assert_eq!(
            board.place(Point::new(0, 0), Color::White),
            Err(MoveError::Suicide(Point::new(0, 0)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_filling_own_last_liberty_that_captures_is_legal() {
        // . X O
        // X O .
        // O . .
        let mut board = Board::new(5);
        board.set(Point::new(1, 0), Some(Color::Black)).unwrap();
        board.set(Point::new(0, 1), Some(Color::Black)).unwrap();
        board.set(Point::new(2, 0), Some(Color::White)).unwrap();
        board.set(Point::new(1, 1), Some(Color::White)).unwrap();
        board.set(Point::new(0, 2), Some(Color::White)).unwrap();
        let captured = board.place(Point::new(0, 0), Color::White).unwrap();
        assert_eq!(captured, 2);
    }

    #[test]
    fn test_display_marks_status() {
        let mut board = Board::new(2);
        board.set(Point::new(0, 0), Some(Color::White)).unwrap();
        board.set_final_status(Point::new(0, 0), FinalStatus::DeadWhiteStone);
        board.set_final_status(Point::new(1, 1), FinalStatus::BlackTerritory);
        assert_eq!(board.display(), "@ .\n. x\n");
        assert_eq!(board.final_statuses().len(), 2);
    }
}
