//! LIFO stack of maze points.
//!
//! `PathStack` doubles as the live depth-first search stack and as the
//! recovered route once an exit is reached.
use crate::engine::Point;
use crate::error::{MazeError, Result};

/// An ordered, last-in-first-out sequence of [`Point`]s.
///
/// The top of the stack is the end of the backing vector, so `push` and `pop`
/// are O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathStack {
    points: Vec<Point>,
}

impl PathStack {
    pub fn new() -> Self {
        PathStack { points: Vec::new() }
    }

    /// Pushes `point` as the new top.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns the top point without removing it.
    ///
    /// # Returns
    /// * `Err(MazeError::EmptyStack)` if the stack holds no points.
    pub fn top(&self) -> Result<Point> {
        self.points.last().copied().ok_or(MazeError::EmptyStack)
    }

    /// Removes and returns the top point.
    ///
    /// # Returns
    /// * `Err(MazeError::EmptyStack)` if the stack holds no points.
    pub fn pop(&mut self) -> Result<Point> {
        self.points.pop().ok_or(MazeError::EmptyStack)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drops every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns a new stack holding the top `count` points, leaving `self`
    /// untouched.
    ///
    /// Without `reversed` the copy has the same top-to-bottom order as the
    /// selected range. With `reversed` the order is inverted: the deepest
    /// selected point becomes the top of the copy.
    ///
    /// # Returns
    /// * `Err(MazeError::Range)` if `count` exceeds the current size.
    ///
    /// # Examples
    /// ```
    /// use maze_solver::engine::Point;
    /// use maze_solver::stack::PathStack;
    ///
    /// let mut stack = PathStack::new();
    /// stack.push(Point::new(1, 1));
    /// stack.push(Point::new(2, 1));
    /// stack.push(Point::new(3, 1));
    ///
    /// let top_two = stack.copy(2, false).unwrap();
    /// assert_eq!(top_two.top().unwrap(), Point::new(3, 1));
    ///
    /// let reversed = stack.copy(3, true).unwrap();
    /// assert_eq!(reversed.top().unwrap(), Point::new(1, 1));
    ///
    /// assert_eq!(stack.len(), 3);
    /// assert!(stack.copy(4, false).is_err());
    /// ```
    pub fn copy(&self, count: usize, reversed: bool) -> Result<PathStack> {
        let size = self.points.len();
        if count > size {
            return Err(MazeError::Range {
                requested: count,
                size,
            });
        }

        let mut points = self.points[size - count..].to_vec();
        if reversed {
            points.reverse();
        }
        Ok(PathStack { points })
    }

    /// Walks the stack from top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Point> + '_ {
        self.points.iter().rev()
    }

    /// Returns the points as a vector ordered from top to bottom.
    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(points: &[(usize, usize)]) -> PathStack {
        let mut stack = PathStack::new();
        for &(r, c) in points {
            stack.push(Point::new(r, c));
        }
        stack
    }

    #[test]
    fn test_push_top_pop() {
        let mut stack = PathStack::new();
        assert!(stack.is_empty());
        stack.push(Point::new(1, 1));
        stack.push(Point::new(1, 2));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().unwrap(), Point::new(1, 2));
        assert_eq!(stack.pop().unwrap(), Point::new(1, 2));
        assert_eq!(stack.pop().unwrap(), Point::new(1, 1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack = PathStack::new();
        assert_eq!(stack.top(), Err(MazeError::EmptyStack));
        assert_eq!(stack.pop(), Err(MazeError::EmptyStack));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_clear() {
        let mut stack = stack_of(&[(0, 0), (0, 1), (0, 2)]);
        stack.clear();
        assert!(stack.is_empty());
        assert!(stack.top().is_err());
    }

    #[test]
    fn test_copy_leaves_source_intact() {
        let stack = stack_of(&[(1, 1), (2, 1), (3, 1), (3, 2)]);
        let before = stack.clone();

        let copy = stack.copy(3, false).unwrap();
        assert_eq!(stack, before);
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.top().unwrap(), Point::new(3, 2));

        assert_eq!(copy.len(), 3);
        assert_eq!(
            copy.to_vec(),
            vec![Point::new(3, 2), Point::new(3, 1), Point::new(2, 1)]
        );
    }

    #[test]
    fn test_copy_reversed_is_exact_reverse() {
        let stack = stack_of(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]);
        for n in 0..=stack.len() {
            let forward = stack.copy(n, false).unwrap().to_vec();
            let mut backward = stack.copy(n, true).unwrap().to_vec();
            backward.reverse();
            assert_eq!(forward, backward, "count {}", n);
        }
    }

    #[test]
    fn test_copy_range_error() {
        let stack = stack_of(&[(0, 0)]);
        assert_eq!(
            stack.copy(2, true),
            Err(MazeError::Range {
                requested: 2,
                size: 1
            })
        );
        assert!(stack.copy(0, false).unwrap().is_empty());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut stack = stack_of(&[(0, 0), (0, 1)]);
        let mut copy = stack.copy(2, false).unwrap();
        copy.pop().unwrap();
        stack.push(Point::new(0, 2));
        assert_eq!(copy.len(), 1);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_iter_is_top_to_bottom() {
        let stack = stack_of(&[(0, 0), (0, 1), (0, 2)]);
        let columns: Vec<usize> = stack.iter().map(|p| p.column).collect();
        assert_eq!(columns, vec![2, 1, 0]);
    }
}
