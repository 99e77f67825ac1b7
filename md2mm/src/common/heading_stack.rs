//! Turns a flat sequence of heading levels into tree depth.
//!
//! Markdown headings carry no explicit close marker: a heading's section ends
//! where the next heading of the same or a higher rank begins. The stack keeps
//! one entry per open heading node, on top of a sentinel level `0` standing
//! for the implicit root node. Opening a heading of level `L` first closes
//! every open heading whose level is `>= L`, then pushes `L`, so each heading
//! becomes a child of the nearest preceding heading of strictly lower level.
//!
//! ```text
//! levels  [1, 2, 2, 3, 1]
//! closed  [0, 0, 1, 0, 3]
//! depth   [1, 2, 2, 3, 1]
//! ```
//!
//! Entries are strictly increasing from bottom to top at all times.

const SENTINEL: u8 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingStack {
    levels: Vec<u8>,
}

impl HeadingStack {
    pub fn new() -> Self {
        HeadingStack {
            levels: vec![SENTINEL],
        }
    }

    /// Open a heading of `level`, returning how many open headings it closed.
    ///
    /// Levels below 1 are treated as 1 so the sentinel is never popped.
    pub fn open(&mut self, level: u8) -> usize {
        let level = level.max(1);
        let mut closed = 0;
        while self.levels.len() > 1 && self.top() >= level {
            self.levels.pop();
            closed += 1;
        }
        self.levels.push(level);
        closed
    }

    /// Close every open heading, returning how many were open.
    pub fn close_all(&mut self) -> usize {
        let open = self.depth();
        self.levels.truncate(1);
        open
    }

    /// Number of open heading nodes (the sentinel is not counted).
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    fn top(&self) -> u8 {
        self.levels.last().copied().unwrap_or(SENTINEL)
    }
}

impl Default for HeadingStack {
    fn default() -> Self {
        Self::new()
    }
}
