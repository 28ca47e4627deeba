//! A single grid cell with a staging slot for the next generation

/// One cell of a [`Grid`](super::Grid).
///
/// `pending` only carries meaning while a transition is being computed.
/// Once [`Cell::commit`] has run it mirrors `alive`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    alive: bool,
    pending: bool,
}

/// Cells compare by current state only; `pending` is scratch space.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.alive == other.alive
    }
}

impl Eq for Cell {}

impl Cell {
    /// Current state of the cell
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Overwrite the current state, bypassing the transition
    pub fn set_alive(&mut self, value: bool) {
        self.alive = value;
    }

    /// Stage the state for the next generation without touching the current one
    pub fn stage_next(&mut self, value: bool) {
        self.pending = value;
    }

    /// Fold the staged state into the current one
    pub fn commit(&mut self) {
        self.alive = self.pending;
    }
}
