//! Conway's birth/survival rule

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Neighbor counts that bring a dead cell to life
    pub const BIRTH: [u8; 1] = [3];

    /// Neighbor counts that keep a live cell alive
    pub const SURVIVAL: [u8; 2] = [2, 3];

    /// Maximum neighbors in the Moore neighborhood
    pub const MAX_NEIGHBORS: u8 = 8;

    /// Next state of a cell given its current state and live neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        if current_state {
            Self::SURVIVAL.contains(&neighbor_count)
        } else {
            Self::BIRTH.contains(&neighbor_count)
        }
    }
}
