//! Random seat selection for players without a usable seat preference.

use super::models::SeatNumber;
use rand::seq::SliceRandom;

/// Draws a seat from the open seats at a table
pub struct SeatRandomizer {
    /// Random number generator
    rng: rand::rngs::ThreadRng,
}

impl SeatRandomizer {
    /// Create a new seat randomizer
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }

    /// Pick a random open seat
    ///
    /// # Arguments
    ///
    /// * `open_seats` - Seats currently free at the table
    ///
    /// # Returns
    ///
    /// * `Option<SeatNumber>` - A free seat, or None if the table is full
    pub fn pick(&mut self, open_seats: &[SeatNumber]) -> Option<SeatNumber> {
        let mut candidates = open_seats.to_vec();
        candidates.shuffle(&mut self.rng);
        candidates.first().copied()
    }
}

impl Default for SeatRandomizer {
    fn default() -> Self {
        Self::new()
    }
}
