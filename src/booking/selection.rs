use crate::format::seat_labels;

/// Seats picked in the current wizard session, in the order they were clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatSelection {
    seats: Vec<u32>,
}

impl SeatSelection {
    /// Flip one seat. Returns true if the seat is selected afterwards.
    pub fn toggle(&mut self, seat_id: u32) -> bool {
        match self.seats.iter().position(|&s| s == seat_id) {
            Some(index) => {
                self.seats.remove(index);
                false
            }
            None => {
                self.seats.push(seat_id);
                true
            }
        }
    }

    pub fn contains(&self, seat_id: u32) -> bool {
        self.seats.contains(&seat_id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }

    pub fn total(&self, unit_price: f64) -> f64 {
        self.seats.len() as f64 * unit_price
    }

    pub fn labels(&self) -> String {
        seat_labels(&self.seats)
    }
}
