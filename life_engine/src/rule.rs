// rule.rs - Conway's B3/S23 transition rule

/// Relative positions of the eight Moore neighbours, as (row, col) offsets.
#[rustfmt::skip]
pub const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Next state of a single cell given its current state and live neighbour count.
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    match (alive, live_neighbours) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_only_with_two_or_three() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "neighbours = {}", n);
        }
    }

    #[test]
    fn dead_cell_is_born_only_with_three() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "neighbours = {}", n);
        }
    }
}
