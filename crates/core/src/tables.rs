//! Weighted outcome tables used for every tiered random choice (enemy types,
//! item rarity tiers). One sampling routine replaces threshold cascades.

use crate::rng::GameRng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedTable<T> {
    entries: Vec<(u32, T)>,
    total_weight: u32,
}

impl<T> WeightedTable<T> {
    pub fn new(entries: Vec<(u32, T)>) -> Self {
        let total_weight = entries.iter().map(|(weight, _)| *weight).sum();
        Self { entries, total_weight }
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    pub fn entries(&self) -> &[(u32, T)] {
        &self.entries
    }

    /// Returns `None` only when every weight is zero.
    pub fn sample(&self, rng: &mut GameRng) -> Option<&T> {
        if self.total_weight == 0 {
            return None;
        }
        let roll = rng.range_usize(0, self.total_weight as usize - 1) as u32;
        self.outcome_at(roll)
    }

    fn outcome_at(&self, roll: u32) -> Option<&T> {
        let mut cumulative = 0_u32;
        for (weight, outcome) in &self.entries {
            cumulative += weight;
            if roll < cumulative {
                return Some(outcome);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_map_onto_cumulative_weight_bands() {
        let table = WeightedTable::new(vec![(50, 'a'), (25, 'b'), (25, 'c')]);
        assert_eq!(table.outcome_at(0), Some(&'a'));
        assert_eq!(table.outcome_at(49), Some(&'a'));
        assert_eq!(table.outcome_at(50), Some(&'b'));
        assert_eq!(table.outcome_at(74), Some(&'b'));
        assert_eq!(table.outcome_at(75), Some(&'c'));
        assert_eq!(table.outcome_at(99), Some(&'c'));
        assert_eq!(table.outcome_at(100), None);
    }

    #[test]
    fn zero_weight_entries_are_never_sampled() {
        let table = WeightedTable::new(vec![(0, "never"), (3, "always"), (0, "never")]);
        let mut rng = GameRng::seed_from_u64(11);
        for _ in 0..200 {
            assert_eq!(table.sample(&mut rng), Some(&"always"));
        }
    }

    #[test]
    fn empty_table_samples_nothing() {
        let table: WeightedTable<u8> = WeightedTable::new(Vec::new());
        let mut rng = GameRng::seed_from_u64(1);
        assert_eq!(table.total_weight(), 0);
        assert_eq!(table.sample(&mut rng), None);
    }
}
