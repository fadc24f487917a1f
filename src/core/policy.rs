// License: MIT

use std::collections::HashSet;

/// Which reminder thresholds are due now and have not fired yet.
///
/// Pure with respect to time: callers pass in the accumulated active
/// duration and the fired set, nothing here reads a clock. `reminders_ms`
/// is expected sorted ascending (config validation guarantees it), so the
/// returned list is ascending too.
pub fn due_reminders(active_ms: u64, reminders_ms: &[u64], fired: &HashSet<u64>) -> Vec<u64> {
    reminders_ms
        .iter()
        .copied()
        .filter(|t| *t <= active_ms && !fired.contains(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_below_first_threshold() {
        let fired = HashSet::new();
        assert!(due_reminders(3_599_000, &[3_600_000, 7_200_000], &fired).is_empty());
    }

    #[test]
    fn due_at_exact_threshold() {
        let fired = HashSet::new();
        assert_eq!(
            due_reminders(3_600_000, &[3_600_000, 7_200_000], &fired),
            vec![3_600_000]
        );
    }

    #[test]
    fn fired_thresholds_are_excluded() {
        let mut fired = HashSet::new();
        fired.insert(3_600_000u64);
        assert_eq!(
            due_reminders(7_200_000, &[3_600_000, 7_200_000], &fired),
            vec![7_200_000]
        );
    }

    #[test]
    fn multiple_due_come_back_ascending() {
        let fired = HashSet::new();
        assert_eq!(
            due_reminders(10_000_000, &[3_600_000, 7_200_000], &fired),
            vec![3_600_000, 7_200_000]
        );
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let mut fired = HashSet::new();
        fired.insert(3_600_000u64);
        let a = due_reminders(8_000_000, &[3_600_000, 7_200_000], &fired);
        let b = due_reminders(8_000_000, &[3_600_000, 7_200_000], &fired);
        assert_eq!(a, b);
    }
}
