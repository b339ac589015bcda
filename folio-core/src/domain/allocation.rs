//! Asset allocation snapshot.

use serde::{Deserialize, Serialize};

/// One slice of the allocation pie.
///
/// Percentages are a snapshot; nothing forces a set of slices to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub label: String,
    pub percent: f64,
}

impl AllocationSlice {
    pub fn new(label: impl Into<String>, percent: f64) -> Self {
        Self {
            label: label.into(),
            percent,
        }
    }
}

/// Share of each slice relative to the sum of all slices, in `[0, 1]`.
///
/// Returns zeros when the total is not positive.
pub fn shares(slices: &[AllocationSlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|s| s.percent).sum();
    if total <= 0.0 {
        return vec![0.0; slices.len()];
    }
    slices.iter().map(|s| s.percent / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_normalize_to_total() {
        let slices = vec![
            AllocationSlice::new("A", 30.0),
            AllocationSlice::new("B", 10.0),
        ];
        assert_eq!(shares(&slices), vec![0.75, 0.25]);
    }

    #[test]
    fn shares_of_empty_total_are_zero() {
        let slices = vec![AllocationSlice::new("A", 0.0)];
        assert_eq!(shares(&slices), vec![0.0]);
        assert!(shares(&[]).is_empty());
    }
}
