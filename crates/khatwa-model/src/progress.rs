use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Aggregate completion of a module or course.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
    /// Always within `0.0..=100.0`.
    pub percentage: f64,
}

impl Progress {
    /// Build progress from counts. `total == 0` yields 0%, and `completed` is
    /// capped at `total`.
    pub fn from_counts(completed: u32, total: u32) -> Self {
        let completed = completed.min(total);
        let percentage = if total == 0 {
            0.0
        } else {
            f64::from(completed) * 100.0 / f64::from(total)
        };
        Self {
            completed,
            total,
            percentage,
        }
    }

    /// Check externally supplied progress.
    pub fn validate(&self) -> Result<(), ModelError> {
        let in_range = self.percentage.is_finite() && (0.0..=100.0).contains(&self.percentage);
        if self.completed > self.total || !in_range {
            return Err(ModelError::InvalidProgress {
                completed: self.completed,
                total: self.total,
                percentage: self.percentage,
            });
        }
        Ok(())
    }

    pub fn rounded_percentage(&self) -> u8 {
        self.percentage.round().clamp(0.0, 100.0) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_total_is_zero_percent() {
        let progress = Progress::from_counts(0, 0);
        assert_eq!(progress.percentage, 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn completed_is_capped() {
        let progress = Progress::from_counts(5, 3);
        assert_eq!(progress.completed, 3);
        assert_eq!(progress.percentage, 100.0);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let bad = Progress {
            completed: 4,
            total: 2,
            percentage: 50.0,
        };
        assert!(bad.validate().is_err());
        let nan = Progress {
            completed: 1,
            total: 2,
            percentage: f64::NAN,
        };
        assert!(nan.validate().is_err());
        assert!(Progress::from_counts(1, 3).validate().is_ok());
    }
}
