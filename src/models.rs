//models.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Exercise table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Exercise table is empty")]
    Empty,
    #[error("Exercise '{0}' has no steps")]
    NoSteps(String),
    #[error("Exercise '{name}' has {steps} steps but {durations} durations")]
    LengthMismatch {
        name: String,
        steps: usize,
        durations: usize,
    },
    #[error("Exercise '{name}' step {index} has a zero duration")]
    ZeroDuration { name: String, index: usize },
}

/// One guided exercise. `steps` and `durations` are parallel lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub icon: String,
    pub steps: Vec<String>,
    pub durations: Vec<u32>,
}

impl Exercise {
    pub fn total_seconds(&self) -> u32 {
        self.durations.iter().sum()
    }

    pub fn step(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.steps.is_empty() {
            return Err(CatalogError::NoSteps(self.name.clone()));
        }
        if self.steps.len() != self.durations.len() {
            return Err(CatalogError::LengthMismatch {
                name: self.name.clone(),
                steps: self.steps.len(),
                durations: self.durations.len(),
            });
        }
        if let Some(index) = self.durations.iter().position(|d| *d == 0) {
            return Err(CatalogError::ZeroDuration {
                name: self.name.clone(),
                index,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(steps: &[&str], durations: &[u32]) -> Exercise {
        Exercise {
            name: "Test".to_string(),
            icon: "*".to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            durations: durations.to_vec(),
        }
    }

    #[test]
    fn total_is_sum_of_durations() {
        let ex = exercise(&["in", "hold", "out"], &[4, 3, 5]);
        assert_eq!(ex.total_seconds(), 12);
        assert_eq!(ex.step(1), Some("hold"));
        assert_eq!(ex.step(3), None);
        assert!(ex.validate().is_ok());
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let ex = exercise(&["in", "out"], &[4]);
        assert!(matches!(
            ex.validate(),
            Err(CatalogError::LengthMismatch { steps: 2, durations: 1, .. })
        ));
    }

    #[test]
    fn rejects_zero_duration_and_empty_steps() {
        let ex = exercise(&["in", "out"], &[4, 0]);
        assert!(matches!(ex.validate(), Err(CatalogError::ZeroDuration { index: 1, .. })));

        let ex = exercise(&[], &[]);
        assert!(matches!(ex.validate(), Err(CatalogError::NoSteps(_))));
    }
}
