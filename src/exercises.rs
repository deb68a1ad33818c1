use crate::models::{CatalogError, Exercise};

/// The built-in exercise table, compiled into the binary.
pub const CATALOG_JSON: &str = include_str!("exercises.json");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPosition {
    pub index: usize,
    pub fraction: f32,
}

pub fn load_catalog(catalog_json: &str) -> Result<Vec<Exercise>, CatalogError> {
    let exercises: Vec<Exercise> = serde_json::from_str(catalog_json)?;
    if exercises.is_empty() {
        return Err(CatalogError::Empty);
    }
    for exercise in &exercises {
        exercise.validate()?;
    }
    log::debug!("Loaded {} exercises", exercises.len());
    Ok(exercises)
}

pub fn builtin_catalog() -> Result<Vec<Exercise>, CatalogError> {
    load_catalog(CATALOG_JSON)
}

/// Finds the step that `elapsed` seconds fall into. A step boundary belongs
/// to the following step. Past the end, the last step is reported at 1.0.
pub fn locate_step(durations: &[u32], elapsed: u32) -> StepPosition {
    let total: u32 = durations.iter().sum();
    let mut cumulative = 0;
    for (index, duration) in durations.iter().enumerate() {
        cumulative += duration;
        if elapsed < cumulative {
            return StepPosition {
                index,
                fraction: elapsed as f32 / total as f32,
            };
        }
    }

    StepPosition {
        index: durations.len().saturating_sub(1),
        fraction: 1.0,
    }
}
