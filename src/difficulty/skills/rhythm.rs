use crate::difficulty::{evaluators::RhythmEvaluator, object::DifficultyObject};

use super::strain::StrainSkill;

/// Rhythmic complexity, sharpened so that peaks dominate.
#[derive(Clone, Debug, Default)]
pub struct Rhythm;

impl Rhythm {
    const STRAIN_EXPONENT: i32 = 5;
}

impl StrainSkill for Rhythm {
    // The section starts with the unsharpened value of the upcoming object
    fn calculate_initial_strain(
        &self,
        _: f64,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64 {
        RhythmEvaluator::evaluate_diff_of(curr, objects)
    }

    fn strain_value_at(
        &mut self,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64 {
        RhythmEvaluator::evaluate_diff_of(curr, objects).powi(Self::STRAIN_EXPONENT)
    }
}
