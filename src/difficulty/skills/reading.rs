use crate::difficulty::{
    evaluators::{ReadingEvaluator, RhythmEvaluator},
    object::DifficultyObject,
};

use super::strain::StrainSkill;

#[derive(Clone, Debug)]
pub struct Reading {
    hidden: bool,
    current_strain: f64,
}

impl Reading {
    const SKILL_MULTIPLIER: f64 = 1.0;

    pub fn new(hidden: bool) -> Self {
        Self {
            hidden,
            current_strain: 0.0,
        }
    }
}

impl StrainSkill for Reading {
    fn calculate_initial_strain(
        &self,
        _: f64,
        _: &DifficultyObject<'_>,
        _: &[DifficultyObject<'_>],
    ) -> f64 {
        self.current_strain
    }

    fn strain_value_at(
        &mut self,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64 {
        let finger_strain = RhythmEvaluator::evaluate_diff_of(curr, objects);

        self.current_strain =
            ReadingEvaluator::evaluate_diff_of(curr, objects, finger_strain, self.hidden)
                * Self::SKILL_MULTIPLIER;

        self.current_strain
    }
}
