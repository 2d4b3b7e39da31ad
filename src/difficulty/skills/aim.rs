use crate::{
    difficulty::{evaluators::AimEvaluator, object::DifficultyObject},
    util::float_ext::FloatExt,
};

use super::strain::{prev_start_time, strain_decay, StrainSkill};

#[derive(Clone, Debug)]
pub struct Aim {
    include_sliders: bool,
    current_strain: f64,
    slider_strains: Vec<f64>,
}

impl Aim {
    const SKILL_MULTIPLIER: f64 = 26.0;
    const STRAIN_DECAY_BASE: f64 = 0.15;

    pub fn new(include_sliders: bool) -> Self {
        Self {
            include_sliders,
            current_strain: 0.0,
            slider_strains: Vec::with_capacity(64),
        }
    }

    /// Amount of sliders weighted by how close their strain is to the
    /// highest slider strain.
    pub fn get_difficult_sliders(&self) -> f64 {
        let max_slider_strain = self.slider_strains.iter().copied().fold(0.0, f64::max);

        if FloatExt::eq(max_slider_strain, 0.0) {
            return 0.0;
        }

        self.slider_strains
            .iter()
            .copied()
            .map(|strain| 1.0 / (1.0 + f64::exp(-(strain / max_slider_strain * 12.0 - 6.0))))
            .sum()
    }

    pub fn slider_strains(&self) -> &[f64] {
        &self.slider_strains
    }
}

impl StrainSkill for Aim {
    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64 {
        self.current_strain
            * strain_decay(time - prev_start_time(curr, objects), Self::STRAIN_DECAY_BASE)
    }

    fn strain_value_at(
        &mut self,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64 {
        self.current_strain *= strain_decay(curr.delta_time, Self::STRAIN_DECAY_BASE);
        self.current_strain += AimEvaluator::evaluate_diff_of(curr, objects, self.include_sliders)
            * Self::SKILL_MULTIPLIER;

        if curr.base.is_slider() {
            self.slider_strains.push(self.current_strain);
        }

        self.current_strain
    }
}
