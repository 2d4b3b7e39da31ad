use crate::difficulty::{
    evaluators::{RhythmEvaluator, SpeedEvaluator, StaminaEvaluator},
    object::DifficultyObject,
};

use super::strain::{prev_start_time, strain_decay, StrainSkill};

/// Tapping difficulty made up of short bursts and sustained stamina.
#[derive(Clone, Debug)]
pub struct Speed {
    has_autopilot_mod: bool,
    current_burst_strain: f64,
    current_stamina_strain: f64,
    current_rhythm: f64,
}

impl Speed {
    const TOTAL_MULTIPLIER: f64 = 0.98;
    const BURST_MULTIPLIER: f64 = 2.2;
    const STAMINA_MULTIPLIER: f64 = 0.02;
    const STRAIN_DECAY_BASE: f64 = 0.1;
    const STAMINA_DECAY_EXPONENT: f64 = 3.5;

    pub fn new(has_autopilot_mod: bool) -> Self {
        Self {
            has_autopilot_mod,
            current_burst_strain: 0.0,
            current_stamina_strain: 0.0,
            current_rhythm: 0.0,
        }
    }

    fn burst_decay(ms: f64) -> f64 {
        strain_decay(ms, Self::STRAIN_DECAY_BASE)
    }

    /// Stamina barely decays over short breaks but quickly over long ones.
    fn stamina_decay(ms: f64) -> f64 {
        f64::powf(
            Self::STRAIN_DECAY_BASE,
            (ms / 1000.0).powf(Self::STAMINA_DECAY_EXPONENT),
        )
    }
}

impl StrainSkill for Speed {
    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64 {
        let elapsed = time - prev_start_time(curr, objects);

        let burst = (self.current_burst_strain * self.current_rhythm) * Self::burst_decay(elapsed);
        let stamina = self.current_stamina_strain * Self::stamina_decay(elapsed);

        (burst + stamina) * Self::TOTAL_MULTIPLIER
    }

    fn strain_value_at(
        &mut self,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64 {
        // Rhythm only scales the new tap, not the decayed history
        self.current_rhythm = RhythmEvaluator::evaluate_diff_of(curr, objects);

        self.current_burst_strain *= Self::burst_decay(curr.strain_time);
        self.current_burst_strain +=
            SpeedEvaluator::evaluate_diff_of(curr, objects, self.has_autopilot_mod)
                * Self::BURST_MULTIPLIER
                * self.current_rhythm;

        self.current_stamina_strain *= Self::stamina_decay(curr.strain_time);
        self.current_stamina_strain +=
            StaminaEvaluator::evaluate_diff_of(curr, objects) * Self::STAMINA_MULTIPLIER;

        (self.current_burst_strain + self.current_stamina_strain) * Self::TOTAL_MULTIPLIER
    }
}
