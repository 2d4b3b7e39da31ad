use crate::difficulty::object::{DifficultyObject, IDifficultyObject};

pub struct StaminaEvaluator;

impl StaminaEvaluator {
    /// Evaluates the raw tap rate of the current object, reduced for objects
    /// that can be doubletapped.
    ///
    /// Unlike speed, no bonuses are applied: stamina is all about sustaining
    /// the rate over long stretches.
    pub fn evaluate_diff_of<'a>(
        curr: &'a DifficultyObject<'a>,
        diff_objects: &'a [DifficultyObject<'a>],
    ) -> f64 {
        let Some(prev) = curr.previous(0, diff_objects).filter(|_| curr.idx >= 2) else {
            return 0.0;
        };

        if curr.base.is_spinner() || prev.base.is_spinner() {
            return 0.0;
        }

        // Same cap as for speed so that hit window exploits don't inflate
        // the tap rate
        let strain_time =
            curr.strain_time / ((curr.strain_time / curr.hit_window_great) / 0.93).clamp(0.92, 1.0);

        let doubletapness = 1.0 - curr.get_doubletapness(curr.next(0, diff_objects));

        1000.0 / strain_time * doubletapness
    }
}
