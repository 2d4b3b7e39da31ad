use crate::{
    difficulty::object::{DifficultyObject, IDifficultyObject},
    util::difficulty::{bpm_to_milliseconds, milliseconds_to_bpm},
};

pub struct SpeedEvaluator;

impl SpeedEvaluator {
    const SINGLE_SPACING_THRESHOLD: f64 = DifficultyObject::NORMALIZED_DIAMETER as f64 * 1.25; // 1.25 circles distance between centers
    const MIN_SPEED_BONUS: f64 = 200.0; // 200 BPM 1/4th
    const SPEED_BALANCING_FACTOR: f64 = 40.0;
    const DIST_MULTIPLIER: f64 = 0.8;

    /// Evaluates the difficulty of tapping the current object, based on:
    ///
    /// - time between pressing the previous and current object,
    /// - distance between those objects,
    /// - and how easily they can be cheesed.
    pub fn evaluate_diff_of<'a>(
        curr: &'a DifficultyObject<'a>,
        diff_objects: &'a [DifficultyObject<'a>],
        autopilot: bool,
    ) -> f64 {
        let Some(osu_prev_obj) = curr.previous(0, diff_objects).filter(|_| curr.idx >= 2) else {
            return 0.0;
        };

        if curr.base.is_spinner() || osu_prev_obj.base.is_spinner() {
            return 0.0;
        }

        let osu_next_obj = curr.next(0, diff_objects);

        let mut strain_time = curr.strain_time;
        let doubletapness = 1.0 - curr.get_doubletapness(osu_next_obj);

        // Cap delta time to the great hit window.
        // 0.93 keeps 260bpm OD8 streams from being nerfed harshly while 0.92
        // limits the effect of the cap.
        strain_time /= ((strain_time / curr.hit_window_great) / 0.93).clamp(0.92, 1.0);

        let speed_bonus = if milliseconds_to_bpm(strain_time, None) > Self::MIN_SPEED_BONUS {
            // Additional scaling bonus for streams above 200bpm
            let base = (bpm_to_milliseconds(Self::MIN_SPEED_BONUS, None) - strain_time)
                / Self::SPEED_BALANCING_FACTOR;

            0.75 * base.powf(2.0)
        } else {
            0.0
        };

        let travel_dist = osu_prev_obj.travel_dist;
        let dist = Self::SINGLE_SPACING_THRESHOLD.min(travel_dist + curr.min_jump_dist);

        // Max distance bonus is `DIST_MULTIPLIER` at the spacing threshold
        let dist_bonus = if autopilot {
            0.0
        } else {
            (dist / Self::SINGLE_SPACING_THRESHOLD).powf(3.95) * Self::DIST_MULTIPLIER
        };

        // Base difficulty with all bonuses
        let difficulty = (1.0 + speed_bonus + dist_bonus) * 1000.0 / strain_time;

        // Penalty for doubletappable doubles
        difficulty * doubletapness
    }
}
