use std::cmp;

use crate::{
    difficulty::object::{DifficultyObject, IDifficultyObject},
    util::difficulty::{lerp_from_ratios, logistic},
};

/// Multipliers for the ratio between two consecutive delta times.
///
/// Simple ratios like 1/2 or 1/3 are easy to read while ratios like 3/4 or
/// 3/5 are awkward.
pub const RHYTHM_RATIO_MULTIPLIERS: [(f64, f64); 8] = [
    (1.0, 0.01),
    (4.0 / 3.0, 3.0),
    (1.5, 1.25),
    (5.0 / 3.0, 3.0),
    (2.0, 0.2),
    (2.5, 1.2),
    (3.0, 0.25),
    (4.0, 0.0),
];

pub struct RhythmEvaluator;

impl RhythmEvaluator {
    const HISTORY_TIME_MAX: u32 = 5 * 1000; // 5 seconds
    const HISTORY_OBJECTS_MAX: usize = 32;
    const RHYTHM_OVERALL_MULTIPLIER: f64 = 3.2;
    const SLIDER_INTO_MULTIPLIER: f64 = 0.35;

    /// Calculates a rhythm multiplier for the difficulty of the tap
    /// associated with historic data of the current object.
    pub fn evaluate_diff_of<'a>(
        curr: &'a DifficultyObject<'a>,
        diff_objects: &'a [DifficultyObject<'a>],
    ) -> f64 {
        if curr.base.is_spinner()
            || curr.idx < 2
            || curr
                .previous(0, diff_objects)
                .is_none_or(|prev| prev.base.is_spinner())
        {
            return 0.0;
        }

        let mut rhythm_complexity_sum = 0.0;

        let delta_difference_eps = curr.hit_window_great * 0.3;

        let mut island = RhythmIsland::new(delta_difference_eps);
        let mut prev_island = RhythmIsland::new(delta_difference_eps);

        // Islands are compared with a tolerance so they can't be hashed
        let mut island_counts = Vec::<IslandCount>::new();

        // Ratio of the current start of an island to buff tighter rhythms
        let mut start_ratio = 0.0;

        let historical_note_count = cmp::min(curr.idx, Self::HISTORY_OBJECTS_MAX);

        let mut rhythm_start = 0;

        while curr
            .previous(rhythm_start, diff_objects)
            .filter(|prev| {
                rhythm_start + 2 < historical_note_count
                    && curr.start_time - prev.start_time < f64::from(Self::HISTORY_TIME_MAX)
            })
            .is_some()
        {
            rhythm_start += 1;
        }

        if let Some(mut prev_obj) = curr.previous(rhythm_start, diff_objects) {
            // From the furthest object up to the current one
            for i in (1..=rhythm_start).rev() {
                let Some(curr_obj) = curr.previous(i - 1, diff_objects) else {
                    break;
                };

                // Scales note 0 to 1 from history to now
                let time_decay = (f64::from(Self::HISTORY_TIME_MAX)
                    - (curr.start_time - curr_obj.start_time))
                    / f64::from(Self::HISTORY_TIME_MAX);
                let note_decay = (historical_note_count - i) as f64 / historical_note_count as f64;

                // Either limited by time or by object count
                let curr_historical_decay = note_decay.min(time_decay);

                let curr_delta = curr_obj.strain_time;
                let prev_delta = prev_obj.strain_time;

                // How much the current delta difference deserves a rhythm
                // bonus; multiples of each other are awarded less
                let delta_difference = prev_delta.max(curr_delta) / prev_delta.min(curr_delta);
                let mut effective_ratio = lerp_from_ratios(&RHYTHM_RATIO_MULTIPLIERS, delta_difference);

                if prev_obj.base.is_slider() {
                    // Gaps after a slider are measured from its end
                    let slider_delta = prev_delta.max(curr_obj.min_jump_time)
                        / prev_delta.min(curr_obj.min_jump_time);
                    let slider_ratio = lerp_from_ratios(&RHYTHM_RATIO_MULTIPLIERS, slider_delta);

                    effective_ratio = effective_ratio.min(slider_ratio);
                }

                // Speeding up is easier than slowing down
                if prev_delta > curr_delta + delta_difference_eps {
                    effective_ratio *= 0.5;
                }

                if (prev_delta - curr_delta).abs() < delta_difference_eps {
                    // Island is still progressing
                    island.add_delta(curr_delta);
                } else {
                    // BPM change into a slider has an easy accuracy window
                    if curr_obj.base.is_slider() {
                        effective_ratio *= Self::SLIDER_INTO_MULTIPLIER;
                    }

                    if let Some(island_count) = island_counts
                        .iter_mut()
                        .find(|entry| entry.island == island)
                    {
                        // Only count islands that follow one another
                        if prev_island == island {
                            island_count.count += 1;
                        }

                        // Repeated islands, e.g. triplet -> triplet
                        let power = logistic(f64::from(island.delta), 58.33, 0.24, Some(0.75));
                        let count = island_count.count as f64;
                        effective_ratio *= (5.0 / count).min(count.recip().powf(power));
                    } else {
                        island_counts.push(IslandCount { island, count: 1 });
                    }

                    // Scale down if the object is doubletappable
                    let doubletapness = prev_obj.get_doubletapness(Some(curr_obj));
                    effective_ratio *= 1.0 - doubletapness * 0.75;

                    rhythm_complexity_sum +=
                        (effective_ratio * start_ratio).sqrt() * curr_historical_decay;

                    start_ratio = effective_ratio;

                    prev_island = island;

                    island = RhythmIsland::new_with_delta(curr_delta, delta_difference_eps);
                }

                prev_obj = curr_obj;
            }
        }

        // Multiplier that can be applied to strain, range [1, inf)
        let mut rhythm_difficulty =
            (4.0 + rhythm_complexity_sum * Self::RHYTHM_OVERALL_MULTIPLIER).sqrt() / 2.0;
        rhythm_difficulty *= 1.0 - curr.get_doubletapness(curr.next(0, diff_objects));

        rhythm_difficulty
    }
}

/// A run of consecutive near-equal delta times.
#[derive(Copy, Clone, Debug)]
pub struct RhythmIsland {
    delta_difference_eps: f64,
    delta: i32,
    delta_count: i32,
}

const MIN_DELTA_TIME: i32 = DifficultyObject::MIN_DELTA_TIME as i32;

impl RhythmIsland {
    pub const fn new(delta_difference_eps: f64) -> Self {
        Self {
            delta_difference_eps,
            delta: i32::MAX,
            delta_count: 0,
        }
    }

    pub fn new_with_delta(delta: f64, delta_difference_eps: f64) -> Self {
        Self {
            delta_difference_eps,
            delta: (delta as i32).max(MIN_DELTA_TIME),
            delta_count: 1,
        }
    }

    pub fn add_delta(&mut self, delta: f64) {
        if self.delta == i32::MAX {
            self.delta = (delta as i32).max(MIN_DELTA_TIME);
        }

        self.delta_count += 1;
    }

    pub const fn delta(&self) -> i32 {
        self.delta
    }

    pub const fn delta_count(&self) -> i32 {
        self.delta_count
    }
}

impl PartialEq for RhythmIsland {
    fn eq(&self, other: &Self) -> bool {
        (f64::from(self.delta) - f64::from(other.delta)).abs() < self.delta_difference_eps
            && self.delta_count == other.delta_count
    }
}

struct IslandCount {
    island: RhythmIsland,
    count: usize,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        difficulty::{object::DifficultyObject, test_util::{from_points, stream}},
        model::hit_object::ObjectKind,
        util::float_ext::FloatExt,
    };

    use super::*;

    #[test]
    fn steady_stream_has_no_bonus() {
        let objects = stream(40, 200.0, 60.0);
        let diff_objects = DifficultyObject::create_all(&objects, 1.0);

        for h in &diff_objects[2..] {
            assert!(RhythmEvaluator::evaluate_diff_of(h, &diff_objects).eq(1.0));
        }
    }

    #[test]
    fn boundaries_are_zero() {
        let mut objects = stream(8, 200.0, 60.0);
        objects[4].kind = ObjectKind::Spinner;
        let diff_objects = DifficultyObject::create_all(&objects, 1.0);

        for idx in [0, 1, 4, 5] {
            let value = RhythmEvaluator::evaluate_diff_of(&diff_objects[idx], &diff_objects);
            assert!(value.eq(0.0), "{idx}: {value}");
        }
    }

    #[test]
    fn awkward_rhythm_is_rewarded() {
        let mut time = 0.0;

        let points: Vec<_> = (0..24)
            .map(|i| {
                let point = (time, 256.0 + 40.0 * (i % 2) as f32, 192.0);
                time += if i % 3 == 2 { 300.0 } else { 225.0 };

                point
            })
            .collect();

        let objects = from_points(&points);
        let diff_objects = DifficultyObject::create_all(&objects, 1.0);
        let last = &diff_objects[diff_objects.len() - 2];

        assert!(RhythmEvaluator::evaluate_diff_of(last, &diff_objects) > 1.0);
    }

    #[test]
    fn island_counts_must_match() {
        let mut a = RhythmIsland::new_with_delta(100.0, 10.0);
        let b = RhythmIsland::new_with_delta(100.0, 10.0);
        assert_eq!(a, b);

        a.add_delta(100.0);
        assert_ne!(a, b);
    }

    #[test]
    fn empty_island() {
        let mut island = RhythmIsland::new(5.0);
        assert_eq!(island.delta(), i32::MAX);

        island.add_delta(10.0);
        assert_eq!(island.delta(), MIN_DELTA_TIME);
        assert_eq!(island.delta_count(), 1);
    }

    proptest! {
        #[test]
        fn island_equality(
            delta_a in 25.0..1000.0_f64,
            delta_b in 25.0..1000.0_f64,
            eps in 1.0..50.0_f64,
        ) {
            let a = RhythmIsland::new_with_delta(delta_a, eps);
            let b = RhythmIsland::new_with_delta(delta_b, eps);

            prop_assert!(a == a);
            prop_assert_eq!(a == b, b == a);

            let within_eps = (f64::from(a.delta()) - f64::from(b.delta())).abs() < eps;
            prop_assert_eq!(a == b, within_eps);
        }
    }
}
