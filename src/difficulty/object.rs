use crate::model::hit_object::ObjectAttributes;

pub trait IDifficultyObject: Sized {
    fn idx(&self) -> usize;

    fn previous<'a>(&self, backwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }

    fn next<'a>(&self, forwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        diff_objects.get(self.idx() + (forwards_idx + 1))
    }
}

pub trait HasStartTime {
    fn start_time(&self) -> f64;
}

/// [`ObjectAttributes`] with the clock rate applied onto all time values.
pub struct DifficultyObject<'a> {
    pub idx: usize,
    pub base: &'a ObjectAttributes,
    pub start_time: f64,
    pub delta_time: f64,

    pub strain_time: f64,
    pub jump_dist: f64,
    pub min_jump_dist: f64,
    pub min_jump_time: f64,
    pub travel_dist: f64,
    pub travel_time: f64,
    pub angle: Option<f64>,

    pub hit_window_great: f64,
    pub time_preempt: f64,
    pub time_fade_in: f64,
    pub note_density: f64,
}

impl<'a> DifficultyObject<'a> {
    pub const NORMALIZED_RADIUS: i32 = 50;
    pub const NORMALIZED_DIAMETER: i32 = Self::NORMALIZED_RADIUS * 2;

    pub const MIN_DELTA_TIME: f64 = 25.0;

    pub fn new(
        hit_object: &'a ObjectAttributes,
        last_object: Option<&ObjectAttributes>,
        clock_rate: f64,
        idx: usize,
    ) -> Self {
        let start_time = hit_object.start_time / clock_rate;

        let delta_time = last_object.map_or(0.0, |last| {
            (hit_object.start_time - last.start_time) / clock_rate
        });

        let adjust = |time: f64| (time / clock_rate).max(Self::MIN_DELTA_TIME);

        Self {
            idx,
            base: hit_object,
            start_time,
            delta_time,
            strain_time: adjust(hit_object.strain_time),
            jump_dist: hit_object.jump_dist,
            min_jump_dist: hit_object.min_jump_dist,
            min_jump_time: adjust(hit_object.min_jump_time),
            travel_dist: hit_object.travel_dist,
            travel_time: adjust(hit_object.travel_time),
            angle: hit_object.angle,
            hit_window_great: hit_object.hit_window_great / clock_rate,
            time_preempt: hit_object.time_preempt / clock_rate,
            time_fade_in: hit_object.time_fade_in / clock_rate,
            note_density: hit_object.note_density,
        }
    }

    /// Create a difficulty object for each hit object.
    pub fn create_all(objects: &'a [ObjectAttributes], clock_rate: f64) -> Vec<Self> {
        let mut last = None;

        objects
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                let diff_object = Self::new(h, last, clock_rate, idx);
                last = Some(h);

                diff_object
            })
            .collect()
    }

    /// How visible the object is at the given time while it's fading in.
    pub fn opacity_at(&self, time: f64) -> f64 {
        if time > self.start_time {
            // Consider the object invisible once its start time has passed
            return 0.0;
        }

        let fade_in_start_time = self.start_time - self.time_preempt;

        reverse_fraction(time - fade_in_start_time, self.time_fade_in)
    }

    /// Probability that this object and `next` are hit with a single input.
    pub fn get_doubletapness(&self, next: Option<&Self>) -> f64 {
        let Some(next) = next else { return 0.0 };

        let hit_window = if self.base.is_spinner() {
            0.0
        } else {
            self.hit_window_great
        };

        let curr_delta_time = self.delta_time.max(1.0);
        let next_delta_time = next.delta_time.max(1.0);
        let delta_diff = (next_delta_time - curr_delta_time).abs();
        let speed_ratio = curr_delta_time / curr_delta_time.max(delta_diff);
        let window_ratio = (curr_delta_time / hit_window).min(1.0).powf(2.0);

        1.0 - speed_ratio.powf(1.0 - window_ratio)
    }
}

/// `elapsed / duration` clamped to `[0, 1]` where an empty duration is
/// considered instantly complete.
fn reverse_fraction(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return if elapsed >= 0.0 { 1.0 } else { 0.0 };
    }

    (elapsed / duration).clamp(0.0, 1.0)
}

impl IDifficultyObject for DifficultyObject<'_> {
    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for DifficultyObject<'_> {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}
