use crate::{
    difficulty::object::{DifficultyObject, HasStartTime, IDifficultyObject},
    util::{float_ext::FloatExt, hint::unlikely, strains_vec::StrainsVec},
};

/// Per-object strain computation of a skill.
///
/// The sectioning and peak weighting is handled by [`StrainAggregator`].
pub trait StrainSkill {
    const DECAY_WEIGHT: f64 = 0.9;
    const SECTION_LENGTH: f64 = 400.0;

    /// Strain at the start of a new section at `time`, before `curr` is
    /// processed.
    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64;

    /// Strain after processing `curr`.
    fn strain_value_at(
        &mut self,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) -> f64;
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum SectionState {
    Idle,
    Accumulating { section_end: f64 },
}

/// Folds per-object strains of a [`StrainSkill`] into section peaks.
#[derive(Clone, Debug)]
pub struct StrainAggregator<S> {
    skill: S,
    state: SectionState,
    current_section_peak: f64,
    strain_peaks: StrainsVec,
    object_strains: Vec<f64>,
}

impl<S: StrainSkill> StrainAggregator<S> {
    pub fn new(skill: S) -> Self {
        Self {
            skill,
            state: SectionState::Idle,
            current_section_peak: 0.0,
            strain_peaks: StrainsVec::with_capacity(256),
            object_strains: Vec::with_capacity(256),
        }
    }

    pub fn process(&mut self, curr: &DifficultyObject<'_>, objects: &[DifficultyObject<'_>]) {
        let mut section_end = match self.state {
            // The first object initializes the section boundary
            SectionState::Idle => {
                (curr.start_time / S::SECTION_LENGTH).ceil() * S::SECTION_LENGTH
            }
            SectionState::Accumulating { section_end } => section_end,
        };

        while curr.start_time > section_end {
            self.save_current_peak();
            self.start_new_section_from(section_end, curr, objects);
            section_end += S::SECTION_LENGTH;
        }

        self.state = SectionState::Accumulating { section_end };

        let strain = self.skill.strain_value_at(curr, objects);
        self.current_section_peak = strain.max(self.current_section_peak);
        self.object_strains.push(strain);
    }

    fn save_current_peak(&mut self) {
        self.strain_peaks.push(self.current_section_peak);
    }

    fn start_new_section_from(
        &mut self,
        time: f64,
        curr: &DifficultyObject<'_>,
        objects: &[DifficultyObject<'_>],
    ) {
        self.current_section_peak = self.skill.calculate_initial_strain(time, curr, objects);
    }

    /// Section peaks including the currently open section.
    pub fn current_strain_peaks(&self) -> StrainsVec {
        let mut strain_peaks = self.strain_peaks.clone();
        strain_peaks.push(self.current_section_peak);

        strain_peaks
    }

    pub fn into_current_strain_peaks(self) -> StrainsVec {
        let mut strain_peaks = self.strain_peaks;
        strain_peaks.push(self.current_section_peak);

        strain_peaks
    }

    pub fn difficulty_value(&self) -> f64 {
        difficulty_value(self.current_strain_peaks(), S::DECAY_WEIGHT)
    }

    pub fn into_difficulty_value(self) -> f64 {
        difficulty_value(self.into_current_strain_peaks(), S::DECAY_WEIGHT)
    }

    pub fn count_top_weighted_strains(&self, difficulty_value: f64) -> f64 {
        count_top_weighted_strains(&self.object_strains, difficulty_value)
    }

    /// Strain of each processed object.
    pub fn object_strains(&self) -> &[f64] {
        &self.object_strains
    }

    pub const fn skill(&self) -> &S {
        &self.skill
    }
}

pub fn count_top_weighted_strains(object_strains: &[f64], difficulty_value: f64) -> f64 {
    if unlikely(object_strains.is_empty()) {
        return 0.0;
    }

    // What would the top strain be if all strain values were identical
    let consistent_top_strain = difficulty_value / 10.0;

    if unlikely(FloatExt::eq(consistent_top_strain, 0.0)) {
        return object_strains.len() as f64;
    }

    // Weighted sum of all strains; the constants are arbitrary
    object_strains
        .iter()
        .map(|s| 1.1 / (1.0 + f64::exp(-10.0 * (s / consistent_top_strain - 0.88))))
        .sum()
}

/// Weighted sum of the section peaks, highest first.
pub fn difficulty_value(current_strain_peaks: StrainsVec, decay_weight: f64) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    // Sections without strain don't contribute and would only slow down the
    // sort
    let mut peaks = current_strain_peaks;

    for strain in peaks.sorted_non_zero_iter() {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

/// Amount of strains with a significant share of the maximum strain.
pub fn relevant_count(object_strains: &[f64]) -> f64 {
    object_strains
        .iter()
        .copied()
        .max_by(f64::total_cmp)
        .filter(|&n| n > 0.0)
        .map_or(0.0, |max_strain| {
            object_strains.iter().fold(0.0, |sum, strain| {
                sum + (1.0 + f64::exp(-(strain / max_strain * 12.0 - 6.0))).recip()
            })
        })
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

/// Start time of the object preceding `curr`, or `0.0` for the first one.
pub fn prev_start_time(curr: &DifficultyObject<'_>, objects: &[DifficultyObject<'_>]) -> f64 {
    curr.previous(0, objects)
        .map_or(0.0, HasStartTime::start_time)
}
