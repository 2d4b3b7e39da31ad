use std::cmp;

use crate::{
    error::AttributesError,
    model::{
        hit_object::{validate_objects, ObjectAttributes, ObjectKind},
        mods::GameMods,
    },
};

use self::{
    evaluators::{ReadingDiagnostics, ReadingEvaluator, RhythmEvaluator},
    object::DifficultyObject,
    skills::{strain::relevant_count, Skills},
};

pub use self::{attributes::DifficultyAttributes, strains::Strains};

mod attributes;
pub mod evaluators;
pub mod object;
pub mod skills;
mod strains;

#[cfg(test)]
pub(crate) mod test_util;

/// Difficulty calculator on a sequence of [`ObjectAttributes`].
///
/// # Example
///
/// ```
/// use rosu_skills::{model::hit_object::ObjectAttributes, Difficulty};
///
/// let objects: Vec<ObjectAttributes> = Vec::new();
///
/// let attrs = Difficulty::new()
///     .mods(8 + 64) // HDDT
///     .passed_objects(100)
///     .calculate(&objects)
///     .unwrap();
///
/// assert_eq!(attrs.aim, 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            passed_objects: None,
            clock_rate: None,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// The clock rate must be positive and finite.
    pub const fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = Some(clock_rate);

        self
    }

    pub const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    pub fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    /// Calculate all skill difficulties sequentially.
    pub fn calculate(
        &self,
        objects: &[ObjectAttributes],
    ) -> Result<DifficultyAttributes, AttributesError> {
        let DifficultyValues { skills, mut attrs } =
            DifficultyValues::calculate(self, objects, false)?;

        DifficultyValues::eval(&mut attrs, &skills);

        Ok(attrs)
    }

    /// Calculate all skill difficulties with one thread per skill.
    ///
    /// The result is identical to [`Difficulty::calculate`].
    pub fn calculate_parallel(
        &self,
        objects: &[ObjectAttributes],
    ) -> Result<DifficultyAttributes, AttributesError> {
        let DifficultyValues { skills, mut attrs } =
            DifficultyValues::calculate(self, objects, true)?;

        DifficultyValues::eval(&mut attrs, &skills);

        Ok(attrs)
    }

    /// Calculate the strain peaks of each skill.
    pub fn strains(&self, objects: &[ObjectAttributes]) -> Result<Strains, AttributesError> {
        let DifficultyValues { skills, attrs } =
            DifficultyValues::calculate(self, objects, false)?;

        if attrs.n_objects() == 0 {
            return Ok(Strains::default());
        }

        let Skills {
            aim,
            aim_no_sliders,
            speed,
            rhythm,
            reading,
        } = skills;

        Ok(Strains {
            aim: aim.into_current_strain_peaks().into_vec(),
            aim_no_sliders: aim_no_sliders.into_current_strain_peaks().into_vec(),
            speed: speed.into_current_strain_peaks().into_vec(),
            rhythm: rhythm.into_current_strain_peaks().into_vec(),
            reading: reading.into_current_strain_peaks().into_vec(),
        })
    }

    /// Intermediate reading terms for each passed object.
    pub fn reading_diagnostics(
        &self,
        objects: &[ObjectAttributes],
    ) -> Result<Vec<ReadingDiagnostics>, AttributesError> {
        let clock_rate = prepare(self, objects)?;
        let diff_objects = DifficultyObject::create_all(objects, clock_rate);
        let hidden = self.mods.hd();

        let diagnostics = diff_objects
            .iter()
            .take(self.get_passed_objects())
            .map(|curr| {
                let finger_strain = RhythmEvaluator::evaluate_diff_of(curr, &diff_objects);

                ReadingEvaluator::evaluate_with_diagnostics(
                    curr,
                    &diff_objects,
                    finger_strain,
                    hidden,
                )
            })
            .collect();

        Ok(diagnostics)
    }
}

/// Check the settings and objects, returning the clock rate to use.
fn prepare(difficulty: &Difficulty, objects: &[ObjectAttributes]) -> Result<f64, AttributesError> {
    let clock_rate = difficulty.get_clock_rate();

    if !(clock_rate.is_finite() && clock_rate > 0.0) {
        #[cfg(feature = "tracing")]
        tracing::warn!(clock_rate, "Rejected clock rate");

        return Err(AttributesError::ClockRate(clock_rate));
    }

    if let Err(err) = validate_objects(objects) {
        #[cfg(feature = "tracing")]
        tracing::warn!(%err, "Rejected object attributes");

        return Err(err);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        n_objects = objects.len(),
        clock_rate,
        passed_objects = ?difficulty.passed_objects,
        "Calculating skill difficulties"
    );

    Ok(clock_rate)
}

pub struct DifficultyValues {
    pub skills: Skills,
    pub attrs: DifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(
        difficulty: &Difficulty,
        objects: &[ObjectAttributes],
        parallel: bool,
    ) -> Result<Self, AttributesError> {
        let clock_rate = prepare(difficulty, objects)?;
        let take = cmp::min(objects.len(), difficulty.get_passed_objects());

        let mut attrs = DifficultyAttributes::default();

        for h in objects.iter().take(take) {
            match h.kind {
                ObjectKind::Circle => attrs.n_circles += 1,
                ObjectKind::Slider(_) => attrs.n_sliders += 1,
                ObjectKind::Spinner => attrs.n_spinners += 1,
            }
        }

        // Objects past the passed ones are still available for look-ahead
        let diff_objects = DifficultyObject::create_all(objects, clock_rate);

        let skills = Skills::new(difficulty.get_mods());

        let skills = if parallel {
            skills.process_all_parallel(&diff_objects, take)
        } else {
            skills.process_all(&diff_objects, take)
        };

        Ok(Self { skills, attrs })
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(attrs: &mut DifficultyAttributes, skills: &Skills) {
        let Skills {
            aim,
            aim_no_sliders,
            speed,
            rhythm,
            reading,
        } = skills;

        let aim_difficulty_value = aim.difficulty_value();
        let speed_difficulty_value = speed.difficulty_value();

        attrs.aim = aim_difficulty_value;
        attrs.aim_no_sliders = aim_no_sliders.difficulty_value();
        attrs.speed = speed_difficulty_value;
        attrs.rhythm = rhythm.difficulty_value();
        attrs.reading = reading.difficulty_value();
        attrs.aim_difficult_strain_count = aim.count_top_weighted_strains(aim_difficulty_value);
        attrs.speed_difficult_strain_count =
            speed.count_top_weighted_strains(speed_difficulty_value);
        attrs.aim_difficult_slider_count = aim.skill().get_difficult_sliders();
        attrs.speed_note_count = relevant_count(speed.object_strains());
    }
}
