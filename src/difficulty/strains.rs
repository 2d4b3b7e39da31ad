/// The section peaks of each skill.
///
/// Suitable to plot the difficulty over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Strains {
    /// Strain peaks of the aim skill.
    pub aim: Vec<f64>,
    /// Strain peaks of the aim skill without sliders.
    pub aim_no_sliders: Vec<f64>,
    /// Strain peaks of the speed skill.
    pub speed: Vec<f64>,
    /// Strain peaks of the rhythm skill.
    pub rhythm: Vec<f64>,
    /// Strain peaks of the reading skill.
    pub reading: Vec<f64>,
}

impl Strains {
    /// Time between two strain peaks in milliseconds.
    pub const SECTION_LEN: f64 = 400.0;

    /// Amount of sections.
    pub fn len(&self) -> usize {
        self.aim.len()
    }

    /// Whether there are no sections.
    pub fn is_empty(&self) -> bool {
        self.aim.is_empty()
    }
}
