/// The result of a difficulty calculation.
///
/// Every value is non-negative and `0.0` for an empty sequence of objects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyAttributes {
    /// The difficulty of the aim skill.
    pub aim: f64,
    /// The difficulty of the aim skill without slider travel.
    pub aim_no_sliders: f64,
    /// The difficulty of the speed skill, including stamina.
    pub speed: f64,
    /// The difficulty of the rhythm skill.
    pub rhythm: f64,
    /// The difficulty of the reading skill.
    pub reading: f64,
    /// The number of clickable objects weighted by difficulty.
    pub speed_note_count: f64,
    /// Weighted sum of aim strains.
    pub aim_difficult_strain_count: f64,
    /// Weighted sum of speed strains.
    pub speed_difficult_strain_count: f64,
    /// The amount of sliders weighted by difficulty.
    pub aim_difficult_slider_count: f64,
    /// The amount of circles.
    pub n_circles: u32,
    /// The amount of sliders.
    pub n_sliders: u32,
    /// The amount of spinners.
    pub n_spinners: u32,
}

impl DifficultyAttributes {
    /// Return the amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.n_circles + self.n_sliders + self.n_spinners
    }
}
