pub use self::{
    aim::AimEvaluator,
    reading::{movement_intersection, MovementIntersection, ReadingDiagnostics, ReadingEvaluator},
    rhythm::{RhythmEvaluator, RhythmIsland, RHYTHM_RATIO_MULTIPLIERS},
    speed::SpeedEvaluator,
    stamina::StaminaEvaluator,
};

mod aim;
mod reading;
mod rhythm;
mod speed;
mod stamina;
