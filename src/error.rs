/// All the ways that a sequence of [`ObjectAttributes`] or the calculation
/// settings can be rejected.
///
/// [`ObjectAttributes`]: crate::model::hit_object::ObjectAttributes
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AttributesError {
    #[error("clock rate must be positive and finite, got {0}")]
    ClockRate(f64),
    #[error("object {idx} starts at {start_time}ms which is before the previous object at {prev_start_time}ms")]
    NonMonotonicTime {
        idx: usize,
        start_time: f64,
        prev_start_time: f64,
    },
    #[error("object {idx} has a negative or non-finite `{field}`")]
    InvalidAttribute { idx: usize, field: &'static str },
    #[error("object {idx} lists visible object {visible} which is itself or not part of the sequence")]
    VisibleObjectOutOfRange { idx: usize, visible: usize },
}
