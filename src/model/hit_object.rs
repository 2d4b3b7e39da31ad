pub use rosu_map::util::Pos;

use crate::error::AttributesError;

/// Precomputed geometry and timing of a single hit object.
///
/// Times are chart times in milliseconds; the clock rate is applied during
/// calculation. Fields suffixed with `_dist` are normalized so that a circle
/// has a radius of 50. [`pos`] and [`radius`] are in playfield pixels.
///
/// [`pos`]: ObjectAttributes::pos
/// [`radius`]: ObjectAttributes::radius
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectAttributes {
    pub start_time: f64,
    pub kind: ObjectKind,
    /// Stacked position.
    pub pos: Pos,
    pub radius: f64,
    /// Distance from the previous object's lazy cursor end position.
    pub jump_dist: f64,
    /// Jump distance with the leniency of the previous slider's end.
    pub min_jump_dist: f64,
    /// Lazy cursor travel distance within a slider, `0.0` otherwise.
    pub travel_dist: f64,
    /// Delta time to the previous object, floored at 25ms.
    pub strain_time: f64,
    /// Time between the previous slider's end and this object.
    pub min_jump_time: f64,
    pub travel_time: f64,
    /// Angle in radians between the previous two movements, if any.
    pub angle: Option<f64>,
    /// Full width of the great hit window.
    pub hit_window_great: f64,
    pub time_preempt: f64,
    pub time_fade_in: f64,
    /// Amount of other objects visible at the same time.
    pub note_density: f64,
    /// Indices of objects that are visible at the same time, nearest first.
    pub visible_objects: Box<[usize]>,
}

impl ObjectAttributes {
    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, ObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, ObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, ObjectKind::Spinner)
    }

    /// Check that all numeric fields are finite and non-negative.
    fn validate(&self, idx: usize, n_objects: usize) -> Result<(), AttributesError> {
        let fields = [
            ("start_time", self.start_time),
            ("radius", self.radius),
            ("jump_dist", self.jump_dist),
            ("min_jump_dist", self.min_jump_dist),
            ("travel_dist", self.travel_dist),
            ("strain_time", self.strain_time),
            ("min_jump_time", self.min_jump_time),
            ("travel_time", self.travel_time),
            ("hit_window_great", self.hit_window_great),
            ("time_preempt", self.time_preempt),
            ("time_fade_in", self.time_fade_in),
            ("note_density", self.note_density),
            ("angle", self.angle.unwrap_or(0.0)),
        ];

        if let Some((field, _)) = fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(AttributesError::InvalidAttribute { idx, field });
        }

        if !(self.pos.x.is_finite() && self.pos.y.is_finite()) {
            return Err(AttributesError::InvalidAttribute { idx, field: "pos" });
        }

        if let ObjectKind::Slider(ref slider) = self.kind {
            if !slider.path_dist.is_finite() || slider.path_dist < 0.0 {
                return Err(AttributesError::InvalidAttribute {
                    idx,
                    field: "path_dist",
                });
            }
        }

        if let Some(&visible) = self
            .visible_objects
            .iter()
            .find(|&&visible| visible == idx || visible >= n_objects)
        {
            return Err(AttributesError::VisibleObjectOutOfRange { idx, visible });
        }

        Ok(())
    }
}

/// The type of a hit object.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ObjectKind {
    #[default]
    Circle,
    Slider(SliderAttributes),
    Spinner,
}

/// Slider specific attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderAttributes {
    /// Length of the slider path in playfield pixels.
    pub path_dist: f64,
    pub repeat_count: usize,
}

impl SliderAttributes {
    /// The amount of spans of the slider.
    pub const fn span_count(&self) -> usize {
        self.repeat_count + 1
    }
}

/// Ensure that the objects are ordered by time and carry sane values.
pub fn validate_objects(objects: &[ObjectAttributes]) -> Result<(), AttributesError> {
    let mut prev_start_time = f64::NEG_INFINITY;

    for (idx, h) in objects.iter().enumerate() {
        h.validate(idx, objects.len())?;

        if h.start_time < prev_start_time {
            return Err(AttributesError::NonMonotonicTime {
                idx,
                start_time: h.start_time,
                prev_start_time,
            });
        }

        prev_start_time = h.start_time;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(start_time: f64) -> ObjectAttributes {
        ObjectAttributes {
            start_time,
            strain_time: 25.0,
            ..Default::default()
        }
    }

    #[test]
    fn accepts_simultaneous_objects() {
        let objects = [circle(0.0), circle(100.0), circle(100.0)];

        assert_eq!(validate_objects(&objects), Ok(()));
    }

    #[test]
    fn rejects_decreasing_time() {
        let objects = [circle(0.0), circle(200.0), circle(100.0)];

        assert_eq!(
            validate_objects(&objects),
            Err(AttributesError::NonMonotonicTime {
                idx: 2,
                start_time: 100.0,
                prev_start_time: 200.0,
            })
        );
    }

    #[test]
    fn rejects_nan() {
        let mut objects = [circle(0.0), circle(100.0)];
        objects[1].jump_dist = f64::NAN;

        assert_eq!(
            validate_objects(&objects),
            Err(AttributesError::InvalidAttribute {
                idx: 1,
                field: "jump_dist"
            })
        );
    }

    #[test]
    fn rejects_dangling_visible_object() {
        let mut objects = [circle(0.0), circle(100.0)];
        objects[0].visible_objects = Box::new([1, 2]);

        assert_eq!(
            validate_objects(&objects),
            Err(AttributesError::VisibleObjectOutOfRange { idx: 0, visible: 2 })
        );

        objects[0].visible_objects = Box::new([0]);

        assert_eq!(
            validate_objects(&objects),
            Err(AttributesError::VisibleObjectOutOfRange { idx: 0, visible: 0 })
        );
    }
}
