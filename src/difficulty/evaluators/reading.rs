use rosu_map::util::Pos;

use crate::{
    difficulty::object::{DifficultyObject, IDifficultyObject},
    model::hit_object::ObjectKind,
    util::difficulty::{logistic, smootherstep},
};

pub struct ReadingEvaluator;

impl ReadingEvaluator {
    const RHYTHM_MULTIPLIER: f64 = 15.0;
    const AIM_MULTIPLIER: f64 = 32.0;
    const COMPLEXITY_EXPONENT: f64 = 2.5;
    const HIDDEN_MULTIPLIER: f64 = 1.05;

    /// How long objects are considered after they've been hit.
    const BACKWARD_WINDOW: f64 = 500.0;
    /// How far ahead objects are considered.
    const FORWARD_WINDOW: f64 = 3000.0;

    /// Evaluates how hard it is to read the current object among all the
    /// objects that are visible at the same time.
    ///
    /// `finger_strain` is the rhythmic complexity of the current object.
    pub fn evaluate_diff_of<'a>(
        curr: &'a DifficultyObject<'a>,
        diff_objects: &'a [DifficultyObject<'a>],
        finger_strain: f64,
        hidden: bool,
    ) -> f64 {
        Self::evaluate_with_diagnostics(curr, diff_objects, finger_strain, hidden).difficulty
    }

    /// Same as [`ReadingEvaluator::evaluate_diff_of`] but also returns the
    /// intermediate terms.
    pub fn evaluate_with_diagnostics<'a>(
        curr: &'a DifficultyObject<'a>,
        diff_objects: &'a [DifficultyObject<'a>],
        finger_strain: f64,
        hidden: bool,
    ) -> ReadingDiagnostics {
        let (Some(prev), Some(next)) = (curr.previous(0, diff_objects), curr.next(0, diff_objects))
        else {
            return ReadingDiagnostics::default();
        };

        if curr.idx < 2 || curr.base.is_spinner() || prev.base.is_spinner() {
            return ReadingDiagnostics::default();
        }

        let note_density = curr.note_density.min(curr.idx as f64);

        if note_density <= 1.0 {
            return ReadingDiagnostics::default();
        }

        let window = VisibleWindow::new(curr, diff_objects, note_density);

        let (overlapness, rhythm_complexity) =
            Self::rhythm_reading(curr, prev, next, &window, finger_strain, hidden);
        let aim_complexity = Self::aim_reading(curr, next, &window);

        let difficulty = (rhythm_complexity * Self::RHYTHM_MULTIPLIER
            + aim_complexity * Self::AIM_MULTIPLIER)
            .powf(Self::COMPLEXITY_EXPONENT);

        ReadingDiagnostics {
            difficulty,
            overlapness,
            rhythm_complexity,
            aim_complexity,
            visible_count: window.entries.len(),
        }
    }

    /// Overlapping objects make it hard to tell which one comes next,
    /// especially when spacing doesn't follow rhythm.
    fn rhythm_reading<'a>(
        curr: &'a DifficultyObject<'a>,
        prev: &DifficultyObject<'_>,
        next: &DifficultyObject<'_>,
        window: &VisibleWindow<'a>,
        finger_strain: f64,
        hidden: bool,
    ) -> (f64, f64) {
        let prev_curr_dist = normalized_dist(prev.base.pos, curr.base.pos);
        let curr_next_dist = normalized_dist(curr.base.pos, next.base.pos);

        let mut overlapness = overlap(prev_curr_dist).max(0.0);

        // The current object plus every visible one
        let objects: Vec<(&DifficultyObject<'a>, f64)> = [(curr, 1.0)]
            .into_iter()
            .chain(window.entries.iter().map(|entry| (entry.obj, entry.weight)))
            .collect();

        for (i, &(a, weight_a)) in objects.iter().enumerate() {
            for &(b, weight_b) in &objects[i + 1..] {
                let mut term = overlap(normalized_dist(a.base.pos, b.base.pos)) * weight_a * weight_b;

                if a.base.is_slider() || b.base.is_slider() {
                    term /= 2.0;
                }

                overlapness = (overlapness + term).max(0.0);
            }
        }

        overlapness /= objects.len() as f64 / 2.0;

        let prev_curr_time = curr.start_time - prev.start_time;
        let curr_next_time = next.start_time - curr.start_time;
        let time_ratio = curr_next_time / (prev_curr_time + 1e-10);
        let dist_ratio = curr_next_dist / (prev_curr_dist + 1e-10);
        let change_ratio = dist_ratio * time_ratio;

        // Rhythm changes only count if spacing doesn't change along with them
        let spacing_change = (1.05_f64).min((change_ratio - 1.0).powf(2.0) * 1000.0)
            * (1.0_f64).min((dist_ratio - 1.0).powf(2.0) * 1000.0);

        let mut complexity = f64::powf(0.3, 2.0 / (finger_strain + 1e-10))
            * overlapness
            * spacing_change;

        if hidden {
            complexity *= Self::HIDDEN_MULTIPLIER;
        }

        (overlapness, complexity)
    }

    /// Visible objects sitting on the path towards the next object hide it
    /// and obstruct the movement.
    fn aim_reading(
        curr: &DifficultyObject<'_>,
        next: &DifficultyObject<'_>,
        window: &VisibleWindow<'_>,
    ) -> f64 {
        let movement_dist = normalized_dist(curr.base.pos, next.base.pos);
        let far_movement = logistic(movement_dist, 3.0, 1.0 / 0.7, None);

        let sum: f64 = window
            .entries
            .iter()
            .filter(|entry| entry.obj.idx != curr.idx && entry.obj.idx != next.idx)
            .map(|entry| {
                let visible = entry.obj;

                let Some(intersection) = movement_intersection(
                    curr.base.pos,
                    next.base.pos,
                    visible.base.pos,
                    next.base.radius * 2.0,
                ) else {
                    return 0.0;
                };

                let visible_to_next = normalized_dist(visible.base.pos, next.base.pos);

                let mut bonus = intersection.obstruction()
                    * far_movement
                    * logistic(visible_to_next, 3.0, -1.0 / 0.7, None)
                    * entry.weight;

                if let ObjectKind::Slider(ref slider) = visible.base.kind {
                    bonus *= (slider.path_dist / f64::from(DifficultyObject::NORMALIZED_DIAMETER))
                        .sqrt();
                }

                bonus
            })
            .sum();

        sum / (window.entries.len() + 1) as f64
    }
}

/// Intermediate terms of the reading evaluation of an object.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ReadingDiagnostics {
    pub difficulty: f64,
    /// Averaged pairwise overlap of the visible objects.
    pub overlapness: f64,
    pub rhythm_complexity: f64,
    pub aim_complexity: f64,
    /// Amount of visible objects that were considered.
    pub visible_count: usize,
}

/// Objects visible alongside the current one, each with a weight in `[0, 1]`.
struct VisibleWindow<'a> {
    entries: Vec<VisibleEntry<'a>>,
}

struct VisibleEntry<'a> {
    obj: &'a DifficultyObject<'a>,
    weight: f64,
}

impl<'a> VisibleWindow<'a> {
    fn new(
        curr: &DifficultyObject<'_>,
        diff_objects: &'a [DifficultyObject<'a>],
        note_density: f64,
    ) -> Self {
        let entries = curr
            .base
            .visible_objects
            .iter()
            .take(note_density.ceil() as usize)
            .filter_map(|&idx| diff_objects.get(idx))
            .filter_map(|obj| {
                let offset = obj.start_time - curr.start_time;

                let weight = if offset >= 0.0 {
                    smootherstep(offset, ReadingEvaluator::FORWARD_WINDOW, 0.0)
                        * obj.opacity_at(curr.start_time)
                } else {
                    smootherstep(-offset, ReadingEvaluator::BACKWARD_WINDOW, 0.0)
                };

                (weight > 0.0).then_some(VisibleEntry { obj, weight })
            })
            .collect();

        Self { entries }
    }
}

/// Distance in circle diameters.
fn normalized_dist(a: Pos, b: Pos) -> f64 {
    f64::from((a - b).length()) / f64::from(DifficultyObject::NORMALIZED_DIAMETER)
}

/// How much two objects `dist` diameters apart overlap, negative when they
/// are clearly apart.
fn overlap(dist: f64) -> f64 {
    logistic(dist, 0.5, -10.0, None) - 0.2
}

/// Where a straight movement passes through a circle, as fractions of the
/// movement in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MovementIntersection {
    pub entry: f64,
    pub exit: f64,
    starts_inside: bool,
    ends_inside: bool,
}

impl MovementIntersection {
    /// Whether the movement starts within the circle.
    pub const fn starts_inside(&self) -> bool {
        self.starts_inside
    }

    /// How much the circle obstructs the movement.
    ///
    /// Circles entered later obstruct more since they hide the target for
    /// longer. Movements starting inside the circle count half of their exit
    /// point and movements that never leave the circle don't count.
    pub fn obstruction(&self) -> f64 {
        match (self.starts_inside, self.ends_inside) {
            (false, _) => self.entry,
            (true, false) => self.exit / 2.0,
            (true, true) => 0.0,
        }
    }
}

/// Intersection of the segment from `start` to `end` with the circle around
/// `center`.
///
/// Returns `None` if the segment has no length or misses the circle.
pub fn movement_intersection(
    start: Pos,
    end: Pos,
    center: Pos,
    radius: f64,
) -> Option<MovementIntersection> {
    let direction = end - start;
    let offset = start - center;

    let a = f64::from(direction.dot(direction));

    if a < 1e-10 {
        return None;
    }

    let b = 2.0 * f64::from(offset.dot(direction));
    let c = f64::from(offset.dot(offset)) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt = discriminant.sqrt();
    let t1 = (-b - sqrt) / (2.0 * a);
    let t2 = (-b + sqrt) / (2.0 * a);

    if t2 < 0.0 || t1 > 1.0 {
        return None;
    }

    Some(MovementIntersection {
        entry: t1.max(0.0),
        exit: t2.min(1.0),
        starts_inside: t1 < 0.0,
        ends_inside: t2 > 1.0,
    })
}
