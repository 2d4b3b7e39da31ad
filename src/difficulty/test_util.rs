use rosu_map::util::Pos;

use crate::model::hit_object::ObjectAttributes;

const RADIUS: f64 = 32.0;
const HIT_WINDOW_GREAT: f64 = 60.0;
const PREEMPT: f64 = 600.0;
const FADE_IN: f64 = 400.0;

/// Minimal attribute source: circles at the given `(time, x, y)` points.
pub fn from_points(points: &[(f64, f32, f32)]) -> Vec<ObjectAttributes> {
    let scaling_factor = 50.0 / RADIUS;

    let mut objects: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(i, &(start_time, x, y))| {
            let pos = Pos::new(x, y);

            let (jump_dist, strain_time) = match i.checked_sub(1).map(|j| points[j]) {
                Some((prev_time, prev_x, prev_y)) => (
                    f64::from((pos - Pos::new(prev_x, prev_y)).length()) * scaling_factor,
                    (start_time - prev_time).max(25.0),
                ),
                None => (0.0, 0.0),
            };

            let angle = (i >= 2).then(|| {
                let (_, x1, y1) = points[i - 1];
                let (_, x2, y2) = points[i - 2];
                let v1 = Pos::new(x2, y2) - Pos::new(x1, y1);
                let v2 = pos - Pos::new(x1, y1);
                let dot = v1.dot(v2);
                let det = v1.x * v2.y - v1.y * v2.x;

                f64::from(det).atan2(f64::from(dot)).abs()
            });

            ObjectAttributes {
                start_time,
                pos,
                radius: RADIUS,
                jump_dist,
                min_jump_dist: jump_dist,
                strain_time,
                min_jump_time: strain_time,
                angle,
                hit_window_great: HIT_WINDOW_GREAT,
                time_preempt: PREEMPT,
                time_fade_in: FADE_IN,
                ..Default::default()
            }
        })
        .collect();

    for i in 0..objects.len() {
        let start_time = objects[i].start_time;

        let visible: Box<[usize]> = (i + 1..objects.len())
            .take_while(|&j| objects[j].start_time - start_time < PREEMPT)
            .collect();

        objects[i].note_density = visible.len() as f64;
        objects[i].visible_objects = visible;
    }

    objects
}

/// `n` circles `spacing` ms apart, alternating between two points `dist`
/// pixels apart.
pub fn stream(n: usize, spacing: f64, dist: f32) -> Vec<ObjectAttributes> {
    let points: Vec<_> = (0..n)
        .map(|i| {
            let x = if i % 2 == 0 { 256.0 } else { 256.0 + dist };

            (i as f64 * spacing, x, 192.0)
        })
        .collect();

    from_points(&points)
}
