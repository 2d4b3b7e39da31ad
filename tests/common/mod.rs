#![allow(unused)]

use rosu_skills::model::hit_object::{ObjectAttributes, ObjectKind, Pos, SliderAttributes};

pub const RADIUS: f64 = 32.0;
pub const HIT_WINDOW_GREAT: f64 = 50.0;
pub const PREEMPT: f64 = 600.0;
pub const FADE_IN: f64 = 400.0;

const SLIDER_TRAVEL_TIME: f64 = 150.0;
const SLIDER_TRAVEL_DIST: f64 = 60.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Circle,
    Slider,
    Spinner,
}

/// Minimal attribute source for objects at `(time, x, y, kind)`.
pub fn objects(points: &[(f64, f32, f32, Kind)]) -> Vec<ObjectAttributes> {
    let scaling_factor = 50.0 / RADIUS;

    let mut objects: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(i, &(start_time, x, y, kind))| {
            let pos = Pos::new(x, y);
            let prev = i.checked_sub(1).map(|j| points[j]);

            let (jump_dist, strain_time) = match prev {
                Some((prev_time, prev_x, prev_y, _)) => (
                    f64::from((pos - Pos::new(prev_x, prev_y)).length()) * scaling_factor,
                    (start_time - prev_time).max(25.0),
                ),
                None => (0.0, 0.0),
            };

            let (min_jump_dist, min_jump_time) = match prev {
                Some((.., Kind::Slider)) => (
                    jump_dist * 0.8,
                    (strain_time - SLIDER_TRAVEL_TIME).max(25.0),
                ),
                _ => (jump_dist, strain_time),
            };

            let after_spinner = points[i.saturating_sub(2)..i]
                .iter()
                .any(|&(.., kind)| kind == Kind::Spinner);

            let angle = (i >= 2 && !after_spinner).then(|| {
                let (_, x1, y1, _) = points[i - 1];
                let (_, x2, y2, _) = points[i - 2];
                let v1 = Pos::new(x2, y2) - Pos::new(x1, y1);
                let v2 = pos - Pos::new(x1, y1);
                let dot = v1.dot(v2);
                let det = v1.x * v2.y - v1.y * v2.x;

                f64::from(det).atan2(f64::from(dot)).abs()
            });

            let (kind, travel_dist, travel_time) = match kind {
                Kind::Circle => (ObjectKind::Circle, 0.0, 0.0),
                Kind::Slider => (
                    ObjectKind::Slider(SliderAttributes {
                        path_dist: 120.0,
                        repeat_count: 0,
                    }),
                    SLIDER_TRAVEL_DIST,
                    SLIDER_TRAVEL_TIME,
                ),
                Kind::Spinner => (ObjectKind::Spinner, 0.0, 0.0),
            };

            ObjectAttributes {
                start_time,
                kind,
                pos,
                radius: RADIUS,
                jump_dist,
                min_jump_dist,
                travel_dist,
                strain_time,
                min_jump_time,
                travel_time,
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

            (i as f64 * spacing, x, 192.0, Kind::Circle)
        })
        .collect();

    objects(&points)
}

/// Circles going around a square, `spacing` ms apart.
pub fn square_jumps(n: usize, spacing: f64) -> Vec<ObjectAttributes> {
    const CORNERS: [(f32, f32); 4] = [(64.0, 64.0), (448.0, 64.0), (448.0, 320.0), (64.0, 320.0)];

    let points: Vec<_> = (0..n)
        .map(|i| {
            let (x, y) = CORNERS[i % 4];

            (i as f64 * spacing, x, y, Kind::Circle)
        })
        .collect();

    objects(&points)
}
