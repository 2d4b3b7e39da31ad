use proptest::prelude::*;
use rosu_skills::{AttributesError, Difficulty, DifficultyAttributes};

use self::common::{objects, square_jumps, stream, Kind};

mod common;

fn assert_sane(attrs: &DifficultyAttributes) {
    let values = [
        attrs.aim,
        attrs.aim_no_sliders,
        attrs.speed,
        attrs.rhythm,
        attrs.reading,
        attrs.speed_note_count,
        attrs.aim_difficult_strain_count,
        attrs.speed_difficult_strain_count,
        attrs.aim_difficult_slider_count,
    ];

    for value in values {
        assert!(value.is_finite(), "{attrs:#?}");
        assert!(value >= 0.0, "{attrs:#?}");
    }
}

#[test]
fn empty_sequence() {
    let attrs = Difficulty::new().calculate(&[]).unwrap();

    assert_eq!(attrs, DifficultyAttributes::default());
    assert!(Difficulty::new().strains(&[]).unwrap().is_empty());
}

#[test]
fn single_object() {
    let objects = stream(1, 100.0, 0.0);
    let attrs = Difficulty::new().calculate(&objects).unwrap();

    assert_sane(&attrs);
    assert_eq!(attrs.n_circles, 1);
}

#[test]
fn spinners_only() {
    let points: Vec<_> = (0..8)
        .map(|i| (f64::from(i) * 1000.0, 256.0, 192.0, Kind::Spinner))
        .collect();

    let attrs = Difficulty::new().calculate(&objects(&points)).unwrap();

    assert_sane(&attrs);
    assert_eq!(attrs.n_spinners, 8);
    assert_eq!(attrs.aim, 0.0);
    assert_eq!(attrs.speed, 0.0);
}

#[test]
fn decreasing_time_is_rejected() {
    let mut objects = stream(10, 150.0, 60.0);
    objects[6].start_time = objects[4].start_time;

    let err = Difficulty::new().calculate(&objects).unwrap_err();

    assert!(matches!(err, AttributesError::NonMonotonicTime { idx: 6, .. }));
    assert!(Difficulty::new().calculate_parallel(&objects).is_err());
    assert!(Difficulty::new().strains(&objects).is_err());
    assert!(Difficulty::new().reading_diagnostics(&objects).is_err());
}

#[test]
fn reruns_are_identical() {
    let objects = square_jumps(120, 180.0);
    let difficulty = Difficulty::new().mods(8);

    let first = difficulty.calculate(&objects).unwrap();
    let second = difficulty.calculate(&objects).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        difficulty.strains(&objects).unwrap(),
        difficulty.strains(&objects).unwrap()
    );
}

#[test]
fn parallel_matches_sequential() {
    let objects = stream(200, 110.0, 90.0);

    for mods in [0, 8, 64, 8 + 64] {
        let difficulty = Difficulty::new().mods(mods);

        assert_eq!(
            difficulty.calculate(&objects).unwrap(),
            difficulty.calculate_parallel(&objects).unwrap()
        );
    }
}

#[test]
fn faster_clock_rate_is_harder() {
    let objects = square_jumps(80, 200.0);

    let nomod = Difficulty::new().calculate(&objects).unwrap();
    let dt = Difficulty::new().mods(64).calculate(&objects).unwrap();

    assert!(dt.aim > nomod.aim);
    assert!(dt.speed > nomod.speed);

    let custom = Difficulty::new().clock_rate(1.5).calculate(&objects).unwrap();

    assert_eq!(dt, custom);
}

#[test]
fn object_order_matters() {
    const ORDER_A: [(f32, f32); 4] = [(64.0, 64.0), (448.0, 64.0), (448.0, 320.0), (64.0, 320.0)];
    const ORDER_B: [(f32, f32); 4] = [(64.0, 64.0), (448.0, 320.0), (448.0, 64.0), (64.0, 320.0)];

    let build = |order: [(f32, f32); 4]| {
        let points: Vec<_> = (0..64)
            .map(|i| {
                let (x, y) = order[i % 4];

                (i as f64 * 180.0, x, y, Kind::Circle)
            })
            .collect();

        objects(&points)
    };

    let a = Difficulty::new().calculate(&build(ORDER_A)).unwrap();
    let b = Difficulty::new().calculate(&build(ORDER_B)).unwrap();

    assert_eq!(a.n_circles, b.n_circles);
    assert_ne!(a.aim, b.aim);
}

#[test]
fn hidden_raises_reading() {
    // Overlapping objects with spacing that doesn't follow the rhythm
    let mut time = 0.0;

    let points: Vec<_> = (0..100)
        .map(|i| {
            let point = (time, 256.0 + 8.0 * (i % 3) as f32, 192.0, Kind::Circle);
            time += if i % 2 == 0 { 120.0 } else { 180.0 };

            point
        })
        .collect();

    let objects = objects(&points);

    let nomod = Difficulty::new().calculate(&objects).unwrap();
    let hd = Difficulty::new().mods(8).calculate(&objects).unwrap();

    assert!(nomod.reading > 0.0);
    assert!(hd.reading > nomod.reading);
    assert_eq!(hd.aim, nomod.aim);
    assert_eq!(hd.speed, nomod.speed);
}

#[test]
fn sliders_contribute_to_aim() {
    let points: Vec<_> = (0..60)
        .map(|i| {
            let x = if i % 2 == 0 { 128.0 } else { 384.0 };
            let kind = if i % 3 == 0 { Kind::Slider } else { Kind::Circle };

            (f64::from(i) * 250.0, x, 192.0, kind)
        })
        .collect();

    let attrs = Difficulty::new().calculate(&objects(&points)).unwrap();

    assert_sane(&attrs);
    assert_eq!(attrs.n_sliders, 20);
    assert!(attrs.aim >= attrs.aim_no_sliders);
}

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        6 => Just(Kind::Circle),
        3 => Just(Kind::Slider),
        1 => Just(Kind::Spinner),
    ]
}

prop_compose! {
    fn sequence()(
        points in prop::collection::vec((0_u32..600, 0.0..512.0_f32, 0.0..384.0_f32, kind()), 0..48)
    ) -> Vec<(f64, f32, f32, Kind)> {
        let mut time = 0.0;

        points
            .into_iter()
            .map(|(delta, x, y, kind)| {
                time += f64::from(delta);

                (time, x, y, kind)
            })
            .collect()
    }
}

proptest! {
    #[test]
    fn outputs_are_sane(points in sequence(), mods in prop::sample::select(vec![0_u32, 8, 16, 64, 256])) {
        let objects = objects(&points);
        let difficulty = Difficulty::new().mods(mods);

        let attrs = difficulty.calculate(&objects).unwrap();
        assert_sane(&attrs);

        prop_assert_eq!(attrs.n_objects() as usize, objects.len());
        prop_assert_eq!(&attrs, &difficulty.calculate_parallel(&objects).unwrap());
    }

    #[test]
    fn partial_never_exceeds_full(points in sequence(), passed in 0_u32..48) {
        let objects = objects(&points);

        let full = Difficulty::new().calculate(&objects).unwrap();
        let partial = Difficulty::new().passed_objects(passed).calculate(&objects).unwrap();

        prop_assert!(partial.aim <= full.aim);
        prop_assert!(partial.speed <= full.speed);
        prop_assert!(partial.rhythm <= full.rhythm);
    }
}
