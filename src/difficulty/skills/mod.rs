use std::{panic, thread};

use crate::model::mods::GameMods;

use self::{aim::Aim, reading::Reading, rhythm::Rhythm, speed::Speed, strain::StrainAggregator};

use super::object::DifficultyObject;

pub mod aim;
pub mod reading;
pub mod rhythm;
pub mod speed;
pub mod strain;

/// All skills evaluated for a sequence of objects.
#[derive(Clone, Debug)]
pub struct Skills {
    pub aim: StrainAggregator<Aim>,
    pub aim_no_sliders: StrainAggregator<Aim>,
    pub speed: StrainAggregator<Speed>,
    pub rhythm: StrainAggregator<Rhythm>,
    pub reading: StrainAggregator<Reading>,
}

impl Skills {
    pub fn new(mods: &GameMods) -> Self {
        Self {
            aim: StrainAggregator::new(Aim::new(true)),
            aim_no_sliders: StrainAggregator::new(Aim::new(false)),
            speed: StrainAggregator::new(Speed::new(mods.ap())),
            rhythm: StrainAggregator::new(Rhythm),
            reading: StrainAggregator::new(Reading::new(mods.hd())),
        }
    }

    pub fn process(&mut self, curr: &DifficultyObject<'_>, objects: &[DifficultyObject<'_>]) {
        self.aim.process(curr, objects);
        self.aim_no_sliders.process(curr, objects);
        self.speed.process(curr, objects);
        self.rhythm.process(curr, objects);
        self.reading.process(curr, objects);
    }

    /// Process the first `take` objects sequentially.
    pub fn process_all(mut self, objects: &[DifficultyObject<'_>], take: usize) -> Self {
        for curr in objects.iter().take(take) {
            self.process(curr, objects);
        }

        self
    }

    /// Process the first `take` objects with one thread per skill.
    ///
    /// Each skill still processes objects in order so the result is the same
    /// as for [`Skills::process_all`].
    pub fn process_all_parallel(self, objects: &[DifficultyObject<'_>], take: usize) -> Self {
        let Self {
            aim,
            aim_no_sliders,
            speed,
            rhythm,
            reading,
        } = self;

        thread::scope(|scope| {
            let aim = scope.spawn(|| run(aim, objects, take));
            let aim_no_sliders = scope.spawn(|| run(aim_no_sliders, objects, take));
            let speed = scope.spawn(|| run(speed, objects, take));
            let rhythm = scope.spawn(|| run(rhythm, objects, take));
            let reading = scope.spawn(|| run(reading, objects, take));

            Self {
                aim: join(aim),
                aim_no_sliders: join(aim_no_sliders),
                speed: join(speed),
                rhythm: join(rhythm),
                reading: join(reading),
            }
        })
    }
}

fn run<S: strain::StrainSkill>(
    mut aggregator: StrainAggregator<S>,
    objects: &[DifficultyObject<'_>],
    take: usize,
) -> StrainAggregator<S> {
    for curr in objects.iter().take(take) {
        aggregator.process(curr, objects);
    }

    aggregator
}

/// Join the thread, propagating its panic if it had one.
fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| panic::resume_unwind(payload))
}
