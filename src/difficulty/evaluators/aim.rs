use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    difficulty::object::{DifficultyObject, IDifficultyObject},
    util::{
        difficulty::{milliseconds_to_bpm, smootherstep},
        float_ext::FloatExt,
    },
};

pub struct AimEvaluator;

impl AimEvaluator {
    const WIDE_ANGLE_MULTIPLIER: f64 = 1.5;
    const ACUTE_ANGLE_MULTIPLIER: f64 = 2.45;
    const SLIDER_MULTIPLIER: f64 = 1.35;
    const VELOCITY_CHANGE_MULTIPLIER: f64 = 0.75;
    const WIGGLE_MULTIPLIER: f64 = 1.1;

    /// Evaluates the difficulty of aiming the current object, based on:
    ///
    /// - cursor velocity to the current object,
    /// - angle difficulty,
    /// - sharp velocity increases,
    /// - and slider difficulty.
    pub fn evaluate_diff_of<'a>(
        curr: &'a DifficultyObject<'a>,
        diff_objects: &'a [DifficultyObject<'a>],
        with_slider_travel_dist: bool,
    ) -> f64 {
        let (Some(osu_last_obj), Some(osu_last_last_obj)) = (
            curr.previous(0, diff_objects),
            curr.previous(1, diff_objects),
        ) else {
            return 0.0;
        };

        if curr.base.is_spinner()
            || osu_last_obj.base.is_spinner()
            || osu_last_last_obj.base.is_spinner()
        {
            return 0.0;
        }

        let radius = f64::from(DifficultyObject::NORMALIZED_RADIUS);
        let diameter = f64::from(DifficultyObject::NORMALIZED_DIAMETER);

        // Velocity to the current object, including slider travel if the
        // previous object was a slider
        let mut curr_vel = curr.jump_dist / curr.strain_time;

        if osu_last_obj.base.is_slider() && with_slider_travel_dist {
            let travel_vel = osu_last_obj.travel_dist / osu_last_obj.travel_time;
            let movement_vel = curr.min_jump_dist / curr.min_jump_time;

            curr_vel = curr_vel.max(movement_vel + travel_vel);
        }

        // As above, for the previous object
        let mut prev_vel = osu_last_obj.jump_dist / osu_last_obj.strain_time;

        if osu_last_last_obj.base.is_slider() && with_slider_travel_dist {
            let travel_vel = osu_last_last_obj.travel_dist / osu_last_last_obj.travel_time;
            let movement_vel = osu_last_obj.min_jump_dist / osu_last_obj.min_jump_time;

            prev_vel = prev_vel.max(movement_vel + travel_vel);
        }

        let mut wide_angle_bonus = 0.0;
        let mut acute_angle_bonus = 0.0;
        let mut slider_bonus = 0.0;
        let mut vel_change_bonus = 0.0;
        let mut wiggle_bonus = 0.0;

        let mut aim_strain = curr_vel;

        let max_strain_time = curr.strain_time.max(osu_last_obj.strain_time);
        let min_strain_time = curr.strain_time.min(osu_last_obj.strain_time);

        // Only buff angles if the rhythm is roughly constant
        if max_strain_time < 1.25 * min_strain_time {
            if let (Some(curr_angle), Some(last_angle), Some(last_last_angle)) = (
                curr.angle,
                osu_last_obj.angle,
                osu_last_last_obj.angle,
            ) {
                let angle_bonus = curr_vel.min(prev_vel);

                wide_angle_bonus = Self::calc_wide_angle_bonus(curr_angle);
                acute_angle_bonus = Self::calc_acute_angle_bonus(curr_angle);

                // Only buff acute angles above 300 bpm 1/2 and on jumps
                // exceeding a diameter
                acute_angle_bonus *= angle_bonus
                    * smootherstep(
                        milliseconds_to_bpm(curr.strain_time, Some(2)),
                        300.0,
                        400.0,
                    )
                    * smootherstep(curr.jump_dist, diameter, diameter * 2.0);

                // Penalize wide angles repeated across multiple objects
                wide_angle_bonus *= angle_bonus
                    * (1.0
                        - wide_angle_bonus.min(Self::calc_wide_angle_bonus(last_angle).powf(3.0)));

                // Penalize acute angles repeated across multiple objects
                acute_angle_bonus *= 1.0
                    - acute_angle_bonus
                        .min(Self::calc_acute_angle_bonus(last_last_angle).powf(3.0));

                // Wide angles on jumps between one and two diameters that
                // form a zig-zag pattern
                wiggle_bonus = angle_bonus
                    * smootherstep(curr.jump_dist, radius, diameter)
                    * smootherstep(curr.jump_dist, diameter * 2.0, diameter)
                    * smootherstep(curr_angle, 110_f64.to_radians(), 60_f64.to_radians())
                    * smootherstep(osu_last_obj.jump_dist, radius, diameter)
                    * smootherstep(osu_last_obj.jump_dist, diameter * 2.0, diameter)
                    * smootherstep(last_angle, 110_f64.to_radians(), 60_f64.to_radians());
            }
        }

        if prev_vel.max(curr_vel).not_eq(0.0) {
            // Use average velocity over the whole object when awarding
            // differences, not the individual jump and slider path velocities
            let prev_vel = (osu_last_obj.jump_dist + osu_last_last_obj.travel_dist)
                / osu_last_obj.strain_time;
            let curr_vel =
                (curr.jump_dist + osu_last_obj.travel_dist) / curr.strain_time;

            let max_vel = prev_vel.max(curr_vel);

            // Scale with ratio of difference compared to half the max
            // distance
            let dist_ratio = if max_vel > 0.0 {
                (FRAC_PI_2 * (prev_vel - curr_vel).abs() / max_vel)
                    .sin()
                    .powf(2.0)
            } else {
                0.0
            };

            // Reward for % distance up to 125 / strain_time for overlaps
            // where velocity is still changing
            let overlap_vel_buff = (diameter * 1.25 / min_strain_time).min((prev_vel - curr_vel).abs());

            vel_change_bonus = overlap_vel_buff * dist_ratio;

            // Penalize for rhythm changes
            vel_change_bonus *= (min_strain_time / max_strain_time).powf(2.0);
        }

        if osu_last_obj.base.is_slider() {
            // Reward sliders based on velocity
            slider_bonus = osu_last_obj.travel_dist / osu_last_obj.travel_time;
        }

        aim_strain += wiggle_bonus * Self::WIGGLE_MULTIPLIER;

        // Add in acute angle bonus or wide angle bonus + velocity change
        // bonus, whichever is larger
        aim_strain += (acute_angle_bonus * Self::ACUTE_ANGLE_MULTIPLIER).max(
            wide_angle_bonus * Self::WIDE_ANGLE_MULTIPLIER
                + vel_change_bonus * Self::VELOCITY_CHANGE_MULTIPLIER,
        );

        // Add in additional slider velocity bonus
        if with_slider_travel_dist {
            aim_strain += slider_bonus * Self::SLIDER_MULTIPLIER;
        }

        aim_strain
    }

    pub(crate) fn calc_wide_angle_bonus(angle: f64) -> f64 {
        ((3.0 / 4.0 * (angle.clamp(PI / 6.0, 5.0 / 6.0 * PI) - PI / 6.0)).sin()).powf(2.0)
    }

    pub(crate) fn calc_acute_angle_bonus(angle: f64) -> f64 {
        1.0 - Self::calc_wide_angle_bonus(angle)
    }
}
