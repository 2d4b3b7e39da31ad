pub const fn bpm_to_milliseconds(bpm: f64, delimiter: Option<i32>) -> f64 {
    60_000.0 / i32_unwrap_or(delimiter, 4) as f64 / bpm
}

pub const fn milliseconds_to_bpm(ms: f64, delimiter: Option<i32>) -> f64 {
    60_000.0 / (ms * i32_unwrap_or(delimiter, 4) as f64)
}

// `Option::unwrap_or` is not const
const fn i32_unwrap_or(option: Option<i32>, default: i32) -> i32 {
    match option {
        Some(value) => value,
        None => default,
    }
}

// `f64::exp` is not const
pub fn logistic(x: f64, midpoint_offset: f64, multiplier: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(multiplier * (midpoint_offset - x)))
}

pub const fn smootherstep(x: f64, start: f64, end: f64) -> f64 {
    let x = reverse_lerp(x, start, end);

    x * x * x * (x * (6.0 * x - 15.0) + 10.0)
}

pub const fn reverse_lerp(x: f64, start: f64, end: f64) -> f64 {
    f64::clamp((x - start) / (end - start), 0.0, 1.0)
}

pub const fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// Piecewise-linear lookup in a table of `(ratio, multiplier)` control
/// points sorted by ratio.
///
/// Values outside of the table's domain are clamped to the first or last
/// multiplier. An empty table yields `0.0`.
pub fn lerp_from_ratios(ratio_multipliers: &[(f64, f64)], ratio: f64) -> f64 {
    let (Some(&(first_ratio, first_mult)), Some(&(last_ratio, last_mult))) =
        (ratio_multipliers.first(), ratio_multipliers.last())
    else {
        return 0.0;
    };

    if ratio <= first_ratio {
        return first_mult;
    }

    if ratio >= last_ratio {
        return last_mult;
    }

    ratio_multipliers
        .windows(2)
        .find_map(|window| {
            let [(lower_ratio, lower_mult), (upper_ratio, upper_mult)] = *window else {
                return None;
            };

            (ratio <= upper_ratio).then(|| {
                let amount = reverse_lerp(ratio, lower_ratio, upper_ratio);

                lerp(lower_mult, upper_mult, amount)
            })
        })
        .unwrap_or(last_mult)
}
