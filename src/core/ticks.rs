//! Tick arithmetic shared by the scale implementations.
//!
//! Tick steps snap to 1/2/5 decades so axis labels land on round values.

const SQRT_50: f64 = 7.071_067_811_865_475_5;
const SQRT_10: f64 = 3.162_277_660_168_379_5;
const SQRT_2: f64 = 1.414_213_562_373_095_1;

/// `(first_index, last_index, increment)` for round tick values covering
/// `[start, stop]` with approximately `count` ticks.
///
/// A negative increment encodes a fractional step of `1 / -increment`, which
/// keeps sub-unit tick values exact in binary floating point.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let fraction = 10f64.powf(-power) / factor;
        i1 = (start * fraction).round();
        i2 = (stop * fraction).round();
        if i1 / fraction < start {
            i1 += 1.0;
        }
        if i2 / fraction > stop {
            i2 -= 1.0;
        }
        inc = -fraction;
    } else {
        let whole = 10f64.powf(power) * factor;
        i1 = (start / whole).round();
        i2 = (stop / whole).round();
        if i1 * whole < start {
            i1 += 1.0;
        }
        if i2 * whole > stop {
            i2 -= 1.0;
        }
        inc = whole;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    (i1, i2, inc)
}

/// Step between adjacent ticks for the given bounds and guidance count.
///
/// Expects `start <= stop`; negative return values encode fractional steps as
/// in [`tick_spec`].
pub(crate) fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

/// Approximately `count` round tick values covering `[start, stop]`.
///
/// Reversed bounds produce the same ticks in descending order.
pub(crate) fn linear_ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if i2 < i1 || !inc.is_finite() {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut ticks = Vec::with_capacity(n);
    for i in 0..n {
        let index = if reverse {
            i2 - i as f64
        } else {
            i1 + i as f64
        };
        ticks.push(if inc < 0.0 { index / -inc } else { index * inc });
    }
    ticks
}

/// Expands `[start, stop]` outward to the tick boundaries a `count`-tick axis
/// would use, iterating until the step stabilizes.
pub(crate) fn nice_linear_domain(mut start: f64, mut stop: f64, count: f64) -> (f64, f64) {
    let mut prestep: Option<f64> = None;
    loop {
        let step = tick_increment(start, stop, count);
        if prestep == Some(step) || step == 0.0 || !step.is_finite() {
            return (start, stop);
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        }
        prestep = Some(step);
    }
}

/// Log-spaced ticks for a strictly positive domain.
///
/// When the domain spans fewer decades than `count`, every decade contributes
/// its 1..=9 mantissa multiples; wider domains fall back to round ticks in
/// log space mapped through `10^x`.
pub(crate) fn log10_ticks(low: f64, high: f64, count: f64) -> Vec<f64> {
    let reverse = high < low;
    let (u, v) = if reverse { (high, low) } else { (low, high) };
    if !(u > 0.0) || !v.is_finite() {
        return Vec::new();
    }

    let i = u.log10();
    let j = v.log10();
    let mut ticks = Vec::new();

    if j - i < count {
        let mut decade = i.floor();
        let last_decade = j.ceil();
        while decade <= last_decade {
            for mantissa in 1..10 {
                let tick = if decade < 0.0 {
                    f64::from(mantissa) / 10f64.powf(-decade)
                } else {
                    f64::from(mantissa) * 10f64.powf(decade)
                };
                if tick < u {
                    continue;
                }
                if tick > v {
                    break;
                }
                ticks.push(tick);
            }
            decade += 1.0;
        }
        if (ticks.len() as f64) * 2.0 < count {
            ticks = linear_ticks(u, v, count);
        }
    } else {
        ticks = linear_ticks(i, j, (j - i).min(count))
            .into_iter()
            .map(|t| 10f64.powf(t))
            .collect();
    }

    if reverse {
        ticks.reverse();
    }
    ticks
}
