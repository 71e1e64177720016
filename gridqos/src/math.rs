/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure arithmetic helpers shared by the generator, evaluator and report.
//!
//! These are free functions so they can be used and tested independently of
//! any pipeline stage.

/// Round `value` to `places` decimal places.
///
/// Halfway cases round away from zero (`f64::round`).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Arithmetic mean of `values`.
///
/// Returns `None` for an empty iterator instead of `NaN`.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
