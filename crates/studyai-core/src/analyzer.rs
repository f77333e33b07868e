//! Subject analysis: performance estimation and time budgeting.
//!
//! Turns one subject's raw test history into:
//! - a mastery percentage (accumulated score / accumulated possible)
//! - a randomized weak-area set drawn from a fixed topic vocabulary
//! - a weekly hour budget that grows as performance drops
//! - a projected improvement over the 4-week horizon

use rand::Rng;

use crate::types::{Subject, SubjectAnalysis};

/// Fixed candidate vocabulary for weak-area tags.
///
/// Each candidate is kept independently with 50% probability; the selection
/// is intentionally randomized rather than data-driven.
pub const WEAK_AREA_VOCABULARY: [&str; 3] =
    ["Concept understanding", "Problem solving", "Application"];

/// Mastery percentage from accumulated scores, clamped to [0, 100].
///
/// Callers must guarantee at least one test result with a positive
/// `total_possible`; the input boundary enforces this. A degenerate history
/// with zero total points yields 0 rather than dividing by zero.
pub fn current_performance(subject: &Subject) -> u32 {
    let total_score: f64 = subject.test_results.iter().map(|t| t.score).sum();
    let total_possible: f64 = subject.test_results.iter().map(|t| t.total_possible).sum();

    if total_possible <= 0.0 {
        return 0;
    }

    let percentage = (total_score / total_possible * 100.0).round();
    percentage.clamp(0.0, 100.0) as u32
}

/// Weekly hour budget for a performance percentage.
///
/// Piecewise-linear map from [0, 100] to {2.0, 2.5, ..., 7.0}: lower
/// performance gets more time, in half-hour steps.
pub fn time_allocation(performance: u32) -> f64 {
    let inverse = (100 - performance.min(100)) as f64;
    2.0 + (inverse / 100.0 * 10.0).round() / 2.0
}

/// Projected improvement in percentage points, decreasing in performance.
///
/// With performance clamped to [0, 100] this stays within [5, 15].
pub fn expected_improvement(performance: u32) -> i32 {
    (15.0 - performance as f64 / 10.0).round() as i32
}

/// Analyze one subject's test history.
///
/// The RNG drives only the weak-area coin flips; everything else is a
/// deterministic function of the scores.
pub fn analyze_subject<R: Rng>(subject: &Subject, rng: &mut R) -> SubjectAnalysis {
    let performance = current_performance(subject);

    let weak_areas: Vec<String> = WEAK_AREA_VOCABULARY
        .iter()
        .filter(|_| rng.gen_bool(0.5))
        .map(|area| area.to_string())
        .collect();

    SubjectAnalysis {
        name: subject.name.clone(),
        time_allocation: time_allocation(performance),
        current_performance: performance,
        weak_areas,
        expected_improvement: expected_improvement(performance),
    }
}
