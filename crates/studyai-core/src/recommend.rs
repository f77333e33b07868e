//! Overall improvement estimate and the narrative recommendation.

use crate::locale::Messages;
use crate::types::SubjectAnalysis;

/// Rounded arithmetic mean of the per-subject expected improvements.
pub fn overall_improvement(analyses: &[SubjectAnalysis]) -> i32 {
    if analyses.is_empty() {
        return 0;
    }
    let sum: i32 = analyses.iter().map(|a| a.expected_improvement).sum();
    (sum as f64 / analyses.len() as f64).round() as i32
}

/// The subject with the minimum current performance.
///
/// Ties keep the earliest subject in list order, so the result is stable
/// across runs with equal scores.
pub fn lowest_performer(analyses: &[SubjectAnalysis]) -> Option<&SubjectAnalysis> {
    let mut best = analyses.first()?;
    for analysis in &analyses[1..] {
        if analysis.current_performance < best.current_performance {
            best = analysis;
        }
    }
    Some(best)
}

/// Compose the narrative recommendation for a completed analysis set.
pub fn build_recommendation(analyses: &[SubjectAnalysis], messages: &Messages) -> String {
    match lowest_performer(analyses) {
        Some(focus) => messages.recommendation(
            &focus.name,
            focus.current_performance,
            &messages.join_areas(&focus.weak_areas),
            focus.expected_improvement,
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Locale, Messages};

    fn analysis(name: &str, performance: u32, improvement: i32) -> SubjectAnalysis {
        SubjectAnalysis {
            name: name.to_string(),
            time_allocation: crate::analyzer::time_allocation(performance),
            current_performance: performance,
            weak_areas: vec!["Application".to_string()],
            expected_improvement: improvement,
        }
    }

    #[test]
    fn test_overall_improvement_is_rounded_mean() {
        let analyses = vec![
            analysis("A", 50, 10),
            analysis("B", 80, 7),
            analysis("C", 90, 6),
        ];
        // mean(10, 7, 6) = 7.67 -> 8
        assert_eq!(overall_improvement(&analyses), 8);
    }

    #[test]
    fn test_overall_improvement_empty_is_zero() {
        assert_eq!(overall_improvement(&[]), 0);
    }

    #[test]
    fn test_lowest_performer_prefers_first_on_tie() {
        let analyses = vec![
            analysis("First", 50, 10),
            analysis("Second", 50, 10),
            analysis("Third", 70, 8),
        ];
        assert_eq!(lowest_performer(&analyses).unwrap().name, "First");
    }

    #[test]
    fn test_recommendation_targets_weakest_subject() {
        let analyses = vec![analysis("Math", 42, 11), analysis("History", 88, 6)];
        let messages = Messages::new(Locale::En);
        let text = build_recommendation(&analyses, &messages);
        assert!(text.contains("Math"));
        assert!(text.contains("42%"));
        assert!(text.contains("11%"));
        assert!(!text.contains("History"));
    }
}
