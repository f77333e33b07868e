//! Input boundary validation.
//!
//! Re-checks exactly what the form collaborator guarantees before the
//! engine runs: non-empty subject list, non-blank names, at least one
//! test per subject, non-negative scores, positive possible points,
//! non-empty dates. Habit ranges (session duration, days per week) are
//! deliberately left unchecked; the engine bounds them itself.

use crate::error::ValidationError;
use crate::types::StudyData;

/// Validate a study profile for schedule generation.
pub fn validate_study_data(data: &StudyData) -> Result<(), ValidationError> {
    if data.subjects.is_empty() {
        return Err(ValidationError::EmptyCollection("subjects".to_string()));
    }

    for subject in &data.subjects {
        if subject.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "subject.name".to_string(),
                message: "subject name must not be blank".to_string(),
            });
        }

        if subject.test_results.is_empty() {
            return Err(ValidationError::EmptyCollection(format!(
                "test results for '{}'",
                subject.name
            )));
        }

        for test in &subject.test_results {
            if test.score < 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("{}.score", subject.name),
                    message: format!("score must be non-negative, got {}", test.score),
                });
            }
            if test.total_possible <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("{}.totalPossible", subject.name),
                    message: format!("total possible must be positive, got {}", test.total_possible),
                });
            }
            if test.date.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: format!("{}.date", subject.name),
                    message: "test date must not be empty".to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StudyHabits, Subject, TestResult};

    fn valid_data() -> StudyData {
        StudyData {
            name: "Aiko".to_string(),
            subjects: vec![
                Subject::new("Math").with_test(TestResult::new(50.0, 100.0, "2026-08-01")),
            ],
            study_habits: StudyHabits::default(),
        }
    }

    #[test]
    fn test_valid_data_passes() {
        assert!(validate_study_data(&valid_data()).is_ok());
    }

    #[test]
    fn test_empty_subjects_rejected() {
        let mut data = valid_data();
        data.subjects.clear();
        assert!(matches!(
            validate_study_data(&data),
            Err(ValidationError::EmptyCollection(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut data = valid_data();
        data.subjects[0].name = "  ".to_string();
        assert!(validate_study_data(&data).is_err());
    }

    #[test]
    fn test_subject_without_tests_rejected() {
        let mut data = valid_data();
        data.subjects[0].test_results.clear();
        assert!(matches!(
            validate_study_data(&data),
            Err(ValidationError::EmptyCollection(_))
        ));
    }

    #[test]
    fn test_negative_score_rejected() {
        let mut data = valid_data();
        data.subjects[0].test_results[0].score = -1.0;
        assert!(validate_study_data(&data).is_err());
    }

    #[test]
    fn test_zero_total_possible_rejected() {
        let mut data = valid_data();
        data.subjects[0].test_results[0].total_possible = 0.0;
        assert!(validate_study_data(&data).is_err());
    }

    #[test]
    fn test_empty_date_rejected() {
        let mut data = valid_data();
        data.subjects[0].test_results[0].date = String::new();
        assert!(validate_study_data(&data).is_err());
    }
}
