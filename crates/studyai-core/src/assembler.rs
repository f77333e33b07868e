//! Schedule assembly: drives the slot planner across 7-day weeks for a
//! 4-week horizon.
//!
//! Per included day the full analysis list is shuffled and a small subset
//! (1 to 4 subjects) is handed to the planner; the day's sessions are then
//! sorted chronologically. Dates run consecutively from the start date
//! with no weekday alignment: day 0 of week 0 is always "today".

use chrono::{Duration, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use crate::analyzer::analyze_subject;
use crate::locale::{Locale, Messages};
use crate::planner::place_sessions_for_day;
use crate::recommend::{build_recommendation, overall_improvement};
use crate::types::{DaySchedule, ScheduleData, StudyData};

/// Number of weeks in the planning horizon.
pub const HORIZON_WEEKS: usize = 4;

/// Days per calendar week.
pub const DAYS_PER_WEEK: usize = 7;

/// Maximum subjects studied on any single day.
const MAX_SUBJECTS_PER_DAY: usize = 3;

/// Assembly configuration.
#[derive(Debug, Clone, Default)]
pub struct ScheduleConfig {
    /// Fixed seed for reproducible runs; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Locale for the narrative strings.
    pub locale: Locale,
}

/// Builds complete schedules from a study profile.
pub struct ScheduleAssembler {
    config: ScheduleConfig,
}

impl ScheduleAssembler {
    /// Create an assembler with default config.
    pub fn new() -> Self {
        Self {
            config: ScheduleConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Build a schedule starting today.
    ///
    /// Input is assumed validated by the input boundary (see
    /// [`crate::validate`]); the engine does not re-check it.
    pub fn build(&self, data: &StudyData) -> ScheduleData {
        self.build_from(data, Local::now().date_naive())
    }

    /// Build a schedule starting at an explicit date.
    ///
    /// With a fixed seed in the config this is fully deterministic.
    pub fn build_from(&self, data: &StudyData, start: NaiveDate) -> ScheduleData {
        let mut rng = match self.config.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        let messages = Messages::new(self.config.locale);

        let analyses: Vec<_> = data
            .subjects
            .iter()
            .map(|subject| analyze_subject(subject, &mut rng))
            .collect();

        let days_per_week = data.study_habits.days_per_week as usize;
        let subjects_per_day = if analyses.is_empty() {
            0
        } else {
            1 + (analyses.len() - 1).min(MAX_SUBJECTS_PER_DAY)
        };

        let mut weeks = Vec::with_capacity(HORIZON_WEEKS);
        for week in 0..HORIZON_WEEKS {
            let mut days = Vec::new();
            for day in 0..DAYS_PER_WEEK {
                if day >= days_per_week {
                    continue;
                }

                let date = start + Duration::days((week * DAYS_PER_WEEK + day) as i64);

                let mut pool = analyses.clone();
                pool.shuffle(&mut rng);
                pool.truncate(subjects_per_day);

                let mut placement =
                    place_sessions_for_day(&pool, &data.study_habits, &messages, &mut rng);
                placement
                    .sessions
                    .sort_by(|a, b| a.start_time.cmp(&b.start_time));

                days.push(DaySchedule {
                    date,
                    sessions: placement.sessions,
                    unplaced: placement.unplaced,
                });
            }
            weeks.push(days);
        }

        let overall = overall_improvement(&analyses);
        let recommendation = build_recommendation(&analyses, &messages);

        ScheduleData {
            weeks,
            subject_analysis: analyses,
            recommendation,
            overall_improvement: overall,
        }
    }
}

impl Default for ScheduleAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StudyHabits, Subject, TestResult, TimeOfDay};

    fn study_data(subject_count: usize, days_per_week: u32) -> StudyData {
        let subjects = (0..subject_count)
            .map(|i| {
                Subject::new(format!("Subject {i}"))
                    .with_test(TestResult::new(60.0, 100.0, "2026-08-01"))
            })
            .collect();

        StudyData {
            name: "Aiko".to_string(),
            subjects,
            study_habits: StudyHabits {
                preferred_time_of_day: TimeOfDay::Morning,
                session_duration: 60,
                days_per_week,
                focus_level: Default::default(),
            },
        }
    }

    fn assembler(seed: u64) -> ScheduleAssembler {
        ScheduleAssembler::with_config(ScheduleConfig {
            seed: Some(seed),
            locale: Locale::En,
        })
    }

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn test_four_weeks_with_expected_day_counts() {
        let schedule = assembler(1).build_from(&study_data(3, 5), start_date());
        assert_eq!(schedule.weeks.len(), HORIZON_WEEKS);
        for week in &schedule.weeks {
            assert_eq!(week.len(), 5);
        }
    }

    #[test]
    fn test_zero_days_per_week_keeps_four_empty_weeks() {
        let schedule = assembler(1).build_from(&study_data(3, 0), start_date());
        assert_eq!(schedule.weeks.len(), HORIZON_WEEKS);
        for week in &schedule.weeks {
            assert!(week.is_empty());
        }
        // Analytics are still produced
        assert_eq!(schedule.subject_analysis.len(), 3);
        assert!(!schedule.recommendation.is_empty());
    }

    #[test]
    fn test_dates_are_consecutive_from_start() {
        let schedule = assembler(9).build_from(&study_data(2, 3), start_date());
        for (w, week) in schedule.weeks.iter().enumerate() {
            for (d, day) in week.iter().enumerate() {
                let expected = start_date() + Duration::days((w * 7 + d) as i64);
                assert_eq!(day.date, expected);
            }
        }
    }

    #[test]
    fn test_days_cap_at_seven() {
        let schedule = assembler(2).build_from(&study_data(2, 12), start_date());
        for week in &schedule.weeks {
            assert_eq!(week.len(), 7);
        }
    }

    #[test]
    fn test_subject_subset_size_per_day() {
        // 6 subjects -> at most 1 + min(3, 5) = 4 distinct subjects a day
        let schedule = assembler(3).build_from(&study_data(6, 7), start_date());
        for week in &schedule.weeks {
            for day in week {
                let scheduled = day.sessions.len() + day.unplaced.len();
                assert_eq!(scheduled, 4);
            }
        }

        // A single subject is studied every included day
        let schedule = assembler(3).build_from(&study_data(1, 4), start_date());
        for week in &schedule.weeks {
            for day in week {
                assert_eq!(day.sessions.len() + day.unplaced.len(), 1);
            }
        }
    }

    #[test]
    fn test_sessions_sorted_by_start_time() {
        let schedule = assembler(4).build_from(&study_data(4, 7), start_date());
        for week in &schedule.weeks {
            for day in week {
                let starts: Vec<_> = day.sessions.iter().map(|s| &s.start_time).collect();
                let mut sorted = starts.clone();
                sorted.sort();
                assert_eq!(starts, sorted);
            }
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_schedule() {
        let a = assembler(77).build_from(&study_data(4, 5), start_date());
        let b = assembler(77).build_from(&study_data(4, 5), start_date());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
