//! Property tests for the analyzer math and the generated schedules.

use chrono::NaiveDate;
use proptest::prelude::*;
use studyai_core::types::time_to_minutes;
use studyai_core::{
    analyzer, recommend, Locale, ScheduleAssembler, ScheduleConfig, StudyData, StudyHabits,
    Subject, SubjectAnalysis, TestResult, TimeOfDay,
};

fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    prop_oneof![
        Just(TimeOfDay::Morning),
        Just(TimeOfDay::Afternoon),
        Just(TimeOfDay::Evening),
        Just(TimeOfDay::Night),
    ]
}

fn study_data(
    subject_count: usize,
    scores: Vec<u32>,
    time: TimeOfDay,
    duration: u32,
    days: u32,
) -> StudyData {
    let subjects = (0..subject_count)
        .map(|i| {
            let score = scores[i % scores.len()] as f64;
            Subject::new(format!("Subject {i}"))
                .with_test(TestResult::new(score, 100.0, "2026-08-01"))
        })
        .collect();

    StudyData {
        name: "Aiko".to_string(),
        subjects,
        study_habits: StudyHabits {
            preferred_time_of_day: time,
            session_duration: duration,
            days_per_week: days,
            focus_level: Default::default(),
        },
    }
}

proptest! {
    #[test]
    fn time_allocation_stays_on_half_hour_grid(performance in 0u32..=100) {
        let allocation = analyzer::time_allocation(performance);
        prop_assert!((2.0..=7.0).contains(&allocation));
        // Half-hour granularity: doubling lands on an integer
        let doubled = allocation * 2.0;
        prop_assert!((doubled - doubled.round()).abs() < 1e-9);
    }

    #[test]
    fn time_allocation_is_non_increasing(a in 0u32..=100, b in 0u32..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(analyzer::time_allocation(lo) >= analyzer::time_allocation(hi));
    }

    #[test]
    fn expected_improvement_decreases_with_performance(a in 0u32..=100, b in 0u32..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(analyzer::expected_improvement(lo) >= analyzer::expected_improvement(hi));
        prop_assert!((5..=15).contains(&analyzer::expected_improvement(a)));
    }

    #[test]
    fn overall_improvement_is_rounded_mean(improvements in prop::collection::vec(0i32..=15, 1..8)) {
        let analyses: Vec<SubjectAnalysis> = improvements
            .iter()
            .map(|&imp| SubjectAnalysis {
                name: "S".to_string(),
                time_allocation: 2.0,
                current_performance: 50,
                weak_areas: Vec::new(),
                expected_improvement: imp,
            })
            .collect();

        let sum: i32 = improvements.iter().sum();
        let expected = (sum as f64 / improvements.len() as f64).round() as i32;
        prop_assert_eq!(recommend::overall_improvement(&analyses), expected);
    }

    #[test]
    fn generated_schedules_hold_invariants(
        seed in any::<u64>(),
        subject_count in 1usize..6,
        scores in prop::collection::vec(0u32..=100, 1..6),
        time in time_of_day(),
        duration in prop_oneof![Just(15u32), Just(30), Just(45), Just(60), Just(90), Just(120), Just(180)],
        days in 0u32..=7,
    ) {
        let data = study_data(subject_count, scores, time, duration, days);
        let assembler = ScheduleAssembler::with_config(ScheduleConfig {
            seed: Some(seed),
            locale: Locale::En,
        });
        let schedule = assembler.build_from(&data, NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());

        // Exactly 4 weeks, each with min(days_per_week, 7) days
        prop_assert_eq!(schedule.weeks.len(), 4);
        for week in &schedule.weeks {
            prop_assert_eq!(week.len(), days.min(7) as usize);
        }

        for week in &schedule.weeks {
            for day in week {
                // Sessions sorted ascending by start time
                let starts: Vec<u32> = day
                    .sessions
                    .iter()
                    .map(|s| time_to_minutes(&s.start_time).unwrap())
                    .collect();
                for pair in starts.windows(2) {
                    prop_assert!(pair[0] <= pair[1]);
                }

                // No two intervals intersect
                let intervals: Vec<(u32, u32)> = day
                    .sessions
                    .iter()
                    .map(|s| {
                        (
                            time_to_minutes(&s.start_time).unwrap(),
                            time_to_minutes(&s.end_time).unwrap(),
                        )
                    })
                    .collect();
                for (i, &(a0, a1)) in intervals.iter().enumerate() {
                    for &(b0, b1) in &intervals[i + 1..] {
                        prop_assert!(!(a0 < b1 && b0 < a1));
                    }
                }

                // Every selected subject is either placed or reported
                let selected = day.sessions.len() + day.unplaced.len();
                prop_assert!(selected >= 1);
                prop_assert!(selected <= subject_count.min(4));
            }
        }
    }
}
