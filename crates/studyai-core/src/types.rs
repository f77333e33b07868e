//! Data model for study plans and generated schedules.
//!
//! The wire shapes (serde names) match the JSON payloads the original web
//! client cached, so previously exported data deserializes unchanged:
//! - input side: `StudyData` with subjects, test results and study habits
//! - output side: `ScheduleData` with four weeks of day schedules, the
//!   per-subject analysis list, and the narrative recommendation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded test for a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: String,
    /// Points earned (>= 0).
    pub score: f64,
    /// Maximum points for the test (> 0).
    pub total_possible: f64,
    /// Date the test was taken, as entered by the user.
    pub date: String,
}

impl TestResult {
    /// Create a test result with a fresh id.
    pub fn new(score: f64, total_possible: f64, date: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            score,
            total_possible,
            date: date.into(),
        }
    }
}

/// A subject with its ordered test history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    /// Unique within a learner's profile.
    pub name: String,
    pub test_results: Vec<TestResult>,
}

impl Subject {
    /// Create a subject with a fresh id and no test history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            test_results: Vec::new(),
        }
    }

    /// Add a test result, keeping entry order.
    pub fn with_test(mut self, result: TestResult) -> Self {
        self.test_results.push(result);
        self
    }
}

/// Preferred part of the day for study sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Self-reported ability to concentrate.
///
/// Consumed only by the chat responder, never by scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FocusLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Stated study preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyHabits {
    pub preferred_time_of_day: TimeOfDay,
    /// Session length in minutes (15-180 in steps of 15 expected; the
    /// engine does not enforce the range).
    pub session_duration: u32,
    /// Study days per 7-day week (0-7).
    pub days_per_week: u32,
    pub focus_level: FocusLevel,
}

impl Default for StudyHabits {
    fn default() -> Self {
        Self {
            preferred_time_of_day: TimeOfDay::default(),
            session_duration: 60,
            days_per_week: 5,
            focus_level: FocusLevel::default(),
        }
    }
}

/// Complete input profile: learner name, subjects, habits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyData {
    pub name: String,
    pub subjects: Vec<Subject>,
    pub study_habits: StudyHabits,
}

/// Per-subject analytics derived from the test history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAnalysis {
    pub name: String,
    /// Weekly hour budget, half-hour granularity, in [2.0, 7.0].
    pub time_allocation: f64,
    /// Mastery estimate as an integer percentage, clamped to [0, 100].
    pub current_performance: u32,
    /// Topic tags flagged for extra focus.
    pub weak_areas: Vec<String>,
    /// Projected gain in percentage points over the 4-week horizon.
    pub expected_improvement: i32,
}

/// Urgency tag for a session, derived from performance thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Map a performance percentage to a priority (thresholds 60 and 80).
    pub fn from_performance(performance: u32) -> Self {
        if performance < 60 {
            Priority::High
        } else if performance < 80 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// One reserved study interval on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSlot {
    /// Subject name (a reference into the analysis list, not ownership).
    pub subject: String,
    /// "HH:MM"; hours may exceed 23 when a night block walks past midnight.
    pub start_time: String,
    pub end_time: String,
    /// One weak-area tag, or the locale's general-review fallback.
    pub focus_area: String,
    pub priority: Priority,
}

/// All sessions scheduled for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// Sorted ascending by start time; intervals never overlap.
    #[serde(rename = "schedule")]
    pub sessions: Vec<SessionSlot>,
    /// Subjects selected for this day that found no free slot within the
    /// search window. Kept out of the payload when empty so the original
    /// wire shape is preserved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unplaced: Vec<String>,
}

/// Completed schedule: 4 weeks of days plus the derived analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleData {
    #[serde(rename = "weeklySchedules")]
    pub weeks: Vec<Vec<DaySchedule>>,
    pub subject_analysis: Vec<SubjectAnalysis>,
    pub recommendation: String,
    /// Rounded mean of the per-subject expected improvements.
    pub overall_improvement: i32,
}

/// Parse an "HH:MM" string into minutes since midnight.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Format minutes since midnight as "HH:MM".
///
/// Hours are not wrapped at 24: a slot starting 380 minutes after a 20:00
/// base renders as "26:20", matching how the schedule is displayed.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
