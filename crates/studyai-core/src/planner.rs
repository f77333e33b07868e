//! Greedy time-slot placement for a single calendar day.
//!
//! Given the subjects picked for a day and the learner's habits, walks
//! candidate intervals forward from the preferred base start time and
//! accepts the first one that does not overlap a session already placed
//! that day. Each subject restarts its own search at the base start; a
//! fixed 15-minute break pads the walk between candidates. Subjects that
//! find no room within the 6-hour search window are reported, not errors.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::locale::Messages;
use crate::types::{
    minutes_to_time, Priority, SessionSlot, StudyHabits, SubjectAnalysis, TimeOfDay,
};

/// Break inserted between candidate intervals, in minutes.
pub const BREAK_MINUTES: u32 = 15;

/// How far past the base start the slot search may walk, in minutes.
pub const SEARCH_WINDOW_MINUTES: u32 = 6 * 60;

/// Base start of the study block, in minutes since midnight.
pub fn base_start_minutes(time: TimeOfDay) -> u32 {
    match time {
        TimeOfDay::Morning => 8 * 60,
        TimeOfDay::Afternoon => 13 * 60,
        TimeOfDay::Evening => 18 * 60,
        TimeOfDay::Night => 20 * 60,
    }
}

/// Result of placing one day's subjects.
#[derive(Debug, Clone, Default)]
pub struct DayPlacement {
    /// Accepted sessions, in placement order (the caller sorts).
    pub sessions: Vec<SessionSlot>,
    /// Subjects that found no free slot within the search window.
    pub unplaced: Vec<String>,
}

/// Inclusive-exclusive interval conflict test on minutes since midnight.
fn conflicts(placed: &[(u32, u32)], start: u32, end: u32) -> bool {
    placed.iter().any(|&(s, e)| start < e && s < end)
}

/// Place sessions for one day.
///
/// Subjects are processed in the order supplied; the RNG is used only to
/// pick each session's focus area from the subject's weak areas.
pub fn place_sessions_for_day<R: Rng>(
    subjects: &[SubjectAnalysis],
    habits: &StudyHabits,
    messages: &Messages,
    rng: &mut R,
) -> DayPlacement {
    let base = base_start_minutes(habits.preferred_time_of_day);
    let duration = habits.session_duration;

    let mut placement = DayPlacement::default();
    let mut intervals: Vec<(u32, u32)> = Vec::with_capacity(subjects.len());

    for subject in subjects {
        let mut start = base;
        let mut placed = false;

        while start < base + SEARCH_WINDOW_MINUTES {
            let end = start + duration;

            if !conflicts(&intervals, start, end) {
                let focus_area = subject
                    .weak_areas
                    .choose(rng)
                    .cloned()
                    .unwrap_or_else(|| messages.general_review().to_string());

                placement.sessions.push(SessionSlot {
                    subject: subject.name.clone(),
                    start_time: minutes_to_time(start),
                    end_time: minutes_to_time(end),
                    focus_area,
                    priority: Priority::from_performance(subject.current_performance),
                });
                intervals.push((start, end));
                placed = true;
                break;
            }

            start += duration + BREAK_MINUTES;
        }

        if !placed {
            placement.unplaced.push(subject.name.clone());
        }
    }

    placement
}
