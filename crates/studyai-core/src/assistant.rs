//! Free-text chat responder over a study profile and its schedule.
//!
//! Simple keyword matching, no state machine: the reply depends only on
//! the message, the cached `StudyData`/`ScheduleData`, and the RNG used
//! for the fallback replies. Intent keywords are matched in English;
//! only the rendered replies go through the locale table.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::locale::Messages;
use crate::types::{FocusLevel, ScheduleData, StudyData};

/// Answer a free-text question about the plan.
pub fn respond<R: Rng>(
    message: &str,
    data: &StudyData,
    schedule: &ScheduleData,
    messages: &Messages,
    rng: &mut R,
) -> String {
    let Some(top) = schedule.subject_analysis.first() else {
        return messages.error_reply().to_string();
    };

    let lower = message.to_lowercase();

    if lower.contains("change schedule") || lower.contains("adjust schedule") {
        return messages.adjust_schedule(&data.name, &top.name);
    }

    if lower.contains("how should i study") || lower.contains("study tips") {
        return messages.study_tips(&top.name, &messages.join_areas(&top.weak_areas));
    }

    if lower.contains("time management") || lower.contains("focus better") {
        return match data.study_habits.focus_level {
            FocusLevel::Low => messages.focus_tips_low(),
            FocusLevel::Medium => {
                messages.focus_tips_medium(data.study_habits.preferred_time_of_day)
            }
            FocusLevel::High => messages.focus_tips_high(),
        };
    }

    for subject in &data.subjects {
        if lower.contains(&subject.name.to_lowercase()) {
            if let Some(analysis) = schedule
                .subject_analysis
                .iter()
                .find(|a| a.name == subject.name)
            {
                return messages.subject_summary(
                    &analysis.name,
                    analysis.current_performance,
                    analysis.time_allocation,
                    &messages.list_areas(&analysis.weak_areas),
                    analysis.expected_improvement,
                );
            }
        }
    }

    if lower.contains("how do i") || lower.contains("what should i") {
        return messages.how_to(&top.name);
    }

    let defaults = messages.default_replies(
        data.study_habits.preferred_time_of_day,
        data.study_habits.session_duration,
        data.study_habits.days_per_week,
        &top.name,
        schedule.overall_improvement,
    );
    defaults
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| messages.error_reply().to_string())
}
