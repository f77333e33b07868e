//! Async facade modelling the notional remote planning service.
//!
//! The computation itself is synchronous and bounded; the only suspension
//! point is an optional simulated latency matching the remote round-trips
//! the original client waited on. No real I/O happens here.

use std::time::Duration;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use crate::assembler::{ScheduleAssembler, ScheduleConfig};
use crate::assistant;
use crate::error::Result;
use crate::locale::Messages;
use crate::types::{ScheduleData, StudyData};
use crate::validate::validate_study_data;

/// Simulated round-trip for schedule generation.
const SCHEDULE_LATENCY: Duration = Duration::from_millis(1000);

/// Simulated round-trip for a chat reply.
const CHAT_LATENCY: Duration = Duration::from_millis(1500);

/// Service configuration.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Engine configuration (seed, locale).
    pub schedule: ScheduleConfig,
    /// Whether calls sleep the simulated network latency.
    pub simulated_latency: bool,
}

impl ServiceConfig {
    /// Config with latency disabled, for tests and local tooling.
    pub fn instant(schedule: ScheduleConfig) -> Self {
        Self {
            schedule,
            simulated_latency: false,
        }
    }
}

/// Facade over the engine: validation, latency, generation, chat.
pub struct StudyService {
    config: ServiceConfig,
}

impl StudyService {
    /// Create a service with default config.
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Generate a schedule starting today.
    ///
    /// # Errors
    /// Returns a validation error when the profile violates the input
    /// boundary guarantees (empty subjects, unscorable tests, ...).
    pub async fn generate_schedule(&self, data: &StudyData) -> Result<ScheduleData> {
        validate_study_data(data)?;
        self.simulate_latency(SCHEDULE_LATENCY).await;
        Ok(ScheduleAssembler::with_config(self.config.schedule.clone()).build(data))
    }

    /// Generate a schedule from an explicit start date (deterministic with
    /// a fixed seed).
    pub async fn generate_schedule_from(
        &self,
        data: &StudyData,
        start: NaiveDate,
    ) -> Result<ScheduleData> {
        validate_study_data(data)?;
        self.simulate_latency(SCHEDULE_LATENCY).await;
        Ok(ScheduleAssembler::with_config(self.config.schedule.clone()).build_from(data, start))
    }

    /// Answer a free-text question about an existing plan.
    pub async fn chat(
        &self,
        message: &str,
        data: &StudyData,
        schedule: &ScheduleData,
    ) -> String {
        self.simulate_latency(CHAT_LATENCY).await;

        let messages = Messages::new(self.config.schedule.locale);
        let mut rng = match self.config.schedule.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        assistant::respond(message, data, schedule, &messages, &mut rng)
    }

    /// Opening chat greeting for a freshly generated plan.
    pub fn greeting(&self, data: &StudyData) -> String {
        Messages::new(self.config.schedule.locale).greeting(&data.name)
    }

    async fn simulate_latency(&self, latency: Duration) {
        if self.config.simulated_latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl Default for StudyService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StudyHabits, Subject, TestResult};

    fn data() -> StudyData {
        StudyData {
            name: "Aiko".to_string(),
            subjects: vec![
                Subject::new("Math").with_test(TestResult::new(50.0, 100.0, "2026-08-01")),
            ],
            study_habits: StudyHabits::default(),
        }
    }

    fn instant_service(seed: u64) -> StudyService {
        StudyService::with_config(ServiceConfig::instant(ScheduleConfig {
            seed: Some(seed),
            locale: Default::default(),
        }))
    }

    #[tokio::test]
    async fn test_generate_schedule_structurally_complete() {
        let schedule = instant_service(3).generate_schedule(&data()).await.unwrap();
        assert_eq!(schedule.weeks.len(), 4);
        assert_eq!(schedule.subject_analysis.len(), 1);
        assert!(!schedule.recommendation.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_input_rejected_at_boundary() {
        let mut invalid = data();
        invalid.subjects.clear();
        let result = instant_service(3).generate_schedule(&invalid).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_greeting_addresses_the_learner() {
        let greeting = instant_service(3).greeting(&data());
        assert!(greeting.contains("Aiko"));
    }

    #[tokio::test]
    async fn test_chat_answers_from_schedule() {
        let service = instant_service(3);
        let data = data();
        let schedule = service.generate_schedule(&data).await.unwrap();
        let reply = service.chat("tell me about Math", &data, &schedule).await;
        assert!(reply.contains("Math"));
    }
}
