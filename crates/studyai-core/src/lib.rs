//! # StudyAI Core Library
//!
//! Core engine for the StudyAI planner: converts a learner's historical
//! test scores and stated study preferences into a 4-week calendar of
//! non-overlapping study sessions, per-subject analytics, and a narrative
//! recommendation.
//!
//! ## Architecture
//!
//! Four cooperating components, each a pure function over explicit state:
//!
//! - **Analyzer**: score-based performance estimation and the
//!   negative-feedback time-allocation rule
//! - **Planner**: greedy conflict-free slot packing within one day
//! - **Assembler**: drives the planner across 7-day weeks for 4 weeks
//! - **Recommendation**: overall improvement estimate and narrative
//!
//! Around the engine sit the collaborators: input validation, the locale
//! template table, the chat responder, the async service facade, and the
//! key-value cache.
//!
//! ## Key Components
//!
//! - [`ScheduleAssembler`]: end-to-end schedule generation
//! - [`StudyService`]: async facade with boundary validation
//! - [`CacheDb`]: cached profile/schedule persistence
//! - [`Config`]: application configuration

pub mod analyzer;
pub mod assembler;
pub mod assistant;
pub mod error;
pub mod locale;
pub mod planner;
pub mod recommend;
pub mod service;
pub mod storage;
pub mod types;
pub mod validate;

pub use assembler::{ScheduleAssembler, ScheduleConfig};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use locale::{Locale, Messages};
pub use service::{ServiceConfig, StudyService};
pub use storage::{CacheDb, Config};
pub use types::{
    DaySchedule, FocusLevel, Priority, ScheduleData, SessionSlot, StudyData, StudyHabits,
    Subject, SubjectAnalysis, TestResult, TimeOfDay,
};
pub use validate::validate_study_data;
