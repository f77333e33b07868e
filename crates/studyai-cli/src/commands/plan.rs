use std::path::PathBuf;

use clap::Subcommand;
use studyai_core::{CacheDb, Config, StudyData, StudyService};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a schedule from a study profile JSON file
    Generate {
        /// Path to the StudyData JSON file
        input: PathBuf,
        /// Fixed seed for a reproducible schedule
        #[arg(long)]
        seed: Option<u64>,
        /// Locale for narrative output (en, ja)
        #[arg(long)]
        locale: Option<String>,
        /// Skip caching the profile and schedule
        #[arg(long)]
        no_cache: bool,
    },
    /// Show the cached schedule
    Show,
    /// Drop the cached profile and schedule
    Reset,
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate {
            input,
            seed,
            locale,
            no_cache,
        } => {
            let content = std::fs::read_to_string(&input)?;
            let data: StudyData = serde_json::from_str(&content)?;

            let config = Config::load_or_default();
            let service = StudyService::with_config(super::service_config(&config, seed, locale));

            let schedule = super::runtime()?.block_on(service.generate_schedule(&data))?;

            if !no_cache {
                let db = CacheDb::open()?;
                db.store_study_data(&data)?;
                db.store_schedule(&schedule)?;
            }

            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        PlanAction::Show => {
            let db = CacheDb::open()?;
            match db.load_schedule()? {
                Some(schedule) => println!("{}", serde_json::to_string_pretty(&schedule)?),
                None => println!("no schedule cached; run `plan generate` first"),
            }
        }
        PlanAction::Reset => {
            let db = CacheDb::open()?;
            db.clear()?;
            println!("cached profile and schedule dropped");
        }
    }
    Ok(())
}
