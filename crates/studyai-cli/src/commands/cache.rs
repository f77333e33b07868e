use clap::Subcommand;
use studyai_core::CacheDb;

#[derive(Subcommand)]
pub enum CacheAction {
    /// Show which values are cached
    Show,
    /// Drop everything from the cache
    Clear,
}

pub fn run(action: CacheAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = CacheDb::open()?;
    match action {
        CacheAction::Show => {
            match db.load_study_data()? {
                Some(data) => println!(
                    "profile: {} ({} subjects)",
                    data.name,
                    data.subjects.len()
                ),
                None => println!("profile: <none>"),
            }
            match db.load_schedule()? {
                Some(schedule) => println!(
                    "schedule: {} weeks, overall +{}%",
                    schedule.weeks.len(),
                    schedule.overall_improvement
                ),
                None => println!("schedule: <none>"),
            }
        }
        CacheAction::Clear => {
            db.clear()?;
            println!("cache cleared");
        }
    }
    Ok(())
}
