use clap::Subcommand;
use studyai_core::{CacheDb, SubjectAnalysis};

#[derive(Subcommand)]
pub enum AnalyzeAction {
    /// Show analytics for every subject
    All,
    /// Show analytics for one subject
    Subject {
        /// Subject name (case-insensitive)
        name: String,
    },
}

fn print_analysis(analysis: &SubjectAnalysis) {
    println!(
        "{}: performance {}%, {}h/week, expected +{}%, focus: {}",
        analysis.name,
        analysis.current_performance,
        analysis.time_allocation,
        analysis.expected_improvement,
        if analysis.weak_areas.is_empty() {
            "-".to_string()
        } else {
            analysis.weak_areas.join(", ")
        }
    );
}

pub fn run(action: AnalyzeAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = CacheDb::open()?;
    let Some(schedule) = db.load_schedule()? else {
        println!("no schedule cached; run `plan generate` first");
        return Ok(());
    };

    match action {
        AnalyzeAction::All => {
            for analysis in &schedule.subject_analysis {
                print_analysis(analysis);
            }
            println!("overall expected improvement: +{}%", schedule.overall_improvement);
        }
        AnalyzeAction::Subject { name } => {
            let found = schedule
                .subject_analysis
                .iter()
                .find(|a| a.name.eq_ignore_ascii_case(&name));
            match found {
                Some(analysis) => print_analysis(analysis),
                None => println!("no subject named '{name}' in the cached schedule"),
            }
        }
    }
    Ok(())
}
