use clap::Subcommand;
use studyai_core::{CacheDb, Config, StudyService};

#[derive(Subcommand)]
pub enum ChatAction {
    /// Ask a question about the cached plan
    Ask {
        /// The question
        message: String,
        /// Locale for the reply (en, ja)
        #[arg(long)]
        locale: Option<String>,
    },
}

pub fn run(action: ChatAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChatAction::Ask { message, locale } => {
            let db = CacheDb::open()?;
            let (Some(data), Some(schedule)) = (db.load_study_data()?, db.load_schedule()?)
            else {
                println!("no cached plan to talk about; run `plan generate` first");
                return Ok(());
            };

            let config = Config::load_or_default();
            let service = StudyService::with_config(super::service_config(&config, None, locale));

            let reply = super::runtime()?.block_on(service.chat(&message, &data, &schedule));
            println!("{reply}");
        }
    }
    Ok(())
}
