use clap::Parser;
use practice_data::utils::{logger, validation::Validate};
use practice_data::{
    CliConfig, Command, ConfigProvider, CounselorRepository, JsonCounselorRepository,
    JsonNewsletterRepository, LocalFileSource, NewsletterRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.apply_file_overrides() {
        tracing::error!("Configuration file error: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    tracing::info!("Starting practice-data CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    let source = LocalFileSource::new(config.data_dir());
    let counselors = JsonCounselorRepository::new(source.clone(), config.counselor_file());
    let newsletters = JsonNewsletterRepository::new(source, config.newsletter_file());

    let result = match &config.command {
        Command::Counselors => counselors
            .get_all_counselors()
            .await
            .map(|all| serde_json::to_string_pretty(&*all).unwrap_or_default()),
        Command::Counselor { firstname } => {
            counselors
                .get_counselor_by_name(firstname)
                .await
                .map(|found| match found {
                    Some(counselor) => {
                        serde_json::to_string_pretty(&counselor).unwrap_or_default()
                    }
                    None => format!("No counselor found with first name \"{firstname}\""),
                })
        }
        Command::Newsletters => newsletters
            .get_all_newsletters()
            .await
            .map(|all| serde_json::to_string_pretty(&*all).unwrap_or_default()),
        Command::Newsletter { id } => {
            newsletters
                .get_newsletter_by_id(id)
                .await
                .map(|found| match found {
                    Some(newsletter) => {
                        serde_json::to_string_pretty(&newsletter).unwrap_or_default()
                    }
                    None => format!("No newsletter found with id \"{id}\""),
                })
        }
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("Data access failed: {}", e);
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
