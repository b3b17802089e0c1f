use clap::{Parser, Subcommand};
use records_admin::app::terminal::TerminalPage;
use records_admin::app::{Outcome, RecordsApp};
use records_admin::client::RecordsApi;
use records_admin::config::ApiConfig;
use records_admin::error::{ErrorKind, Result};
use records_admin::interface::HttpClient;
use records_admin::view::Section;
use records_admin::NoWasmClient;

/// Terminal client for the academic records service
#[derive(Debug, Parser)]
#[command(name = "records-admin", version)]
struct Cli {
    /// Base URL of the records service [default: $API_BASE_URL, then http://spring-service:8080]
    #[arg(long)]
    api_base_url: Option<String>,

    /// Answer yes to delete confirmations
    #[arg(short, long)]
    yes: bool,

    /// departments, students or enrollments
    section: Section,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Show the section's list (default)
    List,
    /// Load a record into its form and print it
    Edit { id: i64 },
    /// Create a record, or update one with --id
    Save {
        #[arg(long)]
        id: Option<i64>,
        /// Form field assignment, e.g. --set name=Physics
        #[arg(long = "set", value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },
    /// Delete a record after confirmation
    Delete { id: i64 },
}

fn parse_assignment(raw: &str) -> core::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match &cli.api_base_url {
        Some(url) => ApiConfig::new(url)?,
        None => ApiConfig::from_env()?,
    };
    log::info!("records service at {}", config.base_url());

    let client = NoWasmClient::new().await?;
    let app = RecordsApp::new(RecordsApi::new(client, config), TerminalPage::new(cli.yes));
    let section = cli.section;
    let form = section.form();

    let outcome = match cli.action.unwrap_or(Action::List) {
        Action::List => app.activate_section(section, &section).await,
        Action::Edit { id } => {
            app.activate_section(section, &section).await;
            let outcome = app.edit_record(section, id).await;
            app.page().print_form(form);
            outcome
        }
        Action::Save { id, fields } => {
            app.activate_section(section, &section).await;
            match id {
                Some(id) => {
                    let loaded = app.edit_record(section, id).await;
                    if loaded != Outcome::Applied {
                        return Err(ErrorKind::ApiError(format!("could not load {section} {id}")).into());
                    }
                }
                None => {
                    app.open_form(form).await;
                }
            }
            for (key, value) in &fields {
                app.page().assign(form, key, value)?;
            }
            app.save_form(form).await
        }
        Action::Delete { id } => {
            app.activate_section(section, &section).await;
            app.delete_record(section, id).await
        }
    };

    app.page().print_list(section);
    log::debug!("finished with {outcome:?}");

    if outcome == Outcome::Failed {
        std::process::exit(1);
    }
    Ok(())
}
