//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result, ResultExt};
use crate::fetch::HttpPageFetcher;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{PaginationController, PaginationSession, Phase};
use crate::render::{render_json, render_record, render_status};
use crate::settings::{Settings, SettingsStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Hint printed when an error points at the endpoint configuration
const RECONFIGURE_HINT: &str =
    "Hint: check the endpoint with `reply-scout config` and set it with `reply-scout config --path <PATH>`.";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let store = self.load_store().await?;

        match &self.cli.command {
            Commands::Query {
                subject_id,
                pages,
                all,
            } => {
                self.query(&store, subject_id.as_deref(), *pages, *all)
                    .await
            }
            Commands::Browse { subject_id } => self.browse(&store, subject_id.as_deref()).await,
            Commands::Config {
                path,
                host,
                origin,
                page_size,
                timeout_secs,
            } => {
                if self.cli.command.is_config_update() {
                    store
                        .update(|s| {
                            if let Some(path) = path {
                                s.endpoint.path.clone_from(path);
                            }
                            if let Some(host) = host {
                                s.endpoint.host.clone_from(host);
                            }
                            if let Some(origin) = origin {
                                s.endpoint.origin.clone_from(origin);
                            }
                            if let Some(page_size) = page_size {
                                s.page_size = *page_size;
                            }
                            if let Some(timeout_secs) = timeout_secs {
                                s.timeout_secs = Some(*timeout_secs);
                            }
                        })
                        .await?;
                }
                self.show_config(&store).await
            }
        }
    }

    /// Open the settings store
    async fn load_store(&self) -> Result<SettingsStore> {
        let path = match &self.cli.settings {
            Some(path) => path.clone(),
            None => SettingsStore::default_path()?,
        };
        debug!("Using settings file {}", path.display());
        SettingsStore::from_file(&path)
            .await
            .with_context(|| format!("Could not open settings at {}", path.display()))
    }

    /// Build a controller for the current settings
    fn build_controller(settings: &Settings) -> Result<PaginationController<HttpPageFetcher>> {
        let config = HttpClientConfig::builder()
            .maybe_timeout(settings.timeout())
            .build();
        let client = HttpClient::with_config(config)?;
        Ok(PaginationController::new(HttpPageFetcher::new(
            client,
            settings.endpoint.clone(),
        )))
    }

    /// Query a subject and load up to `pages` pages
    async fn query(
        &self,
        store: &SettingsStore,
        subject_id: Option<&str>,
        pages: u32,
        all: bool,
    ) -> Result<()> {
        let settings = store.settings().await;
        let subject_id = subject_id
            .map(ToString::to_string)
            .or_else(|| settings.last_subject_id.clone())
            .unwrap_or_default();

        let controller = Self::build_controller(&settings)?;
        let mut session = PaginationSession::new(settings.page_size);
        let mut printed = 0;

        controller.start_query(&mut session, &subject_id).await;
        if let Some(subject) = session.subject_id() {
            store.remember_subject(subject).await?;
        }

        let mut loaded = 1;
        loop {
            self.print_new(&session, &mut printed)?;

            if session.phase() == Phase::Failed {
                return Err(self.failure(&session));
            }
            if !session.can_load_more() || (!all && loaded >= pages) {
                break;
            }

            controller.load_more(&mut session).await;
            loaded += 1;
        }

        if self.cli.format == OutputFormat::Pretty {
            eprintln!("{}", render_status(&session));
        }
        Ok(())
    }

    /// Interactive loop over stdin
    async fn browse(&self, store: &SettingsStore, subject_id: Option<&str>) -> Result<()> {
        let settings = store.settings().await;
        let controller = Self::build_controller(&settings)?;
        let mut session = PaginationSession::new(settings.page_size);
        let mut printed = 0;

        let initial = subject_id
            .map(ToString::to_string)
            .or_else(|| settings.last_subject_id.clone());
        if let Some(subject) = initial {
            eprintln!("Querying {subject}...");
            controller.start_query(&mut session, &subject).await;
            self.after_step(store, &session, &mut printed).await?;
        } else {
            eprintln!("{}", render_status(&session));
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            eprintln!("[Enter] load more, <user id> new query, q quit");
            let Some(line) = lines.next_line().await? else {
                break;
            };

            match line.trim() {
                "q" | "quit" | "exit" => break,
                "" | "more" | "m" => {
                    if !session.can_load_more() {
                        eprintln!("{}", render_status(&session));
                        continue;
                    }
                    controller.load_more(&mut session).await;
                }
                subject => {
                    printed = 0;
                    controller.start_query(&mut session, subject).await;
                }
            }
            self.after_step(store, &session, &mut printed).await?;
        }

        Ok(())
    }

    /// Print new rows and the status after a state-machine step
    async fn after_step(
        &self,
        store: &SettingsStore,
        session: &PaginationSession,
        printed: &mut usize,
    ) -> Result<()> {
        self.print_new(session, printed)?;

        if session.phase() == Phase::Failed {
            eprintln!("{}", self.failure(session));
            return Ok(());
        }
        if let Some(subject) = session.subject_id() {
            store.remember_subject(subject).await?;
        }
        eprintln!("{}", render_status(session));
        Ok(())
    }

    /// Print the records that arrived since the last call
    fn print_new(&self, session: &PaginationSession, printed: &mut usize) -> Result<()> {
        for record in session.records().iter().skip(*printed) {
            match self.cli.format {
                OutputFormat::Pretty => println!("{}\n", render_record(record)),
                OutputFormat::Json => println!("{}", render_json(record)?),
            }
        }
        *printed = session.len();
        Ok(())
    }

    /// Turn a failed session into an error, hinting at reconfiguration
    fn failure(&self, session: &PaginationSession) -> Error {
        let message = session
            .last_error_message()
            .unwrap_or_else(|| "unknown error".to_string());

        if session
            .last_error()
            .is_some_and(crate::error::FetchError::suggests_reconfiguration)
        {
            eprintln!("{RECONFIGURE_HINT}");
        }
        Error::Other(format!("Query failed: {message}"))
    }

    /// Print the persisted settings
    async fn show_config(&self, store: &SettingsStore) -> Result<()> {
        let settings = store.settings().await;
        println!("{}", serde_json::to_string_pretty(&settings)?);
        eprintln!("Settings file: {}", store.path().display());
        if !settings.endpoint.is_configured() {
            eprintln!("{RECONFIGURE_HINT}");
        }
        Ok(())
    }
}
