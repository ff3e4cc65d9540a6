//! Command-line front-end for the lead board.
//!
//! Usage:
//!
//! ```text
//! leadboard [--config <path>] [--data-dir <dir>] <command>
//! ```
//!
//! The board and team roster are stored as JSON documents in the data
//! directory (`LEADBOARD_DATA_DIR` overrides the configured one). Log
//! verbosity follows `RUST_LOG` and defaults to `info`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use clap::{Args, Parser, Subcommand};
use leadboard::board::{
    adapters::fs::FileStorage,
    domain::{
        BoardDomainError, Column, Lead, LeadId, LeadSource, LeadStatus, NewLead, NewTeamMember,
        ParseLeadStatusError, Priority, TeamMemberId,
    },
    services::{BoardServiceError, BoardStore, MoveLead, TeamDirectory},
};
use leadboard::config::{BoardConfig, ConfigError, DATA_DIR_ENV};
use leadboard::import::{
    FieldMapping, LeadField, ParseLeadFieldError, parse_csv, parse_json, record_keys,
};
use leadboard::integration::{
    adapters::MockConnector,
    domain::{CrmProvider, ParseCrmProviderError},
    services::{IntegrationError, IntegrationService},
};
use leadboard::notification::adapters::TracingNotifier;
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Store = BoardStore<FileStorage, DefaultClock>;
type Team = TeamDirectory<FileStorage, DefaultClock>;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open data directory '{path}': {source}")]
    DataDir {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error(transparent)]
    Board(#[from] BoardServiceError),
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    #[error(transparent)]
    Integration(#[from] IntegrationError),
    #[error("mapping entry '{0}' must look like <key>=<field>")]
    MappingSyntax(String),
    #[error(transparent)]
    MappingField(#[from] ParseLeadFieldError),
}

#[derive(Debug, Parser)]
#[command(name = "leadboard", version, about = "Kanban pipeline board for sales leads")]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Directory holding the board and team documents.
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Board(BoardCommand),
    /// Connects to a CRM and imports its leads.
    Sync {
        /// Provider to sync.
        #[arg(value_parser = parse_provider)]
        provider: CrmProvider,
    },
    /// Manages the team roster.
    #[command(subcommand)]
    Team(TeamCommand),
}

#[derive(Debug, Subcommand)]
enum BoardCommand {
    /// Lists leads column by column.
    List {
        /// Only list this column.
        #[arg(long, value_parser = parse_status)]
        column: Option<LeadStatus>,
    },
    /// Creates a lead at the end of its column.
    Add(AddLead),
    /// Edits fields of an existing lead.
    Update(UpdateLead),
    /// Moves a lead to another column (or position).
    Move {
        /// Lead to move.
        lead: LeadId,
        /// Destination column.
        #[arg(long, value_parser = parse_status)]
        to: LeadStatus,
        /// Destination position; defaults to the end of the column.
        #[arg(long)]
        index: Option<usize>,
    },
    /// Moves the card at one position of a column to another position.
    Reorder {
        /// Column to reorder.
        #[arg(value_parser = parse_status)]
        column: LeadStatus,
        /// Current position.
        from: usize,
        /// New position.
        to: usize,
    },
    /// Deletes a lead.
    Delete {
        /// Lead to delete.
        lead: LeadId,
    },
    /// Assigns a lead to a team member, or clears the assignment.
    Assign {
        /// Lead to assign.
        lead: LeadId,
        /// Team member; omit to unassign.
        #[arg(long)]
        member: Option<TeamMemberId>,
    },
    /// Imports leads from a file.
    #[command(subcommand)]
    Import(ImportCommand),
}

#[derive(Debug, Args)]
struct AddLead {
    #[arg(long)]
    name: String,
    #[arg(long)]
    company: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long, value_parser = parse_priority, default_value = "medium")]
    priority: Priority,
    #[arg(long, default_value = "")]
    notes: String,
    #[arg(long, value_parser = parse_status, default_value = "new")]
    status: LeadStatus,
    #[arg(long, value_parser = parse_source)]
    source: Option<LeadSource>,
}

#[derive(Debug, Args)]
struct UpdateLead {
    lead: LeadId,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long, value_parser = parse_priority)]
    priority: Option<Priority>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long, value_parser = parse_status)]
    status: Option<LeadStatus>,
    #[arg(long, value_parser = parse_source)]
    source: Option<LeadSource>,
}

#[derive(Debug, Subcommand)]
enum ImportCommand {
    /// Imports a CSV file with `name,company,priority,notes,status` columns.
    Csv {
        /// File to import.
        path: Utf8PathBuf,
    },
    /// Imports a JSON array of objects.
    Json {
        /// File to import.
        path: Utf8PathBuf,
        /// Explicit `<key>=<field>` mappings; suggested from the keys when
        /// omitted.
        #[arg(long = "map")]
        mappings: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
enum TeamCommand {
    /// Adds a team member.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        avatar_url: Option<String>,
    },
    /// Lists team members.
    List,
    /// Removes a team member.
    Remove {
        /// Member to remove.
        member: TeamMemberId,
    },
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BoardConfig::load(cli.config.as_deref())?.with_data_dir_override(cli.data_dir);
    let mut out = io::stdout().lock();
    run(cli.command, &config, &mut out).map_err(Into::into)
}

fn run(command: Command, config: &BoardConfig, out: &mut impl Write) -> Result<(), CliError> {
    let storage = open_storage(&config.data_dir)?;
    let clock = Arc::new(DefaultClock);
    match command {
        Command::Team(team_command) => {
            let mut team = TeamDirectory::open(storage, clock, config.team_key.clone())?;
            run_team(team_command, &mut team, out)
        }
        Command::Sync { provider } => {
            let mut store = BoardStore::open(storage, clock, config.board_key.clone())?;
            run_sync(provider, config, &mut store, out)
        }
        Command::Board(board_command) => {
            let mut store = BoardStore::open(storage, clock, config.board_key.clone())?;
            run_board(board_command, &mut store, out)
        }
    }
}

fn run_board(
    command: BoardCommand,
    store: &mut Store,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        BoardCommand::List { column } => list(store, column, out)?,
        BoardCommand::Add(args) => {
            let lead = store.create_lead(args.into_new_lead())?;
            writeln!(out, "created {}", lead.id())?;
        }
        BoardCommand::Update(args) => {
            let current = store.require_lead(args.lead)?.clone();
            let lead = store.update_lead(args.apply(current))?;
            writeln!(out, "updated {}", lead.id())?;
        }
        BoardCommand::Move { lead, to, index } => {
            let (source, source_index) = store
                .locate(lead)
                .ok_or(BoardDomainError::LeadNotFound(lead))?;
            let dest_index = index.unwrap_or_else(|| default_dest_index(store, source, to));
            store.move_lead_between_columns(MoveLead {
                source,
                destination: to,
                source_index,
                dest_index,
                lead_id: lead,
            })?;
            writeln!(out, "moved {lead} to {to} at {dest_index}")?;
        }
        BoardCommand::Reorder { column, from, to } => {
            store.reorder_leads_in_column(column, from, to)?;
            writeln!(out, "reordered {column}: {from} -> {to}")?;
        }
        BoardCommand::Delete { lead } => {
            store.delete_lead(lead)?;
            writeln!(out, "deleted {lead}")?;
        }
        BoardCommand::Assign { lead, member } => {
            store.assign_lead(lead, member)?;
            let message = member.map_or_else(
                || format!("unassigned {lead}"),
                |member_id| format!("assigned {lead} to {member_id}"),
            );
            writeln!(out, "{message}")?;
        }
        BoardCommand::Import(import) => {
            let records = match import {
                ImportCommand::Csv { path } => parse_csv(&read_input(&path)?),
                ImportCommand::Json { path, mappings } => {
                    let raw = parse_json(&read_input(&path)?);
                    let mapping = if mappings.is_empty() {
                        let keys = record_keys(&raw);
                        FieldMapping::suggest(keys.iter().map(String::as_str))
                    } else {
                        parse_mappings(&mappings)?
                    };
                    mapping.apply_all(&raw)
                }
            };
            let report = store.import_leads(records)?;
            writeln!(out, "imported {} leads", report.created.len())?;
            for skipped in &report.skipped {
                writeln!(out, "skipped record {}: {}", skipped.position, skipped.reason)?;
            }
        }
    }
    Ok(())
}

fn run_sync(
    provider: CrmProvider,
    config: &BoardConfig,
    store: &mut Store,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    let mut service = IntegrationService::new(Arc::new(TracingNotifier));
    service.register(Arc::new(MockConnector::new(provider, config.mock_latency())));
    let summary = runtime.block_on(async {
        service.connect(provider).await?;
        service.sync(store, provider, None).await
    })?;
    writeln!(
        out,
        "synced {provider}: {} fetched, {} created, {} skipped",
        summary.fetched, summary.created, summary.skipped
    )?;
    Ok(())
}

fn run_team(command: TeamCommand, team: &mut Team, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        TeamCommand::Add {
            name,
            email,
            role,
            avatar_url,
        } => {
            let mut input = NewTeamMember::new(name, email, role);
            input.avatar_url = avatar_url;
            let member = team.add_member(input)?;
            writeln!(out, "added {}", member.id())?;
        }
        TeamCommand::List => {
            for member in team.members() {
                writeln!(
                    out,
                    "{}  {} <{}>  {}",
                    member.id(),
                    member.name(),
                    member.email(),
                    member.role()
                )?;
            }
        }
        TeamCommand::Remove { member } => {
            team.remove_member(member)?;
            writeln!(out, "removed {member}")?;
        }
    }
    Ok(())
}

fn list(store: &Store, only: Option<LeadStatus>, out: &mut impl Write) -> io::Result<()> {
    for column in store.board().columns() {
        if only.is_some_and(|status| status != column.id()) {
            continue;
        }
        writeln!(out, "{} ({})", column.title(), column.len())?;
        for lead in store.leads_in_column(column.id()) {
            writeln!(out, "  {}", describe(lead))?;
        }
    }
    Ok(())
}

fn describe(lead: &Lead) -> String {
    format!(
        "{}  {} @ {}  [{}]",
        lead.id(),
        lead.name(),
        lead.company(),
        lead.priority()
    )
}

/// Appends to the destination; within the same column that is its last
/// position.
fn default_dest_index(store: &Store, source: LeadStatus, destination: LeadStatus) -> usize {
    let len = store
        .board()
        .column(destination)
        .map_or(0, Column::len);
    if source == destination {
        len.saturating_sub(1)
    } else {
        len
    }
}

impl AddLead {
    fn into_new_lead(self) -> NewLead {
        NewLead {
            name: self.name,
            company: self.company,
            email: self.email,
            phone: self.phone,
            priority: self.priority,
            notes: self.notes,
            status: self.status,
            source: self.source,
            assigned_to: None,
        }
    }
}

impl UpdateLead {
    fn apply(self, mut lead: Lead) -> Lead {
        if let Some(name) = self.name {
            lead = lead.with_name(name);
        }
        if let Some(company) = self.company {
            lead = lead.with_company(company);
        }
        if let Some(email) = self.email {
            lead = lead.with_email(non_blank(email));
        }
        if let Some(phone) = self.phone {
            lead = lead.with_phone(non_blank(phone));
        }
        if let Some(priority) = self.priority {
            lead = lead.with_priority(priority);
        }
        if let Some(notes) = self.notes {
            lead = lead.with_notes(notes);
        }
        if let Some(status) = self.status {
            lead = lead.with_status(status);
        }
        if let Some(source) = self.source {
            lead = lead.with_source(Some(source));
        }
        lead
    }
}

/// An empty value clears an optional field.
fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

fn parse_mappings(entries: &[String]) -> Result<FieldMapping, CliError> {
    entries.iter().try_fold(FieldMapping::new(), |mapping, entry| {
        let (key, field) = entry
            .split_once('=')
            .ok_or_else(|| CliError::MappingSyntax(entry.clone()))?;
        Ok(mapping.with(key.trim(), LeadField::try_from(field)?))
    })
}

fn open_storage(path: &Utf8Path) -> Result<Arc<FileStorage>, CliError> {
    FileStorage::open(path)
        .map(Arc::new)
        .map_err(|source| CliError::DataDir {
            path: path.to_owned(),
            source,
        })
}

fn read_input(path: &Utf8Path) -> Result<String, CliError> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let read = || {
        let name = path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
        Dir::open_ambient_dir(parent, ambient_authority())?.read_to_string(name)
    };
    read().map_err(|source| CliError::ReadInput {
        path: path.to_owned(),
        source,
    })
}

fn parse_status(raw: &str) -> Result<LeadStatus, ParseLeadStatusError> {
    LeadStatus::try_from(raw)
}

fn parse_priority(raw: &str) -> Result<Priority, BoardDomainError> {
    Priority::try_from(raw)
}

fn parse_source(raw: &str) -> Result<LeadSource, BoardDomainError> {
    LeadSource::try_from(raw)
}

fn parse_provider(raw: &str) -> Result<CrmProvider, ParseCrmProviderError> {
    CrmProvider::try_from(raw)
}

#[cfg(test)]
#[path = "leadboard/tests.rs"]
mod tests;
