//! Unit tests for the command-line front-end.

use super::{
    BoardCommand, BoardConfig, Cli, CliError, Command, ImportCommand, TeamCommand, non_blank,
    parse_mappings, run,
};
use camino::Utf8PathBuf;
use clap::Parser;
use leadboard::board::domain::{LeadStatus, Priority};
use leadboard::import::LeadField;
use leadboard::integration::domain::CrmProvider;
use rstest::{fixture, rstest};

struct ScratchDir {
    path: Utf8PathBuf,
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        drop(std::fs::remove_dir_all(&self.path));
    }
}

#[fixture]
fn scratch() -> ScratchDir {
    let base = Utf8PathBuf::from_path_buf(std::env::temp_dir()).expect("temp dir is UTF-8");
    ScratchDir {
        path: base.join(format!("leadboard-cli-{}", uuid::Uuid::new_v4())),
    }
}

fn config_for(dir: &ScratchDir) -> BoardConfig {
    BoardConfig {
        mock_latency_ms: 0,
        ..BoardConfig::default()
    }
    .with_data_dir_override(Some(dir.path.clone()))
}

fn execute(config: &BoardConfig, args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("leadboard").chain(args.iter().copied()))
        .expect("arguments parse");
    let mut out = Vec::new();
    run(cli.command, config, &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

#[rstest]
fn add_parses_enumerated_options() {
    let cli = Cli::try_parse_from([
        "leadboard",
        "add",
        "--name",
        "Ada",
        "--company",
        "Analytical Engines",
        "--priority",
        "HIGH",
        "--status",
        "qualified",
    ])
    .expect("arguments parse");
    let Command::Board(BoardCommand::Add(args)) = cli.command else {
        panic!("expected add command");
    };
    let lead = args.into_new_lead();
    assert_eq!(lead.priority, Priority::High);
    assert_eq!(lead.status, LeadStatus::Qualified);
    assert_eq!(lead.notes, "");
}

#[rstest]
#[case(&["leadboard", "list", "--column", "pending"])]
#[case(&["leadboard", "sync", "pipedrive"])]
#[case(&["leadboard", "delete", "not-a-uuid"])]
fn invalid_values_are_rejected(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn nested_subcommands_parse() {
    let import = Cli::try_parse_from([
        "leadboard",
        "import",
        "json",
        "leads.json",
        "--map",
        "org=company",
    ])
    .expect("arguments parse");
    assert!(matches!(
        import.command,
        Command::Board(BoardCommand::Import(ImportCommand::Json { ref mappings, .. }))
            if mappings.len() == 1
    ));
    let team = Cli::try_parse_from(["leadboard", "team", "list"]).expect("arguments parse");
    assert!(matches!(team.command, Command::Team(TeamCommand::List)));
    let sync = Cli::try_parse_from(["leadboard", "sync", "hubspot"]).expect("arguments parse");
    assert!(matches!(
        sync.command,
        Command::Sync {
            provider: CrmProvider::HubSpot
        }
    ));
}

#[rstest]
fn mapping_entries_parse_into_field_mapping() {
    let mapping = parse_mappings(&["org = company".to_owned(), "full_name=name".to_owned()])
        .expect("valid mappings");
    let targets: Vec<_> = mapping.entries().iter().map(|entry| entry.target).collect();
    assert_eq!(targets, vec![LeadField::Company, LeadField::Name]);

    assert!(matches!(
        parse_mappings(&["company".to_owned()]),
        Err(CliError::MappingSyntax(_))
    ));
    assert!(matches!(
        parse_mappings(&["org=organisation".to_owned()]),
        Err(CliError::MappingField(_))
    ));
}

#[rstest]
#[case("", None)]
#[case("   ", None)]
#[case("a@b.example", Some("a@b.example"))]
fn blank_values_clear_optional_fields(#[case] raw: &str, #[case] expected: Option<&str>) {
    assert_eq!(non_blank(raw.to_owned()).as_deref(), expected);
}

#[rstest]
fn commands_persist_between_runs(scratch: ScratchDir) {
    let config = config_for(&scratch);
    let created = execute(&config, &["add", "--name", "Grace", "--company", "Navy"])
        .expect("add succeeds");
    let lead_id = created
        .trim()
        .strip_prefix("created ")
        .expect("created line")
        .to_owned();

    execute(&config, &["move", &lead_id, "--to", "contacted"]).expect("move succeeds");
    let listing = execute(&config, &["list", "--column", "contacted"]).expect("list succeeds");

    assert!(listing.starts_with("Contacted (1)"));
    assert!(listing.contains("Grace @ Navy"));
}

#[rstest]
fn sync_imports_provider_records(scratch: ScratchDir) {
    let config = config_for(&scratch);
    let output = execute(&config, &["sync", "airtable"]).expect("sync succeeds");
    assert_eq!(output.trim(), "synced Airtable: 2 fetched, 2 created, 0 skipped");
}
