// src/cli/handlers.rs
use crate::aggregate::{self, AggregateReport, CategoryFilter};
use crate::cli::args::InputArgs;
use crate::config::{Config, Profile};
use crate::error::DesignLintError;
use crate::exit::DesignLintExit;
use crate::ignore::IgnoreStore;
use crate::messages::{JsonLinesChannel, MessageChannel, PluginMessage};
use crate::reporting;
use crate::rules::RuleEngine;
use crate::snapshot;
use crate::theme::Theme;
use crate::types::{BulkError, ErrorRecord, IgnoredError};
use anyhow::{anyhow, Result};
use colored::Colorize;
use tracing::{info, warn};

/// Everything a command needs after loading its inputs.
struct Session {
    report: AggregateReport,
    ignored: IgnoreStore,
    filter: CategoryFilter,
}

fn build_config(profile: Option<Profile>) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(p) = profile {
        config.profile = p;
    }
    config.validate()?;
    Ok(config)
}

fn load_theme(input: &InputArgs, config: &Config) -> Result<Theme> {
    let path = input.theme.as_ref().or(config.theme_path.as_ref());
    match path {
        Some(p) => Ok(Theme::load(p)?),
        None => {
            warn!("no theme configured; every bound fill variable will be flagged");
            Ok(Theme::default())
        }
    }
}

fn open_session(input: &InputArgs) -> Result<Session> {
    let config = build_config(input.profile)?;
    let theme = load_theme(input, &config)?;
    let ignored = match &input.ignored {
        Some(path) => IgnoreStore::open(path)?,
        None => IgnoreStore::in_memory(),
    };

    let nodes = snapshot::load_nodes(&input.paths)?;
    let engine = RuleEngine::new(config, theme);
    let results = engine.scan(&nodes);
    let report = aggregate::aggregate(&results, ignored.as_slice());
    info!(
        bulk = report.bulk.len(),
        ignored = ignored.len(),
        "aggregated"
    );

    Ok(Session {
        report,
        ignored,
        filter: CategoryFilter::from_categories(input.filter.iter().copied()),
    })
}

fn pick<'a>(session: &'a Session, index: usize) -> Result<&'a BulkError> {
    let shown = session.filter.apply(&session.report.bulk);
    let len = shown.len();
    shown
        .get(index)
        .copied()
        .ok_or_else(|| DesignLintError::BulkIndex { index, len }.into())
}

/// Handles the lint command.
///
/// # Errors
/// Returns error if inputs cannot be loaded.
pub fn handle_lint(input: &InputArgs, json: bool) -> Result<DesignLintExit> {
    let session = open_session(input)?;
    let shown = session.filter.apply(&session.report.bulk);
    let has_errors = !shown.is_empty();

    if json {
        let filtered = AggregateReport {
            bulk: shown.into_iter().cloned().collect(),
            nodes: session.report.nodes.clone(),
        };
        reporting::print_json(&filtered)?;
    } else {
        reporting::print_report(&session.report, &session.filter)?;
    }

    if has_errors {
        Ok(DesignLintExit::ViolationsFound)
    } else {
        Ok(DesignLintExit::Success)
    }
}

/// Handles the ignore-all command.
///
/// # Errors
/// Returns error if no ignore file is given, the index is out of range, or
/// the ignore file cannot be written.
pub fn handle_ignore_all(input: &InputArgs, index: usize) -> Result<DesignLintExit> {
    if input.ignored.is_none() {
        return Err(anyhow!("ignore-all needs --ignored <FILE> to record decisions"));
    }
    let mut session = open_session(input)?;
    let bulk = pick(&session, index)?.clone();

    let matching: Vec<IgnoredError> = aggregate::ignore_all(&bulk, &session.report.nodes)
        .into_iter()
        .map(IgnoredError::from)
        .collect();
    let added = session.ignored.extend(matching);
    session.ignored.save()?;

    println!(
        "{} Ignored {added} {} matching \"{}\".",
        "OK".green().bold(),
        if added == 1 { "error" } else { "errors" },
        bulk.error.value
    );
    Ok(DesignLintExit::Success)
}

/// Handles the select command: `select-multiple-layers` for the whole entry,
/// or `fetch-layer-data` when a single node is named.
///
/// # Errors
/// Returns error if the index is out of range, the node is not in the entry,
/// or stdout cannot be written.
pub fn handle_select(input: &InputArgs, index: usize, node: Option<&str>) -> Result<DesignLintExit> {
    let session = open_session(input)?;
    let bulk = pick(&session, index)?;
    let message = match node {
        Some(id) => PluginMessage::select(find_record(&session, bulk, id)?),
        None => PluginMessage::select_all(bulk),
    };
    let mut channel = JsonLinesChannel::new(std::io::stdout().lock());
    channel.post(&message)?;
    Ok(DesignLintExit::Success)
}

fn find_record<'a>(session: &'a Session, bulk: &BulkError, id: &str) -> Result<&'a ErrorRecord> {
    session
        .report
        .nodes
        .iter()
        .filter(|n| n.id == id)
        .flat_map(|n| &n.errors)
        .find(|e| e.category == bulk.error.category && e.value == bulk.error.value)
        .ok_or_else(|| anyhow!("node {id} is not part of this bulk entry"))
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the configuration is invalid.
pub fn handle_config(profile: Option<Profile>) -> Result<DesignLintExit> {
    let config = build_config(profile)?;
    print!("{}", config.to_toml()?);
    Ok(DesignLintExit::Success)
}
