//! # Output Rendering
//!
//! Text and JSON renderings of a built topology and of path reports.
//! Entities are shown by their display label ("2", "Switch 1").
//!
//! Subcommands collect their stdout and warnings into a [`CommandOutput`]
//! and only print it once complete, so a JSON rendering is always a single
//! document.

use std::fmt::Display;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use netsim_core::{ConnectionId, EntityId, EntityKind, Position, TopologyError};
use netsim_topology::{Connection, ConnectionKind, PathReport, Topology, TopologyService};

use crate::scenario::PathQuery;
use crate::EXIT_WARNING;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct EntityView {
    id: EntityId,
    kind: EntityKind,
    label: String,
    position: Position,
}

#[derive(Debug, Serialize)]
struct ConnectionView {
    id: ConnectionId,
    kind: ConnectionKind,
    a: String,
    b: String,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct TopologyView {
    entities: Vec<EntityView>,
    connections: Vec<ConnectionView>,
}

#[derive(Debug, Serialize)]
struct PathView {
    path: Vec<String>,
    distance: f64,
    highlighted: Vec<ConnectionView>,
}

/// One scenario query: `result` on success, `error` otherwise.
#[derive(Debug, Serialize)]
struct QueryView {
    from: usize,
    to: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<PathView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// What a subcommand prints: `stdout` as rendered, and one stderr line per
/// reported topology outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub warnings: Vec<String>,
}

impl CommandOutput {
    pub fn rendered(stdout: String) -> Self {
        Self {
            stdout,
            warnings: Vec::new(),
        }
    }

    pub fn warning(outcome: impl Display) -> Self {
        Self {
            stdout: String::new(),
            warnings: vec![outcome.to_string()],
        }
    }

    /// 0 when nothing was reported, [`EXIT_WARNING`] otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.warnings.is_empty() {
            0
        } else {
            EXIT_WARNING
        }
    }

    /// Print to stdout and stderr and return the exit code.
    pub fn emit(self) -> u8 {
        print!("{}", self.stdout);
        for warning in &self.warnings {
            eprintln!("Warning: {warning}");
        }
        self.exit_code()
    }
}

fn label(service: &TopologyService, id: EntityId) -> String {
    service
        .entity(id)
        .map(|e| e.display_label())
        .unwrap_or_else(|| id.to_string())
}

fn connection_view(service: &TopologyService, c: &Connection) -> ConnectionView {
    ConnectionView {
        id: c.id,
        kind: c.kind,
        a: label(service, c.a),
        b: label(service, c.b),
        weight: c.weight,
    }
}

fn kind_name(kind: ConnectionKind) -> &'static str {
    match kind {
        ConnectionKind::Trunk => "trunk",
        ConnectionKind::Access => "access",
    }
}

fn push_connection_line(out: &mut String, c: &ConnectionView) {
    out.push_str(&format!(
        "  {:<14} {} -- {}  weight {} ({})\n",
        c.id.to_string(),
        c.a,
        c.b,
        c.weight,
        kind_name(c.kind)
    ));
}

/// Render every entity and the connections of `topology`.
pub fn render_topology(
    service: &TopologyService,
    topology: &Topology,
    format: OutputFormat,
) -> Result<String> {
    let registry = service.registry();
    let view = TopologyView {
        entities: registry
            .switches()
            .iter()
            .chain(registry.nodes())
            .map(|e| EntityView {
                id: e.id,
                kind: e.kind,
                label: e.display_label(),
                position: e.position,
            })
            .collect(),
        connections: topology
            .connections
            .iter()
            .map(|c| connection_view(service, c))
            .collect(),
    };

    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&view)?)),
        OutputFormat::Text => {
            let mut out = String::from("entities:\n");
            for e in &view.entities {
                out.push_str(&format!(
                    "  {:<14} {:<6} {:<10} {}\n",
                    e.id.to_string(),
                    e.kind.to_string(),
                    e.label,
                    e.position
                ));
            }
            out.push_str("connections:\n");
            for c in &view.connections {
                push_connection_line(&mut out, c);
            }
            Ok(out)
        }
    }
}

fn path_view(service: &TopologyService, report: &PathReport) -> PathView {
    PathView {
        path: report.path.iter().map(|&id| label(service, id)).collect(),
        distance: report.distance,
        highlighted: report
            .highlighted
            .iter()
            .map(|c| connection_view(service, c))
            .collect(),
    }
}

fn push_path_text(out: &mut String, view: &PathView) {
    out.push_str(&format!("path: {}\n", view.path.join(" -> ")));
    out.push_str(&format!("distance: {}\n", view.distance));
    out.push_str("highlight:\n");
    for c in &view.highlighted {
        push_connection_line(out, c);
    }
}

/// Render a path report: the hop sequence, total distance, and the
/// connections to highlight.
pub fn render_path(
    service: &TopologyService,
    report: &PathReport,
    format: OutputFormat,
) -> Result<String> {
    let view = path_view(service, report);

    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&view)?)),
        OutputFormat::Text => {
            let mut out = String::new();
            push_path_text(&mut out, &view);
            Ok(out)
        }
    }
}

/// Render the outcome of every scenario query. JSON is one array of
/// `{from, to, result}` or `{from, to, error}` objects; text gives each
/// query a `query a -> b` header.
pub fn render_queries(
    service: &TopologyService,
    outcomes: &[(PathQuery, Result<PathReport, TopologyError>)],
    format: OutputFormat,
) -> Result<String> {
    let views: Vec<QueryView> = outcomes
        .iter()
        .map(|(query, outcome)| {
            let (result, error) = match outcome {
                Ok(report) => (Some(path_view(service, report)), None),
                Err(e) => (None, Some(e.to_string())),
            };
            QueryView {
                from: query.from,
                to: query.to,
                result,
                error,
            }
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&views)?)),
        OutputFormat::Text => {
            let mut out = String::new();
            for view in &views {
                out.push_str(&format!("query {} -> {}\n", view.from, view.to));
                if let Some(path) = &view.result {
                    push_path_text(&mut out, path);
                }
                if let Some(error) = &view.error {
                    out.push_str(&format!("error: {error}\n"));
                }
            }
            Ok(out)
        }
    }
}
