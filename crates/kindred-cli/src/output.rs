//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kindred_domain::{Member, MemberId};
use kindred_engine::RelationshipDetection;
use std::collections::HashMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a detection result.
    ///
    /// `names` maps member ids to display names; ids without a name are shown as-is.
    pub fn format_detection(
        &self,
        detection: &RelationshipDetection,
        names: &HashMap<MemberId, String>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(detection)?),
            OutputFormat::Table => Ok(self.format_detection_table(detection, names)),
            OutputFormat::Quiet => Ok(format!(
                "{}\n{}",
                detection.from_a_to_b, detection.from_b_to_a
            )),
        }
    }

    fn format_detection_table(
        &self,
        detection: &RelationshipDetection,
        names: &HashMap<MemberId, String>,
    ) -> String {
        let path = if detection.path.is_empty() {
            self.colorize("no path", "yellow")
        } else {
            detection
                .path
                .iter()
                .map(|id| display_name(*id, names))
                .collect::<Vec<_>>()
                .join(" → ")
        };

        let mut builder = Builder::default();
        builder.push_record(["", "Relationship"]);
        builder.push_record(["A to B", &self.colorize(&detection.from_a_to_b, "green")]);
        builder.push_record(["B to A", &self.colorize(&detection.from_b_to_a, "green")]);
        builder.push_record(["Path", &path]);
        builder.push_record(["Edges", &detection.edges.join(", ")]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a member list.
    pub fn format_members(&self, members: &[Member]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_members: Vec<serde_json::Value> = members
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "id": m.id.to_string(),
                            "family_id": m.family_id.to_string(),
                            "name": m.name,
                            "gender": m.gender.as_str(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_members)?)
            }
            OutputFormat::Table => Ok(self.format_members_table(members)),
            OutputFormat::Quiet => {
                let ids: Vec<String> = members.iter().map(|m| m.id.to_string()).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    fn format_members_table(&self, members: &[Member]) -> String {
        if members.is_empty() {
            return self.colorize("No members found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Gender"]);
        for member in members {
            builder.push_record([
                member.id.to_string().as_str(),
                &member.name,
                member.gender.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format an import result.
    pub fn imported(&self, members: usize, relationships: usize) -> String {
        self.success(&format!(
            "Imported {} member(s) and {} relationship(s)",
            members, relationships
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn display_name(id: MemberId, names: &HashMap<MemberId, String>) -> String {
    match names.get(&id) {
        Some(name) if !name.is_empty() => name.clone(),
        _ => id.to_string(),
    }
}
