//! Output rendering (table, JSON, CSV, YAML, ids).
//!
//! Rendering targets any `io::Write`, so commands hand over a locked
//! stdout and tests assert on byte buffers.

mod rows;

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use rows::Tabular;

/// Output format selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Padded plain-text table (default).
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// YAML documents.
    Yaml,
    /// One identifier per line.
    Ids,
}

/// Maximum cell width in table output before truncation.
const MAX_CELL_WIDTH: usize = 40;

/// Renders decoded resources in the selected format.
#[derive(Debug)]
pub struct Formatter {
    format: OutputFormat,
    fields: Vec<String>,
}

impl Formatter {
    /// Creates a formatter. `ids_only` forces the `ids` format
    /// regardless of `format`.
    #[must_use]
    pub fn new(format: OutputFormat, ids_only: bool, fields: Vec<String>) -> Self {
        let format = if ids_only { OutputFormat::Ids } else { format };
        Self { format, fields }
    }

    /// Renders a list of resources.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    pub fn listing<T, W>(&self, out: &mut W, items: &[T]) -> Result<()>
    where
        T: Tabular + Serialize,
        W: Write,
    {
        if items.is_empty() {
            writeln!(out, "No {} found", T::plural())?;
            return Ok(());
        }

        match self.format {
            OutputFormat::Table => self.render_table(out, items),
            OutputFormat::Json => render_json(out, &items),
            OutputFormat::Csv => self.render_csv(out, items),
            OutputFormat::Yaml => render_yaml(out, &items),
            OutputFormat::Ids => render_ids(out, items),
        }
    }

    /// Renders a single resource as a detail view.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    pub fn detail<T, W>(&self, out: &mut W, item: &T) -> Result<()>
    where
        T: Tabular + Serialize,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => render_json(out, item),
            OutputFormat::Yaml => render_yaml(out, item),
            OutputFormat::Ids => Ok(writeln!(out, "{}", item.id())?),
            OutputFormat::Table | OutputFormat::Csv => {
                writeln!(out, "{} Details", T::label())?;
                writeln!(out, "{}", "─".repeat(50))?;
                for (name, value) in item.detail() {
                    writeln!(out, "{name}: {value}")?;
                }
                Ok(())
            }
        }
    }

    /// Column indices to render, honouring `--fields` selection.
    ///
    /// Matching is case-insensitive against header names; when nothing
    /// matches, every column is kept.
    fn selected_columns(&self, headers: &[&str]) -> Vec<usize> {
        if self.fields.is_empty() {
            return (0..headers.len()).collect();
        }

        let selected: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, header)| {
                self.fields
                    .iter()
                    .any(|field| field.eq_ignore_ascii_case(header))
            })
            .map(|(index, _)| index)
            .collect();

        if selected.is_empty() {
            (0..headers.len()).collect()
        } else {
            selected
        }
    }

    fn render_table<T, W>(&self, out: &mut W, items: &[T]) -> Result<()>
    where
        T: Tabular,
        W: Write,
    {
        let headers = T::headers();
        let columns = self.selected_columns(headers);

        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                let cells = item.row();
                columns
                    .iter()
                    .map(|&column| truncate(cells.get(column).map_or("", String::as_str)))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = columns
            .iter()
            .map(|&column| headers.get(column).map_or(0, |h| h.chars().count()))
            .collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header_cells: Vec<&str> = columns
            .iter()
            .map(|&column| headers.get(column).copied().unwrap_or(""))
            .collect();
        write_row(out, &header_cells, &widths)?;

        let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        let rule_cells: Vec<&str> = rule.iter().map(String::as_str).collect();
        write_row(out, &rule_cells, &widths)?;

        for row in &rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            write_row(out, &cells, &widths)?;
        }
        Ok(())
    }

    fn render_csv<T, W>(&self, out: &mut W, items: &[T]) -> Result<()>
    where
        T: Tabular,
        W: Write,
    {
        let headers = T::headers();
        let columns = self.selected_columns(headers);

        let mut writer = csv::Writer::from_writer(&mut *out);

        let header_cells: Vec<&str> = columns
            .iter()
            .map(|&column| headers.get(column).copied().unwrap_or(""))
            .collect();
        writer
            .write_record(&header_cells)
            .context("failed to write CSV header")?;

        for item in items {
            let cells = item.row();
            let selected: Vec<&str> = columns
                .iter()
                .map(|&column| cells.get(column).map_or("", String::as_str))
                .collect();
            writer
                .write_record(&selected)
                .context("failed to write CSV row")?;
        }
        writer.flush().context("failed to flush CSV output")?;
        Ok(())
    }
}

/// Writes one padded table row.
fn write_row<W: Write>(out: &mut W, cells: &[&str], widths: &[usize]) -> Result<()> {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let padding = width.saturating_sub(cell.chars().count());
        for _ in 0..padding {
            line.push(' ');
        }
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Truncates a cell to the table width limit, appending `...`.
fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_WIDTH {
        return String::from(value);
    }
    let kept: String = value.chars().take(MAX_CELL_WIDTH.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize JSON")?;
    writeln!(out)?;
    Ok(())
}

fn render_yaml<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_yaml::to_writer(&mut *out, value).context("failed to serialize YAML")?;
    Ok(())
}

fn render_ids<W: Write, T: Tabular>(out: &mut W, items: &[T]) -> Result<()> {
    for item in items {
        writeln!(out, "{}", item.id())?;
    }
    Ok(())
}
