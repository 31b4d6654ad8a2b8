//! Rendering decoded scans for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use labscan_gs1::table::{definitions, lookup};
use labscan_gs1::{dated_identifier, format_for_display_with, validate_check_digit};
use labscan_model::{AiDefinition, CheckDigitError, DisplayOptions, ParsedBarcode};

/// AIs whose values end in a GS1 mod-10 check digit.
const CHECK_DIGIT_AIS: &[&str] = &["00", "01", "02"];

/// Check digit outcome for one AI value of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDigitVerdict {
    pub ai: String,
    pub result: Result<(), CheckDigitError>,
}

impl CheckDigitVerdict {
    pub fn describe(&self) -> String {
        match &self.result {
            Ok(()) => "check digit ok".to_string(),
            Err(error) => error.to_string(),
        }
    }
}

/// Validates the check digit of every GTIN/SSCC value present in `parsed`.
pub fn check_digit_verdicts(parsed: &ParsedBarcode) -> Vec<CheckDigitVerdict> {
    parsed
        .identifiers
        .iter()
        .filter(|(code, _)| CHECK_DIGIT_AIS.contains(code))
        .map(|(code, value)| CheckDigitVerdict {
            ai: code.to_string(),
            result: validate_check_digit(value),
        })
        .collect()
}

/// One row per recognized AI: code, name, raw value, interpretation.
pub fn scan_table(parsed: &ParsedBarcode, options: &DisplayOptions, check_digits: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("AI"),
        header_cell("Name"),
        header_cell("Value"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Center);
    }
    let verdicts = if check_digits {
        check_digit_verdicts(parsed)
    } else {
        Vec::new()
    };
    for (code, value) in parsed.identifiers.iter() {
        let name = lookup(code).map_or("-", |definition| definition.display_name);
        let mut notes = Vec::new();
        if let Some(date) = dated_identifier(parsed, code) {
            notes.push(options.render_date(date));
        } else if lookup(code).is_some_and(AiDefinition::is_date) {
            notes.push("invalid date".to_string());
        }
        let verdict = verdicts.iter().find(|verdict| verdict.ai == code);
        if let Some(verdict) = verdict {
            notes.push(verdict.describe());
        }
        let notes_cell = match verdict {
            Some(CheckDigitVerdict { result: Err(_), .. }) => {
                Cell::new(notes.join("; ")).fg(Color::Red)
            }
            _ if notes.is_empty() => dim_cell("-"),
            _ => Cell::new(notes.join("; ")),
        };
        table.add_row(vec![
            Cell::new(code).add_attribute(Attribute::Bold),
            Cell::new(name),
            Cell::new(value),
            notes_cell,
        ]);
    }
    table
}

/// The AI table as the decoder knows it.
pub fn ai_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("AI"),
        header_cell("Name"),
        header_cell("Length"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    for definition in definitions() {
        table.add_row(vec![
            Cell::new(definition.code).add_attribute(Attribute::Bold),
            Cell::new(definition.display_name),
            Cell::new(definition.length_rule),
            Cell::new(definition.value_kind),
        ]);
    }
    table
}

/// Single-line rendering, with check digit verdicts appended on request.
pub fn render_text(parsed: &ParsedBarcode, options: &DisplayOptions, check_digits: bool) -> String {
    let mut line = format_for_display_with(parsed, options);
    if check_digits {
        for verdict in check_digit_verdicts(parsed) {
            line.push_str(&format!(" [{}: {}]", verdict.ai, verdict.describe()));
        }
    }
    line
}

pub fn render_json(results: &[ParsedBarcode]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
