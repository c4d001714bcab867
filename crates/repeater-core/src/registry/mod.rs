//! Mapping between settings-file keys and [`RepeaterSettings`] fields.
//!
//! [`SettingsRegistry`] is the only code that knows which key sets which
//! field.  It works in both directions over the same table:
//!
//! - [`SettingsRegistry::apply`] takes one `key=value` pair from a loaded file,
//!   converts the text and stores it.  Unknown keys are ignored so that files
//!   written by newer firmware still load.
//! - [`SettingsRegistry::serialize`] renders the current settings as the
//!   canonical file, one line per key in table order.

pub mod coerce;
pub mod table;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::settings::RepeaterSettings;

pub use table::{Section, SettingRecord, Slot, ValueKind, SETTING_TABLE};

/// Outcome of applying one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The pair matched a record; carries the canonical key.
    Set { key: &'static str },
    /// The key is not recognized; nothing changed.
    Ignored,
}

impl Applied {
    pub fn is_set(&self) -> bool {
        matches!(self, Applied::Set { .. })
    }
}

/// Key and alias lookup over [`SETTING_TABLE`].
///
/// Build once and reuse; the index is immutable after construction.
#[derive(Debug, Clone)]
pub struct SettingsRegistry {
    records: &'static [SettingRecord],
    index: HashMap<&'static str, usize>,
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRegistry {
    /// Builds the key and alias index over the full setting table.
    pub fn new() -> Self {
        let index = SETTING_TABLE
            .iter()
            .enumerate()
            .flat_map(|(i, record)| record.names().map(move |name| (name, i)))
            .collect();
        Self {
            records: SETTING_TABLE,
            index,
        }
    }

    /// Finds the record for `key` or one of its aliases.  Case-sensitive.
    pub fn lookup(&self, key: &str) -> Option<&'static SettingRecord> {
        let records = self.records;
        self.index.get(key).map(|&i| &records[i])
    }

    /// All records in file order.
    pub fn records(&self) -> impl Iterator<Item = &'static SettingRecord> {
        let records: &'static [SettingRecord] = self.records;
        records.iter()
    }

    /// Canonical keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.records().map(|r| r.key)
    }

    /// Converts `value` and stores it in the field named by `key`.
    ///
    /// Never fails: unrecognized keys are ignored, unparseable numbers become
    /// `0` and unrecognized booleans become `false`.
    pub fn apply(&self, settings: &mut RepeaterSettings, key: &str, value: &str) -> Applied {
        let Some(record) = self.lookup(key) else {
            debug!("ignoring unknown setting {key}");
            return Applied::Ignored;
        };

        info!("Setting {key} = {value}");
        match record.slot {
            Slot::Bool { get_mut, .. } => *get_mut(settings) = coerce::parse_bool(value),
            Slot::Int { get_mut, .. } => *get_mut(settings) = coerce::parse_int(value),
            Slot::HexInt { get_mut, .. } => *get_mut(settings) = coerce::parse_hex_int(value),
            Slot::Text { get_mut, .. } => *get_mut(settings) = value.to_string(),
        }
        Applied::Set { key: record.key }
    }

    /// Renders one record's current value as file text.
    ///
    /// Line breaks inside text values are flattened to spaces.
    pub fn format_value(record: &SettingRecord, settings: &RepeaterSettings) -> String {
        match record.slot {
            Slot::Bool { get, .. } => coerce::format_bool(*get(settings)).to_string(),
            Slot::Int { get, .. } => get(settings).to_string(),
            Slot::HexInt { get, .. } => coerce::format_hex_int(*get(settings)),
            Slot::Text { get, .. } => coerce::format_text(get(settings)),
        }
    }

    /// Renders every setting as canonical file lines (without newlines).
    ///
    /// Each section after the first is preceded by a blank line and its
    /// header comment.
    pub fn serialize(&self, settings: &RepeaterSettings) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.records.len() + 4);
        let mut current = Section::General;
        for record in self.records {
            if record.section != current {
                current = record.section;
                if let Some(header) = current.header() {
                    lines.push(String::new());
                    lines.push(header.to_string());
                }
            }
            lines.push(format!(
                "{}={}",
                record.key,
                Self::format_value(record, settings)
            ));
        }
        lines
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
