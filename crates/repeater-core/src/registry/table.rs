//! The table of every recognized settings key.
//!
//! # How this table works
//!
//! `SETTING_TABLE` is a compile-time array of [`SettingRecord`]s, one per
//! field of [`RepeaterSettings`].  Each record names the canonical key, the
//! other spellings older files use, the value kind, and a pair of accessor
//! functions for the field.
//!
//! The array order is the file order: serializing walks it front to back, so
//! a saved file lists keys exactly as the device's download template does.
//! Loading builds a key → record index over the same array.  Adding a setting
//! means adding one line here and one field to the struct.

use crate::domain::settings::RepeaterSettings;

/// How a setting's text is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `1`/`0` on output; `1`, `true`, `yes` on input.
    Bool,
    /// Decimal integer.
    Int,
    /// Integer written as `0x` hex; decimal also accepted on input.
    HexInt,
    /// Verbatim text.
    Text,
}

/// Block of the file a setting is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Main block, no header.
    General,
    /// Switches from the device's debug page.
    Debug,
    /// Beacon-content fields kept for older files.
    Legacy,
}

impl Section {
    /// Comment line written before the section's first key, if any.
    pub fn header(self) -> Option<&'static str> {
        match self {
            Section::General => None,
            Section::Debug => Some("# Debug Settings"),
            Section::Legacy => Some("# Legacy Settings"),
        }
    }
}

/// Typed access to one field of [`RepeaterSettings`].
#[derive(Clone, Copy)]
pub enum Slot {
    Bool {
        get: fn(&RepeaterSettings) -> &bool,
        get_mut: fn(&mut RepeaterSettings) -> &mut bool,
    },
    Int {
        get: fn(&RepeaterSettings) -> &i32,
        get_mut: fn(&mut RepeaterSettings) -> &mut i32,
    },
    HexInt {
        get: fn(&RepeaterSettings) -> &i32,
        get_mut: fn(&mut RepeaterSettings) -> &mut i32,
    },
    Text {
        get: fn(&RepeaterSettings) -> &String,
        get_mut: fn(&mut RepeaterSettings) -> &mut String,
    },
}

impl Slot {
    pub fn kind(&self) -> ValueKind {
        match self {
            Slot::Bool { .. } => ValueKind::Bool,
            Slot::Int { .. } => ValueKind::Int,
            Slot::HexInt { .. } => ValueKind::HexInt,
            Slot::Text { .. } => ValueKind::Text,
        }
    }
}

/// One recognized key.
#[derive(Clone, Copy)]
pub struct SettingRecord {
    /// Name written on save.
    pub key: &'static str,
    /// Other names accepted on load.  Matching is exact, so case variants are
    /// listed one by one.
    pub aliases: &'static [&'static str],
    pub section: Section,
    pub slot: Slot,
}

impl SettingRecord {
    pub fn kind(&self) -> ValueKind {
        self.slot.kind()
    }

    /// The canonical key followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        std::iter::once(self.key).chain(aliases.iter().copied())
    }
}

impl std::fmt::Debug for SettingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingRecord")
            .field("key", &self.key)
            .field("aliases", &self.aliases)
            .field("section", &self.section)
            .field("kind", &self.kind())
            .finish()
    }
}

macro_rules! setting {
    ($key:literal $(| $alias:literal)*, $kind:ident, $section:ident, $field:ident) => {
        SettingRecord {
            key: $key,
            aliases: &[$($alias),*],
            section: Section::$section,
            slot: Slot::$kind {
                get: |s| &s.$field,
                get_mut: |s| &mut s.$field,
            },
        }
    };
}

/// Every recognized key, in file order.
pub static SETTING_TABLE: &[SettingRecord] = &[
    // ── General ───────────────────────────────────────────────────────────────
    setting!("Callsign", Text, General, callsign),
    setting!("userLockActive" | "UserLockActive", Bool, General, user_lock_active),
    setting!("useRssiMode" | "UseRssiMode", Bool, General, use_rssi_mode),
    setting!("CarrierActiveHigh", Bool, General, carrier_active_high),
    setting!("PttActiveHigh", Bool, General, ptt_active_high),
    setting!("RssiHthresh", Int, General, rssi_high_threshold),
    setting!("RssiLthresh", Int, General, rssi_low_threshold),
    setting!("RssiReadings", Int, General, rssi_readings),
    setting!("AKtime", Int, General, anti_kerchunk_time),
    setting!("HoldTime", Int, General, hold_time),
    setting!("fragTime" | "FragmentTime", Int, General, fragment_time),
    setting!("ToTime" | "TimeOut", Int, General, timeout_time),
    setting!("RepeaterTailTime" | "TailTime", Int, General, repeater_tail_time),
    setting!("calmDownTime" | "MinimumPauseTimer", Int, General, calm_down_time),
    setting!("CourtesyEnable", Bool, General, courtesy_enable),
    setting!("CourtesyInterval", Int, General, courtesy_interval),
    setting!("CourtesyToneFreq", Int, General, courtesy_tone_freq),
    setting!("CourtesyToneDur", Int, General, courtesy_tone_duration),
    setting!("PreTimeCourtesy", Int, General, pre_time_courtesy),
    setting!("TailToneEnable", Bool, General, tail_tone_enable),
    setting!("PreTimeTail", Int, General, pre_time_tail),
    setting!("TailToneFreq", Int, General, tail_tone_freq),
    setting!("TailToneDur", Int, General, tail_tone_duration),
    setting!("BeaconEnable", Bool, General, beacon_enable),
    setting!("BeacInterval", Int, General, beacon_interval),
    setting!("CWspeed", Int, General, cw_speed),
    setting!("CWtone", Int, General, cw_tone),
    setting!("BeaconPin", Int, General, beacon_pin),
    setting!("CourtesyPin", Int, General, courtesy_pin),
    setting!("TailPin", Int, General, tail_pin),
    setting!("HwBeacPin", Int, General, hw_beacon_pin),
    setting!("TxLedPin", Int, General, tx_led_pin),
    setting!("LcdI2cAddress", HexInt, General, lcd_i2c_address),
    // ── Debug ─────────────────────────────────────────────────────────────────
    setting!("DebugMain" | "debugMain", Bool, Debug, debug_main),
    setting!("DebugCarrier" | "debugCarrier" | "debugCarrDetect", Bool, Debug, debug_carrier),
    setting!("DebugRSSI" | "debugRSSI" | "debugRssiDetect", Bool, Debug, debug_rssi),
    setting!("DebugBeacon" | "debugBeacon", Bool, Debug, debug_beacon),
    setting!("DebugCourtesy" | "debugCourtesy", Bool, Debug, debug_courtesy),
    setting!("DebugTOT" | "debugTOT", Bool, Debug, debug_tot),
    setting!("DebugLCD" | "debugLCD", Bool, Debug, debug_lcd),
    setting!("DEBUG_LEVEL", Int, Debug, debug_level),
    // ── Legacy ────────────────────────────────────────────────────────────────
    setting!("BeaconContentActive", Text, Legacy, beacon_content_active),
    setting!("BeaconContentLocked", Text, Legacy, beacon_content_locked),
    setting!("BeaconEndActive", Text, Legacy, beacon_end_active),
    setting!("BeaconEndLocked", Text, Legacy, beacon_end_locked),
    setting!("BeaconContentActiveEnabled", Bool, Legacy, beacon_content_active_enabled),
    setting!("BeaconContentLockedEnabled", Bool, Legacy, beacon_content_locked_enabled),
    setting!("BeaconEndActiveEnabled", Bool, Legacy, beacon_end_active_enabled),
    setting!("BeaconEndLockedEnabled", Bool, Legacy, beacon_end_locked_enabled),
    setting!("TailInfo", Text, Legacy, tail_info),
    setting!("lcdEnabled", Bool, Legacy, lcd_enabled),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_name_is_unique_across_the_table() {
        let mut seen = HashSet::new();
        for record in SETTING_TABLE {
            for name in record.names() {
                assert!(seen.insert(name), "duplicate key or alias: {name}");
            }
        }
    }

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        // General, then Debug, then Legacy, never interleaved.
        let order: Vec<Section> = SETTING_TABLE.iter().map(|r| r.section).collect();
        let first_debug = order.iter().position(|s| *s == Section::Debug).unwrap();
        let first_legacy = order.iter().position(|s| *s == Section::Legacy).unwrap();
        assert!(order[..first_debug].iter().all(|s| *s == Section::General));
        assert!(order[first_debug..first_legacy]
            .iter()
            .all(|s| *s == Section::Debug));
        assert!(order[first_legacy..].iter().all(|s| *s == Section::Legacy));
    }

    #[test]
    fn test_table_counts_match_device_settings() {
        let count = |section| SETTING_TABLE.iter().filter(|r| r.section == section).count();
        assert_eq!(count(Section::General), 33);
        assert_eq!(count(Section::Debug), 8);
        assert_eq!(count(Section::Legacy), 10);
    }

    #[test]
    fn test_only_lcd_address_is_hex() {
        let hex: Vec<_> = SETTING_TABLE
            .iter()
            .filter(|r| r.kind() == ValueKind::HexInt)
            .map(|r| r.key)
            .collect();
        assert_eq!(hex, vec!["LcdI2cAddress"]);
    }

    #[test]
    fn test_gpio_pins_are_integers() {
        for key in ["BeaconPin", "CourtesyPin", "TailPin", "HwBeacPin", "TxLedPin"] {
            let record = SETTING_TABLE.iter().find(|r| r.key == key).unwrap();
            assert_eq!(record.kind(), ValueKind::Int, "{key}");
        }
    }

    #[test]
    fn test_accessors_address_distinct_fields() {
        // Writing through each record must change the record it reads back
        // and no other, otherwise two keys share one field.
        for (i, record) in SETTING_TABLE.iter().enumerate() {
            let mut settings = RepeaterSettings::default();
            match record.slot {
                Slot::Bool { get_mut, .. } => *get_mut(&mut settings) = true,
                Slot::Int { get_mut, .. } | Slot::HexInt { get_mut, .. } => {
                    *get_mut(&mut settings) = 7
                }
                Slot::Text { get_mut, .. } => *get_mut(&mut settings) = "x".to_string(),
            }
            assert_ne!(settings, RepeaterSettings::default(), "{}", record.key);
            for (j, other) in SETTING_TABLE.iter().enumerate() {
                if i == j {
                    continue;
                }
                let untouched = match other.slot {
                    Slot::Bool { get, .. } => !*get(&settings),
                    Slot::Int { get, .. } | Slot::HexInt { get, .. } => *get(&settings) == 0,
                    Slot::Text { get, .. } => get(&settings).is_empty(),
                };
                assert!(untouched, "{} also changed {}", record.key, other.key);
            }
        }
    }

    #[test]
    fn test_debug_section_has_header() {
        assert_eq!(Section::Debug.header(), Some("# Debug Settings"));
        assert_eq!(Section::General.header(), None);
    }
}
