//! Integration tests for the repeater-core load and save paths.
//!
//! These go through the public API only: the line reader feeding the
//! registry, and the registry's serialization written back out with the line
//! writer.

use repeater_core::{
    parse_str, write_lines, FileGate, GateError, IniReader, RepeaterSettings, SettingsRegistry,
};

/// Serializes `settings`, writes the lines to a buffer, reads them back and
/// applies them onto a fresh record.
fn roundtrip(settings: &RepeaterSettings) -> RepeaterSettings {
    let registry = SettingsRegistry::new();
    let mut buf = Vec::new();
    write_lines(&mut buf, registry.serialize(settings)).expect("write must succeed");

    let mut restored = RepeaterSettings::default();
    for entry in IniReader::new(buf.as_slice()) {
        let entry = entry.expect("read must succeed");
        registry.apply(&mut restored, &entry.key, &entry.value);
    }
    restored
}

/// A file as uploaded through the web interface of an older firmware, using
/// alias spellings, comments and odd spacing.
const LEGACY_UPLOAD: &str = "\
; ESP32 repeater settings
Callsign = YO3HJV
UserLockActive=yes
UseRssiMode=TRUE
RssiHthresh=-65
RssiLthresh = -85
FragmentTime=250
TimeOut=240
TailTime=4
MinimumPauseTimer=10
CWspeed=18
LcdI2cAddress=0x3F

# Debug Settings
debugCarrDetect=1
debugRssiDetect=0
DEBUG_LEVEL=2
FutureSetting=42
BeaconContentActive=VVV
lcdEnabled=1";

#[test]
fn test_default_settings_round_trip() {
    let original = RepeaterSettings::default();
    assert_eq!(roundtrip(&original), original);
}

#[test]
fn test_negative_and_hex_values_round_trip() {
    let original = RepeaterSettings {
        callsign: "W1AW".to_string(),
        rssi_high_threshold: -55,
        lcd_i2c_address: -1,
        debug_level: i32::MAX,
        beacon_end_locked: "SK".to_string(),
        ..Default::default()
    };
    assert_eq!(roundtrip(&original), original);
}

#[test]
fn test_legacy_upload_applies_aliases() {
    // Arrange
    let registry = SettingsRegistry::new();
    let mut settings = RepeaterSettings::default();

    // Act
    let applied = parse_str(LEGACY_UPLOAD)
        .iter()
        .filter(|e| registry.apply(&mut settings, &e.key, &e.value).is_set())
        .count();

    // Assert
    assert_eq!(applied, 16, "only FutureSetting must be ignored");
    assert_eq!(settings.callsign, "YO3HJV");
    assert!(settings.user_lock_active);
    assert!(settings.use_rssi_mode);
    assert_eq!(settings.rssi_high_threshold, -65);
    assert_eq!(settings.rssi_low_threshold, -85);
    assert_eq!(settings.fragment_time, 250);
    assert_eq!(settings.timeout_time, 240);
    assert_eq!(settings.repeater_tail_time, 4);
    assert_eq!(settings.calm_down_time, 10);
    assert_eq!(settings.cw_speed, 18);
    assert_eq!(settings.lcd_i2c_address, 0x3f);
    assert!(settings.debug_carrier);
    assert!(!settings.debug_rssi);
    assert_eq!(settings.debug_level, 2);
    assert_eq!(settings.beacon_content_active, "VVV");
    assert!(settings.lcd_enabled);
}

#[test]
fn test_resaving_a_legacy_upload_uses_canonical_keys() {
    // Arrange
    let registry = SettingsRegistry::new();
    let mut settings = RepeaterSettings::default();
    for e in parse_str(LEGACY_UPLOAD) {
        registry.apply(&mut settings, &e.key, &e.value);
    }

    // Act
    let lines = registry.serialize(&settings);

    // Assert
    assert!(lines.contains(&"userLockActive=1".to_string()));
    assert!(lines.contains(&"fragTime=250".to_string()));
    assert!(lines.contains(&"DebugCarrier=1".to_string()));
    assert!(lines.contains(&"LcdI2cAddress=0x3f".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("FragmentTime=")));
    assert!(!lines.iter().any(|l| l.starts_with("FutureSetting=")));
}

#[test]
fn test_callsign_loaded_from_default_file_gates_the_next_load() {
    // A fresh device loads the bootstrap file, which sets the callsign; from
    // then on only the callsign's own file is accepted.
    let registry = SettingsRegistry::new();
    let mut settings = RepeaterSettings::default();
    assert!(FileGate::accept("/YO3HJV.ini", &settings.callsign).is_ok());

    registry.apply(&mut settings, "Callsign", "W1AW/M");

    assert!(FileGate::accept("/W1AW_M.ini", &settings.callsign).is_ok());
    assert!(matches!(
        FileGate::accept("/YO3HJV_ESP_Repeater.ini", &settings.callsign),
        Err(GateError::WrongIdentity { .. })
    ));
    assert!(matches!(
        FileGate::accept("/K1ABC.ini", &settings.callsign),
        Err(GateError::NameMismatch { .. })
    ));
}
