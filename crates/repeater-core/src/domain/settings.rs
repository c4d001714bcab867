//! The repeater controller's settings record.
//!
//! On the device these values are read by the carrier detector, the timers,
//! the tone generators, the CW beacon and the LCD driver.  Here they live in
//! one plain struct that callers own and pass by reference into the loader and
//! saver, so there is exactly one place that can hold a given value.
//!
//! Times are stored in the unit the firmware uses for that timer
//! (milliseconds for tone and pre-tone delays, seconds or minutes for the
//! longer repeater timers); the loader never rescales them.

use serde::Serialize;

/// Every value that an INI settings file can set.
///
/// `Default` yields the "nothing loaded yet" state: empty strings, `false`,
/// and `0`.  The firmware applies its own compiled-in values before loading a
/// file, so the zero state only matters for tools that start from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepeaterSettings {
    // ── Identity and operating mode ───────────────────────────────────────────
    /// Station callsign.  Also the identity that decides which settings file
    /// may be loaded (see [`crate::FileGate`]).
    pub callsign: String,
    /// Repeater is locked by the operator and only sends the locked beacon.
    pub user_lock_active: bool,
    /// Use RSSI thresholds instead of the carrier-detect line for squelch.
    pub use_rssi_mode: bool,
    /// Carrier-detect input is active high.
    pub carrier_active_high: bool,
    /// PTT output is active high.
    pub ptt_active_high: bool,

    // ── RSSI squelch ──────────────────────────────────────────────────────────
    /// RSSI level that opens the repeater.
    pub rssi_high_threshold: i32,
    /// RSSI level below which the repeater closes.
    pub rssi_low_threshold: i32,
    /// Number of RSSI samples averaged per reading.
    pub rssi_readings: i32,

    // ── Repeater timers ───────────────────────────────────────────────────────
    /// Anti-kerchunk time.
    pub anti_kerchunk_time: i32,
    pub hold_time: i32,
    /// Maximum gap that still counts as the same transmission.
    pub fragment_time: i32,
    /// Time-out timer.
    pub timeout_time: i32,
    pub repeater_tail_time: i32,
    /// Minimum pause after a time-out before the repeater re-opens.
    pub calm_down_time: i32,

    // ── Courtesy tone ─────────────────────────────────────────────────────────
    pub courtesy_enable: bool,
    pub courtesy_interval: i32,
    pub courtesy_tone_freq: i32,
    pub courtesy_tone_duration: i32,
    pub pre_time_courtesy: i32,

    // ── Tail tone ─────────────────────────────────────────────────────────────
    pub tail_tone_enable: bool,
    pub pre_time_tail: i32,
    pub tail_tone_freq: i32,
    pub tail_tone_duration: i32,

    // ── CW beacon ─────────────────────────────────────────────────────────────
    pub beacon_enable: bool,
    pub beacon_interval: i32,
    /// Beacon keying speed in words per minute.
    pub cw_speed: i32,
    /// Beacon tone frequency in Hz.
    pub cw_tone: i32,

    // ── GPIO and peripherals ──────────────────────────────────────────────────
    pub beacon_pin: i32,
    pub courtesy_pin: i32,
    pub tail_pin: i32,
    /// Hardware beacon output pin.
    pub hw_beacon_pin: i32,
    pub tx_led_pin: i32,
    /// 7-bit I2C address of the LCD backpack (commonly `0x27` or `0x3F`).
    pub lcd_i2c_address: i32,

    // ── Debug switches ────────────────────────────────────────────────────────
    pub debug_main: bool,
    pub debug_carrier: bool,
    pub debug_rssi: bool,
    pub debug_beacon: bool,
    pub debug_courtesy: bool,
    pub debug_tot: bool,
    pub debug_lcd: bool,
    /// Global log verbosity of the firmware serial console.
    pub debug_level: i32,

    // ── Beacon content (older files) ──────────────────────────────────────────
    pub beacon_content_active: String,
    pub beacon_content_locked: String,
    pub beacon_end_active: String,
    pub beacon_end_locked: String,
    pub beacon_content_active_enabled: bool,
    pub beacon_content_locked_enabled: bool,
    pub beacon_end_active_enabled: bool,
    pub beacon_end_locked_enabled: bool,
    /// Text appended to the tail announcement.
    pub tail_info: String,
    pub lcd_enabled: bool,
}

impl RepeaterSettings {
    /// Creates a record in the "nothing loaded" state.
    pub fn new() -> Self {
        Self::default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
