//! Recording injection sink for tests and dry runs.
//!
//! `RecordingSink` answers every OS query from fixed, configurable values and
//! stores each submitted batch in memory instead of injecting it, so tests can
//! assert on exactly what would have reached the OS and in what order.
//!
//! # Simulating failures
//!
//! [`RecordingSink::with_accept_limit`] caps how many records a single
//! `send_input` call accepts, which is how a short count from the OS looks.
//! [`RecordingSink::with_error_code`] sets what `last_error_code` reports
//! afterwards.
//!
//! # Usage in tests
//!
//! ```ignore
//! let mut input = InputBuilder::new(RecordingSink::new());
//! input.type_str("ok").submit()?;
//! assert_eq!(input.sink().delivered().len(), 4);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use input_synth_core::{DisplayGeometry, InputRecord, ScreenSpace};

use crate::application::sink::InjectionSink;

/// In-memory sink that records batches instead of injecting them.
pub struct RecordingSink {
    /// Every `send_input` call, in call order, truncated to what was accepted.
    pub batches: Mutex<Vec<Vec<InputRecord>>>,
    /// Cursor position; `None` makes the cursor query fail.
    pub cursor: Mutex<Option<(i32, i32)>>,
    /// Whether physical input is currently blocked.
    pub blocked: Mutex<bool>,
    primary: DisplayGeometry,
    virtual_desktop: DisplayGeometry,
    scan_codes: HashMap<u16, u16>,
    key_states: HashMap<u16, i16>,
    extra_info: usize,
    accept_limit: Option<u32>,
    error_code: u32,
    allow_block: bool,
    marker_queries: AtomicUsize,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    /// A single 1920×1080 display, cursor at the origin, every record accepted.
    pub fn new() -> Self {
        let full_hd = DisplayGeometry::sized(1920, 1080);
        Self {
            batches: Mutex::new(Vec::new()),
            cursor: Mutex::new(Some((0, 0))),
            blocked: Mutex::new(false),
            primary: full_hd,
            virtual_desktop: full_hd,
            scan_codes: HashMap::new(),
            key_states: HashMap::new(),
            extra_info: 0,
            accept_limit: None,
            error_code: 0,
            allow_block: true,
            marker_queries: AtomicUsize::new(0),
        }
    }

    /// Sets the primary display size (and the virtual desktop, if it has not
    /// been set separately, to the same rectangle).
    pub fn with_display(mut self, width: i32, height: i32) -> Self {
        let same = self.virtual_desktop == self.primary;
        self.primary = DisplayGeometry::sized(width, height);
        if same {
            self.virtual_desktop = self.primary;
        }
        self
    }

    pub fn with_virtual_desktop(mut self, geometry: DisplayGeometry) -> Self {
        self.virtual_desktop = geometry;
        self
    }

    /// Layout translation for `virtual_key`; unmapped keys translate to 0.
    pub fn with_scan_code(mut self, virtual_key: u16, scan_code: u16) -> Self {
        self.scan_codes.insert(virtual_key, scan_code);
        self
    }

    pub fn with_key_state(mut self, virtual_key: u16, raw: i16) -> Self {
        self.key_states.insert(virtual_key, raw);
        self
    }

    pub fn with_extra_info(mut self, marker: usize) -> Self {
        self.extra_info = marker;
        self
    }

    /// Accept at most `limit` records per `send_input` call.
    pub fn with_accept_limit(mut self, limit: u32) -> Self {
        self.accept_limit = Some(limit);
        self
    }

    pub fn with_error_code(mut self, code: u32) -> Self {
        self.error_code = code;
        self
    }

    /// Makes `block_input` report refusal.
    pub fn deny_block_input(mut self) -> Self {
        self.allow_block = false;
        self
    }

    /// Every accepted record across all batches, in delivery order.
    pub fn delivered(&self) -> Vec<InputRecord> {
        self.batches
            .lock()
            .unwrap()
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    /// Number of `send_input` calls made so far.
    pub fn batch_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    /// Number of times the synthetic-input marker was queried.
    pub fn marker_queries(&self) -> usize {
        self.marker_queries.load(Ordering::Relaxed)
    }
}

impl InjectionSink for RecordingSink {
    fn send_input(&self, records: &[InputRecord]) -> u32 {
        let total = u32::try_from(records.len()).unwrap_or(u32::MAX);
        let accepted = self.accept_limit.map_or(total, |limit| limit.min(total));
        self.batches
            .lock()
            .unwrap()
            .push(records[..accepted as usize].to_vec());
        accepted
    }

    fn map_virtual_key_to_scan_code(&self, virtual_key: u16) -> u16 {
        self.scan_codes.get(&virtual_key).copied().unwrap_or(0)
    }

    fn message_extra_info(&self) -> usize {
        self.marker_queries.fetch_add(1, Ordering::Relaxed);
        self.extra_info
    }

    fn display_geometry(&self, space: ScreenSpace) -> DisplayGeometry {
        match space {
            ScreenSpace::Primary => self.primary,
            ScreenSpace::VirtualDesktop => self.virtual_desktop,
        }
    }

    fn cursor_position(&self) -> Option<(i32, i32)> {
        *self.cursor.lock().unwrap()
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> bool {
        *self.cursor.lock().unwrap() = Some((x, y));
        true
    }

    fn last_error_code(&self) -> u32 {
        self.error_code
    }

    fn key_state(&self, virtual_key: u16) -> i16 {
        self.key_states.get(&virtual_key).copied().unwrap_or(0)
    }

    fn block_input(&self, block: bool) -> bool {
        if !self.allow_block {
            return false;
        }
        *self.blocked.lock().unwrap() = block;
        true
    }
}
