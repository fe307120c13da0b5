//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the counter store to Dart through an opaque handle.
//! - Flatten snapshots into plain DTOs with string IDs and `u32` colors.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - An ID string that does not parse is treated like a missing ID: the call
//!   is a silent no-op and creates return `None`.
//! - Every mutation is visible in the next `snapshot()` call.

use croche_core::theme::{is_palette_color as is_palette_color_inner, PALETTE};
use croche_core::{
    coerce_counter_value, core_version as core_version_inner,
    default_log_level as default_log_level_inner, init_logging as init_logging_inner,
    ping as ping_inner, ArgbColor, Counter, CounterObject, CounterStore, StoreConfig,
    StoreSnapshot,
};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Build-mode default for [`init_logging`]'s `level`.
///
/// # FFI contract
/// - Sync call; returns `debug` or `info`, never empty.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Recolor choices in picker order, as ARGB integers.
///
/// # FFI contract
/// - Sync call, pure; same nine entries on every call.
#[flutter_rust_bridge::frb(sync)]
pub fn color_palette() -> Vec<u32> {
    PALETTE.iter().map(|color| color.value()).collect()
}

/// Returns whether `color` is one of the recolor picker entries.
///
/// # FFI contract
/// - Sync call, pure; lets Dart highlight the current choice.
#[flutter_rust_bridge::frb(sync)]
pub fn is_palette_color(color: u32) -> bool {
    is_palette_color_inner(ArgbColor(color))
}

/// White or black, whichever reads better on `background`.
///
/// # FFI contract
/// - Sync call, pure; alpha of `background` is ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn contrast_text_color(background: u32) -> u32 {
    ArgbColor(background).contrast_text().value()
}

/// One counter row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterDto {
    pub id: String,
    pub label: String,
    pub value: i64,
    /// ARGB `0xAARRGGBB`.
    pub color: u32,
}

/// One object card with its counters in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterObjectDto {
    pub id: String,
    pub name: String,
    pub color: u32,
    pub counters: Vec<CounterDto>,
}

/// Full store view returned by [`CounterStoreHandle::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshotDto {
    /// Bumped once per applied mutation; compare to skip redundant redraws.
    pub version: u64,
    pub objects: Vec<CounterObjectDto>,
}

/// Rejected ID string at the FFI seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    Empty,
    Malformed(String),
}

impl Display for IdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "id must not be empty"),
            Self::Malformed(value) => write!(f, "id is not a valid uuid: `{value}`"),
        }
    }
}

impl Error for IdParseError {}

/// Parses an ID string received from Dart.
pub fn parse_id(raw: &str) -> Result<Uuid, IdParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdParseError::Empty);
    }
    Uuid::parse_str(trimmed).map_err(|_| IdParseError::Malformed(trimmed.to_string()))
}

/// Opaque handle to one counter store, owned by the Dart side.
///
/// Dart creates one at app start and passes it to every screen.
///
/// # FFI contract (all methods)
/// - Sync call, in-memory only; safe to call from the UI isolate.
/// - Never panics; unknown or malformed IDs are silent no-ops.
/// - A mutation is visible to the next `snapshot()` before the call returns.
#[flutter_rust_bridge::frb(opaque)]
pub struct CounterStoreHandle {
    store: Arc<CounterStore>,
}

impl CounterStoreHandle {
    /// Creates an empty store with default settings.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::from_store(Arc::new(CounterStore::new()))
    }

    /// Creates an empty store whose new counters start at `initial_counter_value`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn with_initial_value(initial_counter_value: i64) -> Self {
        Self::from_store(Arc::new(CounterStore::with_config(StoreConfig {
            initial_counter_value,
            ..StoreConfig::default()
        })))
    }

    /// Wraps a store already shared with other Rust consumers.
    #[flutter_rust_bridge::frb(ignore)]
    pub fn from_store(store: Arc<CounterStore>) -> Self {
        Self { store }
    }

    /// Value given to every counter created through this handle.
    #[flutter_rust_bridge::frb(sync)]
    pub fn initial_counter_value(&self) -> i64 {
        self.store.config().initial_counter_value
    }

    /// Full store view in display order.
    ///
    /// # FFI contract
    /// - Sync call; copies the whole object list (small by design).
    /// - Never fails; an empty store returns `version = 0` and no objects.
    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> StoreSnapshotDto {
        to_snapshot_dto(&self.store.snapshot())
    }

    /// Cheap change probe for redraw loops.
    ///
    /// # FFI contract
    /// - Sync call, no allocation.
    /// - Increases by one per applied mutation; unchanged after no-ops.
    #[flutter_rust_bridge::frb(sync)]
    pub fn version(&self) -> u64 {
        self.store.version()
    }

    /// Returns the snapshot only when it differs from `known_version`.
    ///
    /// # FFI contract
    /// - Sync call; returns `None` without copying when nothing changed.
    /// - Any `known_version` other than the current one yields `Some`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot_if_changed(&self, known_version: u64) -> Option<StoreSnapshotDto> {
        // Why: one snapshot read keeps version and payload consistent even if
        // another isolate mutates between the comparison and the copy.
        let snapshot = self.store.snapshot();
        (snapshot.version() != known_version).then(|| to_snapshot_dto(&snapshot))
    }

    /// Returns one object, or `None` when the ID is unknown or malformed.
    ///
    /// # FFI contract
    /// - Sync call, never panics.
    #[flutter_rust_bridge::frb(sync)]
    pub fn object(&self, object_id: String) -> Option<CounterObjectDto> {
        let object_id = resolve_id("object", &object_id)?;
        self.store.object(object_id).as_ref().map(to_object_dto)
    }

    /// Appends a new object and returns its ID.
    ///
    /// # FFI contract
    /// - Sync call, never panics.
    /// - Name is stored as given; empty names are accepted.
    #[flutter_rust_bridge::frb(sync)]
    pub fn create_object(&self, name: String) -> String {
        self.store.create_object(name).to_string()
    }

    /// # FFI contract
    /// - Sync call, never panics; no-op for unknown or malformed IDs.
    #[flutter_rust_bridge::frb(sync)]
    pub fn rename_object(&self, object_id: String, new_name: String) {
        if let Some(object_id) = resolve_id("rename_object", &object_id) {
            self.store.rename_object(object_id, new_name);
        }
    }

    /// Any ARGB value is stored; see [`is_palette_color`] for the picker set.
    ///
    /// # FFI contract
    /// - Sync call, never panics; no-op for unknown or malformed IDs.
    #[flutter_rust_bridge::frb(sync)]
    pub fn recolor_object(&self, object_id: String, new_color: u32) {
        if let Some(object_id) = resolve_id("recolor_object", &object_id) {
            self.store.recolor_object(object_id, ArgbColor(new_color));
        }
    }

    /// Removes the object together with its counters.
    ///
    /// # FFI contract
    /// - Sync call, never panics; no-op for unknown or malformed IDs.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_object(&self, object_id: String) {
        if let Some(object_id) = resolve_id("delete_object", &object_id) {
            self.store.delete_object(object_id);
        }
    }

    /// Returns the new counter ID, or `None` when the object is missing.
    ///
    /// # FFI contract
    /// - Sync call, never panics.
    /// - `None` also covers a malformed `object_id`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn create_counter(&self, object_id: String, label: String) -> Option<String> {
        let object_id = resolve_id("create_counter", &object_id)?;
        self.store
            .create_counter(object_id, label)
            .map(|counter_id| counter_id.to_string())
    }

    /// # FFI contract
    /// - Sync call, never panics; no-op unless both IDs resolve.
    #[flutter_rust_bridge::frb(sync)]
    pub fn rename_counter(&self, object_id: String, counter_id: String, new_label: String) {
        if let Some((object_id, counter_id)) =
            resolve_pair("rename_counter", &object_id, &counter_id)
        {
            self.store.rename_counter(object_id, counter_id, new_label);
        }
    }

    /// # FFI contract
    /// - Sync call, never panics; no-op unless both IDs resolve.
    #[flutter_rust_bridge::frb(sync)]
    pub fn recolor_counter(&self, object_id: String, counter_id: String, new_color: u32) {
        if let Some((object_id, counter_id)) =
            resolve_pair("recolor_counter", &object_id, &counter_id)
        {
            self.store
                .recolor_counter(object_id, counter_id, ArgbColor(new_color));
        }
    }

    /// # FFI contract
    /// - Sync call, never panics; no-op unless both IDs resolve.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_counter(&self, object_id: String, counter_id: String) {
        if let Some((object_id, counter_id)) =
            resolve_pair("delete_counter", &object_id, &counter_id)
        {
            self.store.delete_counter(object_id, counter_id);
        }
    }

    /// Sets the value directly; negative values are kept.
    ///
    /// # FFI contract
    /// - Sync call, never panics; no-op unless both IDs resolve.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_counter_value(&self, object_id: String, counter_id: String, new_value: i64) {
        if let Some((object_id, counter_id)) =
            resolve_pair("set_counter_value", &object_id, &counter_id)
        {
            self.store.set_counter_value(object_id, counter_id, new_value);
        }
    }

    /// Sets the value from raw dialog text; unreadable text becomes `0`.
    ///
    /// # FFI contract
    /// - Sync call, never panics; parse failures are not reported.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_counter_value_text(&self, object_id: String, counter_id: String, text: String) {
        // Why: coercion lives in core so every host applies the same rule.
        self.set_counter_value(object_id, counter_id, coerce_counter_value(&text));
    }

    /// # FFI contract
    /// - Sync call, never panics; no-op unless both IDs resolve.
    #[flutter_rust_bridge::frb(sync)]
    pub fn increment_counter(&self, object_id: String, counter_id: String) {
        if let Some((object_id, counter_id)) =
            resolve_pair("increment_counter", &object_id, &counter_id)
        {
            self.store.increment_counter(object_id, counter_id);
        }
    }

    /// No lower bound; values may go negative.
    ///
    /// # FFI contract
    /// - Sync call, never panics; no-op unless both IDs resolve.
    #[flutter_rust_bridge::frb(sync)]
    pub fn decrement_counter(&self, object_id: String, counter_id: String) {
        if let Some((object_id, counter_id)) =
            resolve_pair("decrement_counter", &object_id, &counter_id)
        {
            self.store.decrement_counter(object_id, counter_id);
        }
    }
}

impl Default for CounterStoreHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_id(op: &'static str, raw: &str) -> Option<Uuid> {
    match parse_id(raw) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!("event=ffi_call module=ffi status=noop op={op} reason=invalid_id error={err}");
            None
        }
    }
}

fn resolve_pair(op: &'static str, object_id: &str, counter_id: &str) -> Option<(Uuid, Uuid)> {
    Some((resolve_id(op, object_id)?, resolve_id(op, counter_id)?))
}

fn to_snapshot_dto(snapshot: &StoreSnapshot) -> StoreSnapshotDto {
    StoreSnapshotDto {
        version: snapshot.version(),
        objects: snapshot.objects().iter().map(to_object_dto).collect(),
    }
}

fn to_object_dto(object: &CounterObject) -> CounterObjectDto {
    CounterObjectDto {
        id: object.id.to_string(),
        name: object.name.clone(),
        color: object.color.value(),
        counters: object.counters.iter().map(to_counter_dto).collect(),
    }
}

fn to_counter_dto(counter: &Counter) -> CounterDto {
    CounterDto {
        id: counter.id.to_string(),
        label: counter.label.clone(),
        value: counter.value,
        color: counter.color.value(),
    }
}
