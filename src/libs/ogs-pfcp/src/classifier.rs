//! Grouped IE classification
//!
//! Whether an IE payload is a sequence of child IEs is not encoded on the
//! wire. The decoder asks a [`GroupedIeClassifier`] instead. A process-wide
//! instance backs [`Ie::parse`](crate::ie::Ie::parse); independent instances
//! can be passed to [`Ie::parse_with`](crate::ie::Ie::parse_with) so that
//! different decoders do not share configuration.
//!
//! Changing the classification while another thread is decoding a buffer
//! leaves the nesting of that buffer unspecified: each lookup sees whatever
//! is installed at that moment.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ie_type::{self, DEFAULT_GROUPED};

/// Custom grouped predicate. Receives the full type code, vendor bit included.
pub type GroupedFn = Arc<dyn Fn(u16) -> bool + Send + Sync>;

struct ClassifierState {
    table: HashSet<u16>,
    strategy: Option<GroupedFn>,
}

/// Table of grouped IE types plus an optional overriding predicate
pub struct GroupedIeClassifier {
    state: RwLock<ClassifierState>,
}

static GLOBAL_CLASSIFIER: OnceLock<GroupedIeClassifier> = OnceLock::new();

/// Type registered in the global classifier by the unit tests. Property test
/// generators never produce it.
#[cfg(test)]
pub(crate) const GLOBAL_TEST_GROUPED_TYPE: u16 = 0x7ff0;

impl GroupedIeClassifier {
    /// Classifier seeded with the TS 29.244 grouped types
    pub fn new() -> Self {
        Self::with_types(DEFAULT_GROUPED.iter().copied())
    }

    /// Classifier that treats every type as scalar until types are added
    pub fn empty() -> Self {
        Self::with_types(std::iter::empty())
    }

    fn with_types(types: impl IntoIterator<Item = u16>) -> Self {
        Self {
            state: RwLock::new(ClassifierState {
                table: types.into_iter().map(ie_type::base_type).collect(),
                strategy: None,
            }),
        }
    }

    /// Process-wide classifier used by the plain parse functions
    pub fn global() -> &'static GroupedIeClassifier {
        GLOBAL_CLASSIFIER.get_or_init(GroupedIeClassifier::new)
    }

    // The guarded state is valid after any panic, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, ClassifierState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ClassifierState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether IEs of this type carry child IEs.
    ///
    /// Without a custom strategy the vendor-specific bit is cleared before the
    /// table lookup, so vendor IEs follow their 3GPP base type.
    ///
    /// The strategy runs after the lock is released, so it may itself query
    /// or reconfigure this classifier.
    pub fn is_grouped(&self, ie_type: u16) -> bool {
        let strategy = {
            let state = self.read();
            match &state.strategy {
                Some(strategy) => Arc::clone(strategy),
                None => return state.table.contains(&ie_type::base_type(ie_type)),
            }
        };
        strategy(ie_type)
    }

    /// Add types to the table. Adding a type twice is the same as adding it once.
    pub fn add_grouped_types(&self, types: &[u16]) {
        let mut state = self.write();
        for t in types {
            if state.table.insert(ie_type::base_type(*t)) {
                log::debug!("Registered grouped IE type {}", ie_type::base_type(*t));
            }
        }
    }

    /// Replace the classification entirely with `strategy`
    pub fn set_strategy<F>(&self, strategy: F)
    where
        F: Fn(u16) -> bool + Send + Sync + 'static,
    {
        self.write().strategy = Some(Arc::new(strategy));
        log::warn!("Grouped IE classifier strategy replaced; the type table is bypassed");
    }

    /// Drop a custom strategy and go back to the table
    pub fn reset_strategy(&self) {
        self.write().strategy = None;
    }

    /// Whether a custom strategy is installed
    pub fn has_strategy(&self) -> bool {
        self.read().strategy.is_some()
    }
}

impl Default for GroupedIeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GroupedIeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("GroupedIeClassifier")
            .field("table_len", &state.table.len())
            .field("custom_strategy", &state.strategy.is_some())
            .finish()
    }
}

/// Query the global classifier
pub fn is_grouped(ie_type: u16) -> bool {
    GroupedIeClassifier::global().is_grouped(ie_type)
}

/// Register additional grouped types (e.g. vendor containers) globally
pub fn add_grouped_ie_types(types: &[u16]) {
    GroupedIeClassifier::global().add_grouped_types(types);
}

/// Override the global classification with `strategy`
pub fn set_is_grouped_fn<F>(strategy: F)
where
    F: Fn(u16) -> bool + Send + Sync + 'static,
{
    GroupedIeClassifier::global().set_strategy(strategy);
}

/// Restore table-based classification globally
pub fn reset_is_grouped_fn() {
    GroupedIeClassifier::global().reset_strategy();
}
