//! Construction, configuration and default implementations.
//!
//! This module contains the constructors for [`Bst`] and [`IndexEngine`] and
//! the [`EngineConfig`] that controls how last names are folded and how
//! prefix scans are closed.

use crate::engine::IndexEngine;
use crate::error::{IndexError, InitResult};
use crate::heap::RecordHeap;
use crate::metrics::ComparisonCounter;
use crate::types::{Bst, ASCII_PREFIX_SENTINEL, DEFAULT_PREFIX_SENTINEL};

// ============================================================================
// TREE CONSTRUCTION
// ============================================================================

impl<K, V> Bst<K, V> {
    /// Create an empty tree with a zeroed comparison counter.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstindex::Bst;
    ///
    /// let tree = Bst::<i32, usize>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.comparisons(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            counter: ComparisonCounter::new(),
        }
    }
}

impl<K, V> Default for Bst<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ENGINE CONFIGURATION
// ============================================================================

/// How last names are lowercased before they become name index keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFolding {
    /// Full Unicode lowercase mapping, applied one character at a time so a
    /// name and any of its prefixes fold the same way.
    #[default]
    Unicode,
    /// Lowercase ASCII letters only; other bytes are kept as is.
    Ascii,
}

impl CaseFolding {
    /// Fold `name` into its index key form.
    pub fn fold(self, name: &str) -> String {
        match self {
            CaseFolding::Unicode => name.chars().flat_map(char::to_lowercase).collect(),
            CaseFolding::Ascii => name.to_ascii_lowercase(),
        }
    }
}

/// Settings for an [`IndexEngine`].
///
/// # Examples
///
/// ```
/// use bstindex::{CaseFolding, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_case_folding(CaseFolding::Ascii)
///     .with_prefix_sentinel('~');
/// assert!(config.validate().is_ok());
///
/// assert!(EngineConfig::default().with_prefix_sentinel('a').validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Appended to a folded prefix to form the exclusive upper bound of a
    /// prefix scan. Must sort after every character that can follow the
    /// prefix in a stored name.
    pub prefix_sentinel: char,
    pub case_folding: CaseFolding,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prefix_sentinel: DEFAULT_PREFIX_SENTINEL,
            case_folding: CaseFolding::Unicode,
        }
    }
}

impl EngineConfig {
    /// ASCII folding closed by `'{'`, the character right after `'z'`.
    ///
    /// Names containing characters above `'{'` after the prefix are not
    /// matched under this configuration.
    pub fn ascii() -> Self {
        Self {
            prefix_sentinel: ASCII_PREFIX_SENTINEL,
            case_folding: CaseFolding::Ascii,
        }
    }

    pub fn with_prefix_sentinel(mut self, sentinel: char) -> Self {
        self.prefix_sentinel = sentinel;
        self
    }

    pub fn with_case_folding(mut self, case_folding: CaseFolding) -> Self {
        self.case_folding = case_folding;
        self
    }

    /// Check that the sentinel sorts after every lowercase ASCII letter.
    pub fn validate(&self) -> InitResult<()> {
        if self.prefix_sentinel <= 'z' {
            return Err(IndexError::invalid_config(
                "prefix_sentinel",
                &format!(
                    "{:?} does not sort after 'z'; prefix scans would drop names",
                    self.prefix_sentinel
                ),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// ENGINE CONSTRUCTION
// ============================================================================

impl IndexEngine {
    /// Create an engine with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstindex::IndexEngine;
    ///
    /// let engine = IndexEngine::new();
    /// assert!(engine.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Create an engine with a validated configuration.
    pub fn with_config(config: EngineConfig) -> InitResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            heap: RecordHeap::new(),
            id_index: Bst::new(),
            last_index: Bst::new(),
            config,
        }
    }
}

impl Default for IndexEngine {
    fn default() -> Self {
        Self::new()
    }
}
