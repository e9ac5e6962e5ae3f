//! Tag records and tag sinks.
//!
//! The scanner pushes every recognized entity into a [TagSink] supplied by
//! the driver.  [TagStore] is the sink used for testing: it stores emitted
//! tags in a vector for later comparison with golden tag lists.

use crate::kind::{Kind, KindSet};
use crate::lang::Lang;
use std::cell::RefCell;

/// An emitted tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Entity name, or the full dotted path for qualified re-emissions.
    pub name: String,
    pub kind: Kind,
    /// Line number, 1-based.
    pub line: usize,
    /// Byte position within the scanned chunk.
    pub pos: usize,
    /// Enclosing scope kind and full dotted name, absent at file scope.
    pub scope: Option<(Kind, String)>,
    /// Base class name, for classes declared with `extends`.
    pub inheritance: Option<String>,
    /// The tag names a parameter whose value can be overridden.
    pub parameter: bool,
    /// This is the extra fully-qualified emission of a tag.
    pub qualified: bool,
}

/// A consumer of [Tag]s.  Tags arrive in recognition order: roughly source
/// order, with children after their containers.
pub trait TagSink {
    fn emit(&self, tag: Tag);
}

/// A [TagSink] that stores all emitted tags in a vector.  Can be converted
/// to [`Vec<Tag>`].
pub struct TagStore {
    storage: RefCell<Vec<Tag>>,
}

impl TagStore {
    /// Creates a new empty tag store.
    pub fn new() -> Self {
        TagStore {
            storage: RefCell::new(Vec::new()),
        }
    }

    /// Consumes the sink and converts it into a vector of [Tag].
    pub fn into_vec(self) -> Vec<Tag> {
        self.storage.into_inner()
    }
}

impl Default for TagStore {
    fn default() -> Self {
        TagStore::new()
    }
}

impl TagSink for TagStore {
    fn emit(&self, tag: Tag) {
        self.storage.borrow_mut().push(tag);
    }
}

impl From<TagStore> for Vec<Tag> {
    fn from(src: TagStore) -> Vec<Tag> {
        src.storage.into_inner()
    }
}

/// Host-controlled scan options.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Emit a second, fully qualified tag for every tag in a scope.
    pub qualified_tags: bool,
    /// The tag kinds that may be emitted.
    pub enabled: KindSet,
    /// Attach the overridable-parameter field to printed output.
    pub parameter_field: bool,
}

impl ScanOptions {
    /// Default options for a language: every kind its table enables, no
    /// extras, no extra fields.
    pub fn new(lang: Lang) -> Self {
        ScanOptions {
            qualified_tags: false,
            enabled: KindSet::default_for(lang),
            parameter_field: false,
        }
    }

    pub fn kind_enabled(&self, kind: Kind) -> bool {
        self.enabled.contains(kind)
    }
}
