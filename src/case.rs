//! Case-side types: the items a case body yields, the arguments it receives,
//! and the function shapes the adapters compose over.
//!
//! A case body is modeled as a function returning a finite, lazy, one-shot
//! stream of [`CaseItem`]s. Side effects and assertions run while the stream
//! is drained, so a case "asserts via execution" whether or not its yielded
//! data is collected.

use std::sync::Arc;

use im::HashMap;

use crate::errors::VectorError;
use crate::record::OutputRecord;
use crate::value::{Encodable, TypeDescriptor, Value};

/// Declared-name prefix stripped when deriving a description from a case name.
pub const CASE_PREFIX: &str = "test_";

/// Selects what happens to the items a case yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Drain the case for its side effects; no record is produced.
    #[default]
    Plain,
    /// Collect yielded items into a fixture record.
    Generator,
}

/// A value carried by a bare item.
#[derive(Debug, Clone)]
pub enum CaseValue {
    /// Stored in the record untouched.
    Plain(Value),
    /// Carries its own schema; encoded with that schema's descriptor.
    Schema(Arc<dyn Encodable>),
}

impl From<Value> for CaseValue {
    fn from(value: Value) -> Self {
        CaseValue::Plain(value)
    }
}

impl From<Arc<dyn Encodable>> for CaseValue {
    fn from(value: Arc<dyn Encodable>) -> Self {
        CaseValue::Schema(value)
    }
}

/// One key/value entry yielded by a case body.
///
/// The two shapes the harness understands: an explicitly typed entry, encoded
/// with the given descriptor, and a bare entry, stored verbatim unless its
/// value carries its own schema.
#[derive(Debug, Clone)]
pub enum CaseItem {
    Typed {
        key: String,
        value: Value,
        descriptor: TypeDescriptor,
    },
    Bare {
        key: String,
        value: CaseValue,
    },
}

impl CaseItem {
    /// An entry encoded with an explicit schema descriptor.
    pub fn typed(
        key: impl Into<String>,
        value: impl Into<Value>,
        descriptor: impl Into<TypeDescriptor>,
    ) -> Self {
        CaseItem::Typed {
            key: key.into(),
            value: value.into(),
            descriptor: descriptor.into(),
        }
    }

    /// A bare entry stored in the record as-is.
    pub fn bare(key: impl Into<String>, value: impl Into<Value>) -> Self {
        CaseItem::Bare {
            key: key.into(),
            value: CaseValue::Plain(value.into()),
        }
    }

    /// A bare entry whose value knows its own schema.
    pub fn encodable(key: impl Into<String>, value: Arc<dyn Encodable>) -> Self {
        CaseItem::Bare {
            key: key.into(),
            value: CaseValue::Schema(value),
        }
    }

    /// The record key this item writes to.
    pub fn key(&self) -> &str {
        match self {
            CaseItem::Typed { key, .. } | CaseItem::Bare { key, .. } => key,
        }
    }
}

/// Arguments handed to a case body: ordered positional values plus named
/// values. The run mode is passed separately and never travels through here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseArgs {
    pub positional: Vec<Value>,
    pub named: HashMap<String, Value>,
}

impl CaseArgs {
    /// Arguments with only positional values.
    pub fn positional(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            named: HashMap::new(),
        }
    }

    /// Adds a named argument, builder-style.
    pub fn with_named(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    /// The positional argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// The named argument under `key`, if present.
    pub fn named(&self, key: &str) -> Option<&Value> {
        self.named.get(key)
    }

    /// A new argument set with `prefix` prepended to the positional values.
    /// `self` is left untouched; named arguments carry over unchanged.
    pub fn with_prefix(&self, prefix: Vec<Value>) -> Self {
        let mut positional = prefix;
        positional.extend(self.positional.iter().cloned());
        Self {
            positional,
            named: self.named.clone(),
        }
    }
}

/// The lazy, finite, one-shot stream of items a case body produces.
/// Mid-stream failures surface as `Err` items and abort the run.
pub type CaseStream = Box<dyn Iterator<Item = Result<CaseItem, VectorError>>>;

/// A generator-style case body, before adaptation.
pub type CaseFn = Box<dyn Fn(&CaseArgs) -> Result<CaseStream, VectorError>>;

/// A case adapted for harness invocation: explicit mode in, optional record out.
/// All three adapters produce this shape, which is what lets them stack.
pub type HarnessFn = Box<dyn Fn(&CaseArgs, RunMode) -> Result<Option<OutputRecord>, VectorError>>;

/// A provider of extra positional arguments, invoked fresh on every call.
pub type ArgsProvider = Box<dyn Fn() -> Result<Vec<Value>, VectorError>>;

/// Builds a case stream from ready-made items.
pub fn item_stream<I>(items: I) -> CaseStream
where
    I: IntoIterator<Item = CaseItem>,
    I::IntoIter: 'static,
{
    Box::new(items.into_iter().map(Ok))
}

/// Identity of a case: its declared name plus an optional explicit description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMeta {
    name: String,
    description: Option<String>,
}

impl CaseMeta {
    /// Meta carrying only a declared name; the description is derived from it.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attaches an explicit description, which wins over the derived one.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record description: the explicit one if set, otherwise the declared
    /// name with a leading [`CASE_PREFIX`] stripped.
    pub fn description(&self) -> &str {
        match &self.description {
            Some(d) => d,
            None => self.name.strip_prefix(CASE_PREFIX).unwrap_or(&self.name),
        }
    }
}
