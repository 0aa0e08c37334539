//! The three stackable case adapters.
//!
//! [`adapt_case`] turns a generator-style case body into a harness-callable
//! function; [`with_tags`] overlays static annotations onto whatever record a
//! call produced; [`with_args`] prepends provider-computed arguments ahead of
//! the caller's. All three produce the same [`HarnessFn`] shape, so a harness
//! composes them freely, typically:
//!
//! ```rust
//! use std::sync::Arc;
//! use testvec::case::{item_stream, CaseArgs, CaseFn, CaseItem, CaseMeta, RunMode};
//! use testvec::encode::Encoder;
//! use testvec::errors::VectorError;
//! use testvec::harness::{adapt_case, with_args, with_tags};
//! use testvec::record::TagSet;
//! use testvec::value::{TypeDescriptor, Value};
//!
//! let encoder: Arc<dyn Encoder> = Arc::new(
//!     |value: &Value, _: &TypeDescriptor| -> Result<Value, VectorError> { Ok(value.clone()) },
//! );
//! let case: CaseFn = Box::new(|_args| Ok(item_stream(vec![CaseItem::bare("x", 5.0)])));
//!
//! let adapted = with_args(
//!     Box::new(|| Ok(vec![Value::from("minimal")])),
//!     with_tags(
//!         TagSet::new().with("fork", "phase0"),
//!         adapt_case(CaseMeta::named("test_example"), encoder, case),
//!     ),
//! );
//!
//! let record = adapted(&CaseArgs::default(), RunMode::Generator)
//!     .unwrap()
//!     .expect("generator mode produces a record");
//! assert_eq!(record.get("fork"), Some(&Value::from("phase0")));
//! assert_eq!(record.get("x"), Some(&Value::Number(5.0)));
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use crate::case::{ArgsProvider, CaseFn, CaseItem, CaseMeta, CaseValue, HarnessFn, RunMode};
use crate::encode::Encoder;
use crate::errors::VectorError;
use crate::record::{OutputRecord, TagSet};
use crate::value::Value;

// =============================================================================
// EXECUTION MODE ADAPTATION
// =============================================================================

/// Adapts a generator-style case body for harness invocation.
///
/// In [`RunMode::Plain`] the case's stream is fully drained and discarded, so
/// every side effect and assertion in the body still runs; the call yields no
/// record. In [`RunMode::Generator`] the drained items are collected into an
/// [`OutputRecord`] seeded with the case's description.
///
/// Failures from the case body or the encoder propagate unmodified, in either
/// mode.
pub fn adapt_case(meta: CaseMeta, encoder: Arc<dyn Encoder>, case: CaseFn) -> HarnessFn {
    Box::new(move |args, mode| {
        debug!(case = meta.name(), ?mode, "running case");
        let stream = case(args)?;
        match mode {
            RunMode::Plain => {
                for item in stream {
                    item?;
                }
                Ok(None)
            }
            RunMode::Generator => {
                let mut record = OutputRecord::with_description(meta.description());
                for item in stream {
                    let (key, value) = encode_item(item?, encoder.as_ref())?;
                    trace!(case = meta.name(), key = %key, "collected item");
                    record.insert(key, value);
                }
                Ok(Some(record))
            }
        }
    })
}

/// Resolves one yielded item into the entry it writes to the record.
fn encode_item(item: CaseItem, encoder: &dyn Encoder) -> Result<(String, Value), VectorError> {
    match item {
        CaseItem::Typed {
            key,
            value,
            descriptor,
        } => {
            let encoded = encoder.encode(&value, &descriptor)?;
            Ok((key, encoded))
        }
        CaseItem::Bare { key, value } => match value {
            CaseValue::Plain(v) => Ok((key, v)),
            CaseValue::Schema(e) => {
                let encoded = encoder.encode(&e.raw(), &e.descriptor())?;
                Ok((key, encoded))
            }
        },
    }
}

// =============================================================================
// TAG OVERLAY
// =============================================================================

/// Overlays a static tag set onto any record produced by `f`.
///
/// A call that produced no record passes through unchanged: no record is
/// fabricated and the tags are not applied. When a record is present, keys it
/// shares with the tag set keep the record's value.
pub fn with_tags(tags: TagSet, f: HarnessFn) -> HarnessFn {
    Box::new(move |args, mode| {
        let out = f(args, mode)?;
        Ok(out.map(|record| record.overlay_tags(&tags)))
    })
}

// =============================================================================
// ARGUMENT INJECTION
// =============================================================================

/// Prepends provider-computed arguments ahead of the caller's on every call.
///
/// The provider is invoked fresh per call and its output is never cached, so
/// successive calls may see different injected arguments. Named arguments and
/// the run mode pass through unchanged; the caller's argument set is never
/// mutated.
pub fn with_args(provider: ArgsProvider, f: HarnessFn) -> HarnessFn {
    Box::new(move |args, mode| {
        let prefix = provider()?;
        trace!(injected = prefix.len(), "prepending provider arguments");
        let combined = args.with_prefix(prefix);
        f(&combined, mode)
    })
}
