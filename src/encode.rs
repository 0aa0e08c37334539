//! The encoder seam.
//!
//! Encoding a value into its fixture form is a collaborator concern; this
//! crate only fixes the call contract. The harness invokes the encoder
//! synchronously, once per typed or schema-bearing item, and stores whatever
//! it returns verbatim. Encoder failures abort the run unmodified.

use crate::errors::VectorError;
use crate::value::{TypeDescriptor, Value};

/// Serializes a raw value according to a schema descriptor.
pub trait Encoder {
    fn encode(&self, value: &Value, descriptor: &TypeDescriptor) -> Result<Value, VectorError>;
}

/// Any closure of the right shape is an encoder. Keeps ad-hoc encoders and
/// test doubles free of impl boilerplate.
impl<F> Encoder for F
where
    F: Fn(&Value, &TypeDescriptor) -> Result<Value, VectorError>,
{
    fn encode(&self, value: &Value, descriptor: &TypeDescriptor) -> Result<Value, VectorError> {
        self(value, descriptor)
    }
}
