//! Shared test doubles: a call-recording encoder, a failing encoder, and a
//! small schema-bearing domain type.

use std::cell::RefCell;
use std::sync::Arc;

use testvec::encode::Encoder;
use testvec::errors::VectorError;
use testvec::value::{Encodable, TypeDescriptor, Value};

/// Encoder that records every call and returns a tagged string, so tests can
/// assert both call counts and stored output.
#[derive(Debug, Default)]
pub struct RecordingEncoder {
    calls: RefCell<Vec<(String, String)>>,
}

impl RecordingEncoder {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// `(descriptor, value)` pairs seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// The output this encoder stores for a given value/descriptor pair.
    pub fn encoded(value: &Value, descriptor: &TypeDescriptor) -> Value {
        Value::String(format!("encoded:{}:{}", descriptor, value))
    }
}

impl Encoder for RecordingEncoder {
    fn encode(&self, value: &Value, descriptor: &TypeDescriptor) -> Result<Value, VectorError> {
        self.calls
            .borrow_mut()
            .push((descriptor.name().to_string(), value.to_string()));
        Ok(Self::encoded(value, descriptor))
    }
}

/// Encoder that rejects everything it is given.
#[derive(Debug)]
pub struct FailingEncoder;

impl Encoder for FailingEncoder {
    fn encode(&self, _value: &Value, descriptor: &TypeDescriptor) -> Result<Value, VectorError> {
        Err(VectorError::encode(descriptor, "schema rejected the value"))
    }
}

/// A schema-bearing domain value, standing in for a container under test.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub epoch: u64,
    pub root: String,
}

impl Encodable for Checkpoint {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new("Checkpoint")
    }

    fn raw(&self) -> Value {
        Value::Map(im::hashmap! {
            "epoch".to_string() => Value::Number(self.epoch as f64),
            "root".to_string() => Value::String(self.root.clone()),
        })
    }
}
