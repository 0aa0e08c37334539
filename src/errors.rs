//! Unified error type for the case adapter layer.
//!
//! The adapters themselves never construct errors: every failure they return
//! originated in a case body, an encoder, or an argument provider, and is
//! passed through unmodified. The constructors here exist for those
//! collaborators (and for tests) so the whole layer shares one error type.

use miette::Diagnostic;
use thiserror::Error;

use crate::value::TypeDescriptor;

/// Boxed source error preserved from a collaborator failure.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All failure modes that can surface from an adapted case call.
#[derive(Debug, Error, Diagnostic)]
pub enum VectorError {
    /// A failure raised inside a case body while its stream was being drained.
    #[error("case failure: {message}")]
    #[diagnostic(code(testvec::case))]
    Case {
        message: String,
        #[source]
        source: Option<SourceError>,
    },

    /// A case assertion that did not hold.
    #[error("assertion failed: {message}")]
    #[diagnostic(code(testvec::assertion))]
    Assertion {
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    },

    /// The encoder rejected a value for the named schema.
    #[error("encoding failed for `{descriptor}`: {message}")]
    #[diagnostic(code(testvec::encode))]
    Encode { descriptor: String, message: String },

    /// The extra-args provider failed to produce arguments.
    #[error("argument provider failure: {message}")]
    #[diagnostic(code(testvec::provider))]
    Provider { message: String },
}

impl VectorError {
    /// A case-body failure with no underlying source.
    pub fn case(message: impl Into<String>) -> Self {
        Self::Case {
            message: message.into(),
            source: None,
        }
    }

    /// A case-body failure wrapping the underlying error, info intact.
    pub fn case_with_source(message: impl Into<String>, source: SourceError) -> Self {
        Self::Case {
            message: message.into(),
            source: Some(source),
        }
    }

    /// An assertion failure with no expected/actual detail.
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// An assertion failure carrying the mismatched values.
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Assertion {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    /// An encoder rejection for the given schema descriptor.
    pub fn encode(descriptor: &TypeDescriptor, message: impl Into<String>) -> Self {
        Self::Encode {
            descriptor: descriptor.name().to_string(),
            message: message.into(),
        }
    }

    /// An argument-provider failure.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}
