//! Errors produced while decoding SGR color parameters.

/// Why an extended color descriptor was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorFault {
    /// No tokens at all.
    #[error("empty descriptor")]
    Empty,
    /// Selector token is neither `5` nor `2`.
    #[error("unknown selector")]
    UnknownSelector,
    /// Selector is known but the token count is wrong for it.
    #[error("expected {expected} parameters, found {found}")]
    Arity { expected: usize, found: usize },
}

/// Errors from the strict (8-bit and 24-bit) color decode paths.
///
/// The 4-bit path never fails; unknown codes resolve to white.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid {component} component: {value:?} is not an integer in 0..=255")]
    Parse {
        component: &'static str,
        value: String,
    },

    #[error("invalid extended color descriptor {tokens:?}: {fault}")]
    InvalidDescriptor {
        tokens: Vec<String>,
        fault: DescriptorFault,
    },
}

impl ColorError {
    pub(crate) fn parse(component: &'static str, value: &str) -> Self {
        Self::Parse {
            component,
            value: value.to_owned(),
        }
    }

    pub(crate) fn descriptor(tokens: &[&str], fault: DescriptorFault) -> Self {
        Self::InvalidDescriptor {
            tokens: tokens.iter().map(|t| (*t).to_owned()).collect(),
            fault,
        }
    }
}
