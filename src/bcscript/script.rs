use std::fmt::{self, Debug, Display, Formatter};
use std::slice::Iter;

use thiserror::Error;

/// Tokens starting with this prefix are opcode references, everything else is literal data.
pub const OPCODE_PREFIX: &str = "OP_";

pub const SCRIPT_TRUE: &str = "1";
pub const SCRIPT_FALSE: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("stack underflow: attempted to read from an empty stack")]
    StackUnderflow,
    #[error("unknown opcode: {0}")]
    UnknownOpcode(String),
    #[error("OP_EQUALVERIFY failed: expected '{expected}' but got '{actual}'")]
    VerificationFailure { expected: String, actual: String },
}

impl ScriptError {
    /// Short name of the failure kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptError::StackUnderflow => "StackUnderflow",
            ScriptError::UnknownOpcode(_) => "UnknownOpcode",
            ScriptError::VerificationFailure { .. } => "VerificationFailure",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum Element {
    DataPush(String),
    OpCode(String),
}

impl Element {
    /// The token this element was parsed from.
    pub fn token(&self) -> &str {
        match self {
            Element::DataPush(value) => value,
            Element::OpCode(name) => name,
        }
    }

    pub fn is_opcode(&self) -> bool {
        matches!(self, Element::OpCode(_))
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Element::OpCode(name) => write!(f, "{}", name),
            Element::DataPush(value) => write!(f, "<{}>", value),
        }
    }
}

/// An immutable, ordered sequence of parsed elements.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Script {
    elements: Vec<Element>,
}

impl Script {
    pub fn new(elements: Vec<Element>) -> Script {
        Script { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Element;
    type IntoIter = Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Debug for Script {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

// Renders the script back to its token form
impl Display for Script {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", element.token())?;
        }
        Ok(())
    }
}
