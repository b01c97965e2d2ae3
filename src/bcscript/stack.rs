use super::script::{ScriptError, SCRIPT_FALSE};

/// LIFO store of string values. The last element of `items` is the top.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stack {
    items: Vec<String>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack { items: Vec::with_capacity(20) }
    }

    pub fn push(&mut self, value: String) {
        self.items.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// Returns a StackUnderflow if the stack is empty
    pub fn pop(&mut self) -> Result<String, ScriptError> {
        self.items.pop().ok_or(ScriptError::StackUnderflow)
    }

    /// Returns the top value without removing it.
    ///
    /// Returns a StackUnderflow if the stack is empty
    pub fn peek(&self) -> Result<&str, ScriptError> {
        self.items
            .last()
            .map(String::as_str)
            .ok_or(ScriptError::StackUnderflow)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bottom-first copy of the stack, for diagnostics.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.clone()
    }

    /// False for the empty string and for exactly "0", true for anything else.
    ///
    /// No numeric parsing happens: "-0", "00" and "false" are all truthy.
    pub fn is_truthy(value: &str) -> bool {
        !value.is_empty() && value != SCRIPT_FALSE
    }
}
