use std::collections::HashMap;
use std::sync::Arc;

use log::trace;

use super::crypto::CryptoProvider;
use super::interpret::Context;
use super::opcodes::{Builtin, Operation, OPCODES};
use super::script::ScriptError;

/// Opcode name to operation lookup, built once per validation run.
///
/// Names are case-sensitive and matched exactly. Registering a name again replaces the
/// previous entry.
#[derive(Default)]
pub struct Registry {
    operations: HashMap<String, Box<dyn Operation>>,
}

impl Registry {
    /// An empty registry, without any built-in.
    pub fn new() -> Registry {
        Registry { operations: HashMap::new() }
    }

    /// A registry holding every built-in opcode, the crypto ones bound to `crypto`.
    pub fn with_builtins(crypto: Arc<dyn CryptoProvider>) -> Registry {
        let mut registry = Registry {
            operations: HashMap::with_capacity(OPCODES.len()),
        };
        for (name, opcode) in OPCODES.iter() {
            registry.register(name.as_str(), Builtin::new(*opcode, Arc::clone(&crypto)));
        }
        trace!("registry loaded with {} built-in opcodes", registry.len());
        registry
    }

    pub fn register<O>(&mut self, name: &str, operation: O)
    where
        O: Operation + 'static,
    {
        self.operations.insert(name.to_string(), Box::new(operation));
    }

    /// Registers a closure as the operation for `name`.
    pub fn register_fn<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&mut Context<'_>) -> Result<(), ScriptError> + 'static,
    {
        self.register(name, f);
    }

    pub fn get(&self, name: &str) -> Result<&dyn Operation, ScriptError> {
        self.operations
            .get(name)
            .map(|op| &**op)
            .ok_or_else(|| ScriptError::UnknownOpcode(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
