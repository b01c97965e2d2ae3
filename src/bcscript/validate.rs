use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use super::crypto::{CryptoProvider, MockCrypto};
use super::interpret::{execute, print_final_state, Context};
use super::parse::parse_script;
use super::registry::Registry;
use super::script::Script;
use super::stack::Stack;

/// Outcome of one two-phase run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    /// Why the run is invalid, if it is.
    pub failure: Option<String>,
    /// Stack contents, bottom-first, where execution stopped.
    pub final_stack: Vec<String>,
}

/// Runs an unlocking script then a locking script on one shared stack.
pub struct Validator {
    trace: bool,
    crypto: Arc<dyn CryptoProvider>,
}

impl Validator {
    pub fn new(trace: bool) -> Validator {
        Validator::with_crypto(trace, Arc::new(MockCrypto))
    }

    pub fn with_crypto(trace: bool, crypto: Arc<dyn CryptoProvider>) -> Validator {
        Validator { trace, crypto }
    }

    pub fn validate(&self, unlocking: &Script, locking: &Script) -> bool {
        self.run(unlocking, locking).valid
    }

    /// Executes both scripts with a fresh stack and registry.
    ///
    /// Any execution error ends up in the verdict; nothing escapes to the caller.
    pub fn run(&self, unlocking: &Script, locking: &Script) -> Verdict {
        let registry = Registry::with_builtins(Arc::clone(&self.crypto));
        let mut ctx = Context::new(Stack::new(), &registry, self.trace);
        debug!("validating {} unlocking and {} locking elements", unlocking.len(), locking.len());

        let executed = execute(unlocking, &mut ctx).and_then(|_| execute(locking, &mut ctx));
        let final_stack = ctx.stack.snapshot();

        if self.trace {
            print_final_state(&final_stack);
        }

        if let Err(e) = executed {
            warn!("script execution failed ({}): {}", e.kind(), e);
            return Verdict { valid: false, failure: Some(e.to_string()), final_stack };
        }

        match ctx.stack.peek() {
            Err(_) => {
                warn!("stack is empty after execution");
                Verdict {
                    valid: false,
                    failure: Some(String::from("stack is empty after execution")),
                    final_stack,
                }
            }
            Ok(top) if !Stack::is_truthy(top) => {
                debug!("top of stack '{}' is not truthy", top);
                Verdict {
                    valid: false,
                    failure: Some(format!("top of stack '{}' is not truthy", top)),
                    final_stack,
                }
            }
            Ok(_) => Verdict { valid: true, failure: None, final_stack },
        }
    }
}

/// Parses both texts, then validates them with the mock crypto rules.
pub fn validate(unlocking_text: &str, locking_text: &str, trace: bool) -> bool {
    let unlocking = parse_script(unlocking_text);
    let locking = parse_script(locking_text);
    Validator::new(trace).validate(&unlocking, &locking)
}
