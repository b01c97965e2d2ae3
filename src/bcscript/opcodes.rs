use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use super::crypto::CryptoProvider;
use super::interpret::Context;
use super::script::{ScriptError, SCRIPT_FALSE, SCRIPT_TRUE};
use super::stack::Stack;

/// A unit of stack mutation resolved by name at execution time.
pub trait Operation {
    fn apply(&self, ctx: &mut Context<'_>) -> Result<(), ScriptError>;
}

// Lets plain closures be registered as opcodes
impl<F> Operation for F
where
    F: Fn(&mut Context<'_>) -> Result<(), ScriptError>,
{
    fn apply(&self, ctx: &mut Context<'_>) -> Result<(), ScriptError> {
        self(ctx)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Opcode {
    PushNumber(u8),
    Dup,
    Drop,
    Equal,
    EqualVerify,
    Hash160,
    CheckSig,
}

// Data Push
pub const OP_0: Opcode = Opcode::PushNumber(0);
pub const OP_FALSE: Opcode = OP_0;
pub const OP_1: Opcode = Opcode::PushNumber(1);
pub const OP_16: Opcode = Opcode::PushNumber(16);

// Stack
pub const OP_DUP: Opcode = Opcode::Dup;
pub const OP_DROP: Opcode = Opcode::Drop;

// Bitwise Logic
pub const OP_EQUAL: Opcode = Opcode::Equal;
pub const OP_EQUALVERIFY: Opcode = Opcode::EqualVerify;

// Crypto
pub const OP_HASH160: Opcode = Opcode::Hash160;
pub const OP_CHECKSIG: Opcode = Opcode::CheckSig;

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Opcode::PushNumber(n) => write!(f, "OP_{}", n),
            Opcode::Dup => write!(f, "OP_DUP"),
            Opcode::Drop => write!(f, "OP_DROP"),
            Opcode::Equal => write!(f, "OP_EQUAL"),
            Opcode::EqualVerify => write!(f, "OP_EQUALVERIFY"),
            Opcode::Hash160 => write!(f, "OP_HASH160"),
            Opcode::CheckSig => write!(f, "OP_CHECKSIG"),
        }
    }
}

// All the built-in opcodes, keyed by every name they answer to
lazy_static! {
    pub static ref OPCODES: HashMap<String, Opcode> = {
        let mut map = HashMap::with_capacity(24);
        for n in 0..=16u8 {
            let opcode = Opcode::PushNumber(n);
            map.insert(opcode.to_string(), opcode);
        }
        map.insert(String::from("OP_FALSE"), OP_FALSE);
        let named = [OP_DUP, OP_DROP, OP_EQUAL, OP_EQUALVERIFY, OP_HASH160, OP_CHECKSIG];
        for op in named.iter() {
            map.insert(op.to_string(), *op);
        }
        map
    };
}

impl Opcode {
    pub fn from_name(name: &str) -> Option<Opcode> {
        OPCODES.get(name).copied()
    }

    /// Runs the opcode against `stack`. Only the crypto opcodes look at `crypto`.
    pub fn execute(self, stack: &mut Stack, crypto: &dyn CryptoProvider) -> Result<(), ScriptError> {
        match self {
            //
            // Data Push
            //
            Opcode::PushNumber(n) => stack.push(n.to_string()),

            //
            // Stack
            //
            Opcode::Dup => {
                let v = stack.peek()?.to_string();
                stack.push(v)
            }
            Opcode::Drop => {
                stack.pop()?;
            }

            //
            // Bitwise Logic
            //
            Opcode::Equal => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(truth_value(a == b))
            }
            Opcode::EqualVerify => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                if a != b {
                    return Err(ScriptError::VerificationFailure { expected: a, actual: b });
                }
            }

            //
            // Crypto
            //
            Opcode::Hash160 => {
                let v = stack.pop()?;
                stack.push(crypto.digest(&v))
            }
            Opcode::CheckSig => {
                let pubkey = stack.pop()?;
                let signature = stack.pop()?;
                stack.push(truth_value(crypto.verify_signature(&signature, &pubkey)))
            }
        }
        Ok(())
    }
}

fn truth_value(b: bool) -> String {
    match b {
        true => String::from(SCRIPT_TRUE),
        false => String::from(SCRIPT_FALSE),
    }
}

/// A built-in opcode bound to the crypto provider of its run.
pub struct Builtin {
    opcode: Opcode,
    crypto: Arc<dyn CryptoProvider>,
}

impl Builtin {
    pub fn new(opcode: Opcode, crypto: Arc<dyn CryptoProvider>) -> Builtin {
        Builtin { opcode, crypto }
    }
}

impl Operation for Builtin {
    fn apply(&self, ctx: &mut Context<'_>) -> Result<(), ScriptError> {
        self.opcode.execute(&mut ctx.stack, self.crypto.as_ref())
    }
}
