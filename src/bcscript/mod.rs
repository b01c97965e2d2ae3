pub mod crypto;
pub mod interpret;
pub mod opcodes;
pub mod parse;
pub mod registry;
pub mod script;
pub mod stack;
pub mod validate;

pub use self::crypto::{CryptoProvider, MockCrypto};
pub use self::interpret::{execute, Context};
pub use self::opcodes::{Opcode, Operation};
pub use self::parse::parse_script;
pub use self::registry::Registry;
pub use self::script::{Element, Script, ScriptError};
pub use self::stack::Stack;
pub use self::validate::{validate, Validator, Verdict};
