//! A toy transaction-validation script interpreter.
//!
//! An unlocking script and a locking script run one after the other on a shared stack
//! of strings; the pair is valid iff the final top of the stack is truthy.

pub mod bcscript;
