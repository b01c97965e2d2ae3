/// Digest and signature rules consumed by `OP_HASH160` and `OP_CHECKSIG`.
///
/// Implementations must be deterministic; the interpreter assumes nothing else about them.
pub trait CryptoProvider: Send + Sync {
    fn digest(&self, data: &str) -> String;

    fn verify_signature(&self, signature: &str, pubkey: &str) -> bool;
}

const PUBKEY_PREFIX: &str = "PUBKEY_";
const PUBKEYHASH_PREFIX: &str = "PUBKEYHASH_";
const VALID_SIGNATURE: &str = "SIG_OK";

/// Substitution rules standing in for HASH160 and ECDSA.
///
/// `digest("PUBKEY_ABC")` is `"PUBKEYHASH_ABC"`, any other input just gets the
/// `PUBKEYHASH_` prefix. A signature verifies iff it is exactly `"SIG_OK"`; the
/// public key is not looked at.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockCrypto;

impl CryptoProvider for MockCrypto {
    fn digest(&self, data: &str) -> String {
        let stripped = data.strip_prefix(PUBKEY_PREFIX).unwrap_or(data);
        format!("{}{}", PUBKEYHASH_PREFIX, stripped)
    }

    fn verify_signature(&self, signature: &str, _pubkey: &str) -> bool {
        signature == VALID_SIGNATURE
    }
}
