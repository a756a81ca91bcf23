use std::fmt;

use tracing::debug;

/// Size in bytes of a namespace on the ikura chain.
pub const NAMESPACE_SIZE: usize = 16;

/// A namespace as understood by the ikura chain.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Namespace([u8; NAMESPACE_SIZE]);

impl Namespace {
    pub fn from_raw_bytes(bytes: [u8; NAMESPACE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NAMESPACE_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self.to_hex())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NamespaceError {
    #[error("namespace must not be empty")]
    Empty,
    #[error("namespace is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Parses a hex encoded namespace.
///
/// Rollkit namespaces have arbitrary length while ikura namespaces are [`NAMESPACE_SIZE`] bytes,
/// so shorter namespaces are padded with zeroes and longer ones are truncated.
pub fn parse_namespace(namespace: &str) -> Result<Namespace, NamespaceError> {
    let mut bytes = hex::decode(namespace)?;
    if bytes.is_empty() {
        return Err(NamespaceError::Empty);
    }
    if bytes.len() != NAMESPACE_SIZE {
        debug!(
            namespace,
            expected = NAMESPACE_SIZE,
            "namespace has unexpected length, resizing"
        );
    }
    bytes.resize(NAMESPACE_SIZE, 0);

    let mut raw = [0u8; NAMESPACE_SIZE];
    raw.copy_from_slice(&bytes);
    Ok(Namespace(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_namespace_is_rejected() {
        assert_eq!(parse_namespace(""), Err(NamespaceError::Empty));
    }

    #[test]
    fn non_hex_namespace_is_rejected() {
        assert!(matches!(
            parse_namespace("zz"),
            Err(NamespaceError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_namespace("abc"),
            Err(NamespaceError::InvalidHex(_))
        ));
    }

    #[test]
    fn short_namespace_is_padded() {
        let ns = parse_namespace("0102030405060708").unwrap();
        assert_eq!(ns.to_hex(), "01020304050607080000000000000000");
    }

    #[test]
    fn long_namespace_is_truncated() {
        let long = "ab".repeat(NAMESPACE_SIZE + 4);
        let ns = parse_namespace(&long).unwrap();
        assert_eq!(ns.as_bytes(), &[0xab; NAMESPACE_SIZE]);
    }

    #[test]
    fn exact_namespace_is_kept() {
        let hex = "00112233445566778899aabbccddeeff";
        assert_eq!(parse_namespace(hex).unwrap().to_string(), hex);
    }
}
