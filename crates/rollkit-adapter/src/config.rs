use serde::{Deserialize, Serialize};

/// Configuration of the ikura adapter, supplied by the node operator as JSON.
///
/// ```json
/// {"base_url":"http://localhost:10995","namespace":"0102030405060708"}
/// ```
///
/// Missing fields are left empty and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IkuraConfig {
    /// The base URL of the ikura-shim RPC server. `http(s)://` and `ws(s)://` are supported.
    pub base_url: String,
    /// HEX encoded namespace ID. Passed to the shim as is.
    pub namespace: String,
}

impl IkuraConfig {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
