//! Object type tags and the 32-byte object-id hex codec.

pub const OBJECT_ID_LEN: usize = 32;

pub const TYPE_WHITELIST: &str = "whitelist::Whitelist";
pub const TYPE_CAP: &str = "whitelist::Cap";
pub const TYPE_TGA: &str = "whitelist::TGA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectIdError {
    InvalidHex(String),
    InvalidLength(usize),
}

impl std::fmt::Display for ObjectIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex(msg) => write!(f, "invalid object id hex: {msg}"),
            Self::InvalidLength(len) => {
                write!(f, "object id must be {OBJECT_ID_LEN} bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for ObjectIdError {}

/// `0x`-prefixed lowercase hex.
pub fn format_object_id(bytes: &[u8; OBJECT_ID_LEN]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Accepts the id with or without the `0x` prefix.
pub fn parse_object_id(s: &str) -> Result<[u8; OBJECT_ID_LEN], ObjectIdError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(digits).map_err(|e| ObjectIdError::InvalidHex(e.to_string()))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ObjectIdError::InvalidLength(len))
}
