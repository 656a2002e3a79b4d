#[derive(thiserror::Error)]
pub enum Error {
    // dependency errors
    #[error("hex conversion: {0}")]
    Hex(#[from] hex::FromHexError),

    // std errors
    #[error("utf8 conversion: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // crate errors
    #[error("cipher key must contain at least one byte")]
    InvalidKey,

    #[error("system clock is set before the unix epoch")]
    Clock,

    #[error("token of {0} characters is too short to carry a nonce")]
    Truncated(usize),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
