/// Errors that may occur when coding natural numbers or encapsulated payloads.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A signed arbitrary precision value below zero was passed where a natural number is
    /// required. Nothing is written.
    Negative,
    /// The minimal big endian representation of the value needs more than
    /// [`MAX_DATA_LEN`](crate::MAX_DATA_LEN) bytes. Nothing is written.
    TooLarge,
    /// Reached end-of-buffer unexpectedly.
    ///
    /// This may happen if you attempt to decode an empty buffer or if the buffer is too short to
    /// contain the declared value or payload.
    UnexpectedEob,
    /// The destination does not have enough capacity for the bytes to be written.
    ShortBuffer,
}

impl Error {
    pub const fn description(&self) -> &'static str {
        match self {
            Error::Negative => "value is negative and not a natural number",
            Error::TooLarge => "value needs more than 127 data bytes",
            Error::UnexpectedEob => "unexpected end of buffer",
            Error::ShortBuffer => "destination too small",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for Error {}
