use vodsign_core::hash::hex_sha256;

/// Sentinel payload hash for bodies the signature does not cover.
///
/// Streamed uploads use this to avoid buffering the whole body just to
/// hash it. The value signed must be the value sent in
/// `x-amz-content-sha256`, otherwise the remote side rejects the request.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Hex SHA-256 of the empty string, the payload hash of a bodyless request.
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// How the request body is represented in the canonical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadHashMode {
    /// The body is not covered by the signature.
    Unsigned,
    /// The body is hashed and the digest is signed.
    Hashed,
}

/// Compute the `x-amz-content-sha256` value for a request body.
///
/// Callers pick the mode per operation: `Hashed` for buffered bodies and
/// bodyless reads, `Unsigned` for streamed uploads. Presigned URLs always
/// sign with [`UNSIGNED_PAYLOAD`] and never carry the header.
pub fn payload_hash(body: &[u8], mode: PayloadHashMode) -> String {
    match mode {
        PayloadHashMode::Unsigned => UNSIGNED_PAYLOAD.to_string(),
        PayloadHashMode::Hashed => hex_sha256(body),
    }
}
