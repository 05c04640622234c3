use alloy_primitives::{Address, Bytes, U256};

/// Errors produced when decoding or encoding wire values.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The value does not decode to the 20 bytes of an address.
    #[error("Addresses must be 20 bytes long, but '{value}' has {length} bytes")]
    BadAddressLength {
        /// The offending value, hex-encoded
        value: String,
        /// The number of bytes the value decodes to
        length: usize,
    },
    /// The value is not a well-formed data encoding.
    #[error("The string '{0}' is not a valid data encoding")]
    MalformedData(String),
    /// The value is not a well-formed quantity encoding.
    #[error("The string '{0}' is not a valid quantity encoding")]
    MalformedQuantity(String),
    /// The quantity does not fit into the requested integer type.
    #[error("The quantity '{0}' is too large")]
    QuantityOverflow(String),
}

/// Decodes a quantity from its hex encoding.
///
/// A quantity is a `0x`-prefixed hexadecimal number without redundant
/// leading zeros; zero is encoded as `0x0`.
pub fn decode_quantity(value: &str) -> Result<U256, CodecError> {
    let digits = quantity_digits(value)?;

    U256::from_str_radix(digits, 16)
        .map_err(|_error| CodecError::QuantityOverflow(value.to_string()))
}

/// Decodes a quantity that must fit into 64 bits, such as a block number
/// or a gas limit.
pub fn decode_quantity_u64(value: &str) -> Result<u64, CodecError> {
    let digits = quantity_digits(value)?;

    u64::from_str_radix(digits, 16).map_err(|_error| CodecError::QuantityOverflow(value.to_string()))
}

/// Encodes a quantity in its canonical form.
pub fn encode_quantity(value: U256) -> String {
    format!("0x{value:x}")
}

/// Encodes a 64-bit quantity in its canonical form.
pub fn encode_quantity_u64(value: u64) -> String {
    format!("0x{value:x}")
}

/// Decodes an address from its hex encoding. Hex digits of either case
/// are accepted.
pub fn decode_address(value: &str) -> Result<Address, CodecError> {
    let bytes = decode_data(value)?;

    Address::try_from(bytes.as_ref()).map_err(|_error| CodecError::BadAddressLength {
        value: value.to_string(),
        length: bytes.len(),
    })
}

/// Encodes the provided bytes as an address in its canonical form:
/// `0x`-prefixed, lowercase hex.
pub fn encode_address(bytes: &[u8]) -> Result<String, CodecError> {
    if bytes.len() == Address::len_bytes() {
        Ok(hex::encode_prefixed(bytes))
    } else {
        Err(CodecError::BadAddressLength {
            value: hex::encode_prefixed(bytes),
            length: bytes.len(),
        })
    }
}

/// Decodes unformatted data from its hex encoding. The number of hex
/// digits must be even.
pub fn decode_data(value: &str) -> Result<Bytes, CodecError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| CodecError::MalformedData(value.to_string()))?;

    if digits.len() % 2 != 0 {
        return Err(CodecError::MalformedData(value.to_string()));
    }

    hex::decode(digits)
        .map(Bytes::from)
        .map_err(|_error| CodecError::MalformedData(value.to_string()))
}

/// Encodes unformatted data in its canonical form: `0x`-prefixed,
/// lowercase hex.
pub fn encode_data(bytes: &[u8]) -> String {
    hex::encode_prefixed(bytes)
}

/// Splits a quantity into its hex digits, validating the grammar.
fn quantity_digits(value: &str) -> Result<&str, CodecError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| CodecError::MalformedQuantity(value.to_string()))?;

    let well_formed = match digits.as_bytes() {
        [] => false,
        // Zero is a single digit; any longer encoding must not start
        // with one.
        [b'0', _, ..] => false,
        digits => digits.iter().all(u8::is_ascii_hexdigit),
    };

    if well_formed {
        Ok(digits)
    } else {
        Err(CodecError::MalformedQuantity(value.to_string()))
    }
}
