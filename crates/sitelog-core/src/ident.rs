//! Binary identifier packing.
//!
//! Identifiers are persisted as 16 bytes: the most significant 64 bits
//! followed by the least significant 64 bits, both big-endian.

use uuid::Uuid;

use crate::error::CodecError;

/// Width of a packed identifier in bytes.
pub const PACKED_LEN: usize = 16;

/// Packs an identifier into its 16-byte column representation.
#[must_use]
pub fn pack(id: Uuid) -> [u8; PACKED_LEN] {
    id.as_u128().to_be_bytes()
}

/// Unpacks an identifier column.
///
/// # Errors
///
/// Returns `CodecError::NullIdentifier` if the column was null and
/// `CodecError::IdentifierLength` if it is not exactly 16 bytes long.
pub fn unpack(bytes: Option<&[u8]>) -> Result<Uuid, CodecError> {
    let bytes = bytes.ok_or(CodecError::NullIdentifier)?;
    let packed: [u8; PACKED_LEN] = bytes
        .try_into()
        .map_err(|_| CodecError::IdentifierLength(bytes.len()))?;
    Ok(Uuid::from_u128(u128::from_be_bytes(packed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_places_high_half_first() {
        let id = Uuid::from_u64_pair(0x0102_0304_0506_0708, 0x090a_0b0c_0d0e_0f10);

        assert_eq!(
            pack(id),
            [
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
                0x0f, 0x10
            ]
        );
    }

    #[test]
    fn test_pack_matches_uuid_byte_order() {
        let id = Uuid::new_v4();

        assert_eq!(&pack(id), id.as_bytes());
    }

    #[test]
    fn test_unpack_reverses_pack() {
        for id in [Uuid::nil(), Uuid::from_u128(u128::MAX), Uuid::new_v4(), Uuid::now_v7()] {
            let packed = pack(id);
            assert_eq!(unpack(Some(packed.as_slice())).unwrap(), id);
        }
    }

    #[test]
    fn test_unpack_rejects_null() {
        assert!(matches!(unpack(None), Err(CodecError::NullIdentifier)));
    }

    #[test]
    fn test_unpack_rejects_wrong_length() {
        for len in [0, 8, 15, 17, 32] {
            let bytes = vec![0u8; len];
            match unpack(Some(bytes.as_slice())) {
                Err(CodecError::IdentifierLength(actual)) => assert_eq!(actual, len),
                other => panic!("expected IdentifierLength, got {other:?}"),
            }
        }
    }
}
