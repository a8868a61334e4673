//! Avro binary primitives
//!
//! ## Encoding
//!
//! - `int`: zig-zag, then little-endian base-128 varint (1 to 5 bytes)
//! - `long`: zig-zag varint (1 to 10 bytes), used for string lengths
//! - `double`: 8 bytes, IEEE754 little-endian
//! - `string`: `long` byte length followed by UTF-8 bytes
//! - `enum`: `int` index into the schema's symbol list
//!
//! All reads are bounds checked and report the byte offset where they failed.

use crate::{CodecError, Result};

const MAX_INT_VARINT_LEN: usize = 5;
const MAX_LONG_VARINT_LEN: usize = 10;

/// Append-only writer producing a wire buffer.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    pub fn write_int(&mut self, value: i32) {
        let zigzag = ((value << 1) ^ (value >> 31)) as u32;
        self.write_varint(zigzag as u64);
    }

    pub fn write_long(&mut self, value: i64) {
        let zigzag = ((value << 1) ^ (value >> 63)) as u64;
        self.write_varint(zigzag);
    }

    pub fn write_double(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_long(value.len() as i64);
        self.buf.extend_from_slice(value.as_bytes());
    }

    /// Write an enum index. Callers resolve the index against the schema.
    pub fn write_enum(&mut self, index: usize) -> Result<()> {
        let index = i32::try_from(index).map_err(|_| {
            CodecError::encode("<enum>", format!("enum index {} exceeds int range", index))
        })?;
        self.write_int(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn write_varint(&mut self, mut value: u64) {
        while value >= 0x80 {
            self.buf.push((value as u8 & 0x7F) | 0x80);
            value >>= 7;
        }
        self.buf.push(value as u8);
    }
}

/// Cursor over a wire buffer.
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_int(&mut self) -> Result<i32> {
        let start = self.pos;
        let raw = self.read_varint(MAX_INT_VARINT_LEN)?;
        let zigzag = u32::try_from(raw)
            .map_err(|_| CodecError::decode(start, format!("varint {} overflows int", raw)))?;
        Ok(((zigzag >> 1) as i32) ^ -((zigzag & 1) as i32))
    }

    pub fn read_long(&mut self) -> Result<i64> {
        let zigzag = self.read_varint(MAX_LONG_VARINT_LEN)?;
        Ok(((zigzag >> 1) as i64) ^ -((zigzag & 1) as i64))
    }

    pub fn read_double(&mut self) -> Result<f64> {
        let bytes = self.take(8)?;
        Ok(f64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    pub fn read_string(&mut self) -> Result<String> {
        let start = self.pos;
        let len = self.read_long()?;
        let len = usize::try_from(len)
            .map_err(|_| CodecError::decode(start, format!("negative string length {}", len)))?;
        let bytes = self.take(len)?;
        let text = std::str::from_utf8(bytes).map_err(|e| {
            CodecError::decode(start, format!("string is not valid UTF-8: {}", e))
        })?;
        Ok(text.to_string())
    }

    /// Read an enum index and check it against the symbol count.
    pub fn read_enum(&mut self, symbol_count: usize) -> Result<usize> {
        let start = self.pos;
        let index = self.read_int()?;
        usize::try_from(index).ok().filter(|i| *i < symbol_count).ok_or_else(|| {
            CodecError::decode(
                start,
                format!("enum index {} outside symbol table of {} entries", index, symbol_count),
            )
        })
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(CodecError::truncated(self.pos, len, self.remaining()));
        }
        let data = self.data;
        let slice = &data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_varint(&mut self, max_len: usize) -> Result<u64> {
        let start = self.pos;
        let mut value = 0u64;

        for i in 0..max_len {
            let byte = *self
                .data
                .get(self.pos)
                .ok_or_else(|| CodecError::truncated(self.pos, 1, 0))?;
            self.pos += 1;
            // The tenth byte of a long only has room for bit 63.
            if i == MAX_LONG_VARINT_LEN - 1 && byte & 0x7F > 1 {
                return Err(CodecError::decode(start, "varint overflows long"));
            }
            value |= u64::from(byte & 0x7F) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        Err(CodecError::decode(start, format!("varint longer than {} bytes", max_len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_int_round_trip(value in any::<i32>()) {
            let mut writer = WireWriter::new();
            writer.write_int(value);
            prop_assert!(writer.len() <= MAX_INT_VARINT_LEN);
            let bytes = writer.into_bytes();
            let mut reader = WireReader::new(&bytes);
            prop_assert_eq!(reader.read_int().unwrap(), value);
            prop_assert_eq!(reader.remaining(), 0);
        }

        #[test]
        fn prop_double_preserves_bit_pattern(bits in any::<u64>()) {
            let value = f64::from_bits(bits);
            let mut writer = WireWriter::new();
            writer.write_double(value);
            let bytes = writer.into_bytes();
            prop_assert_eq!(WireReader::new(&bytes).read_double().unwrap().to_bits(), bits);
        }

        #[test]
        fn prop_truncated_strings_are_rejected(text in "\\PC{1,32}", keep in 0usize..32) {
            let mut writer = WireWriter::new();
            writer.write_string(&text);
            let bytes = writer.into_bytes();
            let cut = keep.min(bytes.len() - 1);
            let result = WireReader::new(&bytes[..cut]).read_string();
            prop_assert!(
                matches!(result, Err(CodecError::Decode { .. })),
                "expected decode error, got {:?}",
                result
            );
        }
    }

    #[test]
    fn zigzag_matches_avro_reference_bytes() {
        let cases: &[(i32, &[u8])] = &[
            (0, &[0x00]),
            (-1, &[0x01]),
            (1, &[0x02]),
            (-64, &[0x7F]),
            (64, &[0x80, 0x01]),
            (4000, &[0xC0, 0x3E]),
            (i32::MAX, &[0xFE, 0xFF, 0xFF, 0xFF, 0x0F]),
            (i32::MIN, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
        ];
        for (value, expected) in cases {
            let mut writer = WireWriter::new();
            writer.write_int(*value);
            assert_eq!(writer.into_bytes(), *expected, "encoding {}", value);
        }
    }

    #[test]
    fn string_is_length_prefixed() {
        let mut writer = WireWriter::new();
        writer.write_string("abc");
        assert_eq!(writer.into_bytes(), [0x06, b'a', b'b', b'c']);
    }

    #[test]
    fn double_is_little_endian() {
        let mut writer = WireWriter::new();
        writer.write_double(2.25);
        assert_eq!(writer.into_bytes(), 2.25f64.to_le_bytes());
    }

    #[test]
    fn overlong_int_varint_is_rejected() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let err = WireReader::new(&bytes).read_int().unwrap_err();
        assert!(matches!(err, CodecError::Decode { offset: Some(0), .. }));
    }

    #[test]
    fn long_varint_overflowing_64_bits_is_rejected() {
        let overflowing = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x02];
        let err = WireReader::new(&overflowing).read_long().unwrap_err();
        assert!(matches!(err, CodecError::Decode { offset: Some(0), .. }));
        assert!(WireReader::new(&overflowing).read_string().is_err());

        let mut writer = WireWriter::new();
        writer.write_long(i64::MIN);
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), MAX_LONG_VARINT_LEN);
        assert_eq!(WireReader::new(&bytes).read_long().unwrap(), i64::MIN);
    }

    #[test]
    fn int_varint_above_u32_is_rejected() {
        // Five bytes, but the value needs 35 bits.
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0x7F];
        assert!(WireReader::new(&bytes).read_int().is_err());
    }

    #[test]
    fn negative_string_length_is_rejected() {
        let mut writer = WireWriter::new();
        writer.write_long(-3);
        let bytes = writer.into_bytes();
        assert!(WireReader::new(&bytes).read_string().is_err());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let bytes = [0x04, 0xC3, 0x28];
        assert!(WireReader::new(&bytes[..3]).read_string().is_err());
    }

    #[test]
    fn enum_index_is_bounds_checked() {
        for (index, ok) in [(0, true), (3, true), (4, false), (-1, false)] {
            let mut writer = WireWriter::new();
            writer.write_int(index);
            let bytes = writer.into_bytes();
            assert_eq!(WireReader::new(&bytes).read_enum(4).is_ok(), ok, "index {}", index);
        }
    }

    #[test]
    fn empty_buffer_is_truncated() {
        let err = WireReader::new(&[]).read_int().unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }
}
