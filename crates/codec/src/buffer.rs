//! Write buffer and positional reader for the value wire format.
//!
//! All multi-byte primitives are big-endian. Lengths use a
//! variable-length integer (LEB128: low 7 bits per byte, high bit set
//! while more bytes follow). Strings are a varint byte-length followed
//! by UTF-8 bytes.
//!
//! `DataBuffer` writes into a growable `Vec<u8>` and cannot fail;
//! `ByteReader` reads from an untrusted slice and reports a short or
//! malformed input as an error, never panicking.

use crate::error::{CodecError, Result};
use byteorder::{BigEndian, ReadBytesExt};

/// Growable write buffer.
#[derive(Debug, Default)]
pub struct DataBuffer {
    bytes: Vec<u8>,
}

impl DataBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        DataBuffer { bytes: Vec::new() }
    }

    /// Create a buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        DataBuffer {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// View the written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the buffer, yielding the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write one byte.
    pub fn put_u8(&mut self, v: u8) {
        self.bytes.push(v);
    }

    /// Write one signed byte.
    pub fn put_i8(&mut self, v: i8) {
        self.bytes.push(v as u8);
    }

    /// Write a u16, big-endian.
    pub fn put_u16(&mut self, v: u16) {
        self.bytes.extend_from_slice(&v.to_be_bytes());
    }

    /// Write an i16, big-endian.
    pub fn put_i16(&mut self, v: i16) {
        self.bytes.extend_from_slice(&v.to_be_bytes());
    }

    /// Write an i32, big-endian.
    pub fn put_i32(&mut self, v: i32) {
        self.bytes.extend_from_slice(&v.to_be_bytes());
    }

    /// Write an i64, big-endian.
    pub fn put_i64(&mut self, v: i64) {
        self.bytes.extend_from_slice(&v.to_be_bytes());
    }

    /// Write an f32, big-endian IEEE-754 bits.
    pub fn put_f32(&mut self, v: f32) {
        self.bytes.extend_from_slice(&v.to_be_bytes());
    }

    /// Write an f64, big-endian IEEE-754 bits.
    pub fn put_f64(&mut self, v: f64) {
        self.bytes.extend_from_slice(&v.to_be_bytes());
    }

    /// Write raw bytes as-is.
    pub fn put_slice(&mut self, s: &[u8]) {
        self.bytes.extend_from_slice(s);
    }

    /// Write a u32 as a variable-length integer (LEB128).
    pub fn put_var_u32(&mut self, mut v: u32) {
        loop {
            let mut byte = (v & 0x7F) as u8;
            v >>= 7;
            if v != 0 {
                byte |= 0x80;
            }
            self.bytes.push(byte);
            if v == 0 {
                break;
            }
        }
    }

    /// Write a length-prefixed string: varint byte-length, then UTF-8.
    pub fn put_str(&mut self, s: &str) {
        self.put_var_u32(s.len() as u32);
        self.bytes.extend_from_slice(s.as_bytes());
    }
}

/// Positional reader over an untrusted byte slice.
#[derive(Debug)]
pub struct ByteReader<'a> {
    rest: &'a [u8],
}

impl<'a> ByteReader<'a> {
    /// Wrap a byte slice for reading.
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteReader { rest: bytes }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    /// Read one byte.
    pub fn get_u8(&mut self) -> Result<u8> {
        Ok(self.rest.read_u8()?)
    }

    /// Read one signed byte.
    pub fn get_i8(&mut self) -> Result<i8> {
        Ok(self.rest.read_i8()?)
    }

    /// Read a big-endian u16.
    pub fn get_u16(&mut self) -> Result<u16> {
        Ok(self.rest.read_u16::<BigEndian>()?)
    }

    /// Read a big-endian i16.
    pub fn get_i16(&mut self) -> Result<i16> {
        Ok(self.rest.read_i16::<BigEndian>()?)
    }

    /// Read a big-endian i32.
    pub fn get_i32(&mut self) -> Result<i32> {
        Ok(self.rest.read_i32::<BigEndian>()?)
    }

    /// Read a big-endian i64.
    pub fn get_i64(&mut self) -> Result<i64> {
        Ok(self.rest.read_i64::<BigEndian>()?)
    }

    /// Read a big-endian f32.
    pub fn get_f32(&mut self) -> Result<f32> {
        Ok(self.rest.read_f32::<BigEndian>()?)
    }

    /// Read a big-endian f64.
    pub fn get_f64(&mut self) -> Result<f64> {
        Ok(self.rest.read_f64::<BigEndian>()?)
    }

    /// Read `len` raw bytes, borrowing from the input.
    pub fn get_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.rest.len() < len {
            return Err(CodecError::UnexpectedEof);
        }
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        Ok(head)
    }

    /// Read a variable-length u32 (LEB128). At most five bytes.
    pub fn read_var_u32(&mut self) -> Result<u32> {
        let mut value: u32 = 0;
        let mut shift = 0;
        loop {
            let byte = self.get_u8()?;
            if shift == 28 && byte > 0x0F {
                return Err(CodecError::VarIntOverflow);
            }
            value |= ((byte & 0x7F) as u32) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
            if shift > 28 {
                return Err(CodecError::VarIntOverflow);
            }
        }
    }

    /// Read a length-prefixed string: varint byte-length, then UTF-8.
    pub fn read_str(&mut self) -> Result<String> {
        let len = self.read_var_u32()? as usize;
        let raw = self.get_slice(len)?;
        String::from_utf8(raw.to_vec()).map_err(|_| CodecError::InvalidString)
    }
}
