//! Value signatures.
//!
//! A [`ValueSignature`] is the canonical byte encoding of an effect's full
//! value payload. Records whose signatures are equal describe the same effect
//! under different attributes and may be collapsed together, so the encoding
//! must be injective: every write is fixed-width or length-prefixed, and
//! options carry a tag byte.
//!
//! The signature is the payload itself, never a digest. [`ValueSignature::digest`]
//! exists only to keep log lines short.

use core::fmt;

use sha2::{Digest, Sha256};

/// Canonical encoding of a value payload.
///
/// Equality, ordering and hashing are byte-wise. Ordering carries no domain
/// meaning; it only makes grouping independent of input order.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueSignature(Vec<u8>);

impl ValueSignature {
    /// Raw encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First 8 bytes of the SHA-256 of the encoding, as hex.
    ///
    /// For log fields only. Two distinct signatures may share a digest.
    pub fn digest(&self) -> String {
        let hash = Sha256::digest(&self.0);
        hex::encode(&hash[..8])
    }
}

impl fmt::Debug for ValueSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueSignature")
            .field("len", &self.0.len())
            .field("digest", &self.digest())
            .finish()
    }
}

/// Incremental builder for a [`ValueSignature`].
#[derive(Debug, Default)]
pub struct SignatureWriter {
    bytes: Vec<u8>,
}

impl SignatureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bool(&mut self, value: bool) {
        self.bytes.push(value as u8);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i8(&mut self, value: i8) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i16(&mut self, value: i16) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes an `f32` by bit pattern, with `-0.0` folded into `0.0` and every
    /// NaN folded into the canonical quiet NaN.
    pub fn write_f32(&mut self, value: f32) {
        let bits = if value.is_nan() {
            f32::NAN.to_bits()
        } else if value == 0.0 {
            0
        } else {
            value.to_bits()
        };
        self.write_u32(bits);
    }

    /// Same canonicalization as [`Self::write_f32`].
    pub fn write_f64(&mut self, value: f64) {
        let bits = if value.is_nan() {
            f64::NAN.to_bits()
        } else if value == 0.0 {
            0
        } else {
            value.to_bits()
        };
        self.write_u64(bits);
    }

    /// Writes a sequence length prefix.
    pub fn write_len(&mut self, len: usize) {
        self.write_u64(len as u64);
    }

    pub fn write_str(&mut self, value: &str) {
        self.write_len(value.len());
        self.bytes.extend_from_slice(value.as_bytes());
    }

    /// Writes any [`SignatureSource`].
    pub fn write<T: SignatureSource + ?Sized>(&mut self, value: &T) {
        value.write_signature(self);
    }

    pub fn finish(self) -> ValueSignature {
        ValueSignature(self.bytes)
    }
}

/// Types that can contribute to a value signature.
///
/// Implementations must write every field that takes part in equality, in a
/// fixed order, using only self-delimiting writes.
pub trait SignatureSource {
    fn write_signature(&self, writer: &mut SignatureWriter);

    fn signature(&self) -> ValueSignature {
        let mut writer = SignatureWriter::new();
        self.write_signature(&mut writer);
        writer.finish()
    }
}

macro_rules! impl_signature_source {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl SignatureSource for $ty {
                fn write_signature(&self, writer: &mut SignatureWriter) {
                    writer.$method(*self);
                }
            }
        )*
    };
}

impl_signature_source! {
    bool => write_bool,
    u8 => write_u8,
    u16 => write_u16,
    u32 => write_u32,
    u64 => write_u64,
    i8 => write_i8,
    i16 => write_i16,
    i32 => write_i32,
    i64 => write_i64,
    f32 => write_f32,
    f64 => write_f64,
}

impl SignatureSource for str {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        writer.write_str(self);
    }
}

impl SignatureSource for String {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        writer.write_str(self);
    }
}

impl<T: SignatureSource> SignatureSource for Option<T> {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        match self {
            None => writer.write_u8(0),
            Some(value) => {
                writer.write_u8(1);
                value.write_signature(writer);
            }
        }
    }
}

impl<T: SignatureSource> SignatureSource for [T] {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        writer.write_len(self.len());
        for item in self {
            item.write_signature(writer);
        }
    }
}

impl<T: SignatureSource> SignatureSource for Vec<T> {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        self.as_slice().write_signature(writer);
    }
}

impl<T: SignatureSource + ?Sized> SignatureSource for &T {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        (**self).write_signature(writer);
    }
}
