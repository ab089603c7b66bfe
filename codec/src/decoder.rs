//! Decoder state shared by the per-type `get_*` families.

use cursor::{Primitive, SlotReader, SLOT_SIZE};
use model::{
    is_legal_name, is_legal_namespace_name, is_valid_host, CimString, Name, NamespaceName,
};
use wire::{Framing, Marker};

use crate::error::{CodecError, CodecResult, LimitKind, NameKind};
use crate::limits::{CodecLimits, MAX_DEPTH};
use crate::options::CodecOptions;

/// Reads CIM values from a borrowed byte region.
///
/// Decoding is strictly linear. When a `get_*` call fails the decoder's
/// position is unspecified and the decode should be abandoned; nothing
/// partial is ever returned.
#[derive(Debug, Clone)]
pub struct CimDecoder<'a> {
    pub(crate) reader: SlotReader<'a>,
    framing: Framing,
    limits: CodecLimits,
    depth: usize,
}

impl<'a> CimDecoder<'a> {
    /// Creates a decoder over `data` with the given options.
    #[must_use]
    pub fn new(data: &'a [u8], options: &CodecOptions) -> Self {
        let reader = SlotReader::new(data)
            .with_swap(options.byte_order.needs_swap())
            .with_validation(options.validate);
        Self::from_reader(reader, options)
    }

    /// Wraps an existing reader; its swap and validation flags are kept.
    #[must_use]
    pub fn from_reader(reader: SlotReader<'a>, options: &CodecOptions) -> Self {
        Self {
            reader,
            framing: options.framing,
            limits: options.limits,
            depth: 0,
        }
    }

    #[must_use]
    pub const fn framing(&self) -> Framing {
        self.framing
    }

    #[must_use]
    pub const fn validates(&self) -> bool {
        self.reader.validates()
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.reader.position()
    }

    /// Returns `true` while unread bytes remain.
    #[must_use]
    pub const fn more(&self) -> bool {
        self.reader.more()
    }

    pub fn rewind(&mut self) {
        self.reader.rewind();
    }

    /// Direct access to the slot reader, for interleaving raw slots.
    pub fn reader_mut(&mut self) -> &mut SlotReader<'a> {
        &mut self.reader
    }

    pub fn get_bool(&mut self) -> CodecResult<bool> {
        Ok(self.reader.get_bool()?)
    }

    pub fn get_u32(&mut self) -> CodecResult<u32> {
        Ok(self.reader.get_u32()?)
    }

    /// Reads a string. With validation on, malformed UTF-16 is rejected.
    pub fn get_string(&mut self) -> CodecResult<CimString> {
        Ok(CimString::from_units(self.reader.get_string()?))
    }

    /// Reads a name. With validation on, a non-empty name must be legal.
    pub fn get_name(&mut self) -> CodecResult<Name> {
        let units = self.reader.get_string()?;
        if self.validates() && !units.is_empty() && !is_legal_name(&units) {
            return Err(invalid_name(NameKind::Name, &units));
        }
        Ok(Name::from_cim_string(CimString::from_units(units)))
    }

    /// Reads a namespace name. With validation on, a non-empty namespace must
    /// be legal.
    pub fn get_namespace(&mut self) -> CodecResult<NamespaceName> {
        let units = self.reader.get_string()?;
        if self.validates() && !units.is_empty() && !is_legal_namespace_name(&units) {
            return Err(invalid_name(NameKind::Namespace, &units));
        }
        Ok(NamespaceName::from_cim_string(CimString::from_units(units)))
    }

    /// Reads a host. With validation on, it must be empty or `host[:port]`.
    pub fn get_host(&mut self) -> CodecResult<CimString> {
        let host = self.get_string()?;
        if self.validates() {
            let valid = host
                .to_string_checked()
                .is_some_and(|text| is_valid_host(&text));
            if !valid {
                return Err(invalid_name(NameKind::Host, host.units()));
            }
        }
        Ok(host)
    }

    pub(crate) fn check_marker(&mut self, marker: Marker) -> CodecResult<()> {
        self.framing.check_marker(&mut self.reader, marker)?;
        Ok(())
    }

    /// Reads a count slot and checks it against the element limit.
    pub(crate) fn get_count(&mut self) -> CodecResult<usize> {
        let count = self.reader.get_u32()? as usize;
        self.check_elements(count)?;
        Ok(count)
    }

    /// Reads a packed primitive array, checking its length.
    pub(crate) fn get_packed<T: Primitive>(&mut self) -> CodecResult<Vec<T>> {
        let values = self.reader.get_array::<T>()?;
        self.check_elements(values.len())?;
        Ok(values)
    }

    /// Reads a count slot followed by that many elements.
    pub(crate) fn get_seq<T>(
        &mut self,
        mut get: impl FnMut(&mut Self) -> CodecResult<T>,
    ) -> CodecResult<Vec<T>> {
        let count = self.get_count()?;
        let mut items = Vec::with_capacity(prealloc_len::<T>(count, self.remaining()));
        for _ in 0..count {
            items.push(get(self)?);
        }
        Ok(items)
    }

    /// Runs `f` one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> CodecResult<T>,
    ) -> CodecResult<T> {
        let limit = self.limits.max_depth.min(MAX_DEPTH);
        if self.depth >= limit {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::Depth,
                limit,
                actual: self.depth.saturating_add(1),
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn check_elements(&self, count: usize) -> CodecResult<()> {
        if count > self.limits.max_elements {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::Elements,
                limit: self.limits.max_elements,
                actual: count,
            });
        }
        Ok(())
    }
}

/// Elements to reserve for a claimed `count` so the reservation never takes
/// more memory than the `remaining` input bytes. Every element occupies at
/// least one slot on the wire.
fn prealloc_len<T>(count: usize, remaining: usize) -> usize {
    count.min(remaining / std::mem::size_of::<T>().max(SLOT_SIZE))
}

fn invalid_name(kind: NameKind, units: &[u16]) -> CodecError {
    CodecError::InvalidName {
        kind,
        name: String::from_utf16_lossy(units),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::CimEncoder;

    fn encoded(f: impl FnOnce(&mut CimEncoder)) -> Vec<u8> {
        let mut encoder = CimEncoder::new();
        f(&mut encoder);
        encoder.into_bytes()
    }

    #[test]
    fn illegal_name_only_rejected_when_validating() {
        let bytes = encoded(|e| e.put_name(&Name::new("9bad")).unwrap());

        let mut lenient = CimDecoder::new(&bytes, &CodecOptions::default());
        assert_eq!(lenient.get_name().unwrap(), Name::new("9bad"));

        let mut strict = CimDecoder::new(&bytes, &CodecOptions::strict());
        assert_eq!(
            strict.get_name().unwrap_err(),
            CodecError::InvalidName {
                kind: NameKind::Name,
                name: "9bad".to_owned()
            }
        );
    }

    #[test]
    fn empty_name_always_accepted() {
        let bytes = encoded(|e| e.put_name(&Name::null()).unwrap());
        let mut strict = CimDecoder::new(&bytes, &CodecOptions::strict());
        assert!(strict.get_name().unwrap().is_null());
    }

    #[test]
    fn namespace_and_host_validation() {
        let bytes = encoded(|e| {
            e.put_namespace(&NamespaceName::new("root//x")).unwrap();
            e.put_string(&CimString::from("bad host")).unwrap();
        });

        let mut strict = CimDecoder::new(&bytes, &CodecOptions::strict());
        assert!(matches!(
            strict.get_namespace().unwrap_err(),
            CodecError::InvalidName {
                kind: NameKind::Namespace,
                ..
            }
        ));

        let mut lenient = CimDecoder::new(&bytes, &CodecOptions::default());
        lenient.get_namespace().unwrap();
        assert_eq!(lenient.get_host().unwrap(), "bad host");

        let mut strict = CimDecoder::new(&bytes, &CodecOptions::strict());
        strict.reader_mut().get_string().unwrap();
        assert!(matches!(
            strict.get_host().unwrap_err(),
            CodecError::InvalidName {
                kind: NameKind::Host,
                ..
            }
        ));
    }

    #[test]
    fn count_limit() {
        let bytes = encoded(|e| e.put_u32(2000).unwrap());
        let options = CodecOptions::default().with_limits(CodecLimits::for_testing());
        let mut decoder = CimDecoder::new(&bytes, &options);
        assert_eq!(
            decoder.get_count().unwrap_err(),
            CodecError::LimitsExceeded {
                kind: LimitKind::Elements,
                limit: 1024,
                actual: 2000
            }
        );
    }

    #[test]
    fn hostile_count_does_not_preallocate() {
        let bytes = encoded(|e| e.put_u32(u32::MAX).unwrap());
        let options = CodecOptions::default().with_limits(CodecLimits::unlimited());
        let mut decoder = CimDecoder::new(&bytes, &options);
        let err = decoder.get_seq(|d| d.get_u32()).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn configured_depth_is_clamped_to_ceiling() {
        fn descend(d: &mut CimDecoder<'_>, levels: usize) -> CodecResult<()> {
            if levels == 0 {
                Ok(())
            } else {
                d.nested(|d| descend(d, levels - 1))
            }
        }

        let options = CodecOptions::default().with_limits(CodecLimits {
            max_depth: 1000,
            max_elements: 16,
        });
        let mut decoder = CimDecoder::new(&[], &options);
        assert_eq!(descend(&mut decoder, MAX_DEPTH), Ok(()));
        assert_eq!(
            descend(&mut decoder, MAX_DEPTH + 1).unwrap_err(),
            CodecError::LimitsExceeded {
                kind: LimitKind::Depth,
                limit: MAX_DEPTH,
                actual: MAX_DEPTH + 1
            }
        );
    }

    #[test]
    fn reservation_is_bounded_by_input_size() {
        assert_eq!(prealloc_len::<u32>(5, 800), 5);
        assert_eq!(prealloc_len::<u32>(1000, 80), 10);
        assert_eq!(prealloc_len::<[u8; 136]>(1_000_000, 1360), 10);

        let remaining = 1 << 20;
        let reserved = prealloc_len::<model::Property>(usize::MAX, remaining);
        assert!(reserved * std::mem::size_of::<model::Property>() <= remaining);
    }

    #[test]
    fn depth_limit() {
        let options = CodecOptions::default().with_limits(CodecLimits {
            max_depth: 2,
            max_elements: 16,
        });
        let mut decoder = CimDecoder::new(&[], &options);
        let result = decoder.nested(|d| d.nested(|d| d.nested(|_| Ok(()))));
        assert_eq!(
            result.unwrap_err(),
            CodecError::LimitsExceeded {
                kind: LimitKind::Depth,
                limit: 2,
                actual: 3
            }
        );
        decoder.nested(|d| d.nested(|_| Ok(()))).unwrap();
    }
}
