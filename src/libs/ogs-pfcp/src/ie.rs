//! PFCP Information Elements
//!
//! Generic IE encoding/decoding as specified in 3GPP TS 29.244 Section 8.1.1.
//!
//! ```text
//! +--------+--------+--------+--------+--------+--------+---------------+
//! |      Type       |     Length      | Enterprise ID   |   Payload ... |
//! +--------+--------+--------+--------+--------+--------+---------------+
//!                                      (vendor-specific only)
//! ```
//!
//! `Length` counts every octet after itself, Enterprise ID included. Whether
//! the payload of an IE is a run of child IEs is decided by a
//! [`GroupedIeClassifier`], not by the bytes.

use std::borrow::Cow;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::classifier::GroupedIeClassifier;
use crate::error::{PfcpError, PfcpResult};
use crate::ie_type;

/// Type + Length
pub const IE_HEADER_LEN: usize = 4;

/// Enterprise ID of vendor-specific IEs
pub const ENTERPRISE_ID_LEN: usize = 2;

/// Deepest grouped nesting accepted by the decoder
pub const MAX_IE_NESTING_DEPTH: usize = 32;

/// PFCP IE Header (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IeHeader {
    pub ie_type: u16,
    pub length: u16,
}

impl IeHeader {
    pub const LEN: usize = IE_HEADER_LEN;

    pub fn new(ie_type: u16, length: u16) -> Self {
        Self { ie_type, length }
    }

    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16(self.ie_type);
        buf.put_u16(self.length);
    }

    /// Read the header at the start of `buf` without consuming it
    pub fn decode(buf: &[u8]) -> PfcpResult<Self> {
        if buf.len() < Self::LEN {
            return Err(PfcpError::short(Self::LEN, buf.len()));
        }
        let mut cursor = &buf[..Self::LEN];
        Ok(Self {
            ie_type: cursor.get_u16(),
            length: cursor.get_u16(),
        })
    }
}

/// Content of an IE: raw octets, or child IEs in wire order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IeValue {
    Scalar(Bytes),
    Grouped(Vec<Ie>),
}

/// A PFCP Information Element.
///
/// Decoded payloads are slices of the buffer handed to the decoder; `Bytes`
/// reference counting keeps that buffer alive while any IE points into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ie {
    ie_type: u16,
    length: u16,
    enterprise_id: u16,
    value: IeValue,
}

impl Ie {
    /// Scalar IE. A type with the vendor bit set gets Enterprise ID 0.
    pub fn new(ie_type: u16, payload: impl Into<Bytes>) -> Self {
        Self::build(ie_type, 0, IeValue::Scalar(payload.into()))
    }

    /// Grouped IE holding `children` in the given order
    pub fn new_grouped(ie_type: u16, children: Vec<Ie>) -> Self {
        Self::build(ie_type, 0, IeValue::Grouped(children))
    }

    /// Scalar vendor-specific IE; the vendor bit is forced on `ie_type`
    pub fn new_vendor_specific(ie_type: u16, enterprise_id: u16, payload: impl Into<Bytes>) -> Self {
        Self::build(
            ie_type | ie_type::VENDOR_SPECIFIC_BIT,
            enterprise_id,
            IeValue::Scalar(payload.into()),
        )
    }

    /// Grouped vendor-specific IE; the vendor bit is forced on `ie_type`
    pub fn new_grouped_vendor_specific(ie_type: u16, enterprise_id: u16, children: Vec<Ie>) -> Self {
        Self::build(
            ie_type | ie_type::VENDOR_SPECIFIC_BIT,
            enterprise_id,
            IeValue::Grouped(children),
        )
    }

    fn build(ie_type: u16, enterprise_id: u16, value: IeValue) -> Self {
        let mut ie = Self {
            ie_type,
            length: 0,
            enterprise_id,
            value,
        };
        ie.set_length();
        ie
    }

    // Content that overflows the length field is rejected at encode time.
    fn set_length(&mut self) {
        let content = self.marshal_len() - IE_HEADER_LEN;
        self.length = u16::try_from(content).unwrap_or(u16::MAX);
    }

    pub fn ie_type(&self) -> u16 {
        self.ie_type
    }

    /// Value of the wire Length field
    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn is_vendor_specific(&self) -> bool {
        ie_type::is_vendor_specific(self.ie_type)
    }

    /// Enterprise ID, for vendor-specific IEs only
    pub fn enterprise_id(&self) -> Option<u16> {
        self.is_vendor_specific().then_some(self.enterprise_id)
    }

    /// Whether this IE holds child IEs
    pub fn is_grouped(&self) -> bool {
        matches!(self.value, IeValue::Grouped(_))
    }

    pub fn value(&self) -> &IeValue {
        &self.value
    }

    /// Payload octets. For a grouped IE this is the encoding of its children.
    pub fn payload(&self) -> Bytes {
        match &self.value {
            IeValue::Scalar(payload) => payload.clone(),
            IeValue::Grouped(children) => {
                let mut buf = BytesMut::with_capacity(self.content_len());
                for child in children {
                    child.write(&mut buf);
                }
                buf.freeze()
            }
        }
    }

    /// Children of a grouped IE; empty for a scalar IE
    pub fn children(&self) -> &[Ie] {
        match &self.value {
            IeValue::Grouped(children) => children,
            IeValue::Scalar(_) => &[],
        }
    }

    /// Children of a grouped IE, or the payload of a scalar IE reparsed as IEs.
    ///
    /// Vendor-specific payloads often reuse the generic IE format even when no
    /// classifier knows the type; this is the best-effort way to look inside.
    pub fn child_ies(&self) -> PfcpResult<Cow<'_, [Ie]>> {
        self.child_ies_with(GroupedIeClassifier::global())
    }

    pub fn child_ies_with(&self, classifier: &GroupedIeClassifier) -> PfcpResult<Cow<'_, [Ie]>> {
        match &self.value {
            IeValue::Grouped(children) => Ok(Cow::Borrowed(children.as_slice())),
            IeValue::Scalar(payload) => match parse_multi_at(payload, classifier, 1) {
                Ok(children) => Ok(Cow::Owned(children)),
                Err(e) => {
                    if self.is_vendor_specific() {
                        log::debug!(
                            "Vendor IE {:#06x} payload is not a run of IEs: {}",
                            self.ie_type,
                            e
                        );
                    }
                    Err(e)
                }
            },
        }
    }

    // ------------------------------------------------------------------
    // Decoding
    // ------------------------------------------------------------------

    /// Decode one IE from the start of `buf` using the global classifier.
    ///
    /// `buf` is copied once; use [`Ie::parse_bytes`] to decode without copying.
    /// Bytes after the first IE are ignored.
    pub fn parse(buf: &[u8]) -> PfcpResult<Self> {
        Self::parse_bytes(&Bytes::copy_from_slice(buf))
    }

    /// Zero-copy decode: payloads of the result share `buf`'s storage
    pub fn parse_bytes(buf: &Bytes) -> PfcpResult<Self> {
        Self::parse_with(buf, GroupedIeClassifier::global())
    }

    /// Decode one IE with an explicit classifier
    pub fn parse_with(buf: &Bytes, classifier: &GroupedIeClassifier) -> PfcpResult<Self> {
        parse_at(buf, classifier, 0)
    }

    /// Decode a back-to-back run of IEs filling `buf` entirely
    pub fn parse_multi(buf: &[u8]) -> PfcpResult<Vec<Self>> {
        Self::parse_multi_bytes(&Bytes::copy_from_slice(buf))
    }

    pub fn parse_multi_bytes(buf: &Bytes) -> PfcpResult<Vec<Self>> {
        Self::parse_multi_with(buf, GroupedIeClassifier::global())
    }

    pub fn parse_multi_with(buf: &Bytes, classifier: &GroupedIeClassifier) -> PfcpResult<Vec<Self>> {
        parse_multi_at(buf, classifier, 0)
    }

    // ------------------------------------------------------------------
    // Encoding
    // ------------------------------------------------------------------

    /// Encoded size, recomputed from the content on every call
    pub fn marshal_len(&self) -> usize {
        IE_HEADER_LEN + self.content_len()
    }

    // Octets counted by the Length field
    fn content_len(&self) -> usize {
        let vendor = if self.is_vendor_specific() { ENTERPRISE_ID_LEN } else { 0 };
        let payload = match &self.value {
            IeValue::Scalar(payload) => payload.len(),
            IeValue::Grouped(children) => children.iter().map(Ie::marshal_len).sum(),
        };
        vendor + payload
    }

    fn checked_marshal_len(&self) -> PfcpResult<usize> {
        let content = self.content_len();
        if content > u16::MAX as usize {
            return Err(PfcpError::InvalidLength {
                ie_type: self.ie_type,
                length: content,
            });
        }
        Ok(IE_HEADER_LEN + content)
    }

    /// Encode into a freshly allocated buffer
    pub fn marshal(&self) -> PfcpResult<Bytes> {
        let mut buf = BytesMut::with_capacity(self.marshal_len());
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Encode into `dst`, returning the number of bytes written
    pub fn marshal_to(&self, dst: &mut [u8]) -> PfcpResult<usize> {
        let needed = self.checked_marshal_len()?;
        if dst.len() < needed {
            return Err(PfcpError::BufferTooSmall {
                needed,
                available: dst.len(),
            });
        }
        let mut cursor = &mut dst[..needed];
        self.write(&mut cursor);
        Ok(needed)
    }

    /// Append the encoding to `buf`
    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        let needed = self.checked_marshal_len()?;
        buf.reserve(needed);
        self.write(buf);
        Ok(())
    }

    // Children are strictly smaller than their parent, so once the outermost
    // length is known to fit every cached length below it is exact.
    fn write<B: BufMut>(&self, buf: &mut B) {
        IeHeader::new(self.ie_type, self.length).encode(buf);
        if self.is_vendor_specific() {
            buf.put_u16(self.enterprise_id);
        }
        match &self.value {
            IeValue::Scalar(payload) => buf.put_slice(payload),
            IeValue::Grouped(children) => {
                for child in children {
                    child.write(buf);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append children to a grouped IE. No effect on a scalar IE.
    pub fn add(&mut self, ies: impl IntoIterator<Item = Ie>) {
        if let IeValue::Grouped(children) = &mut self.value {
            children.extend(ies);
            self.set_length();
        }
    }

    /// Remove every child of type `ie_type`, returning how many were removed.
    /// No effect on a scalar IE.
    pub fn remove(&mut self, ie_type: u16) -> usize {
        let removed = match &mut self.value {
            IeValue::Grouped(children) => {
                let before = children.len();
                children.retain(|c| c.ie_type != ie_type);
                before - children.len()
            }
            IeValue::Scalar(_) => return 0,
        };
        self.set_length();
        removed
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// First direct child of type `ie_type`
    pub fn find_by_type(&self, ie_type: u16) -> PfcpResult<&Ie> {
        match &self.value {
            IeValue::Grouped(children) => children
                .iter()
                .find(|c| c.ie_type == ie_type)
                .ok_or(PfcpError::IeNotFound(ie_type)),
            IeValue::Scalar(_) => Err(PfcpError::InvalidIeType(self.ie_type)),
        }
    }

    /// Every direct child of type `ie_type`, in wire order
    pub fn find_all_by_type(&self, ie_type: u16) -> impl Iterator<Item = &Ie> + '_ {
        self.children().iter().filter(move |c| c.ie_type == ie_type)
    }

    /// First IE of type `ie_type` below this one, depth first
    pub fn find_descendant(&self, ie_type: u16) -> Option<&Ie> {
        self.children().iter().find_map(|c| {
            if c.ie_type == ie_type {
                Some(c)
            } else {
                c.find_descendant(ie_type)
            }
        })
    }

    // ------------------------------------------------------------------
    // Scalar readers
    // ------------------------------------------------------------------

    /// Scalar payload, or an invalid-type error for a grouped IE
    pub fn value_as_bytes(&self) -> PfcpResult<&Bytes> {
        match &self.value {
            IeValue::Scalar(payload) => Ok(payload),
            IeValue::Grouped(_) => Err(PfcpError::InvalidIeType(self.ie_type)),
        }
    }

    fn value_with_len(&self, needed: usize) -> PfcpResult<&[u8]> {
        let payload = self.value_as_bytes()?;
        if payload.len() < needed {
            return Err(PfcpError::short(needed, payload.len()));
        }
        Ok(&payload[..])
    }

    pub fn value_as_u8(&self) -> PfcpResult<u8> {
        Ok(self.value_with_len(1)?.get_u8())
    }

    pub fn value_as_u16(&self) -> PfcpResult<u16> {
        Ok(self.value_with_len(2)?.get_u16())
    }

    pub fn value_as_u32(&self) -> PfcpResult<u32> {
        Ok(self.value_with_len(4)?.get_u32())
    }

    pub fn value_as_u64(&self) -> PfcpResult<u64> {
        Ok(self.value_with_len(8)?.get_u64())
    }

    /// Payload as text; invalid UTF-8 is replaced
    pub fn value_as_string(&self) -> PfcpResult<String> {
        Ok(String::from_utf8_lossy(self.value_with_len(0)?).into_owned())
    }

    /// Payload as a DNS label encoded name
    pub fn value_as_fqdn(&self) -> PfcpResult<String> {
        crate::types::decode_fqdn(self.value_with_len(0)?)
    }

    /// Whether bit `mask` is set in the payload octet at `index`
    pub fn has_flag(&self, index: usize, mask: u8) -> PfcpResult<bool> {
        let payload = self.value_as_bytes()?;
        payload
            .get(index)
            .map(|octet| octet & mask != 0)
            .ok_or_else(|| PfcpError::short(index.saturating_add(1), payload.len()))
    }
}

fn parse_at(buf: &Bytes, classifier: &GroupedIeClassifier, depth: usize) -> PfcpResult<Ie> {
    let header = IeHeader::decode(buf)?;
    let mut offset = IE_HEADER_LEN;
    let mut payload_len = header.length as usize;
    let mut enterprise_id = 0;

    if ie_type::is_vendor_specific(header.ie_type) {
        let needed = IE_HEADER_LEN + ENTERPRISE_ID_LEN;
        if buf.len() < needed {
            return Err(PfcpError::short(needed, buf.len()));
        }
        if payload_len < ENTERPRISE_ID_LEN {
            return Err(PfcpError::InvalidLength {
                ie_type: header.ie_type,
                length: payload_len,
            });
        }
        enterprise_id = (&buf[IE_HEADER_LEN..needed]).get_u16();
        offset = needed;
        payload_len -= ENTERPRISE_ID_LEN;
    }

    let end = offset + payload_len;
    if buf.len() < end {
        return Err(PfcpError::short(end, buf.len()));
    }
    let payload = buf.slice(offset..end);

    let value = if classifier.is_grouped(header.ie_type) {
        if depth >= MAX_IE_NESTING_DEPTH {
            return Err(PfcpError::NestingTooDeep {
                depth: MAX_IE_NESTING_DEPTH,
            });
        }
        IeValue::Grouped(parse_multi_at(&payload, classifier, depth + 1)?)
    } else {
        IeValue::Scalar(payload)
    };

    Ok(Ie {
        ie_type: header.ie_type,
        length: header.length,
        enterprise_id,
        value,
    })
}

fn parse_multi_at(buf: &Bytes, classifier: &GroupedIeClassifier, depth: usize) -> PfcpResult<Vec<Ie>> {
    let mut ies = Vec::new();
    let mut offset = 0;
    while offset < buf.len() {
        let ie = parse_at(&buf.slice(offset..), classifier, depth)?;
        offset += IE_HEADER_LEN + ie.length as usize;
        ies.push(ie);
    }
    Ok(ies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ie_type::*;

    fn cause_ie(value: u8) -> Ie {
        Ie::new(CAUSE, vec![value])
    }

    fn nested(ie_type: u16, levels: usize) -> Vec<u8> {
        let mut buf = vec![(ie_type >> 8) as u8, ie_type as u8, 0, 0];
        for _ in 1..levels {
            let len = buf.len() as u16;
            let mut outer = vec![(ie_type >> 8) as u8, ie_type as u8, (len >> 8) as u8, len as u8];
            outer.extend_from_slice(&buf);
            buf = outer;
        }
        buf
    }

    #[test]
    fn test_ie_header_encode_decode() {
        let header = IeHeader::new(CAUSE, 1);
        let mut buf = BytesMut::new();
        header.encode(&mut buf);

        let decoded = IeHeader::decode(&buf).unwrap();
        assert_eq!(decoded.ie_type, CAUSE);
        assert_eq!(decoded.length, 1);
    }

    #[test]
    fn test_cause_wire_format() {
        let ie = cause_ie(1);
        assert_eq!(ie.marshal().unwrap().as_ref(), &[0x00, 0x13, 0x00, 0x01, 0x01]);

        let decoded = Ie::parse(&[0x00, 0x13, 0x00, 0x01, 0x01]).unwrap();
        assert_eq!(decoded, ie);
        assert_eq!(decoded.value_as_u8().unwrap(), 1);
    }

    #[test]
    fn test_header_only_ie_is_valid() {
        let ie = Ie::parse(&[0x00, 0x13, 0x00, 0x00]).unwrap();
        assert_eq!(ie.ie_type(), CAUSE);
        assert_eq!(ie.length(), 0);
        assert!(ie.payload().is_empty());
        assert!(ie.value_as_u8().unwrap_err().is_truncation());

        let grouped = Ie::parse(&[0x00, 0x03, 0x00, 0x00]).unwrap();
        assert!(grouped.is_grouped());
        assert!(grouped.children().is_empty());
    }

    #[test]
    fn test_trailing_bytes_ignored_by_parse() {
        let ie = Ie::parse(&[0x00, 0x13, 0x00, 0x01, 0x01, 0xff, 0xff]).unwrap();
        assert_eq!(ie.marshal_len(), 5);
    }

    #[test]
    fn test_declared_length_beyond_buffer() {
        let err = Ie::parse(&[0x00, 0x13, 0xff, 0xff, 0x01]).unwrap_err();
        assert_eq!(err, PfcpError::BufferTooShort { needed: 0xffff + 4, available: 5 });
    }

    #[test]
    fn test_vendor_specific_wire_format() {
        let ie = Ie::new_vendor_specific(300, 0x1234, vec![1, 2, 3]);
        assert_eq!(ie.ie_type(), 0x812c);
        assert_eq!(ie.length(), 5);
        assert_eq!(ie.enterprise_id(), Some(0x1234));

        let wire = ie.marshal().unwrap();
        assert_eq!(wire.as_ref(), &[0x81, 0x2c, 0x00, 0x05, 0x12, 0x34, 1, 2, 3]);

        let decoded = Ie::parse(&wire).unwrap();
        assert_eq!(decoded, ie);
        assert_eq!(decoded.payload().as_ref(), &[1, 2, 3]);
        assert_eq!(decoded.length() as usize, decoded.marshal_len() - IE_HEADER_LEN);
    }

    #[test]
    fn test_vendor_specific_errors() {
        // Header present but no room for the Enterprise ID
        let err = Ie::parse(&[0x81, 0x2c, 0x00, 0x02, 0x12]).unwrap_err();
        assert!(err.is_truncation());

        // Length cannot hold the Enterprise ID
        let err = Ie::parse(&[0x81, 0x2c, 0x00, 0x01, 0x12, 0x34]).unwrap_err();
        assert_eq!(err, PfcpError::InvalidLength { ie_type: 0x812c, length: 1 });

        // Payload shorter than declared
        let err = Ie::parse(&[0x81, 0x2c, 0x00, 0x04, 0x12, 0x34, 0x01]).unwrap_err();
        assert!(err.is_truncation());
    }

    #[test]
    fn test_scalar_ie_has_no_enterprise_id() {
        assert_eq!(cause_ie(1).enterprise_id(), None);
        assert!(!cause_ie(1).is_vendor_specific());
    }

    #[test]
    fn test_grouped_round_trip_and_length() {
        let far = Ie::new_grouped(
            CREATE_FAR,
            vec![
                Ie::new(FAR_ID, vec![0xff, 0xff, 0xff, 0xff]),
                Ie::new(APPLY_ACTION, vec![0x02]),
                Ie::new_grouped(FORWARDING_PARAMETERS, vec![Ie::new(DESTINATION_INTERFACE, vec![0x01])]),
            ],
        );
        assert_eq!(far.length(), 8 + 5 + 9);

        let wire = far.marshal().unwrap();
        assert_eq!(wire.len(), far.marshal_len());
        assert_eq!(&wire[2..4], &far.length().to_be_bytes());

        let decoded = Ie::parse(&wire).unwrap();
        assert_eq!(decoded, far);
        assert_eq!(decoded.children().len(), 3);
        assert!(decoded.children()[2].is_grouped());
    }

    #[test]
    fn test_payload_is_concatenation_of_children() {
        let mut pdr = Ie::new_grouped(CREATE_PDR, vec![Ie::new(PDR_ID, vec![0, 1])]);
        pdr.add([Ie::new(PRECEDENCE, vec![0, 0, 0, 100]), Ie::new(FAR_ID, vec![0, 0, 0, 1])]);

        let mut expected = Vec::new();
        for c in pdr.children() {
            expected.extend_from_slice(&c.marshal().unwrap());
        }
        assert_eq!(pdr.payload().as_ref(), expected.as_slice());
        assert_eq!(pdr.length() as usize, expected.len());
    }

    #[test]
    fn test_add_remove_restores_tree() {
        let original = Ie::new_grouped(CREATE_PDR, vec![Ie::new(PDR_ID, vec![0, 1])]);
        let mut pdr = original.clone();
        pdr.add([Ie::new(FAR_ID, vec![0, 0, 0, 9])]);
        assert_eq!(pdr.children().len(), 2);
        assert_eq!(pdr.length(), 6 + 8);

        assert_eq!(pdr.remove(FAR_ID), 1);
        assert_eq!(pdr, original);
        assert_eq!(pdr.remove(FAR_ID), 0);
    }

    #[test]
    fn test_remove_drops_every_matching_child() {
        let mut ie = Ie::new_grouped(
            CREATE_PDR,
            vec![
                Ie::new(URR_ID, vec![0, 0, 0, 1]),
                Ie::new(PDR_ID, vec![0, 1]),
                Ie::new(URR_ID, vec![0, 0, 0, 2]),
            ],
        );
        assert_eq!(ie.remove(URR_ID), 2);
        assert_eq!(ie.children().len(), 1);
        assert_eq!(ie.length(), 6);
    }

    #[test]
    fn test_mutation_on_scalar_is_noop() {
        let mut ie = cause_ie(1);
        ie.add([Ie::new(PDR_ID, vec![0, 1])]);
        assert_eq!(ie.remove(CAUSE), 0);
        assert_eq!(ie, cause_ie(1));
    }

    #[test]
    fn test_find_by_type() {
        let far = Ie::new_grouped(
            CREATE_FAR,
            vec![
                Ie::new(FAR_ID, vec![0, 0, 0, 1]),
                Ie::new(BAR_ID, vec![7]),
                Ie::new(BAR_ID, vec![8]),
            ],
        );
        assert_eq!(far.find_by_type(BAR_ID).unwrap().value_as_u8().unwrap(), 7);
        assert_eq!(far.find_all_by_type(BAR_ID).count(), 2);
        assert_eq!(far.find_by_type(CAUSE).unwrap_err(), PfcpError::IeNotFound(CAUSE));
        assert_eq!(
            cause_ie(1).find_by_type(CAUSE).unwrap_err(),
            PfcpError::InvalidIeType(CAUSE)
        );
    }

    #[test]
    fn test_find_descendant_depth_first() {
        let pdr = Ie::new_grouped(
            CREATE_PDR,
            vec![
                Ie::new(PDR_ID, vec![0, 1]),
                Ie::new_grouped(PDI, vec![Ie::new(SOURCE_INTERFACE, vec![0])]),
                Ie::new(SOURCE_INTERFACE, vec![1]),
            ],
        );
        let found = pdr.find_descendant(SOURCE_INTERFACE).unwrap();
        assert_eq!(found.value_as_u8().unwrap(), 0);
        assert!(pdr.find_descendant(CAUSE).is_none());
    }

    #[test]
    fn test_parse_multi() {
        let mut wire = cause_ie(1).marshal().unwrap().to_vec();
        wire.extend_from_slice(&Ie::new(RECOVERY_TIME_STAMP, vec![1, 2, 3, 4]).marshal().unwrap());

        let ies = Ie::parse_multi(&wire).unwrap();
        assert_eq!(ies.len(), 2);
        assert_eq!(ies[1].ie_type(), RECOVERY_TIME_STAMP);

        assert!(Ie::parse_multi(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_multi_rejects_trailing_fragment() {
        let wire = cause_ie(1).marshal().unwrap().to_vec();
        for extra in 1..IE_HEADER_LEN {
            let mut buf = wire.clone();
            buf.extend(std::iter::repeat(0u8).take(extra));
            assert!(Ie::parse_multi(&buf).unwrap_err().is_truncation());
        }
    }

    #[test]
    fn test_bad_child_fails_whole_parse() {
        // CreateFAR whose only child claims 4 octets but carries 1
        let wire = [0x00, 0x03, 0x00, 0x05, 0x00, 0x6c, 0x00, 0x04, 0x01];
        assert!(Ie::parse(&wire).unwrap_err().is_truncation());
    }

    #[test]
    fn test_truncated_prefixes_never_decode() {
        let mut samples = vec![
            cause_ie(1),
            Ie::new_vendor_specific(CAUSE, 10415, vec![0xaa; 6]),
            Ie::new_grouped(PDI, vec![Ie::new(SOURCE_INTERFACE, vec![0])]),
        ];
        for t in DEFAULT_GROUPED {
            samples.push(Ie::new_grouped(*t, vec![cause_ie(1), Ie::new(NETWORK_INSTANCE, b"inet".to_vec())]));
        }
        for ie in samples {
            let wire = ie.marshal().unwrap();
            assert_eq!(Ie::parse(&wire).unwrap(), ie);
            for n in 0..wire.len() {
                assert!(Ie::parse(&wire[..n]).is_err(), "type {} prefix {}", ie.ie_type(), n);
            }
        }
    }

    #[test]
    fn test_nesting_depth_limit() {
        // CreatePDR is grouped in the default table
        assert!(Ie::parse(&nested(CREATE_PDR, MAX_IE_NESTING_DEPTH)).is_ok());
        assert_eq!(
            Ie::parse(&nested(CREATE_PDR, MAX_IE_NESTING_DEPTH + 2)).unwrap_err(),
            PfcpError::NestingTooDeep { depth: MAX_IE_NESTING_DEPTH }
        );
    }

    #[test]
    fn test_everything_grouped_classifier_is_bounded() {
        let classifier = GroupedIeClassifier::new();
        classifier.set_strategy(|_| true);
        let buf = Bytes::from(nested(0x4242, 1000));
        assert!(matches!(
            Ie::parse_with(&buf, &classifier),
            Err(PfcpError::NestingTooDeep { .. })
        ));
    }

    #[test]
    fn test_injected_classifier() {
        let classifier = GroupedIeClassifier::empty();
        let wire = Ie::new_grouped(CREATE_FAR, vec![cause_ie(1)]).marshal().unwrap();

        let opaque = Ie::parse_with(&wire, &classifier).unwrap();
        assert!(!opaque.is_grouped());
        assert_eq!(opaque.payload().as_ref(), &[0x00, 0x13, 0x00, 0x01, 0x01]);

        classifier.add_grouped_types(&[CREATE_FAR]);
        let grouped = Ie::parse_with(&wire, &classifier).unwrap();
        assert_eq!(grouped.children(), &[cause_ie(1)]);
    }

    #[test]
    fn test_zero_copy_decode() {
        let wire = Bytes::from_static(&[0x00, 0x16, 0x00, 0x04, b'i', b'n', b'e', b't']);
        let ie = Ie::parse_bytes(&wire).unwrap();
        assert_eq!(ie.value_as_bytes().unwrap().as_ptr(), wire[4..].as_ptr());
    }

    #[test]
    fn test_vendor_payload_best_effort_children() {
        let _ = env_logger::builder().is_test(true).try_init();

        let inner = cause_ie(1).marshal().unwrap();
        let vendor = Ie::new_vendor_specific(500, 10415, inner);
        let children = vendor.child_ies().unwrap();
        assert_eq!(children.as_ref(), &[cause_ie(1)]);

        let junk = Ie::new_vendor_specific(500, 10415, vec![0x00, 0x13, 0x00]);
        assert!(junk.child_ies().is_err());
    }

    #[test]
    fn test_marshal_to() {
        let ie = cause_ie(7);
        let mut small = [0u8; 4];
        assert_eq!(
            ie.marshal_to(&mut small).unwrap_err(),
            PfcpError::BufferTooSmall { needed: 5, available: 4 }
        );

        let mut buf = [0u8; 8];
        assert_eq!(ie.marshal_to(&mut buf).unwrap(), 5);
        assert_eq!(&buf[..5], &[0x00, 0x13, 0x00, 0x01, 0x07]);
    }

    #[test]
    fn test_oversized_payload_rejected_on_encode() {
        let ie = Ie::new(SDF_FILTER, vec![0u8; 70_000]);
        assert!(matches!(ie.marshal(), Err(PfcpError::InvalidLength { .. })));
        let mut buf = BytesMut::new();
        assert!(ie.encode(&mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_value_readers() {
        let ie = Ie::new(F_SEID, vec![0x02, 0, 0, 0, 0, 0, 0, 0x12, 0x34]);
        assert_eq!(ie.value_as_u8().unwrap(), 2);
        assert_eq!(ie.value_as_u16().unwrap(), 0x0200);
        assert!(ie.has_flag(0, 0x02).unwrap());
        assert!(!ie.has_flag(0, 0x01).unwrap());
        assert!(ie.has_flag(9, 0x01).unwrap_err().is_truncation());
        assert!(ie.has_flag(usize::MAX, 0x01).unwrap_err().is_truncation());

        let grouped = Ie::new_grouped(CREATE_PDR, vec![]);
        assert_eq!(grouped.value_as_u8().unwrap_err(), PfcpError::InvalidIeType(CREATE_PDR));
    }
}
