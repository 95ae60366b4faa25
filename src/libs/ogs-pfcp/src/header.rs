//! PFCP Header
//!
//! PFCP message header as specified in 3GPP TS 29.244.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{PfcpError, PfcpResult};
use crate::types::PFCP_VERSION;

/// PFCP Header length without SEID (8 bytes)
pub const PFCP_HEADER_LEN: usize = 8;

/// PFCP Header length with SEID (16 bytes)
pub const PFCP_HEADER_LEN_WITH_SEID: usize = 16;

/// Octets before the part counted by Message Length
pub const PFCP_HEADER_FIXED_LEN: usize = 4;

const FLAG_S: u8 = 0x01;
const FLAG_MP: u8 = 0x02;
const FLAG_FO: u8 = 0x04;

/// PFCP Message Types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PfcpMessageType {
    // Node related messages (no SEID)
    HeartbeatRequest = 1,
    HeartbeatResponse = 2,
    PfdManagementRequest = 3,
    PfdManagementResponse = 4,
    AssociationSetupRequest = 5,
    AssociationSetupResponse = 6,
    AssociationUpdateRequest = 7,
    AssociationUpdateResponse = 8,
    AssociationReleaseRequest = 9,
    AssociationReleaseResponse = 10,
    VersionNotSupportedResponse = 11,
    NodeReportRequest = 12,
    NodeReportResponse = 13,
    SessionSetDeletionRequest = 14,
    SessionSetDeletionResponse = 15,
    SessionSetModificationRequest = 16,
    SessionSetModificationResponse = 17,
    
    // Session related messages (with SEID)
    SessionEstablishmentRequest = 50,
    SessionEstablishmentResponse = 51,
    SessionModificationRequest = 52,
    SessionModificationResponse = 53,
    SessionDeletionRequest = 54,
    SessionDeletionResponse = 55,
    SessionReportRequest = 56,
    SessionReportResponse = 57,
}

impl TryFrom<u8> for PfcpMessageType {
    type Error = PfcpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::HeartbeatRequest),
            2 => Ok(Self::HeartbeatResponse),
            3 => Ok(Self::PfdManagementRequest),
            4 => Ok(Self::PfdManagementResponse),
            5 => Ok(Self::AssociationSetupRequest),
            6 => Ok(Self::AssociationSetupResponse),
            7 => Ok(Self::AssociationUpdateRequest),
            8 => Ok(Self::AssociationUpdateResponse),
            9 => Ok(Self::AssociationReleaseRequest),
            10 => Ok(Self::AssociationReleaseResponse),
            11 => Ok(Self::VersionNotSupportedResponse),
            12 => Ok(Self::NodeReportRequest),
            13 => Ok(Self::NodeReportResponse),
            14 => Ok(Self::SessionSetDeletionRequest),
            15 => Ok(Self::SessionSetDeletionResponse),
            16 => Ok(Self::SessionSetModificationRequest),
            17 => Ok(Self::SessionSetModificationResponse),
            50 => Ok(Self::SessionEstablishmentRequest),
            51 => Ok(Self::SessionEstablishmentResponse),
            52 => Ok(Self::SessionModificationRequest),
            53 => Ok(Self::SessionModificationResponse),
            54 => Ok(Self::SessionDeletionRequest),
            55 => Ok(Self::SessionDeletionResponse),
            56 => Ok(Self::SessionReportRequest),
            57 => Ok(Self::SessionReportResponse),
            _ => Err(PfcpError::InvalidFormat(format!("unknown message type {value}"))),
        }
    }
}

impl From<PfcpMessageType> for u8 {
    fn from(message_type: PfcpMessageType) -> Self {
        message_type as u8
    }
}

impl PfcpMessageType {
    /// Check if this message type requires SEID
    pub fn has_seid(&self) -> bool {
        matches!(
            self,
            Self::SessionEstablishmentRequest
                | Self::SessionEstablishmentResponse
                | Self::SessionModificationRequest
                | Self::SessionModificationResponse
                | Self::SessionDeletionRequest
                | Self::SessionDeletionResponse
                | Self::SessionReportRequest
                | Self::SessionReportResponse
        )
    }

    /// Get the name of the message type
    pub fn name(&self) -> &'static str {
        match self {
            Self::HeartbeatRequest => "Heartbeat Request",
            Self::HeartbeatResponse => "Heartbeat Response",
            Self::PfdManagementRequest => "PFD Management Request",
            Self::PfdManagementResponse => "PFD Management Response",
            Self::AssociationSetupRequest => "Association Setup Request",
            Self::AssociationSetupResponse => "Association Setup Response",
            Self::AssociationUpdateRequest => "Association Update Request",
            Self::AssociationUpdateResponse => "Association Update Response",
            Self::AssociationReleaseRequest => "Association Release Request",
            Self::AssociationReleaseResponse => "Association Release Response",
            Self::VersionNotSupportedResponse => "Version Not Supported Response",
            Self::NodeReportRequest => "Node Report Request",
            Self::NodeReportResponse => "Node Report Response",
            Self::SessionSetDeletionRequest => "Session Set Deletion Request",
            Self::SessionSetDeletionResponse => "Session Set Deletion Response",
            Self::SessionSetModificationRequest => "Session Set Modification Request",
            Self::SessionSetModificationResponse => "Session Set Modification Response",
            Self::SessionEstablishmentRequest => "Session Establishment Request",
            Self::SessionEstablishmentResponse => "Session Establishment Response",
            Self::SessionModificationRequest => "Session Modification Request",
            Self::SessionModificationResponse => "Session Modification Response",
            Self::SessionDeletionRequest => "Session Deletion Request",
            Self::SessionDeletionResponse => "Session Deletion Response",
            Self::SessionReportRequest => "Session Report Request",
            Self::SessionReportResponse => "Session Report Response",
        }
    }
}


/// PFCP Header structure (TS 29.244 Section 7.2.2)
///
/// ```text
///            8     7     6     5     4     3     2     1
/// octet 1  | Version         |Spare|Spare| FO  | MP  |  S  |
/// octet 2  | Message Type                                  |
/// octet 3-4| Message Length                                |
/// octet 5- | SEID (8 octets, only when S = 1)              |
///          | Sequence Number (3 octets)                    |
///          | Message Priority (high nibble, MP = 1) | Spare|
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PfcpHeader {
    /// PFCP version (should be 1)
    pub version: u8,
    /// Follow On flag: another message follows in the same datagram
    pub follow_on: bool,
    /// Message type, kept raw so unknown types survive decoding
    pub message_type: u8,
    /// Message length (excluding first 4 bytes)
    pub length: u16,
    /// Session Endpoint Identifier; present when the S flag is set
    pub seid: Option<u64>,
    /// Sequence number (24 bits)
    pub sequence_number: u32,
    /// Message priority; present when the MP flag is set
    pub priority: Option<u8>,
}

impl PfcpHeader {
    /// Create a new PFCP header without SEID, with an empty body
    pub fn new(message_type: impl Into<u8>, sequence_number: u32) -> Self {
        Self {
            version: PFCP_VERSION,
            follow_on: false,
            message_type: message_type.into(),
            length: (PFCP_HEADER_LEN - PFCP_HEADER_FIXED_LEN) as u16,
            seid: None,
            sequence_number: sequence_number & 0x00ff_ffff,
            priority: None,
        }
    }

    /// Create a new PFCP header with SEID, with an empty body
    pub fn new_with_seid(message_type: impl Into<u8>, seid: u64, sequence_number: u32) -> Self {
        Self {
            seid: Some(seid),
            length: (PFCP_HEADER_LEN_WITH_SEID - PFCP_HEADER_FIXED_LEN) as u16,
            ..Self::new(message_type, sequence_number)
        }
    }

    /// Known message type, if any
    pub fn kind(&self) -> Option<PfcpMessageType> {
        PfcpMessageType::try_from(self.message_type).ok()
    }

    /// Get the header length
    pub fn header_len(&self) -> usize {
        if self.seid.is_some() {
            PFCP_HEADER_LEN_WITH_SEID
        } else {
            PFCP_HEADER_LEN
        }
    }

    /// Encode the header to bytes
    pub fn encode(&self, buf: &mut BytesMut) {
        let mut flags = (self.version & 0x07) << 5;
        if self.follow_on {
            flags |= FLAG_FO;
        }
        if self.priority.is_some() {
            flags |= FLAG_MP;
        }
        if self.seid.is_some() {
            flags |= FLAG_S;
        }
        buf.put_u8(flags);
        buf.put_u8(self.message_type);
        buf.put_u16(self.length);

        if let Some(seid) = self.seid {
            buf.put_u64(seid);
        }

        // Sequence number (3 bytes)
        let seq_bytes = self.sequence_number.to_be_bytes();
        buf.put_slice(&seq_bytes[1..4]);

        buf.put_u8(self.priority.map_or(0, |p| (p & 0x0f) << 4));
    }

    /// Decode header from bytes, leaving `buf` at the first IE.
    ///
    /// On error `buf` is left untouched.
    pub fn decode(buf: &mut Bytes) -> PfcpResult<Self> {
        let mut cur = buf.clone();
        if cur.remaining() < PFCP_HEADER_FIXED_LEN {
            return Err(PfcpError::short(PFCP_HEADER_FIXED_LEN, cur.remaining()));
        }

        let flags = cur.get_u8();
        let version = (flags >> 5) & 0x07;
        if version != PFCP_VERSION {
            return Err(PfcpError::VersionNotSupported(version));
        }
        let has_seid = flags & FLAG_S != 0;
        let has_priority = flags & FLAG_MP != 0;
        let follow_on = flags & FLAG_FO != 0;

        let message_type = cur.get_u8();
        let length = cur.get_u16();

        let min_remaining = if has_seid { 12 } else { 4 };
        if (length as usize) < min_remaining {
            return Err(PfcpError::InvalidFormat(format!(
                "message length {length} shorter than header ({min_remaining})"
            )));
        }
        if cur.remaining() < min_remaining {
            return Err(PfcpError::short(min_remaining, cur.remaining()));
        }

        let seid = has_seid.then(|| cur.get_u64());

        // Sequence number (3 bytes)
        let mut seq_bytes = [0u8; 4];
        cur.copy_to_slice(&mut seq_bytes[1..4]);
        let sequence_number = u32::from_be_bytes(seq_bytes);

        let last_byte = cur.get_u8();
        let priority = has_priority.then_some((last_byte >> 4) & 0x0f);

        *buf = cur;
        Ok(Self {
            version,
            follow_on,
            message_type,
            length,
            seid,
            sequence_number,
            priority,
        })
    }

    /// Length of the body after the header, derived from Message Length
    pub fn body_len(&self) -> usize {
        (self.length as usize + PFCP_HEADER_FIXED_LEN).saturating_sub(self.header_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_encode_decode_no_seid() {
        let mut header = PfcpHeader::new(PfcpMessageType::HeartbeatRequest, 12345);
        header.length = 4;
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        assert_eq!(buf.len(), PFCP_HEADER_LEN);
        assert_eq!(buf[0], 0x20);

        let mut bytes = buf.freeze();
        let decoded = PfcpHeader::decode(&mut bytes).unwrap();

        assert_eq!(decoded.version, PFCP_VERSION);
        assert_eq!(decoded.kind(), Some(PfcpMessageType::HeartbeatRequest));
        assert_eq!(decoded.sequence_number, 12345);
        assert!(decoded.seid.is_none());
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_new_header_round_trips_without_patching_length() {
        let header = PfcpHeader::new(PfcpMessageType::HeartbeatRequest, 1);
        assert_eq!(header.length, 4);
        assert_eq!(header.body_len(), 0);
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        assert_eq!(PfcpHeader::decode(&mut buf.freeze()).unwrap(), header);

        let header = PfcpHeader::new_with_seid(PfcpMessageType::SessionDeletionRequest, 9, 2);
        assert_eq!(header.length, 12);
        assert_eq!(header.body_len(), 0);
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        assert_eq!(PfcpHeader::decode(&mut buf.freeze()).unwrap(), header);
    }

    #[test]
    fn test_header_decode_error_leaves_buffer() {
        // S flag set but too few octets for the SEID
        let mut truncated = Bytes::from_static(&[0x21, 0x32, 0x00, 0x0c, 0, 0, 0, 0]);
        assert!(PfcpHeader::decode(&mut truncated).is_err());
        assert_eq!(truncated.len(), 8);

        let mut bad_len = Bytes::from_static(&[0x20, 0x01, 0x00, 0x02, 0, 0, 1, 0]);
        assert!(PfcpHeader::decode(&mut bad_len).is_err());
        assert_eq!(bad_len.len(), 8);
    }

    #[test]
    fn test_header_encode_decode_with_seid() {
        let mut header = PfcpHeader::new_with_seid(
            PfcpMessageType::SessionEstablishmentRequest,
            0x123456789ABCDEF0,
            54321,
        );
        header.length = 12;
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        assert_eq!(buf.len(), PFCP_HEADER_LEN_WITH_SEID);
        assert_eq!(buf[0], 0x21);

        let mut bytes = buf.freeze();
        let decoded = PfcpHeader::decode(&mut bytes).unwrap();

        assert_eq!(decoded, header);
        assert_eq!(decoded.seid, Some(0x123456789ABCDEF0));
        assert_eq!(decoded.body_len(), 0);
    }

    #[test]
    fn test_header_priority_and_follow_on() {
        let mut header = PfcpHeader::new(PfcpMessageType::HeartbeatResponse, 7);
        header.length = 4;
        header.priority = Some(0x0a);
        header.follow_on = true;
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        assert_eq!(buf[0], 0x26);
        assert_eq!(buf[7], 0xa0);

        let decoded = PfcpHeader::decode(&mut buf.freeze()).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_unknown_message_type_preserved() {
        let mut bytes = Bytes::from_static(&[0x20, 0xc8, 0x00, 0x04, 0x00, 0x00, 0x01, 0x00]);
        let decoded = PfcpHeader::decode(&mut bytes).unwrap();
        assert_eq!(decoded.message_type, 200);
        assert!(decoded.kind().is_none());
    }

    #[test]
    fn test_header_decode_errors() {
        let mut short = Bytes::from_static(&[0x20, 0x01]);
        assert!(PfcpHeader::decode(&mut short).unwrap_err().is_truncation());

        let mut version = Bytes::from_static(&[0x40, 0x01, 0x00, 0x04, 0, 0, 1, 0]);
        assert_eq!(PfcpHeader::decode(&mut version).unwrap_err(), PfcpError::VersionNotSupported(2));

        // S flag set but too few octets for the SEID
        let mut truncated = Bytes::from_static(&[0x21, 0x32, 0x00, 0x0c, 0, 0, 0, 0]);
        assert!(PfcpHeader::decode(&mut truncated).unwrap_err().is_truncation());

        // Message Length smaller than the rest of the header
        let mut bad_len = Bytes::from_static(&[0x20, 0x01, 0x00, 0x02, 0, 0, 1, 0]);
        assert!(matches!(
            PfcpHeader::decode(&mut bad_len),
            Err(PfcpError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_message_type_has_seid() {
        assert!(!PfcpMessageType::HeartbeatRequest.has_seid());
        assert!(!PfcpMessageType::AssociationSetupRequest.has_seid());
        assert!(PfcpMessageType::SessionEstablishmentRequest.has_seid());
        assert!(PfcpMessageType::SessionModificationRequest.has_seid());
        assert_eq!(PfcpMessageType::SessionDeletionResponse.name(), "Session Deletion Response");
    }
}
