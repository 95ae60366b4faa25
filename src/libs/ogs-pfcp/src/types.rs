//! PFCP Types
//!
//! Value types carried inside PFCP IEs as specified in 3GPP TS 29.244.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{PfcpError, PfcpResult};

/// PFCP Version
pub const PFCP_VERSION: u8 = 1;

/// PFCP UDP port (8805)
pub const PFCP_UDP_PORT: u16 = 8805;

/// PFCP bitrate length (5 bytes uplink + 5 bytes downlink)
pub const PFCP_BITRATE_LEN: usize = 10;

/// Longest DNS label
pub const MAX_FQDN_LABEL_LEN: usize = 63;

/// Seconds between the NTP epoch (1900) and the Unix epoch (1970)
pub const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

/// Gate Status values (TS 29.244 Section 8.2.7)
pub const GATE_OPEN: u8 = 0;
pub const GATE_CLOSED: u8 = 1;

fn ensure(buf: &[u8], needed: usize) -> PfcpResult<()> {
    if buf.len() < needed {
        return Err(PfcpError::short(needed, buf.len()));
    }
    Ok(())
}

/// PFCP Cause Values (TS 29.244 Section 8.2.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PfcpCause {
    RequestAccepted = 1,
    MoreUsageReportToSend = 2,
    RequestRejected = 64,
    SessionContextNotFound = 65,
    MandatoryIeMissing = 66,
    ConditionalIeMissing = 67,
    InvalidLength = 68,
    MandatoryIeIncorrect = 69,
    InvalidForwardingPolicy = 70,
    InvalidFTeidAllocationOption = 71,
    NoEstablishedPfcpAssociation = 72,
    RuleCreationModificationFailure = 73,
    PfcpEntityInCongestion = 74,
    NoResourcesAvailable = 75,
    ServiceNotSupported = 76,
    SystemFailure = 77,
    RedirectionRequested = 78,
}

impl TryFrom<u8> for PfcpCause {
    type Error = PfcpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::RequestAccepted),
            2 => Ok(Self::MoreUsageReportToSend),
            64 => Ok(Self::RequestRejected),
            65 => Ok(Self::SessionContextNotFound),
            66 => Ok(Self::MandatoryIeMissing),
            67 => Ok(Self::ConditionalIeMissing),
            68 => Ok(Self::InvalidLength),
            69 => Ok(Self::MandatoryIeIncorrect),
            70 => Ok(Self::InvalidForwardingPolicy),
            71 => Ok(Self::InvalidFTeidAllocationOption),
            72 => Ok(Self::NoEstablishedPfcpAssociation),
            73 => Ok(Self::RuleCreationModificationFailure),
            74 => Ok(Self::PfcpEntityInCongestion),
            75 => Ok(Self::NoResourcesAvailable),
            76 => Ok(Self::ServiceNotSupported),
            77 => Ok(Self::SystemFailure),
            78 => Ok(Self::RedirectionRequested),
            _ => Err(PfcpError::InvalidFormat(format!("unknown cause {value}"))),
        }
    }
}

impl PfcpCause {
    /// Get the name of the cause
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestAccepted => "Request Accepted",
            Self::MoreUsageReportToSend => "More Usage Report To Send",
            Self::RequestRejected => "Request Rejected",
            Self::SessionContextNotFound => "Session Context Not Found",
            Self::MandatoryIeMissing => "Mandatory IE Missing",
            Self::ConditionalIeMissing => "Conditional IE Missing",
            Self::InvalidLength => "Invalid Length",
            Self::MandatoryIeIncorrect => "Mandatory IE Incorrect",
            Self::InvalidForwardingPolicy => "Invalid Forwarding Policy",
            Self::InvalidFTeidAllocationOption => "Invalid F-TEID Allocation Option",
            Self::NoEstablishedPfcpAssociation => "No Established PFCP Association",
            Self::RuleCreationModificationFailure => "Rule Creation/Modification Failure",
            Self::PfcpEntityInCongestion => "PFCP Entity in Congestion",
            Self::NoResourcesAvailable => "No Resources Available",
            Self::ServiceNotSupported => "Service Not Supported",
            Self::SystemFailure => "System Failure",
            Self::RedirectionRequested => "Redirection Requested",
        }
    }

    /// Check if cause indicates success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::RequestAccepted | Self::MoreUsageReportToSend)
    }
}

/// Source Interface values (TS 29.244 Section 8.2.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SourceInterface {
    #[default]
    Access = 0,
    Core = 1,
    SgiLanN6Lan = 2,
    CpFunction = 3,
    FiveGVnInternal = 4,
}

impl TryFrom<u8> for SourceInterface {
    type Error = PfcpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Upper nibble is spare
        match value & 0x0f {
            0 => Ok(Self::Access),
            1 => Ok(Self::Core),
            2 => Ok(Self::SgiLanN6Lan),
            3 => Ok(Self::CpFunction),
            4 => Ok(Self::FiveGVnInternal),
            v => Err(PfcpError::InvalidFormat(format!("unknown source interface {v}"))),
        }
    }
}

/// Destination Interface values (TS 29.244 Section 8.2.24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DestinationInterface {
    #[default]
    Access = 0,
    Core = 1,
    SgiLanN6Lan = 2,
    CpFunction = 3,
    LiFunction = 4,
    FiveGVnInternal = 5,
}

impl TryFrom<u8> for DestinationInterface {
    type Error = PfcpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value & 0x0f {
            0 => Ok(Self::Access),
            1 => Ok(Self::Core),
            2 => Ok(Self::SgiLanN6Lan),
            3 => Ok(Self::CpFunction),
            4 => Ok(Self::LiFunction),
            5 => Ok(Self::FiveGVnInternal),
            v => Err(PfcpError::InvalidFormat(format!("unknown destination interface {v}"))),
        }
    }
}

/// Node ID Type values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeIdType {
    Ipv4 = 0,
    Ipv6 = 1,
    Fqdn = 2,
}

impl TryFrom<u8> for NodeIdType {
    type Error = PfcpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ipv4),
            1 => Ok(Self::Ipv6),
            2 => Ok(Self::Fqdn),
            _ => Err(PfcpError::InvalidNodeIdType(value)),
        }
    }
}

/// Node ID (TS 29.244 Section 8.2.38)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeId {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Fqdn(String),
}

impl NodeId {
    pub fn node_id_type(&self) -> NodeIdType {
        match self {
            Self::Ipv4(_) => NodeIdType::Ipv4,
            Self::Ipv6(_) => NodeIdType::Ipv6,
            Self::Fqdn(_) => NodeIdType::Fqdn,
        }
    }

    /// Encode to bytes
    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        buf.put_u8(self.node_id_type() as u8);
        match self {
            Self::Ipv4(addr) => buf.put_slice(&addr.octets()),
            Self::Ipv6(addr) => buf.put_slice(&addr.octets()),
            Self::Fqdn(name) => encode_fqdn(name, buf)?,
        }
        Ok(())
    }

    /// Decode from an IE payload
    pub fn decode(buf: &[u8]) -> PfcpResult<Self> {
        ensure(buf, 1)?;
        let node_id_type = NodeIdType::try_from(buf[0] & 0x0f)?;
        let body = &buf[1..];
        match node_id_type {
            NodeIdType::Ipv4 => {
                ensure(body, 4)?;
                Ok(Self::Ipv4(Ipv4Addr::from((&body[..4]).get_u32())))
            }
            NodeIdType::Ipv6 => {
                ensure(body, 16)?;
                Ok(Self::Ipv6(Ipv6Addr::from((&body[..16]).get_u128())))
            }
            NodeIdType::Fqdn => Ok(Self::Fqdn(decode_fqdn(body)?)),
        }
    }
}

impl From<IpAddr> for NodeId {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Self::Ipv4(v4),
            IpAddr::V6(v6) => Self::Ipv6(v6),
        }
    }
}

/// Literal addresses become IP node IDs, anything else an FQDN
impl FromStr for NodeId {
    type Err = PfcpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PfcpError::InvalidFormat("empty node ID".into()));
        }
        match s.parse::<IpAddr>() {
            Ok(addr) => Ok(addr.into()),
            Err(_) => Ok(Self::Fqdn(s.to_string())),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4(addr) => write!(f, "{addr}"),
            Self::Ipv6(addr) => write!(f, "{addr}"),
            Self::Fqdn(name) => f.write_str(name),
        }
    }
}

/// Write `name` as length-prefixed DNS labels without a terminating zero
pub fn encode_fqdn(name: &str, buf: &mut BytesMut) -> PfcpResult<()> {
    for label in name.split('.').filter(|l| !l.is_empty()) {
        if label.len() > MAX_FQDN_LABEL_LEN {
            return Err(PfcpError::InvalidFormat(format!(
                "FQDN label longer than {MAX_FQDN_LABEL_LEN} octets"
            )));
        }
        buf.put_u8(label.len() as u8);
        buf.put_slice(label.as_bytes());
    }
    Ok(())
}

/// Read DNS labels back into a dotted name. A terminating zero is accepted.
pub fn decode_fqdn(buf: &[u8]) -> PfcpResult<String> {
    let mut cursor = buf;
    let mut fqdn = String::new();
    while cursor.has_remaining() {
        let len = cursor.get_u8() as usize;
        if len == 0 {
            break;
        }
        ensure(cursor, len)?;
        if !fqdn.is_empty() {
            fqdn.push('.');
        }
        fqdn.push_str(&String::from_utf8_lossy(&cursor[..len]));
        cursor.advance(len);
    }
    Ok(fqdn)
}

/// F-SEID (Fully Qualified SEID) structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FSeid {
    pub seid: u64,
    pub ipv4: Option<Ipv4Addr>,
    pub ipv6: Option<Ipv6Addr>,
}

impl FSeid {
    pub fn new(seid: u64, ipv4: Option<Ipv4Addr>, ipv6: Option<Ipv6Addr>) -> Self {
        Self { seid, ipv4, ipv6 }
    }

    /// Encode to bytes
    pub fn encode(&self, buf: &mut BytesMut) {
        let flags = ((self.ipv6.is_some() as u8) << 1) | (self.ipv4.is_some() as u8);
        buf.put_u8(flags);
        buf.put_u64(self.seid);
        if let Some(addr) = self.ipv4 {
            buf.put_slice(&addr.octets());
        }
        if let Some(addr) = self.ipv6 {
            buf.put_slice(&addr.octets());
        }
    }

    /// Decode from an IE payload
    pub fn decode(buf: &[u8]) -> PfcpResult<Self> {
        ensure(buf, 9)?;
        let mut cursor = buf;
        let flags = cursor.get_u8();
        let seid = cursor.get_u64();

        let ipv4 = if flags & 0x01 != 0 {
            ensure(cursor, 4)?;
            Some(Ipv4Addr::from(cursor.get_u32()))
        } else {
            None
        };
        let ipv6 = if flags & 0x02 != 0 {
            ensure(cursor, 16)?;
            Some(Ipv6Addr::from(cursor.get_u128()))
        } else {
            None
        };

        Ok(Self { seid, ipv4, ipv6 })
    }
}

/// F-TEID (Fully Qualified TEID) structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FTeid {
    pub teid: u32,
    pub ipv4: Option<Ipv4Addr>,
    pub ipv6: Option<Ipv6Addr>,
    /// CHOOSE: UP function allocates the TEID
    pub choose: bool,
    pub choose_id: Option<u8>,
}

impl FTeid {
    pub fn new(teid: u32, ipv4: Option<Ipv4Addr>, ipv6: Option<Ipv6Addr>) -> Self {
        Self {
            teid,
            ipv4,
            ipv6,
            choose: false,
            choose_id: None,
        }
    }

    /// CHOOSE F-TEID, for allocation by the UP function
    pub fn new_choose(ipv4: bool, ipv6: bool, choose_id: Option<u8>) -> Self {
        Self {
            teid: 0,
            ipv4: ipv4.then_some(Ipv4Addr::UNSPECIFIED),
            ipv6: ipv6.then_some(Ipv6Addr::UNSPECIFIED),
            choose: true,
            choose_id,
        }
    }

    /// Encode to bytes. With CHOOSE set only the flags and CHOOSE ID follow.
    pub fn encode(&self, buf: &mut BytesMut) {
        let flags = ((self.choose_id.is_some() as u8) << 3)
            | ((self.choose as u8) << 2)
            | ((self.ipv6.is_some() as u8) << 1)
            | (self.ipv4.is_some() as u8);
        buf.put_u8(flags);
        if self.choose {
            if let Some(id) = self.choose_id {
                buf.put_u8(id);
            }
            return;
        }
        buf.put_u32(self.teid);
        if let Some(addr) = self.ipv4 {
            buf.put_slice(&addr.octets());
        }
        if let Some(addr) = self.ipv6 {
            buf.put_slice(&addr.octets());
        }
    }

    /// Decode from an IE payload
    pub fn decode(buf: &[u8]) -> PfcpResult<Self> {
        ensure(buf, 1)?;
        let mut cursor = buf;
        let flags = cursor.get_u8();
        let has_v4 = flags & 0x01 != 0;
        let has_v6 = flags & 0x02 != 0;
        let choose = flags & 0x04 != 0;
        let has_chid = flags & 0x08 != 0;

        if choose {
            let choose_id = if has_chid {
                ensure(cursor, 1)?;
                Some(cursor.get_u8())
            } else {
                None
            };
            return Ok(Self::new_choose(has_v4, has_v6, choose_id));
        }

        ensure(cursor, 4)?;
        let teid = cursor.get_u32();
        let ipv4 = if has_v4 {
            ensure(cursor, 4)?;
            Some(Ipv4Addr::from(cursor.get_u32()))
        } else {
            None
        };
        let ipv6 = if has_v6 {
            ensure(cursor, 16)?;
            Some(Ipv6Addr::from(cursor.get_u128()))
        } else {
            None
        };

        Ok(Self::new(teid, ipv4, ipv6))
    }
}

/// Apply Action flags (TS 29.244 Section 8.2.26)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyAction {
    pub drop: bool,
    pub forw: bool,  // Forward
    pub buff: bool,  // Buffer
    pub nocp: bool,  // Notify CP function
    pub dupl: bool,  // Duplicate
    pub ipma: bool,  // IP Multicast Accept
    pub ipmd: bool,  // IP Multicast Deny
    pub dfrt: bool,  // Duplicate for Redundant Transmission
    pub edrt: bool,  // Eliminate Duplicate for Redundant Transmission
    pub bdpn: bool,  // Buffered Downlink Packet Notification
    pub ddpn: bool,  // Discarded Downlink Packet Notification
}

impl ApplyAction {
    // Octet 5
    pub const DROP: u8 = 0x01;
    pub const FORW: u8 = 0x02;
    pub const BUFF: u8 = 0x04;
    pub const NOCP: u8 = 0x08;
    pub const DUPL: u8 = 0x10;
    pub const IPMA: u8 = 0x20;
    pub const IPMD: u8 = 0x40;
    pub const DFRT: u8 = 0x80;
    // Octet 6
    pub const EDRT: u8 = 0x01;
    pub const BDPN: u8 = 0x02;
    pub const DDPN: u8 = 0x04;

    pub fn drop() -> Self {
        Self { drop: true, ..Default::default() }
    }

    pub fn forward() -> Self {
        Self { forw: true, ..Default::default() }
    }

    pub fn buffer() -> Self {
        Self { buff: true, ..Default::default() }
    }

    /// Wire octets; the second octet is only emitted when one of its flags is set
    pub fn to_bytes(&self) -> Vec<u8> {
        let value = self.encode();
        if value > 0xff {
            vec![value as u8, (value >> 8) as u8]
        } else {
            vec![value as u8]
        }
    }

    /// Parse one or two wire octets
    pub fn from_bytes(buf: &[u8]) -> PfcpResult<Self> {
        match buf {
            [] => Err(PfcpError::short(1, 0)),
            [first] => Ok(Self::decode(*first as u16)),
            [first, second, ..] => Ok(Self::decode(u16::from_be_bytes([*second, *first]))),
        }
    }

    /// Flags as a u16 with octet 6 in the high byte
    pub fn encode(&self) -> u16 {
        ((self.ddpn as u16) << 10) | ((self.bdpn as u16) << 9)
            | ((self.edrt as u16) << 8) | ((self.dfrt as u16) << 7)
            | ((self.ipmd as u16) << 6) | ((self.ipma as u16) << 5)
            | ((self.dupl as u16) << 4) | ((self.nocp as u16) << 3)
            | ((self.buff as u16) << 2) | ((self.forw as u16) << 1)
            | (self.drop as u16)
    }

    pub fn decode(value: u16) -> Self {
        Self {
            drop: value & 0x01 != 0,
            forw: (value >> 1) & 0x01 != 0,
            buff: (value >> 2) & 0x01 != 0,
            nocp: (value >> 3) & 0x01 != 0,
            dupl: (value >> 4) & 0x01 != 0,
            ipma: (value >> 5) & 0x01 != 0,
            ipmd: (value >> 6) & 0x01 != 0,
            dfrt: (value >> 7) & 0x01 != 0,
            edrt: (value >> 8) & 0x01 != 0,
            bdpn: (value >> 9) & 0x01 != 0,
            ddpn: (value >> 10) & 0x01 != 0,
        }
    }
}

impl From<ApplyAction> for u16 {
    fn from(action: ApplyAction) -> Self {
        action.encode()
    }
}

/// Bitrate structure (MBR/GBR), in kbps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitrate {
    pub uplink: u64,
    pub downlink: u64,
}

impl Bitrate {
    pub fn new(uplink: u64, downlink: u64) -> Self {
        Self { uplink, downlink }
    }

    /// Encode as two 5-byte big-endian values; bits above 40 are dropped
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_uint(self.uplink & 0xff_ffff_ffff, 5);
        buf.put_uint(self.downlink & 0xff_ffff_ffff, 5);
    }

    pub fn decode(buf: &[u8]) -> PfcpResult<Self> {
        ensure(buf, PFCP_BITRATE_LEN)?;
        let mut cursor = buf;
        Ok(Self {
            uplink: cursor.get_uint(5),
            downlink: cursor.get_uint(5),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_ipv4() {
        let node_id = NodeId::Ipv4(Ipv4Addr::new(127, 0, 0, 1));
        let mut buf = BytesMut::new();
        node_id.encode(&mut buf).unwrap();
        assert_eq!(buf.as_ref(), &[0x00, 127, 0, 0, 1]);
        assert_eq!(NodeId::decode(&buf).unwrap(), node_id);
    }

    #[test]
    fn test_node_id_ipv6() {
        let node_id: NodeId = "2001::1".parse().unwrap();
        let mut buf = BytesMut::new();
        node_id.encode(&mut buf).unwrap();
        assert_eq!(buf.len(), 17);
        assert_eq!(buf[0], 0x01);
        assert_eq!(NodeId::decode(&buf).unwrap(), node_id);
    }

    #[test]
    fn test_node_id_fqdn() {
        let node_id: NodeId = "go-pfcp.epc.3gppnetwork.org".parse().unwrap();
        assert_eq!(node_id.node_id_type(), NodeIdType::Fqdn);

        let mut buf = BytesMut::new();
        node_id.encode(&mut buf).unwrap();
        assert_eq!(buf[0], 0x02);
        assert_eq!(&buf[1..9], b"\x07go-pfcp");
        assert_eq!(buf.len(), 1 + 28);
        assert_eq!(NodeId::decode(&buf).unwrap(), node_id);
        assert_eq!(node_id.to_string(), "go-pfcp.epc.3gppnetwork.org");
    }

    #[test]
    fn test_node_id_errors() {
        assert_eq!(NodeId::decode(&[0x03, 1, 2, 3, 4]).unwrap_err(), PfcpError::InvalidNodeIdType(3));
        assert!(NodeId::decode(&[]).unwrap_err().is_truncation());
        assert!(NodeId::decode(&[0x00, 1, 2, 3]).unwrap_err().is_truncation());
        assert!(NodeId::decode(&[0x01, 0, 0]).unwrap_err().is_truncation());
        assert!("".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_fqdn_labels() {
        let mut buf = BytesMut::new();
        encode_fqdn("a.bc", &mut buf).unwrap();
        assert_eq!(buf.as_ref(), b"\x01a\x02bc");

        // Terminating zero tolerated, overrun rejected
        assert_eq!(decode_fqdn(b"\x01a\x02bc\x00").unwrap(), "a.bc");
        assert!(decode_fqdn(b"\x01a\x05bc").unwrap_err().is_truncation());
        assert_eq!(decode_fqdn(b"").unwrap(), "");

        let long = "x".repeat(64);
        assert!(encode_fqdn(&long, &mut BytesMut::new()).is_err());
    }

    #[test]
    fn test_fseid() {
        let fseid = FSeid::new(0x1122334455667788, Some(Ipv4Addr::new(10, 0, 0, 1)), None);
        let mut buf = BytesMut::new();
        fseid.encode(&mut buf);
        assert_eq!(buf.len(), 13);
        assert_eq!(buf[0], 0x01);
        assert_eq!(FSeid::decode(&buf).unwrap(), fseid);

        let dual = FSeid::new(1, Some(Ipv4Addr::LOCALHOST), Some(Ipv6Addr::LOCALHOST));
        let mut buf = BytesMut::new();
        dual.encode(&mut buf);
        assert_eq!(buf.len(), 29);
        assert_eq!(FSeid::decode(&buf).unwrap(), dual);
        assert!(FSeid::decode(&buf[..28]).unwrap_err().is_truncation());
    }

    #[test]
    fn test_fteid() {
        let fteid = FTeid::new(0x12345678, Some(Ipv4Addr::new(192, 168, 0, 1)), None);
        let mut buf = BytesMut::new();
        fteid.encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0x01, 0x12, 0x34, 0x56, 0x78, 192, 168, 0, 1]);
        assert_eq!(FTeid::decode(&buf).unwrap(), fteid);

        let choose = FTeid::new_choose(true, false, Some(5));
        let mut buf = BytesMut::new();
        choose.encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0x0d, 5]);
        assert_eq!(FTeid::decode(&buf).unwrap(), choose);
    }

    #[test]
    fn test_apply_action_bytes() {
        let action = ApplyAction::buffer();
        assert_eq!(action.to_bytes(), vec![ApplyAction::BUFF]);
        assert_eq!(ApplyAction::from_bytes(&[0x04]).unwrap(), action);

        let action = ApplyAction { forw: true, ddpn: true, ..Default::default() };
        assert_eq!(action.to_bytes(), vec![0x02, ApplyAction::DDPN]);
        assert_eq!(ApplyAction::from_bytes(&[0x02, 0x04]).unwrap(), action);
        assert!(ApplyAction::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_bitrate() {
        let mbr = Bitrate::new(0x01_0000_0002, 1000);
        let mut buf = BytesMut::new();
        mbr.encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0x01, 0, 0, 0, 0x02, 0, 0, 0, 0x03, 0xe8]);
        assert_eq!(Bitrate::decode(&buf).unwrap(), mbr);
        assert!(Bitrate::decode(&buf[..9]).is_err());
    }

    #[test]
    fn test_enum_conversions() {
        assert_eq!(PfcpCause::try_from(1).unwrap(), PfcpCause::RequestAccepted);
        assert!(PfcpCause::RequestAccepted.is_success());
        assert!(PfcpCause::try_from(3).is_err());
        assert_eq!(SourceInterface::try_from(0xf1).unwrap(), SourceInterface::Core);
        assert_eq!(DestinationInterface::try_from(4).unwrap(), DestinationInterface::LiFunction);
        assert!(DestinationInterface::try_from(9).is_err());
    }
}
