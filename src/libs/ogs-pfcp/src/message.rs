//! PFCP Messages
//!
//! PFCP message structures and encoding/decoding as specified in 3GPP TS 29.244.
//! Typed messages keep the IEs they know in named slots and every other IE in
//! `other_ies`, in the order received.

use bytes::{Buf, Bytes, BytesMut};

use crate::classifier::GroupedIeClassifier;
use crate::error::{PfcpError, PfcpResult};
use crate::header::{PfcpHeader, PfcpMessageType};
use crate::ie::Ie;
use crate::ie_type::*;

fn fill(slot: &mut Option<Ie>, ie: Ie, other_ies: &mut Vec<Ie>) {
    if slot.is_none() {
        *slot = Some(ie);
    } else {
        other_ies.push(ie);
    }
}

fn unhandled(other_ies: &mut Vec<Ie>, ie: Ie, message: &str) {
    log::debug!("Unhandled IE type {} in {}", ie.ie_type(), message);
    other_ies.push(ie);
}

fn mandatory(slot: Option<Ie>, name: &'static str) -> PfcpResult<Ie> {
    slot.ok_or(PfcpError::MissingMandatoryIe(name))
}

fn encode_ies<'a>(ies: impl IntoIterator<Item = &'a Ie>, buf: &mut BytesMut) -> PfcpResult<()> {
    for ie in ies {
        ie.encode(buf)?;
    }
    Ok(())
}

/// Heartbeat Request message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatRequest {
    pub recovery_time_stamp: Ie,
    pub source_ip_address: Option<Ie>,
    pub other_ies: Vec<Ie>,
}

impl HeartbeatRequest {
    pub fn new(recovery_time_stamp: Ie) -> Self {
        Self {
            recovery_time_stamp,
            source_ip_address: None,
            other_ies: Vec::new(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(
            std::iter::once(&self.recovery_time_stamp)
                .chain(&self.source_ip_address)
                .chain(&self.other_ies),
            buf,
        )
    }

    pub fn from_ies(ies: Vec<Ie>) -> PfcpResult<Self> {
        let mut recovery_time_stamp = None;
        let mut source_ip_address = None;
        let mut other_ies = Vec::new();

        for ie in ies {
            match ie.ie_type() {
                RECOVERY_TIME_STAMP => fill(&mut recovery_time_stamp, ie, &mut other_ies),
                SOURCE_IP_ADDRESS => fill(&mut source_ip_address, ie, &mut other_ies),
                _ => unhandled(&mut other_ies, ie, "Heartbeat Request"),
            }
        }

        Ok(Self {
            recovery_time_stamp: mandatory(recovery_time_stamp, "Recovery Time Stamp")?,
            source_ip_address,
            other_ies,
        })
    }
}

/// Heartbeat Response message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatResponse {
    pub recovery_time_stamp: Ie,
    pub other_ies: Vec<Ie>,
}

impl HeartbeatResponse {
    pub fn new(recovery_time_stamp: Ie) -> Self {
        Self {
            recovery_time_stamp,
            other_ies: Vec::new(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(std::iter::once(&self.recovery_time_stamp).chain(&self.other_ies), buf)
    }

    pub fn from_ies(ies: Vec<Ie>) -> PfcpResult<Self> {
        let mut recovery_time_stamp = None;
        let mut other_ies = Vec::new();

        for ie in ies {
            match ie.ie_type() {
                RECOVERY_TIME_STAMP => fill(&mut recovery_time_stamp, ie, &mut other_ies),
                _ => unhandled(&mut other_ies, ie, "Heartbeat Response"),
            }
        }

        Ok(Self {
            recovery_time_stamp: mandatory(recovery_time_stamp, "Recovery Time Stamp")?,
            other_ies,
        })
    }
}

/// Association Setup Request message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationSetupRequest {
    pub node_id: Ie,
    pub recovery_time_stamp: Ie,
    pub up_function_features: Option<Ie>,
    pub cp_function_features: Option<Ie>,
    pub other_ies: Vec<Ie>,
}

impl AssociationSetupRequest {
    pub fn new(node_id: Ie, recovery_time_stamp: Ie) -> Self {
        Self {
            node_id,
            recovery_time_stamp,
            up_function_features: None,
            cp_function_features: None,
            other_ies: Vec::new(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(
            [&self.node_id, &self.recovery_time_stamp]
                .into_iter()
                .chain(&self.up_function_features)
                .chain(&self.cp_function_features)
                .chain(&self.other_ies),
            buf,
        )
    }

    pub fn from_ies(ies: Vec<Ie>) -> PfcpResult<Self> {
        let mut node_id = None;
        let mut recovery_time_stamp = None;
        let mut up_function_features = None;
        let mut cp_function_features = None;
        let mut other_ies = Vec::new();

        for ie in ies {
            match ie.ie_type() {
                NODE_ID => fill(&mut node_id, ie, &mut other_ies),
                RECOVERY_TIME_STAMP => fill(&mut recovery_time_stamp, ie, &mut other_ies),
                UP_FUNCTION_FEATURES => fill(&mut up_function_features, ie, &mut other_ies),
                CP_FUNCTION_FEATURES => fill(&mut cp_function_features, ie, &mut other_ies),
                _ => unhandled(&mut other_ies, ie, "Association Setup Request"),
            }
        }

        Ok(Self {
            node_id: mandatory(node_id, "Node ID")?,
            recovery_time_stamp: mandatory(recovery_time_stamp, "Recovery Time Stamp")?,
            up_function_features,
            cp_function_features,
            other_ies,
        })
    }
}

/// Association Setup Response message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationSetupResponse {
    pub node_id: Ie,
    pub cause: Ie,
    pub recovery_time_stamp: Ie,
    pub up_function_features: Option<Ie>,
    pub cp_function_features: Option<Ie>,
    pub other_ies: Vec<Ie>,
}

impl AssociationSetupResponse {
    pub fn new(node_id: Ie, cause: Ie, recovery_time_stamp: Ie) -> Self {
        Self {
            node_id,
            cause,
            recovery_time_stamp,
            up_function_features: None,
            cp_function_features: None,
            other_ies: Vec::new(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(
            [&self.node_id, &self.cause, &self.recovery_time_stamp]
                .into_iter()
                .chain(&self.up_function_features)
                .chain(&self.cp_function_features)
                .chain(&self.other_ies),
            buf,
        )
    }

    pub fn from_ies(ies: Vec<Ie>) -> PfcpResult<Self> {
        let mut node_id = None;
        let mut cause = None;
        let mut recovery_time_stamp = None;
        let mut up_function_features = None;
        let mut cp_function_features = None;
        let mut other_ies = Vec::new();

        for ie in ies {
            match ie.ie_type() {
                NODE_ID => fill(&mut node_id, ie, &mut other_ies),
                CAUSE => fill(&mut cause, ie, &mut other_ies),
                RECOVERY_TIME_STAMP => fill(&mut recovery_time_stamp, ie, &mut other_ies),
                UP_FUNCTION_FEATURES => fill(&mut up_function_features, ie, &mut other_ies),
                CP_FUNCTION_FEATURES => fill(&mut cp_function_features, ie, &mut other_ies),
                _ => unhandled(&mut other_ies, ie, "Association Setup Response"),
            }
        }

        Ok(Self {
            node_id: mandatory(node_id, "Node ID")?,
            cause: mandatory(cause, "Cause")?,
            recovery_time_stamp: mandatory(recovery_time_stamp, "Recovery Time Stamp")?,
            up_function_features,
            cp_function_features,
            other_ies,
        })
    }
}

/// Session Establishment Request message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEstablishmentRequest {
    pub node_id: Ie,
    pub cp_f_seid: Ie,
    pub create_pdrs: Vec<Ie>,
    pub create_fars: Vec<Ie>,
    pub create_urrs: Vec<Ie>,
    pub create_qers: Vec<Ie>,
    pub create_bar: Option<Ie>,
    pub other_ies: Vec<Ie>,
}

impl SessionEstablishmentRequest {
    pub fn new(node_id: Ie, cp_f_seid: Ie) -> Self {
        Self {
            node_id,
            cp_f_seid,
            create_pdrs: Vec::new(),
            create_fars: Vec::new(),
            create_urrs: Vec::new(),
            create_qers: Vec::new(),
            create_bar: None,
            other_ies: Vec::new(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(
            [&self.node_id, &self.cp_f_seid]
                .into_iter()
                .chain(&self.create_pdrs)
                .chain(&self.create_fars)
                .chain(&self.create_urrs)
                .chain(&self.create_qers)
                .chain(&self.create_bar)
                .chain(&self.other_ies),
            buf,
        )
    }

    pub fn from_ies(ies: Vec<Ie>) -> PfcpResult<Self> {
        let mut node_id = None;
        let mut cp_f_seid = None;
        let mut create_bar = None;
        let mut msg_pdrs = Vec::new();
        let mut msg_fars = Vec::new();
        let mut msg_urrs = Vec::new();
        let mut msg_qers = Vec::new();
        let mut other_ies = Vec::new();

        for ie in ies {
            match ie.ie_type() {
                NODE_ID => fill(&mut node_id, ie, &mut other_ies),
                F_SEID => fill(&mut cp_f_seid, ie, &mut other_ies),
                CREATE_PDR => msg_pdrs.push(ie),
                CREATE_FAR => msg_fars.push(ie),
                CREATE_URR => msg_urrs.push(ie),
                CREATE_QER => msg_qers.push(ie),
                CREATE_BAR => fill(&mut create_bar, ie, &mut other_ies),
                _ => unhandled(&mut other_ies, ie, "Session Establishment Request"),
            }
        }

        Ok(Self {
            node_id: mandatory(node_id, "Node ID")?,
            cp_f_seid: mandatory(cp_f_seid, "CP F-SEID")?,
            create_pdrs: msg_pdrs,
            create_fars: msg_fars,
            create_urrs: msg_urrs,
            create_qers: msg_qers,
            create_bar,
            other_ies,
        })
    }
}

/// Session Establishment Response message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEstablishmentResponse {
    pub node_id: Ie,
    pub cause: Ie,
    pub up_f_seid: Option<Ie>,
    pub created_pdrs: Vec<Ie>,
    pub other_ies: Vec<Ie>,
}

impl SessionEstablishmentResponse {
    pub fn new(node_id: Ie, cause: Ie) -> Self {
        Self {
            node_id,
            cause,
            up_f_seid: None,
            created_pdrs: Vec::new(),
            other_ies: Vec::new(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(
            [&self.node_id, &self.cause]
                .into_iter()
                .chain(&self.up_f_seid)
                .chain(&self.created_pdrs)
                .chain(&self.other_ies),
            buf,
        )
    }

    pub fn from_ies(ies: Vec<Ie>) -> PfcpResult<Self> {
        let mut node_id = None;
        let mut cause = None;
        let mut up_f_seid = None;
        let mut created_pdrs = Vec::new();
        let mut other_ies = Vec::new();

        for ie in ies {
            match ie.ie_type() {
                NODE_ID => fill(&mut node_id, ie, &mut other_ies),
                CAUSE => fill(&mut cause, ie, &mut other_ies),
                F_SEID => fill(&mut up_f_seid, ie, &mut other_ies),
                CREATED_PDR => created_pdrs.push(ie),
                _ => unhandled(&mut other_ies, ie, "Session Establishment Response"),
            }
        }

        Ok(Self {
            node_id: mandatory(node_id, "Node ID")?,
            cause: mandatory(cause, "Cause")?,
            up_f_seid,
            created_pdrs,
            other_ies,
        })
    }
}

/// Session Deletion Request message (no mandatory IEs)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDeletionRequest {
    pub other_ies: Vec<Ie>,
}

impl SessionDeletionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(&self.other_ies, buf)
    }

    pub fn from_ies(ies: Vec<Ie>) -> PfcpResult<Self> {
        Ok(Self { other_ies: ies })
    }
}

/// Session Deletion Response message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDeletionResponse {
    pub cause: Ie,
    pub other_ies: Vec<Ie>,
}

impl SessionDeletionResponse {
    pub fn new(cause: Ie) -> Self {
        Self {
            cause,
            other_ies: Vec::new(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(std::iter::once(&self.cause).chain(&self.other_ies), buf)
    }

    pub fn from_ies(ies: Vec<Ie>) -> PfcpResult<Self> {
        let mut cause = None;
        let mut other_ies = Vec::new();

        for ie in ies {
            match ie.ie_type() {
                CAUSE => fill(&mut cause, ie, &mut other_ies),
                _ => unhandled(&mut other_ies, ie, "Session Deletion Response"),
            }
        }

        Ok(Self {
            cause: mandatory(cause, "Cause")?,
            other_ies,
        })
    }
}

/// Any message, typed or not, as a flat list of top-level IEs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericMessage {
    pub message_type: u8,
    pub ies: Vec<Ie>,
}

impl GenericMessage {
    pub fn new(message_type: impl Into<u8>, ies: Vec<Ie>) -> Self {
        Self {
            message_type: message_type.into(),
            ies,
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        encode_ies(&self.ies, buf)
    }
}

/// PFCP Message enum containing all message types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PfcpMessage {
    HeartbeatRequest(HeartbeatRequest),
    HeartbeatResponse(HeartbeatResponse),
    AssociationSetupRequest(AssociationSetupRequest),
    AssociationSetupResponse(AssociationSetupResponse),
    SessionEstablishmentRequest(SessionEstablishmentRequest),
    SessionEstablishmentResponse(SessionEstablishmentResponse),
    SessionDeletionRequest(SessionDeletionRequest),
    SessionDeletionResponse(SessionDeletionResponse),
    Generic(GenericMessage),
}

impl PfcpMessage {
    /// Get the message type
    pub fn message_type(&self) -> u8 {
        let known = match self {
            Self::HeartbeatRequest(_) => PfcpMessageType::HeartbeatRequest,
            Self::HeartbeatResponse(_) => PfcpMessageType::HeartbeatResponse,
            Self::AssociationSetupRequest(_) => PfcpMessageType::AssociationSetupRequest,
            Self::AssociationSetupResponse(_) => PfcpMessageType::AssociationSetupResponse,
            Self::SessionEstablishmentRequest(_) => PfcpMessageType::SessionEstablishmentRequest,
            Self::SessionEstablishmentResponse(_) => PfcpMessageType::SessionEstablishmentResponse,
            Self::SessionDeletionRequest(_) => PfcpMessageType::SessionDeletionRequest,
            Self::SessionDeletionResponse(_) => PfcpMessageType::SessionDeletionResponse,
            Self::Generic(msg) => return msg.message_type,
        };
        known as u8
    }

    /// Encode the message body (without header)
    pub fn encode_body(&self, buf: &mut BytesMut) -> PfcpResult<()> {
        match self {
            Self::HeartbeatRequest(msg) => msg.encode(buf),
            Self::HeartbeatResponse(msg) => msg.encode(buf),
            Self::AssociationSetupRequest(msg) => msg.encode(buf),
            Self::AssociationSetupResponse(msg) => msg.encode(buf),
            Self::SessionEstablishmentRequest(msg) => msg.encode(buf),
            Self::SessionEstablishmentResponse(msg) => msg.encode(buf),
            Self::SessionDeletionRequest(msg) => msg.encode(buf),
            Self::SessionDeletionResponse(msg) => msg.encode(buf),
            Self::Generic(msg) => msg.encode(buf),
        }
    }

    /// Sort decoded top-level IEs into the message type's structure.
    /// Types without a typed form become [`PfcpMessage::Generic`].
    pub fn from_ies(message_type: u8, ies: Vec<Ie>) -> PfcpResult<Self> {
        let Ok(known) = PfcpMessageType::try_from(message_type) else {
            return Ok(Self::Generic(GenericMessage::new(message_type, ies)));
        };
        match known {
            PfcpMessageType::HeartbeatRequest => {
                Ok(Self::HeartbeatRequest(HeartbeatRequest::from_ies(ies)?))
            }
            PfcpMessageType::HeartbeatResponse => {
                Ok(Self::HeartbeatResponse(HeartbeatResponse::from_ies(ies)?))
            }
            PfcpMessageType::AssociationSetupRequest => {
                Ok(Self::AssociationSetupRequest(AssociationSetupRequest::from_ies(ies)?))
            }
            PfcpMessageType::AssociationSetupResponse => {
                Ok(Self::AssociationSetupResponse(AssociationSetupResponse::from_ies(ies)?))
            }
            PfcpMessageType::SessionEstablishmentRequest => {
                Ok(Self::SessionEstablishmentRequest(SessionEstablishmentRequest::from_ies(ies)?))
            }
            PfcpMessageType::SessionEstablishmentResponse => {
                Ok(Self::SessionEstablishmentResponse(SessionEstablishmentResponse::from_ies(ies)?))
            }
            PfcpMessageType::SessionDeletionRequest => {
                Ok(Self::SessionDeletionRequest(SessionDeletionRequest::from_ies(ies)?))
            }
            PfcpMessageType::SessionDeletionResponse => {
                Ok(Self::SessionDeletionResponse(SessionDeletionResponse::from_ies(ies)?))
            }
            _ => Ok(Self::Generic(GenericMessage::new(message_type, ies))),
        }
    }
}

/// Build a complete PFCP message with header
pub fn build_message(
    message: &PfcpMessage,
    sequence_number: u32,
    seid: Option<u64>,
) -> PfcpResult<BytesMut> {
    let message_type = message.message_type();

    // Encode body first to get length
    let mut body = BytesMut::new();
    message.encode_body(&mut body)?;

    let mut header = match seid {
        Some(seid) => PfcpHeader::new_with_seid(message_type, seid, sequence_number),
        None => PfcpHeader::new(message_type, sequence_number),
    };

    // Length counts everything after the first 4 octets
    let length = header.header_len() - 4 + body.len();
    header.length = u16::try_from(length)
        .map_err(|_| PfcpError::InvalidFormat(format!("message length {length} exceeds 65535")))?;

    let mut buf = BytesMut::with_capacity(header.header_len() + body.len());
    header.encode(&mut buf);
    buf.unsplit(body);

    Ok(buf)
}

/// Parse a complete PFCP message using the global classifier.
/// `buf` is advanced past the message, so datagrams carrying several
/// messages (FO flag) can be parsed in a loop.
pub fn parse_message(buf: &mut Bytes) -> PfcpResult<(PfcpHeader, PfcpMessage)> {
    parse_message_with(buf, GroupedIeClassifier::global())
}

pub fn parse_message_with(
    buf: &mut Bytes,
    classifier: &GroupedIeClassifier,
) -> PfcpResult<(PfcpHeader, PfcpMessage)> {
    let mut rest = buf.clone();
    let header = PfcpHeader::decode(&mut rest)?;
    if let Some(kind) = header.kind() {
        if kind.has_seid() != header.seid.is_some() {
            log::warn!(
                "{} received with unexpected S flag ({})",
                kind.name(),
                header.seid.is_some()
            );
        }
    }

    let body_len = header.body_len();
    if rest.remaining() < body_len {
        return Err(PfcpError::short(body_len, rest.remaining()));
    }

    let body = rest.split_to(body_len);
    let ies = Ie::parse_multi_with(&body, classifier)?;
    let message = PfcpMessage::from_ies(header.message_type, ies)?;

    *buf = rest;
    Ok((header, message))
}
