//! NextGCore PFCP Protocol Library
//!
//! This crate provides PFCP (Packet Forwarding Control Protocol) Information
//! Element and message encoding/decoding as specified in 3GPP TS 29.244.
//!
//! PFCP is used for communication between the Control Plane (CP) and User Plane (UP)
//! functions in 5G and LTE networks.
//!
//! # Features
//!
//! - Recursive IE codec with grouped IEs decoded into trees
//! - Configurable grouped IE classification, global or per decoder
//! - Vendor-specific IEs with Enterprise ID
//! - Typed accessors that look through container IEs
//! - PFCP header and message encoding/decoding
//!
//! # Example
//!
//! ```rust
//! use ogs_pfcp::prelude::*;
//!
//! let far = Ie::new_create_far(vec![
//!     Ie::new_far_id(0xffffffff),
//!     Ie::new_apply_action(&[ApplyAction::BUFF]),
//! ]);
//!
//! let wire = far.marshal().unwrap();
//! let decoded = Ie::parse(&wire).unwrap();
//! assert_eq!(decoded.apply_action().unwrap().as_ref(), &[0x04]);
//! assert_eq!(Ie::new_cause(1).marshal().unwrap().as_ref(), &[0x00, 0x13, 0x00, 0x01, 0x01]);
//! ```

pub mod accessor;
pub mod builder;
pub mod classifier;
pub mod error;
pub mod header;
pub mod ie;
pub mod ie_type;
pub mod message;
pub mod types;


pub use classifier::{add_grouped_ie_types, is_grouped, reset_is_grouped_fn, set_is_grouped_fn};
pub use error::{PfcpError, PfcpResult};
pub use header::{PfcpHeader, PfcpMessageType, PFCP_HEADER_LEN, PFCP_HEADER_LEN_WITH_SEID};
pub use ie::{Ie, IeValue, MAX_IE_NESTING_DEPTH};
pub use types::PFCP_UDP_PORT;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::accessor::Field;
    pub use crate::classifier::GroupedIeClassifier;
    pub use crate::error::{PfcpError, PfcpResult};
    pub use crate::header::{PfcpHeader, PfcpMessageType};
    pub use crate::ie::{Ie, IeHeader, IeValue};
    pub use crate::ie_type;
    pub use crate::message::{
        PfcpMessage,
        GenericMessage,
        HeartbeatRequest,
        HeartbeatResponse,
        AssociationSetupRequest,
        AssociationSetupResponse,
        SessionEstablishmentRequest,
        SessionEstablishmentResponse,
        SessionDeletionRequest,
        SessionDeletionResponse,
        build_message,
        parse_message,
        parse_message_with,
    };
    pub use crate::types::{
        PfcpCause,
        NodeId,
        NodeIdType,
        FSeid,
        FTeid,
        ApplyAction,
        SourceInterface,
        DestinationInterface,
        Bitrate,
    };
}
