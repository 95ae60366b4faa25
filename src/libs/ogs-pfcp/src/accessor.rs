//! Typed IE value extraction
//!
//! Every accessor works on the IE itself or on any container the field is
//! allowed under. A container is searched for its first child that is either
//! the field or another of its containers, and the search continues there.
//! Only the first such child is followed.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bytes::Bytes;

use crate::error::{PfcpError, PfcpResult};
use crate::ie::Ie;
use crate::ie_type::*;
use crate::types::{
    ApplyAction, Bitrate, DestinationInterface, FSeid, FTeid, NodeId, PfcpCause, SourceInterface,
    NTP_UNIX_OFFSET,
};

/// An IE type together with the grouped types it may be nested in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub ie_type: u16,
    pub containers: &'static [u16],
}

impl Field {
    pub const fn direct(ie_type: u16) -> Self {
        Self { ie_type, containers: &[] }
    }

    pub const CAUSE: Field = Field::direct(CAUSE);
    pub const RECOVERY_TIME_STAMP: Field = Field::direct(RECOVERY_TIME_STAMP);
    pub const NODE_ID: Field = Field::direct(NODE_ID);
    pub const F_SEID: Field = Field::direct(F_SEID);
    pub const F_TEID: Field = Field {
        ie_type: F_TEID,
        containers: &[
            CREATE_PDR,
            PDI,
            UPDATE_PDR,
            CREATED_PDR,
            CREATE_TRAFFIC_ENDPOINT,
            CREATED_TRAFFIC_ENDPOINT,
        ],
    };
    pub const PDR_ID: Field = Field {
        ie_type: PDR_ID,
        containers: &[CREATE_PDR, UPDATE_PDR, REMOVE_PDR, CREATED_PDR, UPDATED_PDR, DOWNLINK_DATA_REPORT],
    };
    pub const FAR_ID: Field = Field {
        ie_type: FAR_ID,
        containers: &[CREATE_PDR, UPDATE_PDR, CREATE_FAR, UPDATE_FAR, REMOVE_FAR],
    };
    pub const QER_ID: Field = Field {
        ie_type: QER_ID,
        containers: &[CREATE_PDR, UPDATE_PDR, CREATE_QER, UPDATE_QER, REMOVE_QER],
    };
    pub const URR_ID: Field = Field {
        ie_type: URR_ID,
        containers: &[
            CREATE_PDR,
            UPDATE_PDR,
            CREATE_URR,
            UPDATE_URR,
            REMOVE_URR,
            USAGE_REPORT_SMR,
            USAGE_REPORT_SDR,
            USAGE_REPORT_SRR,
        ],
    };
    pub const BAR_ID: Field = Field {
        ie_type: BAR_ID,
        containers: &[
            CREATE_FAR,
            UPDATE_FAR,
            CREATE_BAR,
            UPDATE_BAR_SESSION_REPORT_RESPONSE,
            UPDATE_BAR,
            REMOVE_BAR,
        ],
    };
    pub const PRECEDENCE: Field = Field {
        ie_type: PRECEDENCE,
        containers: &[CREATE_PDR, UPDATE_PDR],
    };
    pub const APPLY_ACTION: Field = Field {
        ie_type: APPLY_ACTION,
        containers: &[CREATE_FAR, UPDATE_FAR],
    };
    pub const SOURCE_INTERFACE: Field = Field {
        ie_type: SOURCE_INTERFACE,
        containers: &[CREATE_PDR, UPDATE_PDR, PDI, CREATE_TRAFFIC_ENDPOINT],
    };
    pub const DESTINATION_INTERFACE: Field = Field {
        ie_type: DESTINATION_INTERFACE,
        containers: &[
            CREATE_FAR,
            UPDATE_FAR,
            FORWARDING_PARAMETERS,
            UPDATE_FORWARDING_PARAMETERS,
            DUPLICATING_PARAMETERS,
        ],
    };
    pub const NETWORK_INSTANCE: Field = Field {
        ie_type: NETWORK_INSTANCE,
        containers: &[
            CREATE_PDR,
            UPDATE_PDR,
            PDI,
            CREATE_FAR,
            UPDATE_FAR,
            FORWARDING_PARAMETERS,
            UPDATE_FORWARDING_PARAMETERS,
            CREATE_TRAFFIC_ENDPOINT,
        ],
    };
    pub const GATE_STATUS: Field = Field {
        ie_type: GATE_STATUS,
        containers: &[CREATE_QER, UPDATE_QER],
    };
    pub const MBR: Field = Field {
        ie_type: MBR,
        containers: &[CREATE_QER, UPDATE_QER],
    };
    pub const QFI: Field = Field {
        ie_type: QFI,
        containers: &[CREATE_PDR, UPDATE_PDR, PDI, CREATE_QER, UPDATE_QER],
    };
    pub const OUTER_HEADER_REMOVAL: Field = Field {
        ie_type: OUTER_HEADER_REMOVAL,
        containers: &[CREATE_PDR, UPDATE_PDR],
    };

    fn matches(&self, ie_type: u16) -> bool {
        self.ie_type == ie_type || self.containers.contains(&ie_type)
    }
}

impl Ie {
    /// Locate `field` from this IE and decode it with `read`
    pub fn field_value<T, F>(&self, field: &Field, read: &F) -> PfcpResult<T>
    where
        F: Fn(&Ie) -> PfcpResult<T>,
    {
        if self.ie_type() == field.ie_type {
            return read(self);
        }
        if !field.containers.contains(&self.ie_type()) {
            return Err(PfcpError::InvalidIeType(self.ie_type()));
        }
        let children = self.child_ies()?;
        children
            .iter()
            .find(|c| field.matches(c.ie_type()))
            .ok_or(PfcpError::IeNotFound(field.ie_type))?
            .field_value(field, read)
    }

    pub fn cause(&self) -> PfcpResult<u8> {
        self.field_value(&Field::CAUSE, &Ie::value_as_u8)
    }

    /// Cause as a known value; unknown codes give `InvalidFormat`
    pub fn cause_value(&self) -> PfcpResult<PfcpCause> {
        PfcpCause::try_from(self.cause()?)
    }

    /// Recovery Time Stamp. NTP values below the Unix epoch offset are taken
    /// to be in NTP era 1 (after February 2036).
    pub fn recovery_time_stamp(&self) -> PfcpResult<SystemTime> {
        let ntp = self.field_value(&Field::RECOVERY_TIME_STAMP, &Ie::value_as_u32)? as u64;
        let unix = if ntp >= NTP_UNIX_OFFSET {
            ntp - NTP_UNIX_OFFSET
        } else {
            ntp + (1u64 << 32) - NTP_UNIX_OFFSET
        };
        Ok(UNIX_EPOCH + Duration::from_secs(unix))
    }

    pub fn node_id(&self) -> PfcpResult<NodeId> {
        self.field_value(&Field::NODE_ID, &|ie: &Ie| NodeId::decode(ie.value_as_bytes()?))
    }

    pub fn fseid(&self) -> PfcpResult<FSeid> {
        self.field_value(&Field::F_SEID, &|ie: &Ie| FSeid::decode(ie.value_as_bytes()?))
    }

    pub fn fteid(&self) -> PfcpResult<FTeid> {
        self.field_value(&Field::F_TEID, &|ie: &Ie| FTeid::decode(ie.value_as_bytes()?))
    }

    pub fn pdr_id(&self) -> PfcpResult<u16> {
        self.field_value(&Field::PDR_ID, &Ie::value_as_u16)
    }

    pub fn far_id(&self) -> PfcpResult<u32> {
        self.field_value(&Field::FAR_ID, &Ie::value_as_u32)
    }

    pub fn qer_id(&self) -> PfcpResult<u32> {
        self.field_value(&Field::QER_ID, &Ie::value_as_u32)
    }

    pub fn urr_id(&self) -> PfcpResult<u32> {
        self.field_value(&Field::URR_ID, &Ie::value_as_u32)
    }

    pub fn bar_id(&self) -> PfcpResult<u8> {
        self.field_value(&Field::BAR_ID, &Ie::value_as_u8)
    }

    pub fn precedence(&self) -> PfcpResult<u32> {
        self.field_value(&Field::PRECEDENCE, &Ie::value_as_u32)
    }

    /// Raw Apply Action octets
    pub fn apply_action(&self) -> PfcpResult<Bytes> {
        self.field_value(&Field::APPLY_ACTION, &|ie: &Ie| {
            let payload = ie.value_as_bytes()?;
            if payload.is_empty() {
                return Err(PfcpError::short(1, 0));
            }
            Ok(payload.clone())
        })
    }

    pub fn apply_action_flags(&self) -> PfcpResult<ApplyAction> {
        ApplyAction::from_bytes(&self.apply_action()?)
    }

    /// Whether `flag` is set in the first Apply Action octet
    pub fn has_apply_action_flag(&self, flag: u8) -> PfcpResult<bool> {
        self.field_value(&Field::APPLY_ACTION, &|ie: &Ie| ie.has_flag(0, flag))
    }

    pub fn source_interface(&self) -> PfcpResult<u8> {
        self.field_value(&Field::SOURCE_INTERFACE, &|ie: &Ie| Ok(ie.value_as_u8()? & 0x0f))
    }

    pub fn destination_interface(&self) -> PfcpResult<u8> {
        self.field_value(&Field::DESTINATION_INTERFACE, &|ie: &Ie| {
            Ok(ie.value_as_u8()? & 0x0f)
        })
    }

    pub fn source_interface_value(&self) -> PfcpResult<SourceInterface> {
        SourceInterface::try_from(self.source_interface()?)
    }

    pub fn destination_interface_value(&self) -> PfcpResult<DestinationInterface> {
        DestinationInterface::try_from(self.destination_interface()?)
    }

    pub fn network_instance(&self) -> PfcpResult<String> {
        self.field_value(&Field::NETWORK_INSTANCE, &Ie::value_as_string)
    }

    pub fn gate_status(&self) -> PfcpResult<u8> {
        self.field_value(&Field::GATE_STATUS, &Ie::value_as_u8)
    }

    /// MBR as (uplink, downlink) in kbps
    pub fn mbr(&self) -> PfcpResult<(u64, u64)> {
        self.field_value(&Field::MBR, &|ie: &Ie| {
            let rate = Bitrate::decode(ie.value_as_bytes()?)?;
            Ok((rate.uplink, rate.downlink))
        })
    }

    pub fn qfi(&self) -> PfcpResult<u8> {
        self.field_value(&Field::QFI, &|ie: &Ie| Ok(ie.value_as_u8()? & 0x3f))
    }

    /// Outer Header Removal description octet
    pub fn outer_header_removal(&self) -> PfcpResult<u8> {
        self.field_value(&Field::OUTER_HEADER_REMOVAL, &Ie::value_as_u8)
    }
}
