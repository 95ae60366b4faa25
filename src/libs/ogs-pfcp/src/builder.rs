//! PFCP IE Builders
//!
//! Constructors for commonly used IEs. Scalar constructors encode the value
//! into the payload; grouped constructors take their children in wire order.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::{BufMut, BytesMut};

use crate::error::PfcpResult;
use crate::ie::Ie;
use crate::ie_type::*;
use crate::types::{Bitrate, FSeid, FTeid, NodeId, NTP_UNIX_OFFSET};

impl Ie {
    /// Cause (TS 29.244 Section 8.2.1)
    pub fn new_cause(cause: u8) -> Self {
        Self::new(CAUSE, vec![cause])
    }

    /// Recovery Time Stamp as 32-bit NTP seconds; sub-second precision is dropped
    pub fn new_recovery_time_stamp(ts: SystemTime) -> Self {
        let unix = ts.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
        let ntp = unix.wrapping_add(NTP_UNIX_OFFSET) as u32;
        Self::new(RECOVERY_TIME_STAMP, ntp.to_be_bytes().to_vec())
    }

    pub fn new_node_id(node_id: &NodeId) -> PfcpResult<Self> {
        let mut buf = BytesMut::new();
        node_id.encode(&mut buf)?;
        Ok(Self::new(NODE_ID, buf.freeze()))
    }

    pub fn new_fseid(seid: u64, ipv4: Option<Ipv4Addr>, ipv6: Option<Ipv6Addr>) -> Self {
        let mut buf = BytesMut::with_capacity(25);
        FSeid::new(seid, ipv4, ipv6).encode(&mut buf);
        Self::new(F_SEID, buf.freeze())
    }

    pub fn new_fteid(fteid: &FTeid) -> Self {
        let mut buf = BytesMut::with_capacity(25);
        fteid.encode(&mut buf);
        Self::new(F_TEID, buf.freeze())
    }

    pub fn new_pdr_id(id: u16) -> Self {
        Self::new(PDR_ID, id.to_be_bytes().to_vec())
    }

    pub fn new_far_id(id: u32) -> Self {
        Self::new(FAR_ID, id.to_be_bytes().to_vec())
    }

    pub fn new_qer_id(id: u32) -> Self {
        Self::new(QER_ID, id.to_be_bytes().to_vec())
    }

    pub fn new_urr_id(id: u32) -> Self {
        Self::new(URR_ID, id.to_be_bytes().to_vec())
    }

    pub fn new_bar_id(id: u8) -> Self {
        Self::new(BAR_ID, vec![id])
    }

    pub fn new_precedence(precedence: u32) -> Self {
        Self::new(PRECEDENCE, precedence.to_be_bytes().to_vec())
    }

    /// Apply Action with raw flag octets, see [`ApplyAction`](crate::types::ApplyAction)
    pub fn new_apply_action(flags: &[u8]) -> Self {
        Self::new(APPLY_ACTION, flags.to_vec())
    }

    pub fn new_source_interface(interface: u8) -> Self {
        Self::new(SOURCE_INTERFACE, vec![interface & 0x0f])
    }

    pub fn new_destination_interface(interface: u8) -> Self {
        Self::new(DESTINATION_INTERFACE, vec![interface & 0x0f])
    }

    pub fn new_network_instance(instance: &str) -> Self {
        Self::new(NETWORK_INSTANCE, instance.as_bytes().to_vec())
    }

    /// Gate Status with UL gate in bits 3-4 and DL gate in bits 1-2
    pub fn new_gate_status(ul: u8, dl: u8) -> Self {
        Self::new(GATE_STATUS, vec![((ul & 0x03) << 2) | (dl & 0x03)])
    }

    /// MBR in kbps
    pub fn new_mbr(ul: u64, dl: u64) -> Self {
        let mut buf = BytesMut::with_capacity(10);
        Bitrate::new(ul, dl).encode(&mut buf);
        Self::new(MBR, buf.freeze())
    }

    /// GBR in kbps
    pub fn new_gbr(ul: u64, dl: u64) -> Self {
        let mut buf = BytesMut::with_capacity(10);
        Bitrate::new(ul, dl).encode(&mut buf);
        Self::new(GBR, buf.freeze())
    }

    pub fn new_qfi(qfi: u8) -> Self {
        Self::new(QFI, vec![qfi & 0x3f])
    }

    pub fn new_outer_header_removal(description: u8, extension: u8) -> Self {
        Self::new(OUTER_HEADER_REMOVAL, vec![description, extension])
    }

    pub fn new_source_ip_address(ipv4: Option<Ipv4Addr>, ipv6: Option<Ipv6Addr>) -> Self {
        let mut buf = BytesMut::with_capacity(21);
        buf.put_u8(((ipv4.is_some() as u8) << 1) | (ipv6.is_some() as u8));
        if let Some(addr) = ipv4 {
            buf.put_slice(&addr.octets());
        }
        if let Some(addr) = ipv6 {
            buf.put_slice(&addr.octets());
        }
        Self::new(SOURCE_IP_ADDRESS, buf.freeze())
    }

    pub fn new_up_function_features(features: &[u8]) -> Self {
        Self::new(UP_FUNCTION_FEATURES, features.to_vec())
    }

    pub fn new_cp_function_features(features: u8) -> Self {
        Self::new(CP_FUNCTION_FEATURES, vec![features])
    }
}

macro_rules! grouped_constructors {
    ($($name:ident => $ie_type:expr;)*) => {
        impl Ie {
            $(
                pub fn $name(children: Vec<Ie>) -> Self {
                    Self::new_grouped($ie_type, children)
                }
            )*
        }
    };
}

grouped_constructors! {
    new_create_pdr => CREATE_PDR;
    new_pdi => PDI;
    new_create_far => CREATE_FAR;
    new_forwarding_parameters => FORWARDING_PARAMETERS;
    new_duplicating_parameters => DUPLICATING_PARAMETERS;
    new_create_urr => CREATE_URR;
    new_create_qer => CREATE_QER;
    new_created_pdr => CREATED_PDR;
    new_update_pdr => UPDATE_PDR;
    new_update_far => UPDATE_FAR;
    new_update_forwarding_parameters => UPDATE_FORWARDING_PARAMETERS;
    new_update_urr => UPDATE_URR;
    new_update_qer => UPDATE_QER;
    new_remove_pdr => REMOVE_PDR;
    new_remove_far => REMOVE_FAR;
    new_remove_urr => REMOVE_URR;
    new_remove_qer => REMOVE_QER;
    new_create_bar => CREATE_BAR;
    new_update_bar => UPDATE_BAR;
    new_remove_bar => REMOVE_BAR;
    new_create_traffic_endpoint => CREATE_TRAFFIC_ENDPOINT;
    new_created_traffic_endpoint => CREATED_TRAFFIC_ENDPOINT;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_cause_wire() {
        assert_eq!(Ie::new_cause(1).marshal().unwrap().as_ref(), &[0x00, 0x13, 0x00, 0x01, 0x01]);
    }

    #[test]
    fn test_recovery_time_stamp_is_ntp() {
        let ie = Ie::new_recovery_time_stamp(UNIX_EPOCH + Duration::from_secs(1));
        assert_eq!(ie.value_as_u32().unwrap(), 2_208_988_801);
    }

    #[test]
    fn test_scalar_builders_wire() {
        assert_eq!(Ie::new_pdr_id(0x0102).payload().as_ref(), &[0x01, 0x02]);
        assert_eq!(Ie::new_far_id(0xffffffff).length(), 4);
        assert_eq!(Ie::new_gate_status(1, 0).payload().as_ref(), &[0x04]);
        assert_eq!(Ie::new_qfi(0xff).payload().as_ref(), &[0x3f]);
        assert_eq!(Ie::new_mbr(1, 2).length(), 10);
        assert_eq!(Ie::new_network_instance("internet").length(), 8);
        assert_eq!(
            Ie::new_source_ip_address(Some(Ipv4Addr::new(10, 0, 0, 1)), None).payload().as_ref(),
            &[0x02, 10, 0, 0, 1]
        );
    }

    #[test]
    fn test_grouped_builders() {
        let far = Ie::new_create_far(vec![
            Ie::new_far_id(1),
            Ie::new_apply_action(&[0x02]),
            Ie::new_forwarding_parameters(vec![Ie::new_destination_interface(1)]),
        ]);
        assert_eq!(far.ie_type(), CREATE_FAR);
        assert!(far.is_grouped());
        assert_eq!(far.children().len(), 3);
        assert_eq!(far.length(), 8 + 5 + 9);
    }
}
