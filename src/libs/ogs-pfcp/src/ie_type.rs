//! PFCP IE type codes (TS 29.244 Section 8.1.2)
//!
//! IE types are plain `u16` values: vendor-specific types and codes added by
//! later releases must round-trip through the codec even when they have no
//! name here.

/// Set on the type code of vendor-specific IEs; such IEs carry an Enterprise ID.
pub const VENDOR_SPECIFIC_BIT: u16 = 0x8000;

/// Whether the type code has the vendor-specific bit set
pub const fn is_vendor_specific(ie_type: u16) -> bool {
    ie_type & VENDOR_SPECIFIC_BIT != 0
}

/// Type code with the vendor-specific bit cleared
pub const fn base_type(ie_type: u16) -> u16 {
    ie_type & !VENDOR_SPECIFIC_BIT
}

pub const CREATE_PDR: u16 = 1;
pub const PDI: u16 = 2;
pub const CREATE_FAR: u16 = 3;
pub const FORWARDING_PARAMETERS: u16 = 4;
pub const DUPLICATING_PARAMETERS: u16 = 5;
pub const CREATE_URR: u16 = 6;
pub const CREATE_QER: u16 = 7;
pub const CREATED_PDR: u16 = 8;
pub const UPDATE_PDR: u16 = 9;
pub const UPDATE_FAR: u16 = 10;
pub const UPDATE_FORWARDING_PARAMETERS: u16 = 11;
pub const UPDATE_BAR_SESSION_REPORT_RESPONSE: u16 = 12;
pub const UPDATE_URR: u16 = 13;
pub const UPDATE_QER: u16 = 14;
pub const REMOVE_PDR: u16 = 15;
pub const REMOVE_FAR: u16 = 16;
pub const REMOVE_URR: u16 = 17;
pub const REMOVE_QER: u16 = 18;
pub const CAUSE: u16 = 19;
pub const SOURCE_INTERFACE: u16 = 20;
pub const F_TEID: u16 = 21;
pub const NETWORK_INSTANCE: u16 = 22;
pub const SDF_FILTER: u16 = 23;
pub const APPLICATION_ID: u16 = 24;
pub const GATE_STATUS: u16 = 25;
pub const MBR: u16 = 26;
pub const GBR: u16 = 27;
pub const QER_CORRELATION_ID: u16 = 28;
pub const PRECEDENCE: u16 = 29;
pub const TRANSPORT_LEVEL_MARKING: u16 = 30;
pub const VOLUME_THRESHOLD: u16 = 31;
pub const TIME_THRESHOLD: u16 = 32;
pub const MONITORING_TIME: u16 = 33;
pub const SUBSEQUENT_VOLUME_THRESHOLD: u16 = 34;
pub const SUBSEQUENT_TIME_THRESHOLD: u16 = 35;
pub const INACTIVITY_DETECTION_TIME: u16 = 36;
pub const REPORTING_TRIGGERS: u16 = 37;
pub const REDIRECT_INFORMATION: u16 = 38;
pub const REPORT_TYPE: u16 = 39;
pub const OFFENDING_IE: u16 = 40;
pub const FORWARDING_POLICY: u16 = 41;
pub const DESTINATION_INTERFACE: u16 = 42;
pub const UP_FUNCTION_FEATURES: u16 = 43;
pub const APPLY_ACTION: u16 = 44;
pub const DOWNLINK_DATA_SERVICE_INFORMATION: u16 = 45;
pub const DOWNLINK_DATA_NOTIFICATION_DELAY: u16 = 46;
pub const DL_BUFFERING_DURATION: u16 = 47;
pub const DL_BUFFERING_SUGGESTED_PACKET_COUNT: u16 = 48;
pub const PFCP_SMREQ_FLAGS: u16 = 49;
pub const PFCP_SRRSP_FLAGS: u16 = 50;
pub const LOAD_CONTROL_INFORMATION: u16 = 51;
pub const SEQUENCE_NUMBER: u16 = 52;
pub const METRIC: u16 = 53;
pub const OVERLOAD_CONTROL_INFORMATION: u16 = 54;
pub const TIMER: u16 = 55;
pub const PDR_ID: u16 = 56;
pub const F_SEID: u16 = 57;
pub const APPLICATION_IDS_PFDS: u16 = 58;
pub const PFD_CONTEXT: u16 = 59;
pub const NODE_ID: u16 = 60;
pub const PFD_CONTENTS: u16 = 61;
pub const MEASUREMENT_METHOD: u16 = 62;
pub const USAGE_REPORT_TRIGGER: u16 = 63;
pub const MEASUREMENT_PERIOD: u16 = 64;
pub const FQ_CSID: u16 = 65;
pub const VOLUME_MEASUREMENT: u16 = 66;
pub const DURATION_MEASUREMENT: u16 = 67;
pub const APPLICATION_DETECTION_INFORMATION: u16 = 68;
pub const TIME_OF_FIRST_PACKET: u16 = 69;
pub const TIME_OF_LAST_PACKET: u16 = 70;
pub const QUOTA_HOLDING_TIME: u16 = 71;
pub const DROPPED_DL_TRAFFIC_THRESHOLD: u16 = 72;
pub const VOLUME_QUOTA: u16 = 73;
pub const TIME_QUOTA: u16 = 74;
pub const START_TIME: u16 = 75;
pub const END_TIME: u16 = 76;
pub const QUERY_URR: u16 = 77;
pub const USAGE_REPORT_SMR: u16 = 78;
pub const USAGE_REPORT_SDR: u16 = 79;
pub const USAGE_REPORT_SRR: u16 = 80;
pub const URR_ID: u16 = 81;
pub const LINKED_URR_ID: u16 = 82;
pub const DOWNLINK_DATA_REPORT: u16 = 83;
pub const OUTER_HEADER_CREATION: u16 = 84;
pub const CREATE_BAR: u16 = 85;
pub const UPDATE_BAR: u16 = 86;
pub const REMOVE_BAR: u16 = 87;
pub const BAR_ID: u16 = 88;
pub const CP_FUNCTION_FEATURES: u16 = 89;
pub const USAGE_INFORMATION: u16 = 90;
pub const APPLICATION_INSTANCE_ID: u16 = 91;
pub const FLOW_INFORMATION: u16 = 92;
pub const UE_IP_ADDRESS: u16 = 93;
pub const PACKET_RATE: u16 = 94;
pub const OUTER_HEADER_REMOVAL: u16 = 95;
pub const RECOVERY_TIME_STAMP: u16 = 96;
pub const DL_FLOW_LEVEL_MARKING: u16 = 97;
pub const HEADER_ENRICHMENT: u16 = 98;
pub const ERROR_INDICATION_REPORT: u16 = 99;
pub const MEASUREMENT_INFORMATION: u16 = 100;
pub const NODE_REPORT_TYPE: u16 = 101;
pub const USER_PLANE_PATH_FAILURE_REPORT: u16 = 102;
pub const REMOTE_GTP_U_PEER: u16 = 103;
pub const UR_SEQN: u16 = 104;
pub const UPDATE_DUPLICATING_PARAMETERS: u16 = 105;
pub const ACTIVATE_PREDEFINED_RULES: u16 = 106;
pub const DEACTIVATE_PREDEFINED_RULES: u16 = 107;
pub const FAR_ID: u16 = 108;
pub const QER_ID: u16 = 109;
pub const OCI_FLAGS: u16 = 110;
pub const PFCP_ASSOCIATION_RELEASE_REQUEST: u16 = 111;
pub const GRACEFUL_RELEASE_PERIOD: u16 = 112;
pub const PDN_TYPE: u16 = 113;
pub const FAILED_RULE_ID: u16 = 114;
pub const TIME_QUOTA_MECHANISM: u16 = 115;
pub const USER_PLANE_IP_RESOURCE_INFORMATION: u16 = 116;
pub const USER_PLANE_INACTIVITY_TIMER: u16 = 117;
pub const AGGREGATED_URRS: u16 = 118;
pub const MULTIPLIER: u16 = 119;
pub const AGGREGATED_URR_ID: u16 = 120;
pub const SUBSEQUENT_VOLUME_QUOTA: u16 = 121;
pub const SUBSEQUENT_TIME_QUOTA: u16 = 122;
pub const RQI: u16 = 123;
pub const QFI: u16 = 124;
pub const QUERY_URR_REFERENCE: u16 = 125;
pub const ADDITIONAL_USAGE_REPORTS_INFORMATION: u16 = 126;
pub const CREATE_TRAFFIC_ENDPOINT: u16 = 127;
pub const CREATED_TRAFFIC_ENDPOINT: u16 = 128;
pub const UPDATE_TRAFFIC_ENDPOINT: u16 = 129;
pub const REMOVE_TRAFFIC_ENDPOINT: u16 = 130;
pub const TRAFFIC_ENDPOINT_ID: u16 = 131;
pub const ETHERNET_PACKET_FILTER: u16 = 132;
pub const MAC_ADDRESS: u16 = 133;
pub const C_TAG: u16 = 134;
pub const S_TAG: u16 = 135;
pub const ETHERTYPE: u16 = 136;
pub const PROXYING: u16 = 137;
pub const ETHERNET_FILTER_ID: u16 = 138;
pub const ETHERNET_FILTER_PROPERTIES: u16 = 139;
pub const SUGGESTED_BUFFERING_PACKETS_COUNT: u16 = 140;
pub const USER_ID: u16 = 141;
pub const ETHERNET_PDU_SESSION_INFORMATION: u16 = 142;
pub const ETHERNET_TRAFFIC_INFORMATION: u16 = 143;
pub const MAC_ADDRESSES_DETECTED: u16 = 144;
pub const MAC_ADDRESSES_REMOVED: u16 = 145;
pub const ETHERNET_INACTIVITY_TIMER: u16 = 146;
pub const ADDITIONAL_MONITORING_TIME: u16 = 147;
pub const EVENT_QUOTA: u16 = 148;
pub const EVENT_THRESHOLD: u16 = 149;
pub const SUBSEQUENT_EVENT_QUOTA: u16 = 150;
pub const SUBSEQUENT_EVENT_THRESHOLD: u16 = 151;
pub const TRACE_INFORMATION: u16 = 152;
pub const FRAMED_ROUTE: u16 = 153;
pub const FRAMED_ROUTING: u16 = 154;
pub const FRAMED_IPV6_ROUTE: u16 = 155;
pub const TIME_STAMP: u16 = 156;
pub const AVERAGING_WINDOW: u16 = 157;
pub const PAGING_POLICY_INDICATOR: u16 = 158;
pub const APN_DNN: u16 = 159;
pub const THREE_GPP_INTERFACE_TYPE: u16 = 160;
pub const PFCP_SRREQ_FLAGS: u16 = 161;
pub const PFCP_AUREQ_FLAGS: u16 = 162;
pub const ACTIVATION_TIME: u16 = 163;
pub const DEACTIVATION_TIME: u16 = 164;
pub const CREATE_MAR: u16 = 165;
pub const THREE_GPP_ACCESS_FORWARDING_ACTION_INFORMATION: u16 = 166;
pub const NON_3GPP_ACCESS_FORWARDING_ACTION_INFORMATION: u16 = 167;
pub const REMOVE_MAR: u16 = 168;
pub const UPDATE_MAR: u16 = 169;
pub const MAR_ID: u16 = 170;
pub const STEERING_FUNCTIONALITY: u16 = 171;
pub const STEERING_MODE: u16 = 172;
pub const WEIGHT: u16 = 173;
pub const PRIORITY: u16 = 174;
pub const UPDATE_3GPP_ACCESS_FORWARDING_ACTION_INFORMATION: u16 = 175;
pub const UPDATE_NON_3GPP_ACCESS_FORWARDING_ACTION_INFORMATION: u16 = 176;
pub const UE_IP_ADDRESS_POOL_IDENTITY: u16 = 177;
pub const ALTERNATIVE_SMF_IP_ADDRESS: u16 = 178;
pub const PACKET_REPLICATION_AND_DETECTION_CARRY_ON_INFORMATION: u16 = 179;
pub const SMF_SET_ID: u16 = 180;
pub const QUOTA_VALIDITY_TIME: u16 = 181;
pub const NUMBER_OF_REPORTS: u16 = 182;
pub const PFCP_SESSION_RETENTION_INFORMATION: u16 = 183;
pub const PFCP_ASRSP_FLAGS: u16 = 184;
pub const CP_PFCP_ENTITY_IP_ADDRESS: u16 = 185;
pub const PFCP_SEREQ_FLAGS: u16 = 186;
pub const USER_PLANE_PATH_RECOVERY_REPORT: u16 = 187;
pub const IP_MULTICAST_ADDRESSING_INFO: u16 = 188;
pub const JOIN_IP_MULTICAST_INFORMATION: u16 = 189;
pub const LEAVE_IP_MULTICAST_INFORMATION: u16 = 190;
pub const IP_MULTICAST_ADDRESS: u16 = 191;
pub const SOURCE_IP_ADDRESS: u16 = 192;
pub const PACKET_RATE_STATUS: u16 = 193;
pub const CREATE_BRIDGE_INFO_FOR_TSC: u16 = 194;
pub const CREATED_BRIDGE_INFO_FOR_TSC: u16 = 195;
pub const DS_TT_PORT_NUMBER: u16 = 196;
pub const NW_TT_PORT_NUMBER: u16 = 197;
pub const FIVE_GS_USER_PLANE_NODE: u16 = 198;
pub const TSC_MANAGEMENT_INFORMATION_SMR: u16 = 199;
pub const TSC_MANAGEMENT_INFORMATION_SMRSP: u16 = 200;
pub const TSC_MANAGEMENT_INFORMATION_SRR: u16 = 201;
pub const PORT_MANAGEMENT_INFORMATION_CONTAINER: u16 = 202;
pub const CLOCK_DRIFT_CONTROL_INFORMATION: u16 = 203;
pub const REQUESTED_CLOCK_DRIFT_INFORMATION: u16 = 204;
pub const CLOCK_DRIFT_REPORT: u16 = 205;
pub const TIME_DOMAIN_NUMBER: u16 = 206;
pub const TIME_OFFSET_THRESHOLD: u16 = 207;
pub const CUMULATIVE_RATE_RATIO_THRESHOLD: u16 = 208;
pub const TIME_OFFSET_MEASUREMENT: u16 = 209;
pub const CUMULATIVE_RATE_RATIO_MEASUREMENT: u16 = 210;
pub const REMOVE_SRR: u16 = 211;
pub const CREATE_SRR: u16 = 212;
pub const UPDATE_SRR: u16 = 213;
pub const SESSION_REPORT: u16 = 214;
pub const SRR_ID: u16 = 215;
pub const ACCESS_AVAILABILITY_CONTROL_INFORMATION: u16 = 216;
pub const REQUESTED_ACCESS_AVAILABILITY_INFORMATION: u16 = 217;
pub const ACCESS_AVAILABILITY_REPORT: u16 = 218;
pub const ACCESS_AVAILABILITY_INFORMATION: u16 = 219;
pub const PROVIDE_ATSSS_CONTROL_INFORMATION: u16 = 220;
pub const ATSSS_CONTROL_PARAMETERS: u16 = 221;
pub const MPTCP_CONTROL_INFORMATION: u16 = 222;
pub const ATSSS_LL_CONTROL_INFORMATION: u16 = 223;
pub const PMF_CONTROL_INFORMATION: u16 = 224;
pub const MPTCP_PARAMETERS: u16 = 225;
pub const ATSSS_LL_PARAMETERS: u16 = 226;
pub const PMF_PARAMETERS: u16 = 227;
pub const MPTCP_ADDRESS_INFORMATION: u16 = 228;
pub const UE_LINK_SPECIFIC_IP_ADDRESS: u16 = 229;
pub const PMF_ADDRESS_INFORMATION: u16 = 230;
pub const ATSSS_LL_INFORMATION: u16 = 231;
pub const DATA_NETWORK_ACCESS_IDENTIFIER: u16 = 232;
pub const UE_IP_ADDRESS_POOL_INFORMATION: u16 = 233;
pub const AVERAGE_PACKET_DELAY: u16 = 234;
pub const MINIMUM_PACKET_DELAY: u16 = 235;
pub const MAXIMUM_PACKET_DELAY: u16 = 236;
pub const QOS_REPORT_TRIGGER: u16 = 237;
pub const GTP_U_PATH_QOS_CONTROL_INFORMATION: u16 = 238;
pub const GTP_U_PATH_QOS_REPORT: u16 = 239;
pub const QOS_INFORMATION_IN_GTP_U_PATH_QOS_REPORT: u16 = 240;
pub const GTP_U_PATH_INTERFACE_TYPE: u16 = 241;
pub const QOS_MONITORING_PER_QOS_FLOW_CONTROL_INFORMATION: u16 = 242;
pub const REQUESTED_QOS_MONITORING: u16 = 243;
pub const REPORTING_FREQUENCY: u16 = 244;
pub const PACKET_DELAY_THRESHOLDS: u16 = 245;
pub const MINIMUM_WAIT_TIME: u16 = 246;
pub const QOS_MONITORING_REPORT: u16 = 247;
pub const QOS_MONITORING_MEASUREMENT: u16 = 248;
pub const MT_EDT_CONTROL_INFORMATION: u16 = 249;
pub const DL_DATA_PACKETS_SIZE: u16 = 250;
pub const QER_CONTROL_INDICATIONS: u16 = 251;
pub const PACKET_RATE_STATUS_REPORT: u16 = 252;
pub const NF_INSTANCE_ID: u16 = 253;
pub const ETHERNET_CONTEXT_INFORMATION: u16 = 254;
pub const REDUNDANT_TRANSMISSION_PARAMETERS: u16 = 255;
pub const UPDATED_PDR: u16 = 256;
pub const PROVIDE_RDS_CONFIGURATION_INFORMATION: u16 = 261;
pub const QUERY_PACKET_RATE_STATUS: u16 = 263;
pub const UE_IP_ADDRESS_USAGE_INFORMATION: u16 = 267;
pub const REDUNDANT_TRANSMISSION_FORWARDING_PARAMETERS: u16 = 270;
pub const PARTIAL_FAILURE_INFORMATION: u16 = 272;
pub const L2TP_TUNNEL_INFORMATION: u16 = 276;
pub const L2TP_SESSION_INFORMATION: u16 = 277;
pub const CREATED_L2TP_SESSION: u16 = 279;
pub const PFCP_SESSION_CHANGE_INFO: u16 = 290;

/// Grouped IE types defined by TS 29.244 (Table 8.1.2-1, "Extendable / grouped").
pub const DEFAULT_GROUPED: &[u16] = &[
    CREATE_PDR,
    PDI,
    CREATE_FAR,
    FORWARDING_PARAMETERS,
    DUPLICATING_PARAMETERS,
    CREATE_URR,
    CREATE_QER,
    CREATED_PDR,
    UPDATE_PDR,
    UPDATE_FAR,
    UPDATE_FORWARDING_PARAMETERS,
    UPDATE_BAR_SESSION_REPORT_RESPONSE,
    UPDATE_URR,
    UPDATE_QER,
    REMOVE_PDR,
    REMOVE_FAR,
    REMOVE_URR,
    REMOVE_QER,
    LOAD_CONTROL_INFORMATION,
    OVERLOAD_CONTROL_INFORMATION,
    APPLICATION_IDS_PFDS,
    PFD_CONTEXT,
    APPLICATION_DETECTION_INFORMATION,
    QUERY_URR,
    USAGE_REPORT_SMR,
    USAGE_REPORT_SDR,
    USAGE_REPORT_SRR,
    DOWNLINK_DATA_REPORT,
    CREATE_BAR,
    UPDATE_BAR,
    REMOVE_BAR,
    ERROR_INDICATION_REPORT,
    USER_PLANE_PATH_FAILURE_REPORT,
    UPDATE_DUPLICATING_PARAMETERS,
    AGGREGATED_URRS,
    CREATE_TRAFFIC_ENDPOINT,
    CREATED_TRAFFIC_ENDPOINT,
    UPDATE_TRAFFIC_ENDPOINT,
    REMOVE_TRAFFIC_ENDPOINT,
    ETHERNET_PACKET_FILTER,
    ETHERNET_TRAFFIC_INFORMATION,
    ADDITIONAL_MONITORING_TIME,
    CREATE_MAR,
    THREE_GPP_ACCESS_FORWARDING_ACTION_INFORMATION,
    NON_3GPP_ACCESS_FORWARDING_ACTION_INFORMATION,
    REMOVE_MAR,
    UPDATE_MAR,
    UPDATE_3GPP_ACCESS_FORWARDING_ACTION_INFORMATION,
    UPDATE_NON_3GPP_ACCESS_FORWARDING_ACTION_INFORMATION,
    PFCP_SESSION_RETENTION_INFORMATION,
    USER_PLANE_PATH_RECOVERY_REPORT,
    JOIN_IP_MULTICAST_INFORMATION,
    LEAVE_IP_MULTICAST_INFORMATION,
    CREATE_BRIDGE_INFO_FOR_TSC,
    CREATED_BRIDGE_INFO_FOR_TSC,
    TSC_MANAGEMENT_INFORMATION_SMR,
    TSC_MANAGEMENT_INFORMATION_SMRSP,
    TSC_MANAGEMENT_INFORMATION_SRR,
    CLOCK_DRIFT_CONTROL_INFORMATION,
    CLOCK_DRIFT_REPORT,
    REMOVE_SRR,
    CREATE_SRR,
    UPDATE_SRR,
    SESSION_REPORT,
    ACCESS_AVAILABILITY_CONTROL_INFORMATION,
    ACCESS_AVAILABILITY_REPORT,
    PROVIDE_ATSSS_CONTROL_INFORMATION,
    ATSSS_CONTROL_PARAMETERS,
    MPTCP_PARAMETERS,
    ATSSS_LL_PARAMETERS,
    PMF_PARAMETERS,
    UE_IP_ADDRESS_POOL_INFORMATION,
    GTP_U_PATH_QOS_CONTROL_INFORMATION,
    GTP_U_PATH_QOS_REPORT,
    QOS_INFORMATION_IN_GTP_U_PATH_QOS_REPORT,
    QOS_MONITORING_PER_QOS_FLOW_CONTROL_INFORMATION,
    QOS_MONITORING_REPORT,
    PACKET_RATE_STATUS_REPORT,
    ETHERNET_CONTEXT_INFORMATION,
    REDUNDANT_TRANSMISSION_PARAMETERS,
    UPDATED_PDR,
    PROVIDE_RDS_CONFIGURATION_INFORMATION,
    QUERY_PACKET_RATE_STATUS,
    UE_IP_ADDRESS_USAGE_INFORMATION,
    REDUNDANT_TRANSMISSION_FORWARDING_PARAMETERS,
    PARTIAL_FAILURE_INFORMATION,
    L2TP_TUNNEL_INFORMATION,
    L2TP_SESSION_INFORMATION,
    CREATED_L2TP_SESSION,
    PFCP_SESSION_CHANGE_INFO,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_bit_helpers() {
        assert!(is_vendor_specific(0x8001));
        assert!(!is_vendor_specific(CREATE_PDR));
        assert_eq!(base_type(0x8000 | CREATE_FAR), CREATE_FAR);
        assert_eq!(base_type(CAUSE), CAUSE);
    }

    #[test]
    fn test_default_grouped_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for t in DEFAULT_GROUPED {
            assert!(seen.insert(*t), "duplicate grouped type {t}");
            assert!(!is_vendor_specific(*t));
        }
        assert!(DEFAULT_GROUPED.len() > 80);
    }
}
