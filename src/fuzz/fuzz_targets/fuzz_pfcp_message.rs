//! PFCP Message Fuzzer
//!
//! Feeds arbitrary bytes to the PFCP IE and message decoders. Every input is
//! decoded twice: once with the default grouped table and once with a
//! classifier that treats every IE as grouped, which drives the decoder to
//! its nesting limit.
//!
//! Run with: cargo +nightly fuzz run fuzz_pfcp_message

#![no_main]

use std::sync::OnceLock;

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use ogs_pfcp::classifier::GroupedIeClassifier;
use ogs_pfcp::ie::Ie;
use ogs_pfcp::message::{build_message, parse_message, parse_message_with};

fn all_grouped() -> &'static GroupedIeClassifier {
    static CLASSIFIER: OnceLock<GroupedIeClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(|| {
        let classifier = GroupedIeClassifier::new();
        classifier.set_strategy(|_| true);
        classifier
    })
}

fuzz_target!(|data: &[u8]| {
    let bytes = Bytes::copy_from_slice(data);

    if let Ok(ies) = Ie::parse_multi_bytes(&bytes) {
        // Whatever decodes must encode back to the same octets
        let mut wire = Vec::with_capacity(bytes.len());
        for ie in &ies {
            if let Ok(encoded) = ie.marshal() {
                wire.extend_from_slice(&encoded);
            }
        }
        assert_eq!(wire, data);
    }
    let _ = Ie::parse_multi_with(&bytes, all_grouped());

    if let Ok((header, message)) = parse_message(&mut bytes.clone()) {
        let _ = build_message(&message, header.sequence_number, header.seid);
    }
    let _ = parse_message_with(&mut bytes.clone(), all_grouped());
});
