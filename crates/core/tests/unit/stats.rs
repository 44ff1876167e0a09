//! # Replay Statistics Tests

use pretty_assertions::assert_eq;
use rvviz_core::stats::ReplayStats;
use rvviz_core::trace::decode::record::decode_structured_stream;
use rvviz_core::trace::decode::transcript::decode_text_transcript;

use crate::common::fixtures::{FULL_TRANSCRIPT, RECORD_STREAM};

#[test]
fn record_stream_counters() {
    let snapshots = decode_structured_stream(RECORD_STREAM).unwrap();
    let stats = ReplayStats::collect(&snapshots);
    assert_eq!(
        stats,
        ReplayStats {
            cycles: 3,
            idle_cycles: 0,
            writebacks: 0,
            data_hazards: 1,
            control_hazards: 1,
            other_hazards: 0,
            forwarding_edges: 1,
        }
    );
    assert_eq!(stats.hazards(), 2);
}

#[test]
fn transcript_counters() {
    let run = decode_text_transcript(FULL_TRANSCRIPT);
    let stats = ReplayStats::collect(&run.snapshots);
    assert_eq!(stats.cycles, 4);
    assert_eq!(stats.writebacks, 3);
    assert_eq!(stats.idle_cycles, 0);
    assert!(stats.to_string().contains("replay_cycles            4"));
}

#[test]
fn filler_only_records_count_as_idle() {
    let stream = concat!(
        r#"{"pipeline":{"IF":"---","ID":"---","EX":"---","MEM":"---","WB":"---"}}"#,
        "\n",
        r#"{"pipeline":{"EX":null}}"#,
        "\n",
        r#"{"pipeline":{"IF":"nop","ID":"---"}}"#,
    );
    let snapshots = decode_structured_stream(stream).unwrap();
    let stats = ReplayStats::collect(&snapshots);
    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.idle_cycles, 2);
}
