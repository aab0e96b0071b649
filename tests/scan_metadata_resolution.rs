use billwatch::report::{
    aggregate_latest, select_diff_pair, DiffCandidates, Interval, ScanMetadata,
};

fn candidates(raw: &str) -> DiffCandidates {
    serde_json::from_str(raw).expect("candidates parse")
}

#[test]
fn metadata_payload_resolves_as_one_source() {
    let candidates = candidates(
        r#"{
            "metadata": {
                "diff_report": {
                    "time_interval": "weekly",
                    "new_bills_count": 3,
                    "new_bills": ["HB 1", "HB 2", "SB 4"],
                    "compliance_delta": 2.5
                },
                "analysis": "Three bills were introduced this week.",
                "scan_date": "2025-09-12T06:00:00Z"
            }
        }"#,
    );

    let pair = select_diff_pair(&candidates, Interval::Weekly).expect("resolves");
    assert_eq!(pair.report.new_bills_count, 3);
    assert_eq!(pair.report.time_interval, Some(Interval::Weekly));
    assert_eq!(pair.analysis, "Three bills were introduced this week.");
}

#[test]
fn a_diff_without_narrative_is_never_mixed_with_another_source() {
    let candidates = candidates(
        r#"{
            "metadata": {
                "diff_report": { "new_bills_count": 3 }
            },
            "by_interval": {
                "reports": {
                    "daily": { "new_bills_count": 7 }
                },
                "analysis": "Seven bills moved today."
            }
        }"#,
    );

    // The metadata tier has numbers but no prose; its report must be skipped
    // whole, not paired with the keyed tier's narrative.
    let pair = select_diff_pair(&candidates, Interval::Daily).expect("keyed tier resolves");
    assert_eq!(pair.report.new_bills_count, 7);
    assert_eq!(pair.analysis, "Seven bills moved today.");
}

#[test]
fn unknown_interval_tags_are_tolerated() {
    let candidates = candidates(
        r#"{
            "metadata": {
                "diff_report": { "time_interval": "biweekly", "new_bills_count": 1 },
                "analysis": "One new bill."
            }
        }"#,
    );

    let pair = select_diff_pair(&candidates, Interval::Daily).expect("resolves");
    assert_eq!(pair.report.time_interval, None);
}

#[test]
fn zero_resolvable_candidates_render_nothing() {
    assert!(select_diff_pair(&candidates("{}"), Interval::Daily).is_none());
}

#[test]
fn committee_scans_aggregate_deterministically() {
    let house: ScanMetadata = serde_json::from_str(
        r#"{
            "diff_report": {
                "time_interval": "daily",
                "compliance_delta": 4.0,
                "new_bills_count": 2,
                "new_bills": ["HB 2", "HB 1"],
                "bills_reported_out": ["HB 1"]
            },
            "analysis": "House narrative.",
            "scan_date": "2025-09-12T06:00:00Z"
        }"#,
    )
    .expect("scan parses");
    let senate: ScanMetadata = serde_json::from_str(
        r#"{
            "diff_report": {
                "compliance_delta": -2.0,
                "new_bills_count": 1,
                "new_bills": ["SB 9", "HB 1"],
                "bills_reported_out": []
            },
            "scan_date": "2025-09-13T06:00:00Z"
        }"#,
    )
    .expect("scan parses");

    let forward = aggregate_latest(&[house.clone(), senate.clone()]).expect("aggregates");
    let reversed = aggregate_latest(&[senate, house]).expect("aggregates");

    let report = forward.diff_report.clone().expect("merged report");
    assert_eq!(report.new_bills_count, 3);
    assert_eq!(report.compliance_delta, Some(1.0));
    assert_eq!(report.new_bills, vec!["HB 1", "HB 2", "SB 9"]);
    assert_eq!(forward.analysis, None);

    // Committee order must not change the merged numbers or lists.
    assert_eq!(forward.diff_report, reversed.diff_report);
}
