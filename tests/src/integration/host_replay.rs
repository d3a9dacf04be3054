//! # Host Replay
//!
//! Scripts replayed through the chaincode host across snapshot reloads.

#[cfg(test)]
mod tests {
    use chaincode_host::{parse_script, ChaincodeHost, ContractKind, ContractRegistry};
    use serde_json::json;
    use shared_ledger::SnapshotFile;

    const DAY_ONE: &str = r#"
# producer lands two batches
{"kind":"invoke","function":"createBatch","args":["B1","tuna","FISHCO","30","2024-05-01","Dock"]}
{"kind":"invoke","function":"createBatch","args":["B2","cod","FISHCO","12","2024-05-01","Dock"]}
{"kind":"invoke","function":"claimBatch","args":["B1","SHIPPINGCO","2024-05-01","Dock"]}
{"kind":"invoke","function":"claimBatch","args":["B1","FISHCO","2024-05-01","Dock"]}
"#;

    const DAY_TWO: &str = r#"
{"kind":"invoke","function":"transferBatch","args":["B1","SHIPPINGCO","2024-05-02","Port","RETAILER","sig"]}
{"kind":"invoke","function":"sellBatchItem","args":["B1","RETAILER","2024-05-02","Shop","30","dave"]}
{"kind":"query","function":"getAllBatches","args":["CERTIFIER"]}
{"kind":"query","function":"getNbItems","args":["FISHCO"]}
"#;

    #[test]
    fn test_replay_across_snapshot_reload() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("custody.json"));
        let registry = ContractRegistry::default();

        let host = ChaincodeHost::open(registry.get(ContractKind::Custody).unwrap(), &snapshot).unwrap();
        let results = host.run(&parse_script(DAY_ONE).unwrap());
        assert_eq!(results.iter().filter(|r| r.ok).count(), 3);
        let denied = &results[3];
        assert_eq!(denied.line, 6);
        assert_eq!(denied.error.as_ref().unwrap().code, "Unauthorized");
        host.save(&snapshot).unwrap();

        let host = ChaincodeHost::open(registry.get(ContractKind::Custody).unwrap(), &snapshot).unwrap();
        let results = host.run(&parse_script(DAY_TWO).unwrap());
        assert!(results.iter().all(|r| r.ok));
        assert_eq!(results[1].payload.as_ref().unwrap()["owner"], json!("N/A"));
        assert_eq!(results[2].payload, Some(json!({"batches": ["B1", "B2"]})));
        assert_eq!(results[3].payload, Some(json!(12)));
    }

    #[test]
    fn test_failed_lines_do_not_reach_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("funds.json"));
        let registry = ContractRegistry::default();

        let host = ChaincodeHost::open(registry.get(ContractKind::Funds).unwrap(), &snapshot).unwrap();
        let script = parse_script(concat!(
            r#"{"kind":"invoke","function":"createDonation","args":["10","P","eve","D1","d"]}"#,
            "\n",
            r#"{"kind":"invoke","function":"transfer","args":["S1","P","10"]}"#,
        ))
        .unwrap();
        let before_failure = {
            host.execute(&script[0]);
            host.ledger().snapshot()
        };
        let failed = host.execute(&script[1]);
        assert_eq!(failed.error.unwrap().code, "AmountUnavailable");
        assert_eq!(host.ledger().snapshot(), before_failure);

        host.save(&snapshot).unwrap();
        let reloaded = snapshot.load().unwrap();
        assert_eq!(reloaded.snapshot(), before_failure);
    }
}
