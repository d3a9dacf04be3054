//! # Role Spoofing
//!
//! The caller names its own role in the arguments, so every gate has to
//! match the configured identity exactly.

#[cfg(test)]
mod tests {
    use pc_01_batch_custody::BatchCustodyContract;
    use serde_json::json;
    use shared_ledger::{Chaincode, InMemoryLedger, LedgerConfig, Role};

    use crate::fixtures::{args, deploy_custody, invoke_json, query_json};

    #[test]
    fn test_unknown_identity_cannot_create() {
        let (contract, ledger) = deploy_custody();
        let err = invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "MALLORY", "10", "d", "l"]).unwrap_err();
        assert_eq!(err.code(), "Unauthorized");

        let missing = contract.query(&ledger, "getBatch", &args(&["B1"])).unwrap_err();
        assert_eq!(missing.code(), "NotFound");
    }

    #[test]
    fn test_wrong_role_for_each_gate() {
        let (contract, ledger) = deploy_custody();
        invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "FISHCO", "10", "d", "l"]).unwrap();

        let attempts: [(&str, &[&str]); 4] = [
            ("claimBatch", &["B1", "RETAILER", "d", "l"]),
            ("transferBatch", &["B1", "FISHCO", "d", "l", "RETAILER", "sig"]),
            ("sellBatchItem", &["B1", "SHIPPINGCO", "d", "l", "1", "bob"]),
            ("updateBatchQuality", &["CERTIFIER", "d", "l", "BAD"]),
        ];
        for (function, values) in attempts {
            let err = invoke_json(&contract, &ledger, function, values).unwrap_err();
            assert_eq!(err.code(), "Unauthorized", "{function}");
        }

        let batch = query_json(&contract, &ledger, "getBatch", &["B1"]);
        assert_eq!(batch["owner"], json!("FISHCO"));
        assert_eq!(batch["transactions"].as_array().unwrap().len(), 1);

        let stats = contract.stats();
        assert_eq!(stats.committed, 1);
        assert_eq!(stats.rejected, 4);
        assert_eq!(stats.client_errors, 4);
    }

    #[test]
    fn test_certifier_bypass_needs_exact_identity() {
        let (contract, ledger) = deploy_custody();
        invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "FISHCO", "10", "d", "l"]).unwrap();

        assert_eq!(query_json(&contract, &ledger, "getAllBatches", &["CERTIFIER"]), json!({"batches": ["B1"]}));
        assert_eq!(query_json(&contract, &ledger, "getAllBatches", &["certifier"]), json!({"batches": []}));
        assert_eq!(query_json(&contract, &ledger, "getAllBatches", &["CERTIFIER "]), json!({"batches": []}));
    }

    #[test]
    fn test_reconfigured_identities() {
        let mut config = LedgerConfig::default();
        config.roles.producer = "NORDFISK".to_string();
        let contract = BatchCustodyContract::new(config);
        let ledger = InMemoryLedger::new();
        contract.init(&ledger).unwrap();

        let err = invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "FISHCO", "10", "d", "l"]).unwrap_err();
        assert_eq!(err.code(), "Unauthorized");
        invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "NORDFISK", "10", "d", "l"]).unwrap();
        assert_eq!(contract.config().roles.identity(Role::Producer), "NORDFISK");
    }

    #[test]
    fn test_arity_reported_before_role() {
        let (contract, ledger) = deploy_custody();
        let err = invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "MALLORY"]).unwrap_err();
        assert_eq!(err.code(), "ArgumentCountError");
    }
}
