//! # Ledger Atomicity
//!
//! Rejected invocations must leave the ledger byte-for-byte unchanged, and
//! no record may shadow a registry index.

#[cfg(test)]
mod tests {
    use shared_ledger::{Chaincode, BATCH_INDEX, DONATION_INDEX, SUPPLIER_INDEX};

    use crate::fixtures::{args, deploy_custody, deploy_funds, invoke_json, query_json};

    // =============================================================================
    // CUSTODY
    // =============================================================================

    #[test]
    fn test_rejected_custody_calls_leave_no_trace() {
        let (contract, ledger) = deploy_custody();
        invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "FISHCO", "10", "d", "l"]).unwrap();
        invoke_json(&contract, &ledger, "claimBatch", &["B1", "SHIPPINGCO", "d", "l"]).unwrap();
        invoke_json(&contract, &ledger, "transferBatch", &["B1", "SHIPPINGCO", "d", "l", "RETAILER", "s"]).unwrap();
        let before = ledger.snapshot();

        let rejected: [(&str, &[&str], &str); 7] = [
            ("sellBatchItem", &["B1", "RETAILER", "d", "l", "11", "bob"], "InvalidArgument"),
            ("sellBatchItem", &["B1", "RETAILER", "d", "l", "0", "bob"], "InvalidNumericArgument"),
            ("sellBatchItem", &["B1", "RETAILER", "d", "l", "ten", "bob"], "InvalidNumericArgument"),
            ("createBatch", &["B1", "tuna", "FISHCO", "5", "d", "l"], "AlreadyExists"),
            ("createBatch", &["B2", "tuna", "FISHCO", "-5", "d", "l"], "InvalidNumericArgument"),
            ("claimBatch", &["B9", "SHIPPINGCO", "d", "l"], "NotFound"),
            ("burnBatch", &["B1"], "UnknownOperation"),
        ];
        for (function, values, code) in rejected {
            let err = invoke_json(&contract, &ledger, function, values).unwrap_err();
            assert_eq!(err.code(), code, "{function} {values:?}");
            assert_eq!(ledger.snapshot(), before, "{function} {values:?} changed the ledger");
        }
    }

    #[test]
    fn test_batch_cannot_shadow_index() {
        let (contract, ledger) = deploy_custody();
        let err = invoke_json(&contract, &ledger, "createBatch", &[BATCH_INDEX.key(), "tuna", "FISHCO", "1", "d", "l"]).unwrap_err();
        assert_eq!(err.code(), "InvalidArgument");

        let lookup = contract.query(&ledger, "getBatch", &args(&[BATCH_INDEX.key()])).unwrap_err();
        assert_eq!(lookup.code(), "NotFound");
        assert_eq!(query_json(&contract, &ledger, "getAllBatches", &["CERTIFIER"]), serde_json::json!({"batches": []}));
    }

    // =============================================================================
    // FUNDS
    // =============================================================================

    #[test]
    fn test_rejected_fund_calls_leave_no_trace() {
        let (contract, ledger) = deploy_funds();
        invoke_json(&contract, &ledger, "createDonation", &["40", "P", "alice", "A", "d"]).unwrap();
        let before = ledger.snapshot();

        let rejected: [(&str, &[&str], &str); 6] = [
            ("transfer", &["S1", "P", "40"], "AmountUnavailable"),
            ("transfer", &["S1", "Q", "1"], "AmountUnavailable"),
            ("transfer", &["A", "P", "10"], "InvalidArgument"),
            ("transfer", &[SUPPLIER_INDEX.key(), "P", "10"], "InvalidArgument"),
            ("createDonation", &["5", "P", "bob", "A", "d"], "AlreadyExists"),
            ("createDonation", &["5", "P", "bob", DONATION_INDEX.key(), "d"], "InvalidArgument"),
        ];
        for (function, values, code) in rejected {
            let err = invoke_json(&contract, &ledger, function, values).unwrap_err();
            assert_eq!(err.code(), code, "{function} {values:?}");
            assert_eq!(ledger.snapshot(), before, "{function} {values:?} changed the ledger");
        }
    }

    #[test]
    fn test_queries_are_read_only() {
        let (contract, ledger) = deploy_funds();
        invoke_json(&contract, &ledger, "createDonation", &["40", "P", "alice", "A", "d"]).unwrap();
        invoke_json(&contract, &ledger, "transfer", &["S1", "P", "15"]).unwrap();
        let before = ledger.snapshot();

        for _ in 0..2 {
            let first = contract.query(&ledger, "getSupplier", &args(&["S1"])).unwrap();
            let second = contract.query(&ledger, "getSupplier", &args(&["S1"])).unwrap();
            assert_eq!(first, second);
            query_json(&contract, &ledger, "getProjectBalance", &["P"]);
        }
        assert_eq!(ledger.snapshot(), before);
        assert_eq!(contract.stats().queries, 6);
    }
}
