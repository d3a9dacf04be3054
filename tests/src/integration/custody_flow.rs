//! # Custody Flow
//!
//! A batch from creation to sell-out, with the role-scoped queries checked
//! at each hand-off.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shared_ledger::{TransactionKind, DEFAULT_UNASSIGNED_OWNER};

    use crate::fixtures::{deploy_custody, invoke_json, query_json, stored_batch};

    // =============================================================================
    // FULL LIFECYCLE
    // =============================================================================

    #[test]
    fn test_batch_lifecycle_to_sell_out() {
        let (contract, ledger) = deploy_custody();

        invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "FISHCO", "100", "2024-03-01", "Dock 4"]).unwrap();
        assert_eq!(query_json(&contract, &ledger, "getNbItems", &["FISHCO"]), json!(100));

        invoke_json(&contract, &ledger, "claimBatch", &["B1", "SHIPPINGCO", "2024-03-02", "Dock 4"]).unwrap();
        assert_eq!(query_json(&contract, &ledger, "getNbItems", &["FISHCO"]), json!(0));

        let updated = invoke_json(&contract, &ledger, "updateBatchQuality", &["SHIPPINGCO", "2024-03-03", "At sea", "COLD"]).unwrap();
        assert_eq!(updated, json!({"batches": ["B1"]}));

        invoke_json(&contract, &ledger, "transferBatch", &["B1", "SHIPPINGCO", "2024-03-04", "Port", "RETAILER", "sig-retailer"]).unwrap();
        assert_eq!(query_json(&contract, &ledger, "getAllBatches", &["RETAILER"]), json!({"batches": ["B1"]}));

        invoke_json(&contract, &ledger, "sellBatchItem", &["B1", "RETAILER", "2024-03-05", "Shop", "40", "bob"]).unwrap();
        let last = invoke_json(&contract, &ledger, "sellBatchItem", &["B1", "RETAILER", "2024-03-06", "Shop", "60", "carol"]).unwrap();
        assert_eq!(last["owner"], json!(DEFAULT_UNASSIGNED_OWNER));
        assert_eq!(last["quantity"], json!(0));

        let batch = stored_batch(&contract, &ledger, "B1");
        assert_eq!(batch.quality, "COLD");
        assert_eq!(batch.signature, "sig-retailer");

        let kinds: Vec<TransactionKind> = batch.transactions.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Create,
                TransactionKind::Claim,
                TransactionKind::UpdateQuality,
                TransactionKind::Transfer,
                TransactionKind::Sell,
                TransactionKind::Sell,
            ]
        );
        let ids: Vec<&str> = batch.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["B1T1", "B1T2", "B1T3", "B1T4", "B1T5", "B1T6"]);

        let sale = batch.last_transaction().unwrap();
        assert_eq!(sale.owner, "carol");
        assert_eq!(sale.quantity, 60);

        // Sold-out batches belong to nobody.
        assert_eq!(query_json(&contract, &ledger, "getAllBatches", &["RETAILER"]), json!({"batches": []}));
        assert_eq!(query_json(&contract, &ledger, "getAllBatches", &["CERTIFIER"]), json!({"batches": ["B1"]}));
    }

    // =============================================================================
    // ROLE-SCOPED QUERIES
    // =============================================================================

    #[test]
    fn test_quality_update_only_touches_shipper_holdings() {
        let (contract, ledger) = deploy_custody();
        for id in ["B1", "B2"] {
            invoke_json(&contract, &ledger, "createBatch", &[id, "cod", "FISHCO", "10", "d", "l"]).unwrap();
        }
        invoke_json(&contract, &ledger, "claimBatch", &["B2", "SHIPPINGCO", "d", "l"]).unwrap();

        let updated = invoke_json(&contract, &ledger, "updateBatchQuality", &["SHIPPINGCO", "d", "l", "WARM"]).unwrap();
        assert_eq!(updated, json!({"batches": ["B2"]}));

        assert_eq!(stored_batch(&contract, &ledger, "B1").quality, "OK");
        assert_eq!(stored_batch(&contract, &ledger, "B2").quality, "WARM");
        assert_eq!(stored_batch(&contract, &ledger, "B1").transactions.len(), 1);
    }

    #[test]
    fn test_details_are_redacted_and_owner_scoped() {
        let (contract, ledger) = deploy_custody();
        invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "FISHCO", "5", "d", "l"]).unwrap();
        invoke_json(&contract, &ledger, "createBatch", &["B2", "tuna", "FISHCO", "7", "d", "l"]).unwrap();
        invoke_json(&contract, &ledger, "claimBatch", &["B2", "SHIPPINGCO", "d", "l"]).unwrap();

        let details = query_json(&contract, &ledger, "getAllBatchesDetails", &["FISHCO"]);
        let batches = details["batches"].as_array().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0]["id"], json!("B1"));
        assert_eq!(batches[0]["signature"], json!(""));
        assert!(batches[0]["transactions"].as_array().map_or(true, Vec::is_empty));

        // No certifier bypass for details.
        let certifier = query_json(&contract, &ledger, "getAllBatchesDetails", &["CERTIFIER"]);
        assert_eq!(certifier["batches"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_legacy_query_form() {
        let (contract, ledger) = deploy_custody();
        invoke_json(&contract, &ledger, "createBatch", &["B1", "tuna", "FISHCO", "12", "d", "l"]).unwrap();

        let modern = query_json(&contract, &ledger, "getNbItems", &["FISHCO"]);
        let legacy = query_json(&contract, &ledger, "query", &["getNbItems", "FISHCO"]);
        assert_eq!(modern, legacy);
    }
}
