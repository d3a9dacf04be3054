//! # Funds Flow
//!
//! Donations pooled per project and drawn down by supplier allocations.

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_json::json;
    use shared_ledger::TransactionKind;

    use crate::fixtures::{deploy_funds, invoke_json, query_json, stored_donation};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn seed(contract: &dyn shared_ledger::Chaincode, ledger: &shared_ledger::InMemoryLedger) {
        for (amount, project, owner, id) in [("100", "P", "alice", "A"), ("50", "P", "bob", "B"), ("7", "Q", "alice", "C")] {
            invoke_json(contract, ledger, "createDonation", &[amount, project, owner, id, "2024-01-01"]).unwrap();
        }
    }

    fn balance(contract: &dyn shared_ledger::Chaincode, ledger: &shared_ledger::InMemoryLedger, project: &str) -> i64 {
        query_json(contract, ledger, "getProjectBalance", &[project]).as_i64().unwrap()
    }

    // =============================================================================
    // ALLOCATION
    // =============================================================================

    #[test]
    fn test_allocation_spans_donations_in_order() {
        let (contract, ledger) = deploy_funds();
        seed(&contract, &ledger);

        let outcome = invoke_json(&contract, &ledger, "transfer", &["S1", "P", "120", "nets"]).unwrap();
        assert_eq!(
            outcome["withdrawals"],
            json!([
                {"donationID": "A", "transactionID": "AT2", "amount": 100},
                {"donationID": "B", "transactionID": "BT2", "amount": 20},
            ])
        );
        assert_eq!(outcome["summaryID"], json!("BT2S"));
        assert_eq!(balance(&contract, &ledger, "P"), 30);
        assert_eq!(balance(&contract, &ledger, "Q"), 7);

        let drained = stored_donation(&contract, &ledger, "A");
        assert_eq!(drained.amount, 100);
        assert_eq!(drained.balance().unwrap(), 0);
        let withdrawal = &drained.transactions[1];
        assert_eq!(withdrawal.amount, -100);
        assert_eq!(withdrawal.kind, TransactionKind::Transfer);
        assert_eq!(withdrawal.destination, "S1");
        assert_eq!(withdrawal.details, "nets");

        let supplier = query_json(&contract, &ledger, "getSupplier", &["S1"]);
        assert_eq!(supplier["transactions"][0]["id"], json!("BT2S"));
        assert_eq!(supplier["transactions"][0]["amount"], json!(120));
    }

    #[test]
    fn test_repeat_allocations_and_exhaustion() {
        let (contract, ledger) = deploy_funds();
        seed(&contract, &ledger);

        invoke_json(&contract, &ledger, "transfer", &["S1", "P", "120"]).unwrap();
        let second = invoke_json(&contract, &ledger, "transfer", &["S1", "P", "29"]).unwrap();
        assert_eq!(
            second["withdrawals"],
            json!([
                {"donationID": "A", "transactionID": "AT3", "amount": 0},
                {"donationID": "B", "transactionID": "BT3", "amount": 29},
            ])
        );
        assert_eq!(second["summaryID"], json!("BT3S"));
        assert_eq!(stored_donation(&contract, &ledger, "A").transactions[2].amount, 0);
        assert_eq!(balance(&contract, &ledger, "P"), 1);

        // Duplicates are kept, one entry per allocation.
        assert_eq!(query_json(&contract, &ledger, "getAllSuppliers", &[]), json!({"suppliers": ["S1", "S1"]}));

        // The last unit can never be allocated.
        let err = invoke_json(&contract, &ledger, "transfer", &["S2", "P", "1"]).unwrap_err();
        assert_eq!(err.code(), "AmountUnavailable");
        assert_eq!(balance(&contract, &ledger, "P"), 1);
    }

    #[test]
    fn test_owner_and_registry_queries() {
        let (contract, ledger) = deploy_funds();
        seed(&contract, &ledger);

        assert_eq!(
            query_json(&contract, &ledger, "getAllDonationsByUserId", &["alice"]),
            json!({"donations": ["A", "C"]})
        );
        assert_eq!(
            query_json(&contract, &ledger, "getAllDonations", &[]),
            json!({"donations": ["A", "B", "C"]})
        );
        let history = query_json(&contract, &ledger, "getTransactions", &["C"]);
        assert_eq!(history[0]["id"], json!("CT1"));
        assert_eq!(history[0]["ttype"], json!("CREATE"));
    }

    // =============================================================================
    // CONSERVATION
    // =============================================================================

    /// Randomized allocations never create or destroy funds: every unit
    /// withdrawn from a donation shows up in exactly one supplier summary.
    #[test]
    fn test_randomized_allocations_conserve_funds() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let (contract, ledger) = deploy_funds();

        let mut pledged = 0;
        for i in 0..12 {
            let amount: i64 = rng.gen_range(1..=500);
            pledged += amount;
            let id = format!("D{i}");
            invoke_json(&contract, &ledger, "createDonation", &[amount.to_string().as_str(), "P", "donor", id.as_str(), "d"]).unwrap();
        }

        let mut allocated = 0;
        for round in 0..40 {
            let supplier = format!("S{}", rng.gen_range(0..4));
            let requested: i64 = rng.gen_range(1..=400);
            let result = invoke_json(&contract, &ledger, "transfer", &[supplier.as_str(), "P", requested.to_string().as_str()]);
            match result {
                Ok(outcome) => {
                    let drawn: i64 = outcome["withdrawals"]
                        .as_array()
                        .unwrap()
                        .iter()
                        .map(|w| w["amount"].as_i64().unwrap())
                        .sum();
                    assert_eq!(drawn, requested, "round {round}");
                    allocated += requested;
                }
                Err(e) => assert_eq!(e.code(), "AmountUnavailable", "round {round}"),
            }
            assert_eq!(balance(&contract, &ledger, "P"), pledged - allocated);
        }

        let suppliers = query_json(&contract, &ledger, "getAllSuppliers", &[]);
        let mut seen = std::collections::BTreeSet::new();
        let mut received = 0;
        for id in suppliers["suppliers"].as_array().unwrap() {
            let id = id.as_str().unwrap();
            if seen.insert(id.to_string()) {
                let supplier = query_json(&contract, &ledger, "getSupplier", &[id]);
                received += supplier["transactions"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|t| t["amount"].as_i64().unwrap())
                    .sum::<i64>();
            }
        }
        assert_eq!(received, allocated);
    }
}
