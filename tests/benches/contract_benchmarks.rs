//! # Provenance-Chain Contract Benchmarks
//!
//! | Contract | Path | Scales with |
//! |----------|------|-------------|
//! | pc-01 Batch Custody | createBatch + sellBatchItem | batch index size |
//! | pc-01 Batch Custody | getAllBatches | batch index size |
//! | pc-02 Donation Funds | plan_allocation | donations in the project |
//! | pc-02 Donation Funds | getProjectBalance | donation index size |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use pc_01_batch_custody::BatchCustodyContract;
use pc_02_donation_funds::{plan_allocation, Donation, DonationFundsContract};
use shared_ledger::{Chaincode, InMemoryLedger, LedgerConfig};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn custody_ledger(batches: usize) -> (BatchCustodyContract, InMemoryLedger) {
    let contract = BatchCustodyContract::new(LedgerConfig::default());
    let ledger = InMemoryLedger::new();
    contract.init(&ledger).unwrap();
    for i in 0..batches {
        let id = format!("B{i}");
        contract
            .invoke(&ledger, "createBatch", &args(&[id.as_str(), "tuna", "FISHCO", "1000", "d", "l"]))
            .unwrap();
    }
    (contract, ledger)
}

fn funds_ledger(donations: usize) -> (DonationFundsContract, InMemoryLedger) {
    let mut rng = StdRng::seed_from_u64(42);
    let contract = DonationFundsContract::new();
    let ledger = InMemoryLedger::new();
    contract.init(&ledger).unwrap();
    for i in 0..donations {
        let id = format!("D{i}");
        let amount = rng.gen_range(1..=1_000_i64).to_string();
        contract
            .invoke(&ledger, "createDonation", &args(&[amount.as_str(), "P", "donor", id.as_str(), "d"]))
            .unwrap();
    }
    (contract, ledger)
}

// ============================================================================
// PC-01: Batch Custody
// ============================================================================

fn bench_custody(c: &mut Criterion) {
    let mut group = c.benchmark_group("pc-01-batch-custody");
    group.measurement_time(Duration::from_secs(5));

    for size in [10, 100, 1_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("create_and_sell", size), &size, |b, &size| {
            let (contract, ledger) = custody_ledger(size);
            let mut next = 0u64;
            b.iter(|| {
                let id = format!("X{next}");
                next += 1;
                contract
                    .invoke(&ledger, "createBatch", &args(&[id.as_str(), "cod", "FISHCO", "5", "d", "l"]))
                    .unwrap();
                black_box(
                    contract
                        .invoke(&ledger, "sellBatchItem", &args(&[id.as_str(), "RETAILER", "d", "l", "5", "bob"]))
                        .unwrap(),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("certifier_listing", size), &size, |b, &size| {
            let (contract, ledger) = custody_ledger(size);
            let query = args(&["CERTIFIER"]);
            b.iter(|| black_box(contract.query(&ledger, "getAllBatches", &query).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// PC-02: Donation Funds
// ============================================================================

fn bench_funds(c: &mut Criterion) {
    let mut group = c.benchmark_group("pc-02-donation-funds");
    group.measurement_time(Duration::from_secs(5));

    for size in [10, 100, 1_000] {
        let donations: Vec<Donation> = (0..size)
            .map(|i| Donation::new(&format!("D{i}"), "donor", 100, "P", "d"))
            .collect();
        let requested = (size as i64) * 50;
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("plan_allocation", size), &donations, |b, donations| {
            b.iter(|| black_box(plan_allocation(donations, requested).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("project_balance", size), &size, |b, &size| {
            let (contract, ledger) = funds_ledger(size);
            let query = args(&["P"]);
            b.iter(|| black_box(contract.query(&ledger, "getProjectBalance", &query).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_custody, bench_funds);
criterion_main!(benches);
