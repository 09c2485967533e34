use criterion::{black_box, criterion_group, criterion_main, Criterion};

use orderdesk_engine::ReconciliationEngine;
use orderdesk_orders::{OrderChanges, OrderDraft, OrderStatus};
use orderdesk_parties::ClientId;
use orderdesk_products::{Product, ProductId};
use orderdesk_store::{InMemoryOrderStore, InMemoryProductLedger, ProductLedger};

fn setup(
    stock: i64,
) -> (
    ReconciliationEngine<InMemoryProductLedger, InMemoryOrderStore>,
    ProductId,
    ClientId,
) {
    let product_id = ProductId::new();
    let product = Product::new(product_id, "Bench Product", 500, stock).unwrap();
    let engine = ReconciliationEngine::new(
        InMemoryProductLedger::with_products([product]),
        InMemoryOrderStore::new(),
    );
    (engine, product_id, ClientId::new())
}

fn draft(client: ClientId, product: ProductId, quantity: i64) -> OrderDraft {
    OrderDraft {
        client,
        product,
        quantity,
        status: None,
        assigned_user: None,
    }
}

fn bench_reconciliation(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconciliation");
    group.sample_size(1000);

    // Stock high enough that the bench never drains it.
    group.bench_function("create_order", |b| {
        let (engine, product_id, client) = setup(i64::MAX / 2);
        b.iter(|| {
            engine
                .create_order(black_box(&draft(client, product_id, 1)))
                .unwrap()
        });
    });

    group.bench_function("create_then_cancel", |b| {
        let (engine, product_id, client) = setup(i64::MAX / 2);
        b.iter(|| {
            let order = engine
                .create_order(black_box(&draft(client, product_id, 3)))
                .unwrap();
            engine
                .update_order(
                    &order.id,
                    &OrderChanges {
                        status: Some(OrderStatus::Cancelled),
                        ..OrderChanges::default()
                    },
                )
                .unwrap()
        });
    });

    group.bench_function("adjust_stock_reserve_release", |b| {
        let ledger = InMemoryProductLedger::with_products([Product::new(
            ProductId::new(),
            "Bench Product",
            500,
            1_000_000,
        )
        .unwrap()]);
        let product_id = ledger.list().unwrap()[0].id_typed();
        b.iter(|| {
            ledger.adjust_stock(&product_id, black_box(-1)).unwrap();
            ledger.adjust_stock(&product_id, black_box(1)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reconciliation);
criterion_main!(benches);
