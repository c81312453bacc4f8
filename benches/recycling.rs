//! Benchmarks for reload, pool churn and deletion
//!
//! Run with: cargo bench recycling

mod support;
use support::make_table;

use reel::config::ScrollPolicy;
use reel::messages::{DeleteMsg, Msg, TableMsg};
use reel::model::AnimationToken;
use reel::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Reload
// ============================================================================

#[divan::bench(args = [0, 8, 64])]
fn reload(bencher: divan::Bencher, budget: usize) {
    let mut table = make_table(10_000, budget, ScrollPolicy::Settle);

    bencher.bench_local(|| {
        let cmd = update(&mut table, Msg::Table(TableMsg::Reload));
        divan::black_box(cmd.ok());
    });
}

#[divan::bench(args = [100, 5_000, 9_990])]
fn reload_from(bencher: divan::Bencher, index: usize) {
    let mut table = make_table(10_000, 8, ScrollPolicy::Settle);

    bencher.bench_local(|| {
        let cmd = update(&mut table, Msg::Table(TableMsg::ReloadFrom(index)));
        divan::black_box(cmd.ok());
    });
}

// ============================================================================
// Pool churn: alternating jumps release and rebuild the whole window
// ============================================================================

#[divan::bench(args = [0, 4, 32])]
fn jump_churn_by_pool_capacity(bencher: divan::Bencher, capacity: usize) {
    bencher
        .with_inputs(|| {
            let mut table = make_table(10_000, 8, ScrollPolicy::Settle);
            table.set_max_reusable_count(capacity);
            table
        })
        .bench_local_values(|mut table| {
            for i in 0..50 {
                let from = if i % 2 == 0 { 150 } else { 0 };
                let cmd = update(&mut table, Msg::Table(TableMsg::ReloadFrom(from)));
                divan::black_box(cmd.ok());
            }
            table
        });
}

// ============================================================================
// Deletion round trip
// ============================================================================

#[divan::bench(args = [10, 100])]
fn delete_rows(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| {
            let mut table = make_table(2_000, 8, ScrollPolicy::Settle);
            table.set_editing_mode(true);
            table
        })
        .bench_local_values(|mut table| {
            for i in 0..count {
                let index = table.window().visible_start + 2;
                let token = AnimationToken(i as u64);
                let _ = update(&mut table, Msg::Delete(DeleteMsg::Request(index)));
                let _ = update(&mut table, Msg::Delete(DeleteMsg::Confirm { index, token }));
                let cmd = update(&mut table, Msg::Delete(DeleteMsg::AnimationFinished(token)));
                divan::black_box(cmd.ok());
            }
            table
        });
}
