//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `croche_core` linkage.
//! - Run the scarf/rows walkthrough with deterministic output.

use croche_core::CounterStore;

fn main() {
    println!("croche_core ping={}", croche_core::ping());
    println!("croche_core version={}", croche_core::core_version());

    let store = CounterStore::new();
    let scarf = store.create_object("Scarf");
    let Some(rows) = store.create_counter(scarf, "Rows") else {
        eprintln!("croche_core scenario=failed reason=object_missing");
        std::process::exit(1);
    };
    for _ in 0..3 {
        store.increment_counter(scarf, rows);
    }
    store.decrement_counter(scarf, rows);
    let value = store.counter(scarf, rows).map_or(0, |counter| counter.value);
    store.delete_counter(scarf, rows);

    println!(
        "croche_core scenario=ok rows={value} remaining_counters={} version={}",
        store.counter_count(),
        store.version()
    );
}
