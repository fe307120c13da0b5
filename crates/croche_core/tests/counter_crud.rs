use croche_core::theme::{DEFAULT_COUNTER_COLOR, PALETTE};
use croche_core::{coerce_counter_value, CounterStore, StoreConfig};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn create_counter_appends_one_zeroed_counter() {
    let store = CounterStore::new();
    let object_id = store.create_object("Scarf");

    let counter_id = store
        .create_counter(object_id, "Rows")
        .expect("object exists");

    let object = store.object(object_id).expect("object");
    assert_eq!(object.counters.len(), 1);
    let counter = &object.counters[0];
    assert_eq!(counter.id, counter_id);
    assert_eq!(counter.label, "Rows");
    assert_eq!(counter.value, 0);
    assert_eq!(counter.color, DEFAULT_COUNTER_COLOR);
}

#[test]
fn create_counter_on_missing_object_changes_nothing() {
    let store = CounterStore::new();
    let object_id = store.create_object("Scarf");
    store.create_counter(object_id, "Rows").expect("object exists");
    let before = store.counter_count();

    let created = store.create_counter(Uuid::new_v4(), "Orphan");

    assert!(created.is_none());
    assert_eq!(store.counter_count(), before);
}

#[test]
fn scarf_rows_scenario() {
    let store = CounterStore::new();
    let scarf = store.create_object("Scarf");
    let rows = store.create_counter(scarf, "Rows").expect("scarf exists");

    for _ in 0..3 {
        store.increment_counter(scarf, rows);
    }
    assert_eq!(store.counter(scarf, rows).expect("rows").value, 3);

    store.decrement_counter(scarf, rows);
    assert_eq!(store.counter(scarf, rows).expect("rows").value, 2);

    store.delete_counter(scarf, rows);
    assert!(store.object(scarf).expect("scarf").counters.is_empty());
}

#[test]
fn increment_then_decrement_is_net_zero() {
    let store = CounterStore::new();
    let object_id = store.create_object("Hat");
    let counter_id = store.create_counter(object_id, "Rounds").expect("object");
    store.set_counter_value(object_id, counter_id, 12);

    store.increment_counter(object_id, counter_id);
    store.decrement_counter(object_id, counter_id);

    assert_eq!(store.counter(object_id, counter_id).expect("counter").value, 12);
}

#[test]
fn increments_add_to_configured_initial_value() {
    let store = CounterStore::with_config(StoreConfig {
        initial_counter_value: 10,
        ..StoreConfig::default()
    });
    let object_id = store.create_object("Blanket");
    let counter_id = store.create_counter(object_id, "Squares").expect("object");

    for _ in 0..25 {
        store.increment_counter(object_id, counter_id);
    }

    assert_eq!(store.counter(object_id, counter_id).expect("counter").value, 35);
}

#[test]
fn values_may_go_negative() {
    let store = CounterStore::new();
    let object_id = store.create_object("Socks");
    let counter_id = store.create_counter(object_id, "Rows").expect("object");

    store.decrement_counter(object_id, counter_id);
    assert_eq!(store.counter(object_id, counter_id).expect("counter").value, -1);

    store.set_counter_value(object_id, counter_id, -5);
    assert_eq!(store.counter(object_id, counter_id).expect("counter").value, -5);
}

#[test]
fn coerced_text_feeds_set_counter_value() {
    let store = CounterStore::new();
    let object_id = store.create_object("Socks");
    let counter_id = store.create_counter(object_id, "Rows").expect("object");

    store.set_counter_value(object_id, counter_id, coerce_counter_value("forty"));
    assert_eq!(store.counter(object_id, counter_id).expect("counter").value, 0);

    store.set_counter_value(object_id, counter_id, coerce_counter_value("-17"));
    assert_eq!(store.counter(object_id, counter_id).expect("counter").value, -17);
}

#[test]
fn rename_and_recolor_counter_keep_position_and_id() {
    let store = CounterStore::new();
    let object_id = store.create_object("Scarf");
    let ids = ["Rows", "Stitches", "Repeats"]
        .iter()
        .map(|label| store.create_counter(object_id, *label).expect("object"))
        .collect::<Vec<_>>();

    store.rename_counter(object_id, ids[1], "Chains");
    store.recolor_counter(object_id, ids[1], PALETTE[8]);

    let object = store.object(object_id).expect("object");
    let listed = object.counters.iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(listed, ids);
    assert_eq!(object.counters[1].label, "Chains");
    assert_eq!(object.counters[1].color, PALETTE[8]);
}

#[test]
fn counter_ops_need_matching_owner() {
    let store = CounterStore::new();
    let scarf = store.create_object("Scarf");
    let hat = store.create_object("Hat");
    let rows = store.create_counter(scarf, "Rows").expect("scarf");

    store.increment_counter(hat, rows);
    store.rename_counter(hat, rows, "Moved");
    store.delete_counter(hat, rows);

    let counter = store.counter(scarf, rows).expect("rows still owned by scarf");
    assert_eq!(counter.value, 0);
    assert_eq!(counter.label, "Rows");
}

#[test]
fn delete_counter_with_unknown_id_is_noop() {
    let store = CounterStore::new();
    let object_id = store.create_object("Scarf");
    store.create_counter(object_id, "Rows").expect("object");
    let version = store.version();

    store.delete_counter(object_id, Uuid::new_v4());

    assert_eq!(store.version(), version);
    assert_eq!(store.counter_count(), 1);
}

#[test]
fn ids_stay_unique_across_mixed_operations() {
    let store = CounterStore::new();
    let mut seen = HashSet::new();

    for round in 0..10 {
        let object_id = store.create_object(format!("object-{round}"));
        assert!(seen.insert(object_id));
        for index in 0..5 {
            let counter_id = store
                .create_counter(object_id, format!("counter-{index}"))
                .expect("object exists");
            assert!(seen.insert(counter_id));
        }
        if round % 3 == 0 {
            store.delete_object(object_id);
        }
    }

    let snapshot = store.snapshot();
    let mut live = HashSet::new();
    for object in snapshot.objects() {
        assert!(live.insert(object.id));
        for counter in &object.counters {
            assert!(live.insert(counter.id));
        }
    }
    assert_eq!(snapshot.object_count(), 6);
    assert_eq!(snapshot.counter_count(), 30);
}
