//! Feedback store persistence, corruption recovery, and concurrent appends.

use std::fs;
use std::sync::Arc;
use std::thread;

use tempfile::TempDir;
use triage_core::constants::DEFAULT_CATEGORIES;
use triage_core::fingerprint::fingerprint;
use triage_core::models::CategorySet;
use triage_core::traits::IFeedbackSink;
use triage_feedback::{FeedbackItem, FeedbackStore};

fn store_in(dir: &TempDir) -> FeedbackStore {
    FeedbackStore::open(dir.path().join("feedback.json"))
}

#[test]
fn record_persists_fingerprint_not_text() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let rec = store
        .record("Refund please", "The blender is broken", "Complaint - Product/Service")
        .unwrap();
    assert_eq!(rec.content_fingerprint, fingerprint("Refund please", "The blender is broken"));

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(!raw.contains("blender"));
    assert!(raw.contains(&rec.content_fingerprint));
}

#[test]
fn identical_corrections_accumulate() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.record("Same", "Content", "Sales Opportunity - New Business").unwrap();
    store.record("Same", "Content", "Sales Opportunity - New Business").unwrap();

    let records = store.records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].content_fingerprint, records[1].content_fingerprint);
}

#[test]
fn reopened_store_sees_previous_records() {
    let dir = TempDir::new().unwrap();
    store_in(&dir).record("a", "b", "General Inquiry").unwrap();
    assert_eq!(store_in(&dir).len().unwrap(), 1);
}

#[test]
fn corrupt_store_is_replaced_on_next_write() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "[{\"content_fingerprint\": trunc").unwrap();

    assert!(store.is_empty().unwrap());
    store.record("x", "y", "General Inquiry").unwrap();

    let records = store.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].correct_category, "General Inquiry");
}

#[test]
fn legacy_field_name_is_read() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), test_fixtures::read_fixture("stores/legacy_feedback.json")).unwrap();

    let records = store.records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].correct_category, "General Inquiry");

    store.record("new", "one", "General Inquiry").unwrap();
    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(!raw.contains("email_hash"));
    assert_eq!(store.len().unwrap(), 3);
}

#[test]
fn blank_category_is_rejected_and_nothing_written() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(store.record("a", "b", "  ").is_err());
    assert!(!store.path().exists());
}

#[test]
fn batch_counts_successes_and_failures() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let items = vec![
        FeedbackItem {
            subject: "one".into(),
            body: "1".into(),
            correct_category: "General Inquiry".into(),
        },
        FeedbackItem {
            subject: "two".into(),
            body: "2".into(),
            correct_category: "".into(),
        },
        FeedbackItem {
            subject: " ".into(),
            body: "".into(),
            correct_category: "General Inquiry".into(),
        },
        FeedbackItem {
            subject: "three".into(),
            body: "3".into(),
            correct_category: "Sales Opportunity - New Business".into(),
        },
    ];

    let summary = store.record_batch(&items);
    assert_eq!(summary.processed, 4);
    assert_eq!(summary.successful, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.errors[0].0, 1);
    assert_eq!(summary.errors[1].0, 2);
    assert_eq!(store.len().unwrap(), 2);
}

#[test]
fn stats_report_distribution() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.record("a", "1", "General Inquiry").unwrap();
    store.record("b", "2", "General Inquiry").unwrap();
    store.record("c", "3", "Good News - Customer Success").unwrap();

    let cats = CategorySet::from_names(DEFAULT_CATEGORIES);
    let stats = store.stats(&cats).unwrap();
    assert_eq!(stats.total_feedback_items, 3);
    assert_eq!(stats.category_distribution["General Inquiry"], 2);
    assert_eq!(stats.category_distribution["Good News - Customer Success"], 1);
    assert_eq!(stats.total_categories, DEFAULT_CATEGORIES.len());
    assert_eq!(stats.available_categories.len(), DEFAULT_CATEGORIES.len());
}

#[test]
fn concurrent_writers_lose_nothing() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_in(&dir));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..10 {
                    store
                        .record_feedback(&format!("t{t}"), &format!("m{i}"), "General Inquiry")
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.len().unwrap(), 80);
}

#[test]
fn separate_handles_on_one_file_lose_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feedback.json");

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let path = path.clone();
            thread::spawn(move || {
                let store = FeedbackStore::open(path);
                for i in 0..5 {
                    store.record(&format!("h{t}"), &format!("m{i}"), "General Inquiry").unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(FeedbackStore::open(&path).len().unwrap(), 20);
}
