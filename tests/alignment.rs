//! Alignment Integration Tests
//!
//! Tests for fingerprint determinism, index size and first-wins policy.

use serde_json::{json, Value};
use toolcall_f1::core::finish_reason;
use toolcall_f1::{AlignmentIndex, Fingerprint, Record};

fn record(value: Value) -> Record {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_fingerprint_determinism() {
    let a = record(json!({
        "request": {
            "model": "candidate-model",
            "base_url": "http://localhost:8000/v1",
            "messages": [
                {"role": "system", "content": "You are helpful."},
                {"role": "user", "content": "Weather in Paris?"}
            ],
            "tools": [{
                "type": "function",
                "function": {
                    "name": "get_weather",
                    "parameters": {"type": "object", "properties": {"city": {"type": "string"}}}
                }
            }],
            "tool_choice": "auto"
        },
        "finish_reason": "tool_calls",
        "latency_ms": 812
    }));
    let b = record(json!({
        "request": {
            "tool_choice": "auto",
            "tools": [{
                "function": {
                    "parameters": {"properties": {"city": {"type": "string"}}, "type": "object"},
                    "name": "get_weather"
                },
                "type": "function"
            }],
            "messages": [
                {"content": "You are helpful.", "role": "system"},
                {"content": "Weather in Paris?", "role": "user"}
            ],
            "model": "reference-model",
            "api_key": "sk-test"
        },
        "response": {"choices": [{"finish_reason": "stop"}]}
    }));

    assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
    // Stable across calls
    assert_eq!(Fingerprint::of(&a), Fingerprint::of(&a.clone()));
}

#[test]
fn test_message_order_matters() {
    let a = record(json!({"request": {"messages": [
        {"role": "user", "content": "one"},
        {"role": "user", "content": "two"}
    ]}}));
    let b = record(json!({"request": {"messages": [
        {"role": "user", "content": "two"},
        {"role": "user", "content": "one"}
    ]}}));
    assert_ne!(Fingerprint::of(&a), Fingerprint::of(&b));
}

#[test]
fn test_absent_tools_differs_from_empty_tools() {
    let absent = record(json!({"request": {"messages": []}}));
    let empty = record(json!({"request": {"messages": [], "tools": []}}));
    assert_ne!(Fingerprint::of(&absent), Fingerprint::of(&empty));
}

#[test]
fn test_index_size_invariant() {
    let records: Vec<Record> = (0..50)
        .map(|i| {
            record(json!({
                "request": {"messages": [{"role": "user", "content": format!("case {}", i % 17)}]}
            }))
        })
        .collect();
    let n = records.len();

    let index = AlignmentIndex::build(records);
    assert_eq!(index.len(), 17);
    assert_eq!(index.len() + index.duplicates(), n);
}

#[test]
fn test_duplicate_keeps_first() {
    let request = json!({"messages": [{"role": "user", "content": "hi"}]});
    let index = AlignmentIndex::build(vec![
        record(json!({"request": request, "finish_reason": "tool_calls"})),
        record(json!({"request": request, "finish_reason": "stop"})),
    ]);

    assert_eq!(index.duplicates(), 1);
    let fp = index.fingerprints().next().unwrap().clone();
    let kept = index.get(&fp).unwrap();
    assert_eq!(finish_reason(kept), Some("tool_calls"));
}
