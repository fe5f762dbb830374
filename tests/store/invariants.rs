//! Property tests for store invariants
//!
//! Random operation sequences must never produce duplicate emails, reuse an
//! id, or change state on a rejected request.

use keystone_store::{CreateUser, UserStore, UserUpdate};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Create(String, String),
    Update(u64, Option<String>, Option<String>),
    Delete(u64),
}

fn email() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]@x\\.io",
        Just(String::new()),
        Just("broken".to_string()),
    ]
}

fn name() -> impl Strategy<Value = String> {
    prop_oneof!["[A-Z][a-z]{0,6}", Just(String::new())]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (name(), email()).prop_map(|(n, e)| Op::Create(n, e)),
        (1..8u64, proptest::option::of(name()), proptest::option::of(email()))
            .prop_map(|(id, n, e)| Op::Update(id, n, e)),
        (1..8u64).prop_map(Op::Delete),
    ]
}

fn apply(store: &mut UserStore, op: Op) -> bool {
    match op {
        Op::Create(n, e) => store.create(CreateUser::new(n, e)).is_success(),
        Op::Update(id, n, e) => {
            let mut changes = UserUpdate::new();
            changes.name = n;
            changes.email = e;
            store.update(&id.to_string(), changes).is_success()
        }
        Op::Delete(id) => store.delete(&id.to_string()).is_success(),
    }
}

proptest! {
    #[test]
    fn emails_stay_unique(ops in proptest::collection::vec(op(), 0..40)) {
        let mut store = UserStore::new();
        for op in ops {
            apply(&mut store, op);
            let users = store.list().unwrap_or_default();
            let emails: HashSet<&str> = users.iter().map(|u| u.email()).collect();
            prop_assert_eq!(emails.len(), users.len());
        }
    }

    #[test]
    fn ids_are_never_reused(ops in proptest::collection::vec(op(), 0..40)) {
        let mut store = UserStore::new();
        let mut seen = HashSet::new();
        let mut last = 0;
        for op in ops {
            apply(&mut store, op);
            for user in store.list().unwrap_or_default() {
                if seen.insert(user.id()) {
                    prop_assert!(user.id() > last);
                    last = user.id();
                }
            }
            prop_assert!(store.next_id() > last);
        }
    }

    #[test]
    fn rejected_requests_leave_state_unchanged(ops in proptest::collection::vec(op(), 0..40)) {
        let mut store = UserStore::new();
        for op in ops {
            let before = store.list().unwrap_or_default();
            let next = store.next_id();
            if !apply(&mut store, op) {
                prop_assert_eq!(store.list().unwrap_or_default(), before);
                prop_assert_eq!(store.next_id(), next);
            }
        }
    }
}
