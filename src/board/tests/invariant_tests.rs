//! Property-based tests for the board placement invariant.

use std::sync::Arc;

use super::support::{SteppedClock, TestStore, open_store};
use crate::board::{
    adapters::memory::InMemoryStorage,
    domain::{LeadId, LeadStatus, NewLead},
    services::MoveLead,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Create(usize),
    Delete(usize),
    Reorder(usize, usize, usize),
    Move(usize, usize, usize),
    Restatus(usize, usize),
}

fn status(index: usize) -> LeadStatus {
    LeadStatus::ALL
        .get(index % LeadStatus::ALL.len())
        .copied()
        .unwrap_or(LeadStatus::New)
}

fn column_ids(store: &TestStore) -> Vec<LeadId> {
    store
        .leads_in_column(LeadStatus::New)
        .iter()
        .map(|lead| lead.id())
        .collect()
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..5_usize).prop_map(Op::Create),
        (0..8_usize).prop_map(Op::Delete),
        (0..5_usize, 0..6_usize, 0..6_usize).prop_map(|(c, a, b)| Op::Reorder(c, a, b)),
        (0..8_usize, 0..5_usize, 0..6_usize).prop_map(|(l, c, i)| Op::Move(l, c, i)),
        (0..8_usize, 0..5_usize).prop_map(|(l, c)| Op::Restatus(l, c)),
    ]
}

proptest! {
    #[test]
    fn every_lead_stays_in_exactly_its_status_column(ops in prop::collection::vec(op(), 1..40)) {
        let storage = Arc::new(InMemoryStorage::new());
        let clock = SteppedClock::new();
        let mut store = open_store(&storage, &clock);

        for operation in ops {
            let ids: Vec<_> = store.leads().map(|lead| lead.id()).collect();
            let pick = |n: usize| ids.get(n % ids.len().max(1)).copied();
            // Rejected operations are fine; only the invariant matters.
            match operation {
                Op::Create(c) => {
                    drop(store.create_lead(NewLead::new("Lead", "Acme").with_status(status(c))));
                }
                Op::Delete(l) => {
                    if let Some(lead_id) = pick(l) {
                        drop(store.delete_lead(lead_id));
                    }
                }
                Op::Reorder(c, a, b) => {
                    drop(store.reorder_leads_in_column(status(c), a, b));
                }
                Op::Move(l, c, i) => {
                    if let Some(lead_id) = pick(l) {
                        let (source, source_index) = store.locate(lead_id).expect("lead is placed");
                        drop(store.move_lead_between_columns(MoveLead {
                            source,
                            destination: status(c),
                            source_index,
                            dest_index: i,
                            lead_id,
                        }));
                    }
                }
                Op::Restatus(l, c) => {
                    if let Some(lead) = pick(l).and_then(|lead_id| store.lead(lead_id).cloned()) {
                        drop(store.update_lead(lead.with_status(status(c))));
                    }
                }
            }
            prop_assert_eq!(store.snapshot().verify(), Ok(()));
        }

        let reopened = open_store(&storage, &clock);
        prop_assert_eq!(reopened.snapshot(), store.snapshot());
    }

    #[test]
    fn reorder_moves_card_and_preserves_membership(
        count in 1..8_usize,
        from in 0..8_usize,
        to in 0..8_usize,
    ) {
        let storage = Arc::new(InMemoryStorage::new());
        let clock = SteppedClock::new();
        let mut store = open_store(&storage, &clock);
        for n in 0..count {
            store
                .create_lead(NewLead::new(format!("Lead {n}"), "Acme"))
                .expect("seed lead");
        }
        let before = column_ids(&store);

        let result = store.reorder_leads_in_column(LeadStatus::New, from, to);

        prop_assert_eq!(result.is_ok(), from < count && to < count);
        let after = column_ids(&store);
        if let (Ok(()), Some(moved)) = (&result, before.get(from)) {
            prop_assert_eq!(after.get(to), Some(moved));
        } else {
            prop_assert_eq!(&after, &before);
        }
        let mut before_sorted = before;
        let mut after_sorted = after;
        before_sorted.sort();
        after_sorted.sort();
        prop_assert_eq!(before_sorted, after_sorted);
    }
}
