use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::engine::{SearchOutcome, search};
use super::source::CatalogSource;
use crate::error::AppResult;

/// Serializes overlapping searches from one consumer.
///
/// Rapid re-queries are debounced but not cancelled, so completions can
/// arrive out of order. Every invocation takes a monotonically increasing
/// ticket; a completion whose ticket is no longer the latest issued is
/// discarded in favor of the latest accepted outcome, so a slow stale
/// response can never clobber a newer result.
#[derive(Clone)]
pub struct SearchSession<C> {
    source: C,
    gate: Arc<ResultGate>,
}

impl<C: CatalogSource> SearchSession<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            gate: Arc::new(ResultGate::default()),
        }
    }

    pub async fn run(&self, raw_query: &str) -> AppResult<SearchOutcome> {
        let ticket = self.gate.begin();
        let outcome = search(&self.source, raw_query).await?;
        Ok(self.gate.publish(ticket, outcome))
    }
}

#[derive(Default)]
struct ResultGate {
    issued: AtomicU64,
    latest: Mutex<Option<(u64, SearchOutcome)>>,
}

impl ResultGate {
    fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Store `outcome` if `ticket` is still the latest issued, otherwise hand
    /// back the latest accepted outcome unchanged.
    fn publish(&self, ticket: u64, outcome: SearchOutcome) -> SearchOutcome {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        if ticket == self.issued.load(Ordering::Acquire) {
            *latest = Some((ticket, outcome.clone()));
            return outcome;
        }
        match latest.as_ref() {
            Some((_, held)) => held.clone(),
            // Stale before anything newer landed; nothing better to offer.
            None => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use chrono::Utc;
    use uuid::Uuid;

    fn outcome_with(names: &[&str]) -> SearchOutcome {
        SearchOutcome {
            products: names
                .iter()
                .map(|n| Product {
                    id: Uuid::new_v4(),
                    name: crate::locale::LocalizedText::plain(*n),
                    category: "Sneakers".into(),
                    description: None,
                    price: 100,
                    selling_price: 100,
                    sale: None,
                    sizes: vec![],
                    colors: vec![],
                    images: vec![],
                    stock: 1,
                    is_active: None,
                    is_new: false,
                    parents_id: None,
                    created_at: Utc::now(),
                })
                .collect(),
            ..SearchOutcome::default()
        }
    }

    fn names(outcome: &SearchOutcome) -> Vec<String> {
        outcome
            .products
            .iter()
            .map(|p| p.name.resolve("en").to_string())
            .collect()
    }

    #[test]
    fn latest_ticket_wins() {
        let gate = ResultGate::default();
        let first = gate.begin();
        let second = gate.begin();

        // The newer query completes first and is accepted.
        let accepted = gate.publish(second, outcome_with(&["fresh"]));
        assert_eq!(names(&accepted), ["fresh"]);

        // The stale completion is discarded; the caller sees the newer result.
        let replayed = gate.publish(first, outcome_with(&["stale"]));
        assert_eq!(names(&replayed), ["fresh"]);
    }

    #[test]
    fn stale_completion_before_any_accepted_result_keeps_its_own_outcome() {
        let gate = ResultGate::default();
        let first = gate.begin();
        let _second = gate.begin();

        let replayed = gate.publish(first, outcome_with(&["only"]));
        assert_eq!(names(&replayed), ["only"]);
    }

    #[test]
    fn single_in_flight_query_is_always_accepted() {
        let gate = ResultGate::default();
        let ticket = gate.begin();
        let accepted = gate.publish(ticket, outcome_with(&["a"]));
        assert_eq!(names(&accepted), ["a"]);
    }
}
