use std::sync::atomic::{AtomicU64, Ordering};

use super::{AccountId, TransactionId};

/// Hands out account and transaction IDs from two independent sequences.
///
/// Both sequences start at 1 and only ever grow, so an ID is never handed out
/// twice even when callers race. A failed operation may leave a gap.
#[derive(Default, Debug)]
pub struct IdGenerator {
    last_account_id: AtomicU64,
    last_transaction_id: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> IdGenerator {
        IdGenerator::default()
    }

    pub fn next_account_id(&self) -> AccountId {
        self.last_account_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn next_transaction_id(&self) -> TransactionId {
        self.last_transaction_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_sequences_start_at_one_and_are_independent() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_account_id(), 1);
        assert_eq!(ids.next_transaction_id(), 1);
        assert_eq!(ids.next_transaction_id(), 2);
        assert_eq!(ids.next_account_id(), 2);
    }

    #[test]
    fn test_no_duplicates_under_concurrent_callers() {
        let ids = Arc::new(IdGenerator::new());
        let handles = (0..8)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || {
                    (0..1000)
                        .map(|_| ids.next_transaction_id())
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        let mut seen = HashSet::new();
        for handle in handles {
            let issued = handle.join().unwrap();
            // each thread observes its own IDs in increasing order
            assert!(issued.windows(2).all(|w| w[0] < w[1]));
            seen.extend(issued);
        }
        assert_eq!(seen.len(), 8000);
        assert_eq!(seen.iter().max(), Some(&8000));
    }
}
