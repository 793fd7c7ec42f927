use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of search record indices keyed by path cost
///
/// Entries compare by cost first and record index second. Record indices are
/// handed out in creation order, so equal-cost entries leave the queue
/// first-discovered-first-out.
///
/// Nothing is ever removed except by `pop`: a record superseded by a cheaper
/// one stays queued and the caller recognises it as stale when it surfaces.
#[derive(Debug)]
pub struct FrontierQueue<P>
where
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
    pushed: usize,
}

impl<P> FrontierQueue<P>
where
    P: Copy + Debug + Ord,
{
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Entries still queued, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Entries queued over the lifetime of the queue
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    pub fn push(&mut self, record: usize, cost: P) {
        self.pushed += 1;
        self.heap.push(Reverse((cost, record)));
    }

    /// Removes the cheapest entry as (record, cost)
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((cost, record))| (record, cost))
    }

    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.peek().map(|Reverse((cost, record))| (*record, *cost))
    }
}

impl<P> Default for FrontierQueue<P>
where
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
