//! Lock-free keyboard queue shared between the interrupt handler and the shell.
//!
//! The queue is a single-producer/single-consumer ring. The keyboard interrupt
//! is the only producer and the line editor the only consumer. Head is written
//! by the producer alone. Tail belongs to the consumer, except that a producer
//! finding the ring full evicts the oldest character by moving tail itself; both
//! tail writers go through compare-and-swap so a racing pop never hands out an
//! evicted slot.
//!
//! Head and tail are free-running positions; the slot they name is the
//! position reduced to a [`RingIndex`]. Positions only ever grow, so a pop that
//! stalls while the producer laps the ring cannot mistake a recycled slot for
//! the one it read.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// A slot in a ring of `N` slots, always in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingIndex<const N: usize>(usize);

impl<const N: usize> RingIndex<N> {
    /// The first slot.
    pub const ZERO: Self = RingIndex(0);

    /// Reduces `raw` modulo `N`.
    pub const fn new(raw: usize) -> Self {
        RingIndex(raw % N)
    }

    /// The slot number.
    pub const fn get(self) -> usize {
        self.0
    }

    /// The following slot, wrapping past the end.
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }
}

/// A free-running queue position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position(usize);

impl Position {
    const fn slot<const N: usize>(self) -> RingIndex<N> {
        RingIndex::new(self.0)
    }

    const fn next(self) -> Self {
        Position(self.0.wrapping_add(1))
    }

    /// Characters between `tail` (inclusive) and `self` (exclusive).
    const fn since(self, tail: Position) -> usize {
        self.0.wrapping_sub(tail.0)
    }
}

/// A [`Position`] stored in an atomic word.
struct AtomicPosition(AtomicUsize);

impl AtomicPosition {
    const fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    fn load(&self, order: Ordering) -> Position {
        Position(self.0.load(order))
    }

    fn store(&self, position: Position, order: Ordering) {
        self.0.store(position.0, order);
    }

    fn compare_exchange(&self, current: Position, new: Position) -> Result<Position, Position> {
        self.0
            .compare_exchange(current.0, new.0, Ordering::AcqRel, Ordering::Acquire)
            .map(Position)
            .map_err(Position)
    }
}

/// Fixed-capacity circular byte queue with an overwrite-oldest policy.
///
/// Holds up to `N - 1` characters: a push that would make head catch up with
/// tail evicts the oldest character instead, so `head == tail` always means
/// empty. `N` must be a power of two.
pub struct RingBuffer<const N: usize> {
    slots: [AtomicU8; N],
    /// Next position to write. Producer only.
    head: AtomicPosition,
    /// Next position to read.
    tail: AtomicPosition,
    /// Characters evicted by the overwrite policy since creation.
    overflows: AtomicUsize,
}

impl<const N: usize> RingBuffer<N> {
    #[allow(clippy::declare_interior_mutable_const)]
    const EMPTY_SLOT: AtomicU8 = AtomicU8::new(0);

    /// Creates an empty queue.
    pub const fn new() -> Self {
        assert!(N >= 2 && N.is_power_of_two(), "ring size must be a power of two");
        Self {
            slots: [Self::EMPTY_SLOT; N],
            head: AtomicPosition::new(),
            tail: AtomicPosition::new(),
            overflows: AtomicUsize::new(0),
        }
    }

    fn slot(&self, position: Position) -> &AtomicU8 {
        &self.slots[position.slot::<N>().get()]
    }

    /// Appends `byte`, evicting the oldest unread character if the ring is full.
    ///
    /// Never blocks and never fails: a full queue silently loses its oldest
    /// pending character rather than the new one. Returns the evicted
    /// character, if any. Must only be called from the producer side.
    pub fn push(&self, byte: u8) -> Option<u8> {
        let head = self.head.load(Ordering::Relaxed);
        let tail = self.tail.load(Ordering::Acquire);

        let mut evicted = None;
        if head.since(tail) == self.capacity() {
            let oldest = self.slot(tail).load(Ordering::Relaxed);
            // A failed exchange means the consumer popped `tail` meanwhile,
            // which frees the slot we need.
            if self.tail.compare_exchange(tail, tail.next()).is_ok() {
                self.overflows.fetch_add(1, Ordering::Relaxed);
                evicted = Some(oldest);
            }
        }

        self.slot(head).store(byte, Ordering::Relaxed);
        // Publishing head is the last visible effect of a push.
        self.head.store(head.next(), Ordering::Release);
        evicted
    }

    /// Removes and returns the oldest character, or `None` if the queue is empty.
    ///
    /// Never blocks. Must only be called from the consumer side.
    pub fn pop(&self) -> Option<u8> {
        let mut tail = self.tail.load(Ordering::Acquire);
        loop {
            if tail == self.head.load(Ordering::Acquire) {
                return None;
            }
            let byte = self.slot(tail).load(Ordering::Relaxed);
            match self.tail.compare_exchange(tail, tail.next()) {
                Ok(_) => return Some(byte),
                // Evicted by the producer while we were reading it.
                Err(current) => tail = current,
            }
        }
    }

    /// Number of characters waiting to be read.
    pub fn len(&self) -> usize {
        let tail = self.tail.load(Ordering::Acquire);
        self.head.load(Ordering::Acquire).since(tail)
    }

    /// Returns `true` if no characters are waiting.
    pub fn is_empty(&self) -> bool {
        self.tail.load(Ordering::Acquire) == self.head.load(Ordering::Acquire)
    }

    /// Maximum number of characters the queue holds at once.
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Total characters discarded by the overwrite policy.
    pub fn overflow_count(&self) -> usize {
        self.overflows.load(Ordering::Relaxed)
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
