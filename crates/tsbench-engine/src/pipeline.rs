//! The producer → consumer data pipeline.
//!
//! Two wirings, chosen at construction:
//!
//! - *Independent queues*: one bounded queue per consumer; a producer maps
//!   to `producer_id % consumer_count`. Push blocks on a full queue
//!   (backpressure), pop waits in 100 ms ticks so termination is observed
//!   promptly. Preserves per-producer order into its consumer.
//! - *Shared queue*: a single MPMC queue of capacity
//!   `queue_capacity · consumer_count`. Push is non-blocking with a short
//!   spin-backoff; pop uses the same bounded wait. Best throughput for
//!   symmetric producers, no cross-consumer ordering.
//!
//! Termination: [`DataPipeline::terminate`] flips an atomic flag and wakes
//! everyone; fetches drain what is queued and then report
//! [`FetchResult::Terminated`]; pushes fail. Double terminate is a no-op.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, bounded};
use parking_lot::{Condvar, Mutex};
use thiserror::Error;

/// Pop tick; bounds how long termination can go unnoticed.
const FETCH_TICK: Duration = Duration::from_millis(100);

/// Push backoff while a shared queue is full.
const PUSH_BACKOFF: Duration = Duration::from_micros(50);

/// Pipeline errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Push after terminate.
    #[error("pipeline has been terminated")]
    Terminated,

    /// Producer id outside the configured range.
    #[error("invalid producer id {0}")]
    InvalidProducer(usize),

    /// Consumer id outside the configured range.
    #[error("invalid consumer id {0}")]
    InvalidConsumer(usize),
}

/// One fetch attempt's outcome.
#[derive(Debug)]
pub enum FetchResult<T> {
    /// An item was dequeued.
    Data(T),
    /// Nothing arrived within the tick; poll again.
    Timeout,
    /// The pipeline is terminated and drained.
    Terminated,
}

struct BoundedQueue<T> {
    state: Mutex<QueueState<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

struct QueueState<T> {
    items: VecDeque<T>,
    terminated: bool,
}

impl<T> BoundedQueue<T> {
    fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(QueueState { items: VecDeque::with_capacity(capacity), terminated: false }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    fn push(&self, item: T) -> Result<(), PipelineError> {
        let mut state = self.state.lock();
        while state.items.len() >= self.capacity && !state.terminated {
            self.not_full.wait(&mut state);
        }
        if state.terminated {
            return Err(PipelineError::Terminated);
        }
        state.items.push_back(item);
        self.not_empty.notify_one();
        Ok(())
    }

    fn pop(&self) -> FetchResult<T> {
        let mut state = self.state.lock();
        if state.items.is_empty() && !state.terminated {
            self.not_empty.wait_for(&mut state, FETCH_TICK);
        }
        match state.items.pop_front() {
            Some(item) => {
                self.not_full.notify_one();
                FetchResult::Data(item)
            }
            None if state.terminated => FetchResult::Terminated,
            None => FetchResult::Timeout,
        }
    }

    fn terminate(&self) {
        let mut state = self.state.lock();
        state.terminated = true;
        self.not_empty.notify_all();
        self.not_full.notify_all();
    }

    fn len(&self) -> usize {
        self.state.lock().items.len()
    }
}

enum Wiring<T> {
    Independent {
        queues: Vec<BoundedQueue<T>>,
        producer_count: usize,
    },
    Shared {
        tx: Sender<T>,
        rx: Receiver<T>,
    },
}

/// Bounded queue(s) between generator threads and sink writers.
pub struct DataPipeline<T> {
    wiring: Wiring<T>,
    consumer_count: usize,
    terminated: AtomicBool,
}

impl<T> DataPipeline<T> {
    /// Build the pipeline.
    ///
    /// `queue_capacity` is per consumer in both modes.
    #[must_use]
    pub fn new(
        shared_queue: bool,
        producer_count: usize,
        consumer_count: usize,
        queue_capacity: usize,
    ) -> Self {
        let consumer_count = consumer_count.max(1);
        let capacity = queue_capacity.max(1);
        let wiring = if shared_queue {
            let (tx, rx) = bounded(capacity * consumer_count);
            Wiring::Shared { tx, rx }
        } else {
            let queues = (0..consumer_count).map(|_| BoundedQueue::new(capacity)).collect();
            Wiring::Independent { queues, producer_count }
        };
        Self { wiring, consumer_count, terminated: AtomicBool::new(false) }
    }

    /// Enqueue an item produced by `producer_id`.
    ///
    /// Blocks for backpressure in independent mode; spins briefly in
    /// shared mode. Fails once the pipeline is terminated.
    pub fn push_data(&self, producer_id: usize, item: T) -> Result<(), PipelineError> {
        if self.terminated.load(Ordering::Acquire) {
            return Err(PipelineError::Terminated);
        }
        match &self.wiring {
            Wiring::Independent { queues, producer_count } => {
                if producer_id >= *producer_count {
                    return Err(PipelineError::InvalidProducer(producer_id));
                }
                queues[producer_id % self.consumer_count].push(item)
            }
            Wiring::Shared { tx, .. } => {
                let mut item = item;
                loop {
                    match tx.try_send(item) {
                        Ok(()) => return Ok(()),
                        Err(crossbeam_channel::TrySendError::Full(back)) => {
                            if self.terminated.load(Ordering::Acquire) {
                                return Err(PipelineError::Terminated);
                            }
                            item = back;
                            std::thread::sleep(PUSH_BACKOFF);
                        }
                        Err(crossbeam_channel::TrySendError::Disconnected(_)) => {
                            return Err(PipelineError::Terminated);
                        }
                    }
                }
            }
        }
    }

    /// Dequeue for `consumer_id`, waiting at most one tick.
    pub fn fetch_data(&self, consumer_id: usize) -> Result<FetchResult<T>, PipelineError> {
        if consumer_id >= self.consumer_count {
            return Err(PipelineError::InvalidConsumer(consumer_id));
        }
        match &self.wiring {
            Wiring::Independent { queues, .. } => Ok(queues[consumer_id].pop()),
            Wiring::Shared { rx, .. } => match rx.recv_timeout(FETCH_TICK) {
                Ok(item) => Ok(FetchResult::Data(item)),
                Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                    if self.terminated.load(Ordering::Acquire) && rx.is_empty() {
                        Ok(FetchResult::Terminated)
                    } else {
                        Ok(FetchResult::Timeout)
                    }
                }
                Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                    Ok(FetchResult::Terminated)
                }
            },
        }
    }

    /// Flip the terminated flag and wake blocked producers and consumers.
    /// Idempotent.
    pub fn terminate(&self) {
        if self.terminated.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Wiring::Independent { queues, .. } = &self.wiring {
            for queue in queues {
                queue.terminate();
            }
        }
        tracing::debug!("pipeline terminated");
    }

    /// Items currently queued across all consumers.
    #[must_use]
    pub fn total_queued(&self) -> usize {
        match &self.wiring {
            Wiring::Independent { queues, .. } => queues.iter().map(BoundedQueue::len).sum(),
            Wiring::Shared { rx, .. } => rx.len(),
        }
    }

    /// Number of consumers the pipeline was built for.
    #[must_use]
    pub fn consumer_count(&self) -> usize {
        self.consumer_count
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_independent_routes_by_producer_id() {
        let pipeline: DataPipeline<u32> = DataPipeline::new(false, 4, 2, 8);
        pipeline.push_data(0, 10).unwrap();
        pipeline.push_data(1, 11).unwrap();
        pipeline.push_data(2, 20).unwrap();

        // Producers 0 and 2 map to consumer 0, producer 1 to consumer 1.
        let Ok(FetchResult::Data(a)) = pipeline.fetch_data(0) else { panic!("expected data") };
        let Ok(FetchResult::Data(b)) = pipeline.fetch_data(0) else { panic!("expected data") };
        assert_eq!((a, b), (10, 20));
        let Ok(FetchResult::Data(c)) = pipeline.fetch_data(1) else { panic!("expected data") };
        assert_eq!(c, 11);
    }

    #[test]
    fn test_invalid_ids_rejected() {
        let pipeline: DataPipeline<u32> = DataPipeline::new(false, 1, 1, 4);
        assert_eq!(pipeline.push_data(5, 1), Err(PipelineError::InvalidProducer(5)));
        assert!(matches!(pipeline.fetch_data(3), Err(PipelineError::InvalidConsumer(3))));
    }

    #[test]
    fn test_fetch_times_out_when_empty() {
        let pipeline: DataPipeline<u32> = DataPipeline::new(false, 1, 1, 4);
        assert!(matches!(pipeline.fetch_data(0), Ok(FetchResult::Timeout)));
    }

    #[test]
    fn test_terminate_drains_then_reports() {
        for shared in [false, true] {
            let pipeline: DataPipeline<u32> = DataPipeline::new(shared, 1, 1, 4);
            pipeline.push_data(0, 1).unwrap();
            pipeline.push_data(0, 2).unwrap();
            pipeline.terminate();

            // Queued items drain first.
            assert!(matches!(pipeline.fetch_data(0), Ok(FetchResult::Data(1))));
            assert!(matches!(pipeline.fetch_data(0), Ok(FetchResult::Data(2))));
            assert!(matches!(pipeline.fetch_data(0), Ok(FetchResult::Terminated)));
            // Pushes now fail; double terminate is a no-op.
            assert_eq!(pipeline.push_data(0, 3), Err(PipelineError::Terminated));
            pipeline.terminate();
        }
    }

    #[test]
    fn test_backpressure_blocks_until_pop() {
        let pipeline: Arc<DataPipeline<u32>> = Arc::new(DataPipeline::new(false, 1, 1, 1));
        pipeline.push_data(0, 1).unwrap();

        let p = Arc::clone(&pipeline);
        let pusher = std::thread::spawn(move || p.push_data(0, 2));
        std::thread::sleep(Duration::from_millis(50));
        assert!(!pusher.is_finished(), "push should block on a full queue");

        assert!(matches!(pipeline.fetch_data(0), Ok(FetchResult::Data(1))));
        pusher.join().unwrap().unwrap();
        assert!(matches!(pipeline.fetch_data(0), Ok(FetchResult::Data(2))));
    }

    #[test]
    fn test_terminate_unblocks_pusher() {
        let pipeline: Arc<DataPipeline<u32>> = Arc::new(DataPipeline::new(false, 1, 1, 1));
        pipeline.push_data(0, 1).unwrap();
        let p = Arc::clone(&pipeline);
        let pusher = std::thread::spawn(move || p.push_data(0, 2));
        std::thread::sleep(Duration::from_millis(50));
        pipeline.terminate();
        assert_eq!(pusher.join().unwrap(), Err(PipelineError::Terminated));
    }

    #[test]
    fn test_shared_queue_fan_in() {
        let pipeline: Arc<DataPipeline<u32>> = Arc::new(DataPipeline::new(true, 4, 2, 16));
        let mut handles = Vec::new();
        for producer in 0..4u32 {
            let p = Arc::clone(&pipeline);
            handles.push(std::thread::spawn(move || {
                for k in 0..25u32 {
                    p.push_data(producer as usize, producer * 100 + k).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        let mut seen = Vec::new();
        while seen.len() < 100 {
            match pipeline.fetch_data(seen.len() % 2).unwrap() {
                FetchResult::Data(v) => seen.push(v),
                FetchResult::Timeout => {}
                FetchResult::Terminated => panic!("not terminated"),
            }
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 100);
    }
}
