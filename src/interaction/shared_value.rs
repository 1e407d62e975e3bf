use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe reactive cell shared between the view context and a gesture
/// context.
///
/// Cloning yields another handle to the same cell. Writes notify subscribers
/// only when the stored value actually changes; each subscriber receives the
/// new values over its own channel, in write order, and drains them on
/// whatever context owns the receiver.
pub struct SharedValue<T> {
    inner: Arc<SharedInner<T>>,
}

struct SharedInner<T> {
    value: Mutex<T>,
    subscribers: Mutex<Vec<Sender<T>>>,
}

impl<T> Clone for SharedValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedValue")
            .field("value", &*lock(&self.inner.value))
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq> SharedValue<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(SharedInner {
                value: Mutex::new(value),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        lock(&self.inner.value).clone()
    }

    /// Stores `value`, returning `true` if it differed from the previous one.
    pub fn set(&self, value: T) -> bool {
        let mut current = lock(&self.inner.value);
        self.replace_locked(&mut current, value)
    }

    /// Applies `f` to the current value and stores the result.
    ///
    /// The read and the write happen under one hold of the value lock, so
    /// concurrent updates never overwrite each other.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        let mut current = lock(&self.inner.value);
        let next = f(&*current);
        self.replace_locked(&mut current, next)
    }

    /// Opens a change subscription. Dropping the receiver unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> Receiver<T> {
        let (sender, receiver) = mpsc::channel();
        lock(&self.inner.subscribers).push(sender);
        receiver
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner.subscribers).len()
    }

    /// Whether both handles point at the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + PartialEq> SharedValue<T> {
    fn replace_locked(&self, current: &mut MutexGuard<'_, T>, value: T) -> bool {
        if **current == value {
            return false;
        }
        **current = value.clone();

        // Notify under the value lock so subscribers observe writes in order.
        let mut subscribers = lock(&self.inner.subscribers);
        subscribers.retain(|sender| sender.send(value.clone()).is_ok());
        true
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::SharedValue;

    #[test]
    fn notifies_only_on_change() {
        let cell = SharedValue::new(1.0);
        let changes = cell.subscribe();

        assert!(!cell.set(1.0));
        assert!(cell.set(2.0));
        assert!(!cell.set(2.0));
        assert!(cell.update(|value| value * 2.0));

        let observed: Vec<f64> = changes.try_iter().collect();
        assert_eq!(observed, vec![2.0, 4.0]);
        assert_eq!(cell.get(), 4.0);
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_next_write() {
        let cell = SharedValue::new(false);
        let receiver = cell.subscribe();
        assert_eq!(cell.subscriber_count(), 1);

        drop(receiver);
        cell.set(true);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn writes_from_another_thread_reach_subscriber() {
        let cell = SharedValue::new(0_u32);
        let changes = cell.subscribe();
        let writer = cell.clone();
        assert!(cell.ptr_eq(&writer));

        thread::spawn(move || {
            for value in 1..=3 {
                writer.set(value);
            }
        })
        .join()
        .expect("writer thread");

        let observed: Vec<u32> = changes.try_iter().collect();
        assert_eq!(observed, vec![1, 2, 3]);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let cell = SharedValue::new(0_u64);
        let changes = cell.subscribe();

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let cell = cell.clone();
                thread::spawn(move || {
                    for _ in 0..2_000 {
                        cell.update(|value| value + 1);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().expect("update thread");
        }

        assert_eq!(cell.get(), 16_000);
        let observed: Vec<u64> = changes.try_iter().collect();
        assert_eq!(observed, (1..=16_000).collect::<Vec<_>>());
    }
}
