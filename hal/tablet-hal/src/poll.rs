//! Driving async peripheral futures from blocking code
//!
//! Platform drivers often only offer interrupt-driven async transfers,
//! while [`crate::I2cBus`] is blocking. [`poll_until`] spins on such a
//! future until it completes or a caller-supplied deadline check fires.
//! It never creates a timer, so it works under any executor (or none):
//! the only waker the future ever sees is a no-op one, and the deadline
//! is read from a free-running clock.

use core::future::Future;
use core::pin::pin;
use core::task::Poll;

use embassy_futures::poll_once;

/// Poll `future` until it is ready or `expired()` returns true
///
/// The future is always polled at least once, so work that completes
/// immediately succeeds even with an already expired deadline. Returns
/// `None` on expiry; the future is dropped, which cancels it.
pub fn poll_until<F, E>(future: F, mut expired: E) -> Option<F::Output>
where
    F: Future,
    E: FnMut() -> bool,
{
    let mut future = pin!(future);
    loop {
        if let Poll::Ready(output) = poll_once(future.as_mut()) {
            return Some(output);
        }
        if expired() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::pin::Pin;
    use core::task::Context;

    /// Ready after `polls` pending polls
    struct Countdown<'a> {
        polls: &'a Cell<u32>,
        remaining: u32,
    }

    impl Future for Countdown<'_> {
        type Output = u32;

        fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<u32> {
            self.polls.set(self.polls.get() + 1);
            if self.remaining == 0 {
                Poll::Ready(self.polls.get())
            } else {
                self.remaining -= 1;
                Poll::Pending
            }
        }
    }

    #[test]
    fn test_ready_future_completes() {
        let polls = Cell::new(0);
        let future = Countdown { polls: &polls, remaining: 3 };

        assert_eq!(poll_until(future, || false), Some(4));
    }

    #[test]
    fn test_pending_future_expires() {
        let mut checks = 0;
        let result = poll_until(core::future::pending::<()>(), || {
            checks += 1;
            checks == 5
        });

        assert_eq!(result, None);
        assert_eq!(checks, 5);
    }

    #[test]
    fn test_polled_once_even_when_expired() {
        assert_eq!(poll_until(core::future::ready(7u8), || true), Some(7));

        let polls = Cell::new(0);
        let future = Countdown { polls: &polls, remaining: 1 };
        assert_eq!(poll_until(future, || true), None);
        assert_eq!(polls.get(), 1);
    }

    #[test]
    fn test_deadline_from_clock() {
        // Simulated free-running millisecond clock, 1 ms per check
        let now = Cell::new(0u64);
        let deadline = 10;
        let result = poll_until(core::future::pending::<()>(), || {
            now.set(now.get() + 1);
            now.get() >= deadline
        });

        assert_eq!(result, None);
        assert_eq!(now.get(), deadline);
    }
}
