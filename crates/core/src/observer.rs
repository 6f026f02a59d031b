/// Receives solver events and decides how the iteration should proceed.
///
/// Every solver in the workspace hands each iteration record to an observer
/// before testing for convergence. Returning `Some(action)` requests a
/// solver-specific action and `None` lets the iteration continue.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers and `()` is the
/// no-op observer. A stateful observer that must outlive one solver call can
/// be lent through a closure: `|event| observer.observe(event)`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        seen: usize,
        stop_after: usize,
    }

    impl Observer<f64, ()> for Counter {
        fn observe(&mut self, _event: &f64) -> Option<()> {
            self.seen += 1;
            (self.seen >= self.stop_after).then_some(())
        }
    }

    fn drive<O: Observer<f64, ()>>(mut observer: O, events: &[f64]) -> usize {
        events
            .iter()
            .position(|event| observer.observe(event).is_some())
            .map_or(events.len(), |index| index + 1)
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1.0, 2.0, 3.0]), 3);
    }

    #[test]
    fn closure_observer_can_act() {
        let consumed = drive(|event: &f64| (*event > 1.5).then_some(()), &[1.0, 2.0, 3.0]);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn stateful_observer_lent_through_closure() {
        let mut counter = Counter {
            seen: 0,
            stop_after: 3,
        };

        assert_eq!(drive(|e: &f64| counter.observe(e), &[1.0, 2.0]), 2);
        assert_eq!(drive(|e: &f64| counter.observe(e), &[3.0, 4.0]), 1);
        assert_eq!(counter.seen, 3);
    }
}
