/// Receives events emitted by a solver.
///
/// Observation is passive: observers see what the solver is doing but cannot
/// steer it.
pub trait Observer<E> {
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// The unit observer ignores every event.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
