/// A start state followed by the actions taken and the states they lead to.
///
/// A path without steps means the start already satisfies the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S, A> {
    start: S,
    steps: Vec<(A, S)>,
}

impl<S, A> Path<S, A> {
    pub fn new(start: S) -> Self {
        Path {
            start,
            steps: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, action: A, state: S) {
        self.steps.push((action, state));
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    pub fn last(&self) -> &S {
        self.steps.last().map_or(&self.start, |(_, state)| state)
    }

    pub fn steps(&self) -> &[(A, S)] {
        &self.steps
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All states including the start.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        ::std::iter::once(&self.start).chain(self.steps.iter().map(|(_, state)| state))
    }
}

impl<S, A: Clone> Path<S, A> {
    pub fn actions(&self) -> Vec<A> {
        self.steps.iter().map(|(action, _)| action.clone()).collect()
    }
}
