use crate::{Error, Record};

/// Outcome of a visit or of a single stage.
pub type VisitResult = Result<(), Error>;

/// One stage of a visit.
///
/// A stage receives the record and the error of the stage before it, if any.
/// It may mutate the record and must either propagate or clear the incoming
/// error.
pub type VisitorFn<'a> = dyn FnMut(&mut Record, Option<Error>) -> VisitResult + 'a;

/// A stage registered on a chain to run after the primary action.
pub type Decorator<'a> = Box<VisitorFn<'a>>;

/// Anything that can run an action against the record it holds.
pub trait Visitor {
    /// Runs `action` against the held record and returns what `action`
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `action` or by a stage wrapped
    /// around it.
    fn visit(&mut self, action: &mut VisitorFn<'_>) -> VisitResult;
}

/// A bare record visits itself. It has no prior stage, so the incoming error
/// is always `None`.
impl Visitor for Record {
    fn visit(&mut self, action: &mut VisitorFn<'_>) -> VisitResult { action(self, None) }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn visit(&mut self, action: &mut VisitorFn<'_>) -> VisitResult { (**self).visit(action) }
}

impl<V: Visitor + ?Sized> Visitor for Box<V> {
    fn visit(&mut self, action: &mut VisitorFn<'_>) -> VisitResult { (**self).visit(action) }
}
