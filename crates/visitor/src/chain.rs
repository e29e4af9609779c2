use std::fmt;

use crate::{
    Error, Record,
    visitor::{Decorator, VisitResult, Visitor, VisitorFn},
};

/// A visitor that runs an ordered list of decorators after the primary
/// action of every visit.
///
/// Built with [`new_chain`].
pub struct DecoratedVisitor<'a> {
    visitor: Box<dyn Visitor + 'a>,
    decorators: Vec<Decorator<'a>>,
}

/// Wraps `visitor` so that each visit runs `decorators`, in the given order,
/// after the primary action.
///
/// Without decorators `visitor` itself is returned and no wrapper is
/// allocated.
pub fn new_chain<'a>(
    visitor: Box<dyn Visitor + 'a>,
    decorators: impl IntoIterator<Item = Decorator<'a>>,
) -> Box<dyn Visitor + 'a> {
    let decorators = decorators.into_iter().collect::<Vec<_>>();
    if decorators.is_empty() {
        return visitor;
    }
    Box::new(DecoratedVisitor { visitor, decorators })
}

impl Visitor for DecoratedVisitor<'_> {
    /// Runs `action`, then every decorator in registration order, stopping
    /// at the first error.
    ///
    /// An error handed in by the wrapped visitor is returned before `action`
    /// runs.
    fn visit(&mut self, action: &mut VisitorFn<'_>) -> VisitResult {
        let Self { visitor, decorators } = self;
        visitor.visit(&mut |record: &mut Record, err: Option<Error>| -> VisitResult {
            if let Some(err) = err {
                return Err(err);
            }
            action(record, None)?;
            for decorator in decorators.iter_mut() {
                decorator(record, None)?;
            }
            Ok(())
        })
    }
}

impl fmt::Debug for DecoratedVisitor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratedVisitor").field("decorators", &self.decorators.len()).finish()
    }
}
