//! Decorators that can be attached to a visit from the configuration file or
//! the command line.
//!
//! Every decorator forwards the error it is handed, so it can also be used
//! as a primary action.

mod report;

use kvisit_visitor::{Decorator, Error, Record, VisitResult, error::StageFailedSnafu};

pub use self::report::Report;
use crate::config::DecoratorKind;

/// Builds the decorator for `kind`. Reporting decorators write into `report`.
pub fn build(kind: DecoratorKind, report: &Report) -> Decorator<'_> {
    match kind {
        DecoratorKind::Name => Box::new(move |record: &mut Record, err: Option<Error>| {
            name(record, err, report)
        }),
        DecoratorKind::Auxiliary => Box::new(move |record: &mut Record, err: Option<Error>| {
            auxiliary(record, err, report)
        }),
        DecoratorKind::Validate => Box::new(validate),
        DecoratorKind::Trace => Box::new(trace),
    }
}

fn name(record: &mut Record, err: Option<Error>, report: &Report) -> VisitResult {
    tracing::info!(
        name = %record.name,
        namespace = %record.namespace,
        "Name decorator observed record"
    );
    report.push(format!("==> Name={}, NameSpace={}", record.name, record.namespace));
    err.map_or(Ok(()), Err)
}

fn auxiliary(record: &mut Record, err: Option<Error>, report: &Report) -> VisitResult {
    tracing::info!(auxiliary = %record.auxiliary, "Auxiliary decorator observed record");
    report.push(format!("==> Auxiliary={}", record.auxiliary));
    err.map_or(Ok(()), Err)
}

fn validate(record: &mut Record, err: Option<Error>) -> VisitResult {
    if let Some(err) = err {
        return Err(err);
    }
    let stage = DecoratorKind::Validate.to_string();
    if record.namespace.is_empty() {
        tracing::warn!(name = %record.name, "Record has no namespace");
        return StageFailedSnafu { stage, reason: "namespace is empty" }.fail();
    }
    if record.name.is_empty() {
        tracing::warn!(namespace = %record.namespace, "Record has no name");
        return StageFailedSnafu { stage, reason: "name is empty" }.fail();
    }
    Ok(())
}

fn trace(record: &mut Record, err: Option<Error>) -> VisitResult {
    tracing::debug!(?record, "Visited record");
    err.map_or(Ok(()), Err)
}
