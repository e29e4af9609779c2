//! Visit a record through an ordered chain of decorators.
//!
//! A [`Visitor`] runs an action against the [`Record`] it holds. [`new_chain`]
//! wraps a visitor so that every visit runs the primary action first and then
//! each decorator in registration order. The first stage that fails stops the
//! visit and its error is returned unchanged.
//!
//! ```
//! use kvisit_visitor::{Decorator, Error, Record, VisitResult, Visitor, new_chain};
//!
//! let mut record = Record::default();
//! let mut seen = Vec::new();
//! {
//!     let decorators: Vec<Decorator<'_>> =
//!         vec![Box::new(|record: &mut Record, err: Option<Error>| -> VisitResult {
//!             seen.push(record.name.clone());
//!             err.map_or(Ok(()), Err)
//!         })];
//!     let mut chain = new_chain(Box::new(&mut record), decorators);
//!     let result = chain.visit(&mut |record: &mut Record, _: Option<Error>| -> VisitResult {
//!         record.name = "Jorge Luis".to_string();
//!         Ok(())
//!     });
//!     assert!(result.is_ok());
//! }
//! assert_eq!(seen, vec!["Jorge Luis".to_string()]);
//! assert_eq!(record.name, "Jorge Luis");
//! ```

mod chain;
pub mod error;
mod record;
mod visitor;

pub use self::{
    chain::{DecoratedVisitor, new_chain},
    error::Error,
    record::Record,
    visitor::{Decorator, VisitResult, Visitor, VisitorFn},
};
