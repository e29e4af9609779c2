//! Terminal output of the command line interface.

pub mod table;
