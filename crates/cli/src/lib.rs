//! Pieces shared by `kvisit` command line front ends.

pub mod config;
