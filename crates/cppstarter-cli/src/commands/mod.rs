//! Command handlers. Each takes the shared [`Session`](crate::dispatch::Session)
//! and returns an [`ExitOutcome`](crate::dispatch::ExitOutcome).

pub mod build;
pub mod new;
pub mod prompt;
