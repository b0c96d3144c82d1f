//! Types without a better home, notably error types.

pub mod err;
