//! Use cases
//!
//! One use case per group of portal screens. Authorized use cases read the
//! session token from the store at call time and never cache it.

pub mod auth;
pub mod profile;
mod shared;
pub mod vacancies;

#[cfg(test)]
pub(crate) mod test_support;
