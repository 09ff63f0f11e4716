//! Shared helpers used by the unit tests of every route.

pub mod test_constants;
pub mod test_utilities;
