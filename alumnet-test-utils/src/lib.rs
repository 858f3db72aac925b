//! Shared test utilities for the Alumnet server test suites.
//!
//! Provides an in-memory sqlite setup whose schema is derived from the
//! entity definitions, plus factory functions for inserting common fixture
//! rows. The [`test_setup_with_tables!`] macro is the usual entry point.

pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_PASSWORD},
        fixtures::factory,
        test_setup_with_tables, TestError, TestSetup,
    };
}
