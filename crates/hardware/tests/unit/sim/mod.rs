//! Loader and simulator driver tests.
