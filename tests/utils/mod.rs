pub mod assertions;
pub mod setup;
pub mod sheet_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::{assert_error, assert_ranked};
#[allow(unused_imports)]
pub use setup::TestApp;
#[allow(unused_imports)]
pub use sheet_builders::SheetBuilder;
