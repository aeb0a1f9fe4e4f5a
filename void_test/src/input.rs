//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing

use proptest::{
    prop_assert_eq,
    test_runner::{TestCaseError, TestCaseResult},
};

/// Represents an input generated for testing purposes.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<'i, 'o, T, U> Input<&'o [T]> for &'i [U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &'o [T]) -> TestCaseResult {
        prop_assert_eq!(
            self.len(),
            output.len(),
            "expected {} elements, found {}",
            self.len(),
            output.len()
        );

        for (index, (input, output)) in self.iter().zip(output.iter()).enumerate() {
            input
                .assert(output)
                .map_err(|error| TestCaseError::fail(format!("at index {index}: {error}")))?;
        }

        Ok(())
    }
}
