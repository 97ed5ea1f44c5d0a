//! Abstract operations.

/// Operation to calculate a value from the provided inputs.
#[derive(Clone, Copy, Debug)]
pub struct Calculate<T>(pub T);
