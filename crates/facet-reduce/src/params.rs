//! Parameters for face reduction.

/// Parameters controlling how faces are grouped during reduction.
#[derive(Debug, Clone)]
pub struct ReduceParams {
    /// Number of decimal places kept when quantizing unit normal components
    /// into grouping keys. Faces whose unit normals agree after rounding to
    /// this precision land in the same coplanarity bucket. Default: 9
    pub normal_decimals: u32,
}

impl Default for ReduceParams {
    fn default() -> Self {
        Self { normal_decimals: 9 }
    }
}

impl ReduceParams {
    /// Set the normal quantization precision in decimal places.
    #[must_use]
    pub const fn with_normal_decimals(mut self, decimals: u32) -> Self {
        self.normal_decimals = decimals;
        self
    }
}
