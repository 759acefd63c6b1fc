/// Index odometer over a fixed number of candidate positions.
///
/// Each slot holds an index into the charset; advancing increments the
/// rightmost slot and carries left, so tuples come out in Cartesian-product
/// order with the last position varying fastest.
#[derive(Debug, Clone)]
pub struct OdometerState {
    pub(crate) indices: Vec<usize>,
}

impl OdometerState {
    pub fn new(length: usize) -> Self {
        Self {
            indices: vec![0; length],
        }
    }

    /// Advance to the next tuple. Returns false once every slot has wrapped,
    /// meaning the last tuple of this length was already produced.
    pub fn advance(&mut self, base: usize) -> bool {
        for slot in self.indices.iter_mut().rev() {
            *slot += 1;
            if *slot < base {
                return true;
            }
            *slot = 0;
        }
        false
    }
}
