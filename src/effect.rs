//! Effects - side effects declared by the reducer

/// The dashboard works on a fixed dataset, so no action ever needs I/O.
#[derive(Debug, Clone)]
pub enum Effect {}
