//! Transform trait.

use crate::record::Record;
pub trait Transform {
    /// Takes ownership of [Record] and returns the transformed one.
    fn transform_own(&self, record: Record) -> Record;
}
