//! Pipeline trait.
use std::io::{BufRead, Write};

use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// any custom pipeline that needs a return type can use the
/// trait aswell.
pub trait Pipeline<T> {
    fn run<R: BufRead, W: Write>(&self, src: R, dst: W) -> Result<T, Error>;
}
