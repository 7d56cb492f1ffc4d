/*! Record transformers.

Transforms records by rewriting the text of their fields.

!*/

mod demacronize;
mod transform;

pub use demacronize::{Demacronize, MacronMode};
pub use transform::Transform;
