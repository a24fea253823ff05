//! Conversion combinators for hydrate.
//!
//! Lift "hydrate one entity" into the shapes application code receives:
//! - [`Converter::to_one`]: one entity, or `None` if it fails its validity check
//! - [`Converter::to_many`]: every valid entity of a JSON array, in order
//! - [`ConvertStreamExt`]: the same two conversions applied per item of a
//!   `futures::Stream` of raw values

mod converter;
mod stream;

pub use converter::Converter;
pub use stream::ConvertStreamExt;
