use futures::{Stream, StreamExt};
use hydrate_engine::HydrateResult;
use hydrate_model::Model;
use serde_json::Value;

use crate::Converter;

/// Stream adapters mirroring [`Converter::to_one`] and [`Converter::to_many`].
///
/// Each incoming raw value is converted as it arrives; results come out in
/// the same order, one per input item.
pub trait ConvertStreamExt: Stream<Item = Value> + Sized {
    fn convert_one<T: Model>(
        self,
        converter: Converter<T>,
    ) -> impl Stream<Item = HydrateResult<Option<T>>> {
        self.map(move |raw| converter.to_one(&raw))
    }

    fn convert_many<T: Model>(
        self,
        converter: Converter<T>,
    ) -> impl Stream<Item = HydrateResult<Vec<T>>> {
        self.map(move |raw| converter.to_many(&raw))
    }
}

impl<S: Stream<Item = Value>> ConvertStreamExt for S {}
