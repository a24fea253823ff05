use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use hydrate_engine::{DiagnosticSink, HydrateOptions, HydrateResult, Hydrator};
use hydrate_model::{Model, Registry};
use serde_json::Value;
use tracing::debug;

/// Converts raw JSON into valid `T`s.
///
/// Owns everything a conversion needs, so it can be cloned into closures
/// and stream adapters.
pub struct Converter<T> {
    registry: Arc<Registry>,
    sink: Option<Arc<dyn DiagnosticSink>>,
    options: HydrateOptions,
    _target: PhantomData<fn() -> T>,
}

impl<T: Model> Converter<T> {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            sink: None,
            options: HydrateOptions::default(),
            _target: PhantomData,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_options(mut self, options: HydrateOptions) -> Self {
        self.options = options;
        self
    }

    /// Hydrates one `T`; `None` when the result fails [`is_valid`](hydrate_model::Entity::is_valid).
    ///
    /// Input of any shape is attempted. Input that does not look like a `T`
    /// just leaves its fields at their defaults.
    pub fn to_one(&self, raw: &Value) -> HydrateResult<Option<T>> {
        let entity: T = self.hydrator().create(raw)?;
        if entity.is_valid() {
            Ok(Some(entity))
        } else {
            debug!(entity = T::type_name(), "converted entity is not valid");
            Ok(None)
        }
    }

    /// Hydrates each element of a JSON array, keeping the valid ones in order.
    ///
    /// Anything other than an array converts to an empty list.
    pub fn to_many(&self, raw: &Value) -> HydrateResult<Vec<T>> {
        let Value::Array(items) = raw else {
            debug!(entity = T::type_name(), "input is not an array");
            return Ok(Vec::new());
        };

        let hydrator = self.hydrator();
        let mut entities = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let entity: T = hydrator.create(item)?;
            if entity.is_valid() {
                entities.push(entity);
            } else {
                debug!(entity = T::type_name(), index, "dropping invalid member");
            }
        }
        Ok(entities)
    }

    /// [`to_one`](Self::to_one) as a reusable function.
    pub fn one_fn(self) -> impl Fn(&Value) -> HydrateResult<Option<T>> {
        move |raw: &Value| self.to_one(raw)
    }

    /// [`to_many`](Self::to_many) as a reusable function.
    pub fn many_fn(self) -> impl Fn(&Value) -> HydrateResult<Vec<T>> {
        move |raw: &Value| self.to_many(raw)
    }

    fn hydrator(&self) -> Hydrator<'_> {
        let hydrator = Hydrator::new(&self.registry).with_options(self.options);
        match &self.sink {
            Some(sink) => hydrator.with_sink(&**sink),
            None => hydrator,
        }
    }
}

impl<T> Clone for Converter<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            sink: self.sink.clone(),
            options: self.options,
            _target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Converter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("target", &std::any::type_name::<T>())
            .field("options", &self.options)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
