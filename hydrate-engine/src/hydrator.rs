//! Entity hydration: registry lookup, alias resolution, default precedence.

use hydrate_model::{
    Diagnostic, Entity, EntityType, FieldDescriptor, FieldValue, Kind, Model, Reason, Registry,
    UNDEFINED, is_truthy,
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::validate::{self, Validation};
use crate::{DiagnosticSink, HydrateError, HydrateOptions, HydrateResult};

/// Populates entities from raw JSON according to a [`Registry`].
///
/// Cheap to construct; build one per call site or per request. All state
/// it reads is immutable, so one hydrator can be used from many threads.
#[derive(Clone, Copy)]
pub struct Hydrator<'a> {
    registry: &'a Registry,
    sink: Option<&'a dyn DiagnosticSink>,
    options: HydrateOptions,
}

impl<'a> Hydrator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            sink: None,
            options: HydrateOptions::default(),
        }
    }

    /// Reports every coercion problem to `sink`.
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_options(mut self, options: HydrateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn options(&self) -> HydrateOptions {
        self.options
    }

    /// Builds a `T` from its defaults and hydrates it from `raw`.
    pub fn create<T: Model>(&self, raw: &Value) -> HydrateResult<T> {
        let mut instance = T::default();
        self.hydrate(&mut instance, raw)?;
        Ok(instance)
    }

    /// Overwrites `instance`'s declared fields from `raw`.
    ///
    /// Fields the input does not mention keep their current value when it is
    /// truthy.
    pub fn hydrate<T: Model>(&self, instance: &mut T, raw: &Value) -> HydrateResult<()> {
        self.hydrate_entity(&EntityType::of::<T>(), instance, raw)
    }

    /// Re-hydrates an existing instance from partial input.
    ///
    /// Identical to [`hydrate`](Self::hydrate): the instance's current values,
    /// not its declaration-time defaults, are what untouched fields keep.
    pub fn update<T: Model>(&self, instance: &mut T, raw: &Value) -> HydrateResult<()> {
        self.hydrate(instance, raw)
    }

    /// Hydrates a type-erased instance of `entity_type`.
    pub fn hydrate_entity(
        &self,
        entity_type: &EntityType,
        instance: &mut dyn Entity,
        raw: &Value,
    ) -> HydrateResult<()> {
        let Some(fields) = self.registry.fields(entity_type.id()) else {
            debug!(entity = entity_type.name(), "no registered fields, skipping hydration");
            return Ok(());
        };

        for descriptor in fields {
            let (source, targeted) = resolve_source(raw, descriptor);
            let validation = self.validate(source, &descriptor.kind, descriptor.is_array)?;
            self.report(entity_type, descriptor, source, &validation.reasons);

            let keep_current = !targeted
                && instance
                    .field(&descriptor.name)
                    .is_some_and(|current| current.is_truthy());
            if keep_current {
                trace!(
                    entity = entity_type.name(),
                    field = %descriptor.name,
                    "keeping current value"
                );
                continue;
            }

            trace!(
                entity = entity_type.name(),
                field = %descriptor.name,
                kind = validation.value.kind_name(),
                "writing coerced value"
            );
            instance
                .set_field(&descriptor.name, validation.value)
                .map_err(|source| {
                    HydrateError::field(entity_type.name(), &descriptor.name, source)
                })?;
        }
        Ok(())
    }

    /// Coerces one raw field value against a kind.
    pub fn validate(
        &self,
        raw: Option<&Value>,
        kind: &Kind,
        is_array: bool,
    ) -> HydrateResult<Validation> {
        if is_array {
            return validate::each_element(raw, &mut |child| {
                self.validate(Some(child), kind, child.is_array())
            });
        }

        Ok(match kind {
            Kind::Boolean => validate::boolean(raw),
            Kind::Number => validate::number(raw),
            Kind::String => validate::string(raw),
            Kind::Date => validate::date(raw),
            Kind::Enum(options) => validate::enumeration(raw, options),
            Kind::Object(entity_type) => return self.validate_object(raw, entity_type),
        })
    }

    /// Hydrates a nested object and keeps it only if it is valid.
    ///
    /// Any non-null input is handed to the nested type, even when it is not
    /// a JSON object; see [`resolve_source`] for how its fields then resolve.
    pub fn validate_object(
        &self,
        raw: Option<&Value>,
        entity_type: &EntityType,
    ) -> HydrateResult<Validation> {
        let data = match validate::present(raw) {
            Ok(data) => data,
            Err(shortcut) => return Ok(shortcut),
        };

        let mut nested = entity_type.instantiate();
        self.hydrate_entity(entity_type, nested.as_mut(), data)?;
        if nested.is_valid() {
            Ok(Validation::valid(FieldValue::Object(nested)))
        } else {
            debug!(entity = entity_type.name(), "nested object rejected by validity check");
            Ok(Validation::invalid(Reason::NotValidObject))
        }
    }

    fn report(
        &self,
        entity_type: &EntityType,
        descriptor: &FieldDescriptor,
        source: Option<&Value>,
        reasons: &[Reason],
    ) {
        let Some(sink) = self.sink else {
            return;
        };
        if reasons.is_empty()
            || (self.options.skip_empty_diagnostics && reasons == [Reason::Empty])
        {
            return;
        }
        sink.record(&Diagnostic {
            class: entity_type.name().to_string(),
            field: descriptor.name.clone(),
            value: source.map_or_else(|| UNDEFINED.to_string(), Value::to_string),
            reasons: reasons.to_vec(),
        });
    }
}

static NULL: Value = Value::Null;

/// Picks the raw value for a field and whether the input targeted it at all.
///
/// A present alias key wins over the field's own key, whatever its value.
/// A falsy input (`null`, `false`, `0`, `""`) targets nothing but hands every
/// field an explicit null; any other non-object input leaves every field
/// absent.
fn resolve_source<'v>(raw: &'v Value, descriptor: &FieldDescriptor) -> (Option<&'v Value>, bool) {
    match raw {
        Value::Object(map) => {
            let source = descriptor
                .alias
                .as_deref()
                .and_then(|alias| map.get(alias))
                .or_else(|| map.get(&descriptor.name));
            (source, source.is_some())
        }
        _ if !is_truthy(raw) => (Some(&NULL), false),
        _ => (None, false),
    }
}
