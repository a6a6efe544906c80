//! JSON namespace snapshots.
//!
//! A snapshot lets a host describe a namespace without a live interpreter.
//! Plain JSON maps onto the obvious values; single-key objects tagged with
//! `$function`, `$module`, `$class` or `$instance` build the object model.
//!
//! ```json
//! {
//!   "count": 3,
//!   "greet": {"$function": {"name": "greet", "arity": 1}},
//!   "geometry": {"$module": {"name": "geometry", "members": {"pi": 3.0}}}
//! }
//! ```

use crate::namespace::Namespace;
use crate::object::{Class, Function, Instance, Module};
use crate::sync::Arc;
use crate::value::Value;
use serde_json::{Map, Value as Json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),

    #[error("malformed {tag}: {reason}")]
    MalformedTag { tag: &'static str, reason: String },
}

/// Parse a snapshot document into a namespace
pub fn namespace_from_str(source: &str) -> Result<Namespace, SnapshotError> {
    let json: Json = serde_json::from_str(source)?;
    namespace_from_json(&json)
}

/// Convert a JSON object into a namespace
pub fn namespace_from_json(json: &Json) -> Result<Namespace, SnapshotError> {
    let object = json.as_object().ok_or(SnapshotError::NotAnObject("namespace"))?;
    members_from_map(object)
}

/// Convert a single JSON value
pub fn value_from_json(json: &Json) -> Result<Value, SnapshotError> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Boolean(*b),
        // Every finite JSON number fits in f64, possibly rounded
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::vector(
            items
                .iter()
                .map(value_from_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Json::Object(object) => object_from_json(object)?,
    })
}

fn members_from_map(object: &Map<String, Json>) -> Result<Namespace, SnapshotError> {
    let mut namespace = Namespace::new();
    for (name, value) in object {
        namespace.insert(name.clone(), value_from_json(value)?);
    }
    Ok(namespace)
}

fn object_from_json(object: &Map<String, Json>) -> Result<Value, SnapshotError> {
    if object.len() == 1 {
        if let Some((key, body)) = object.iter().next() {
            match key.as_str() {
                "$function" => return function_from_json(body).map(Value::Function),
                "$module" => return module_from_json(body).map(Value::Module),
                "$class" => return class_from_json(body).map(Value::Class),
                "$instance" => return instance_from_json(body).map(Value::Instance),
                _ => {}
            }
        }
    }
    Ok(Value::record(members_from_map(object)?))
}

fn malformed(tag: &'static str, reason: impl Into<String>) -> SnapshotError {
    SnapshotError::MalformedTag {
        tag,
        reason: reason.into(),
    }
}

fn required_name(body: &Map<String, Json>, tag: &'static str) -> Result<String, SnapshotError> {
    body.get("name")
        .and_then(Json::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed(tag, "missing string field 'name'"))
}

fn optional_members(
    body: &Map<String, Json>,
    field: &str,
    tag: &'static str,
) -> Result<Namespace, SnapshotError> {
    match body.get(field) {
        None => Ok(Namespace::new()),
        Some(Json::Object(members)) => members_from_map(members),
        Some(_) => Err(malformed(tag, format!("'{}' must be an object", field))),
    }
}

fn function_from_json(body: &Json) -> Result<Function, SnapshotError> {
    const TAG: &str = "$function";
    match body {
        Json::String(name) => Ok(Function::variadic(name.clone())),
        Json::Object(fields) => {
            let name = required_name(fields, TAG)?;
            let arity = match fields.get("arity") {
                None => -1,
                Some(arity) => arity
                    .as_i64()
                    .and_then(|n| i8::try_from(n).ok())
                    .ok_or_else(|| malformed(TAG, "'arity' must be an integer in -1..=127"))?,
            };
            Ok(Function::new(name, arity))
        }
        _ => Err(malformed(TAG, "expected a name or an object")),
    }
}

fn module_from_json(body: &Json) -> Result<Module, SnapshotError> {
    const TAG: &str = "$module";
    let fields = body.as_object().ok_or(SnapshotError::NotAnObject(TAG))?;
    let name = required_name(fields, TAG)?;
    let members = optional_members(fields, "members", TAG)?;
    Ok(Module::with_namespace(name, members))
}

fn class_from_json(body: &Json) -> Result<Arc<Class>, SnapshotError> {
    const TAG: &str = "$class";
    let fields = body.as_object().ok_or(SnapshotError::NotAnObject(TAG))?;
    let mut class = Class::new(required_name(fields, TAG)?);

    for (name, value) in &optional_members(fields, "members", TAG)? {
        class = class.with_member(name.clone(), value.clone());
    }

    match fields.get("bases") {
        None => {}
        Some(Json::Array(bases)) => {
            for base in bases {
                let base = base
                    .as_object()
                    .and_then(|b| b.get("$class"))
                    .ok_or_else(|| malformed(TAG, "every base must be a $class object"))?;
                class = class.with_base(class_from_json(base)?);
            }
        }
        Some(_) => return Err(malformed(TAG, "'bases' must be an array")),
    }

    Ok(Arc::new(class))
}

fn instance_from_json(body: &Json) -> Result<Instance, SnapshotError> {
    const TAG: &str = "$instance";
    let fields = body.as_object().ok_or(SnapshotError::NotAnObject(TAG))?;
    let class = fields
        .get("class")
        .and_then(Json::as_object)
        .and_then(|c| c.get("$class"))
        .ok_or_else(|| malformed(TAG, "'class' must be a $class object"))?;

    let mut instance = Instance::new(class_from_json(class)?);
    for (name, value) in &optional_members(fields, "fields", TAG)? {
        instance = instance.with_field(name.clone(), value.clone());
    }
    Ok(instance)
}
