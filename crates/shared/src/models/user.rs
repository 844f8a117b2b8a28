use serde::{de, Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A user record as exposed by the users API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": 1, "name": "John Doe", "email": "john@example.com", "age": 30}))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Payload accepted by both create and update.
///
/// The schema constraints are published in the API documentation only, they
/// are never checked when a request is handled. Missing or `null` fields fall
/// back to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    #[schema(example = "John Doe", min_length = 1)]
    pub name: String,
    #[schema(example = "john@example.com", format = "email")]
    pub email: String,
    #[schema(example = 30, minimum = 1)]
    pub age: i64,
}

const REQUEST_FIELDS: [&str; 3] = ["name", "email", "age"];

impl CreateUserRequest {
    /// Parses a raw request body.
    ///
    /// The body must be a JSON object; a literal `null` decodes to an
    /// all-zero request. Keys match field names case-insensitively, with an
    /// exact match taking precedence.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Ok(Self::default()),
            Value::Object(object) => serde_json::from_value(Value::Object(known_fields(object))),
            _ => Err(de::Error::custom("request body must be a JSON object")),
        }
    }
}

/// Picks the request fields out of a decoded object, keyed by their canonical
/// name. `null` values are dropped so the field keeps its default.
fn known_fields(mut object: Map<String, Value>) -> Map<String, Value> {
    let mut fields = Map::new();
    for field in REQUEST_FIELDS {
        let key = if object.contains_key(field) {
            Some(field.to_string())
        } else {
            object.keys().find(|key| key.eq_ignore_ascii_case(field)).cloned()
        };
        let value = key.and_then(|key| object.remove(&key));
        if let Some(value) = value.filter(|value| !value.is_null()) {
            fields.insert(field.to_string(), value);
        }
    }
    fields
}

impl User {
    pub fn new(id: i64, name: &str, email: &str, age: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    /// Builds a user that echoes the request fields under the given id.
    pub fn from_request(id: i64, request: CreateUserRequest) -> Self {
        Self {
            id,
            name: request.name,
            email: request.email,
            age: request.age,
        }
    }
}
