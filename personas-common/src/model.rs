//! Persona data model and wire parsing
//!
//! This module provides the types shared across the daemon, CLI, and API:
//! - Persona: a stored person record, including its server-assigned id
//! - NewPersona: a validated create payload
//! - PersonaUpdate: a validated partial-update payload
//!
//! Request bodies are parsed from `serde_json::Value` so that field-level
//! problems (missing required field, wrong type, bad date) surface as
//! individual `ModelError` values rather than a generic serde message.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Accepted format for the `fecha_nacimiento` field
pub const FECHA_NACIMIENTO_FORMAT: &str = "%Y-%m-%d";

/// A stored person record
///
/// Optional fields serialize as `null` when unset so that every persona
/// on the wire carries the same set of keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub edad: u32,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<String>,
}

impl Persona {
    /// Apply a partial update, replacing only the supplied fields
    pub fn apply(&mut self, update: &PersonaUpdate) {
        if let Some(nombre) = &update.nombre {
            self.nombre = nombre.clone();
        }
        if let Some(apellido) = &update.apellido {
            self.apellido = apellido.clone();
        }
        if let Some(edad) = update.edad {
            self.edad = edad;
        }
        if let Some(email) = &update.email {
            self.email = Some(email.clone());
        }
        if let Some(telefono) = &update.telefono {
            self.telefono = Some(telefono.clone());
        }
        if let Some(direccion) = &update.direccion {
            self.direccion = Some(direccion.clone());
        }
        if let Some(fecha_nacimiento) = &update.fecha_nacimiento {
            self.fecha_nacimiento = Some(fecha_nacimiento.clone());
        }
    }
}

/// A validated create payload (everything except the id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewPersona {
    pub nombre: String,
    pub apellido: String,
    pub edad: u32,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<String>,
}

impl NewPersona {
    /// Parse a create request body
    ///
    /// `nombre`, `apellido`, and `edad` are required; the remaining fields
    /// are optional. Unknown keys are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = as_object(value)?;

        Ok(Self {
            nombre: require_string(obj, "nombre")?,
            apellido: require_string(obj, "apellido")?,
            edad: optional_edad(obj)?.ok_or(ModelError::MissingField("edad"))?,
            email: optional_string(obj, "email")?,
            telefono: optional_string(obj, "telefono")?,
            direccion: optional_string(obj, "direccion")?,
            fecha_nacimiento: optional_fecha_nacimiento(obj)?,
        })
    }

    /// Turn this payload into a stored record with the given id
    pub fn into_persona(self, id: i64) -> Persona {
        Persona {
            id,
            nombre: self.nombre,
            apellido: self.apellido,
            edad: self.edad,
            email: self.email,
            telefono: self.telefono,
            direccion: self.direccion,
            fecha_nacimiento: self.fecha_nacimiento,
        }
    }
}

/// A validated partial-update payload
///
/// A `null` value is treated the same as an absent key: the field is left
/// untouched. Clearing a field is not part of the wire contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonaUpdate {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub edad: Option<u32>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<String>,
}

impl PersonaUpdate {
    /// Parse an update request body
    ///
    /// At least one updatable field must be present. Unknown keys are
    /// ignored, so a body of only unknown keys is an empty update.
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = as_object(value)?;

        let update = Self {
            nombre: optional_string(obj, "nombre")?,
            apellido: optional_string(obj, "apellido")?,
            edad: optional_edad(obj)?,
            email: optional_string(obj, "email")?,
            telefono: optional_string(obj, "telefono")?,
            direccion: optional_string(obj, "direccion")?,
            fecha_nacimiento: optional_fecha_nacimiento(obj)?,
        };

        if update.is_empty() {
            return Err(ModelError::EmptyUpdate);
        }

        Ok(update)
    }

    /// True if no field is supplied
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.apellido.is_none()
            && self.edad.is_none()
            && self.email.is_none()
            && self.telefono.is_none()
            && self.direccion.is_none()
            && self.fecha_nacimiento.is_none()
    }
}

/// Errors produced while parsing request bodies
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid value for field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("no updatable fields in request body")]
    EmptyUpdate,
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ModelError> {
    value.as_object().ok_or(ModelError::NotAnObject)
}

fn optional_string(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ModelError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ModelError::InvalidField {
            field,
            reason: "expected a string".to_string(),
        }),
    }
}

fn require_string(obj: &Map<String, Value>, field: &'static str) -> Result<String, ModelError> {
    optional_string(obj, field)?.ok_or(ModelError::MissingField(field))
}

fn optional_edad(obj: &Map<String, Value>) -> Result<Option<u32>, ModelError> {
    match obj.get("edad") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let edad = n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| ModelError::InvalidField {
                    field: "edad",
                    reason: "expected a non-negative integer".to_string(),
                })?;
            Ok(Some(edad))
        }
        Some(_) => Err(ModelError::InvalidField {
            field: "edad",
            reason: "expected a non-negative integer".to_string(),
        }),
    }
}

fn optional_fecha_nacimiento(obj: &Map<String, Value>) -> Result<Option<String>, ModelError> {
    let Some(fecha) = optional_string(obj, "fecha_nacimiento")? else {
        return Ok(None);
    };

    if chrono::NaiveDate::parse_from_str(&fecha, FECHA_NACIMIENTO_FORMAT).is_err() {
        return Err(ModelError::InvalidField {
            field: "fecha_nacimiento",
            reason: format!("expected a date in YYYY-MM-DD format, got '{fecha}'"),
        });
    }

    Ok(Some(fecha))
}
