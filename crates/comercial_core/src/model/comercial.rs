//! Comercial domain model.
//!
//! # Responsibility
//! - Define the sales-agent record mapped 1:1 to the `comercial` table.
//!
//! # Invariants
//! - `id` is `None` before a successful create and `Some(key)` afterwards,
//!   where `key` is the store-generated primary key.
//! - The commission field is persisted and serialized under the external
//!   column name `comisión`.

use serde::{Deserialize, Serialize};

/// Store-generated identifier for a persisted comercial row.
///
/// Kept as a type alias to make semantic intent explicit in signatures. One
/// width is used across all operations; the store's rowid keys are `i64`.
pub type ComercialId = i64;

/// Sales-agent record backed by one row of the `comercial` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comercial {
    /// `None` for a transient entity; assigned by the store on create.
    pub id: Option<ComercialId>,
    /// First name.
    pub nombre: String,
    /// First surname.
    pub apellido1: String,
    /// Second surname.
    pub apellido2: String,
    /// Serialized as `comisión` to match external schema naming.
    #[serde(rename = "comisión")]
    pub comision: f64,
}

impl Comercial {
    /// Creates a transient entity with no identifier.
    ///
    /// # Invariants
    /// - `id` starts as `None`; only a successful `create` call sets it.
    pub fn new(
        nombre: impl Into<String>,
        apellido1: impl Into<String>,
        apellido2: impl Into<String>,
        comision: f64,
    ) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            apellido1: apellido1.into(),
            apellido2: apellido2.into(),
            comision,
        }
    }

    /// Returns whether this entity has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Comercial;

    #[test]
    fn new_entity_is_transient() {
        let comercial = Comercial::new("Ana", "Gomez", "Ruiz", 2.5);
        assert_eq!(comercial.id, None);
        assert!(!comercial.is_persisted());
        assert_eq!(comercial.nombre, "Ana");
        assert_eq!(comercial.apellido1, "Gomez");
        assert_eq!(comercial.apellido2, "Ruiz");
        assert_eq!(comercial.comision, 2.5);
    }

    #[test]
    fn commission_serializes_under_external_column_name() {
        let comercial = Comercial::new("Ana", "Gomez", "Ruiz", 2.5);
        let json = serde_json::to_value(&comercial).unwrap();
        assert_eq!(json["comisión"], 2.5);
        assert!(json.get("comision").is_none());
    }

    #[test]
    fn deserialization_restores_all_fields() {
        let json = r#"{
            "id": 7,
            "nombre": "Ana",
            "apellido1": "Gomez",
            "apellido2": "Ruiz",
            "comisión": 1.5
        }"#;
        let comercial: Comercial = serde_json::from_str(json).unwrap();
        assert_eq!(comercial.id, Some(7));
        assert!(comercial.is_persisted());
        assert_eq!(comercial.comision, 1.5);
    }
}
