use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropietarioId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClienteId(pub i64);

/// Dueño registrado de uno o más inmuebles captados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Propietario {
    pub id: PropietarioId,
    pub nombre: String,
    pub dni: String,
    pub celular: String,
    pub notas: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropietarioNuevo {
    pub nombre: String,
    pub dni: String,
    pub celular: String,
    pub notas: String,
}

/// Cliente comprador o arrendatario. La fecha de nacimiento (ISO, opcional)
/// alimenta los cumpleaños del calendario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: ClienteId,
    pub nombre: String,
    pub dni: String,
    pub celular: String,
    pub fecha_nacimiento: String,
    pub notas: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClienteNuevo {
    pub nombre: String,
    pub dni: String,
    pub celular: String,
    pub fecha_nacimiento: String,
    pub notas: String,
}
