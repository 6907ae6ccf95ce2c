use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitaId(pub i64);

/// Visita agendada a una captación. `fecha` en formato ISO `YYYY-MM-DD`,
/// `hora` texto libre ("10:30", "por confirmar").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visita {
    pub id: VisitaId,
    pub fecha: String,
    pub hora: String,
    pub captacion_id: i64,
    pub cliente: String,
    pub estado: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitaNueva {
    pub fecha: String,
    pub hora: String,
    pub captacion_id: i64,
    pub cliente: String,
    pub estado: String,
}
