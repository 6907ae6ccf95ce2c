use serde::{Deserialize, Serialize};

pub const ESTADO_ALIADO: &str = "ALIADO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgenteId(pub i64);

/// Agente externo aliado (corredores de otras inmobiliarias con los que se
/// comparten captaciones).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agente {
    pub id: AgenteId,
    pub celular1: String,
    pub celular2: String,
    pub celular3: String,
    pub nombre: String,
    pub inmobiliaria: String,
    pub link: String,
    pub estado: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgenteNuevo {
    pub celular1: String,
    pub celular2: String,
    pub celular3: String,
    pub nombre: String,
    pub inmobiliaria: String,
    pub link: String,
    pub estado: String,
}

impl Default for AgenteNuevo {
    fn default() -> Self {
        AgenteNuevo {
            celular1: String::new(),
            celular2: String::new(),
            celular3: String::new(),
            nombre: String::new(),
            inmobiliaria: String::new(),
            link: String::new(),
            estado: ESTADO_ALIADO.to_string(),
        }
    }
}
