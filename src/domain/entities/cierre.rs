use serde::{Deserialize, Serialize};

use crate::domain::entities::captacion::Moneda;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CierreId(pub i64);

/// Cierre de venta o alquiler. La comisión se calcula en pantalla a partir de
/// monto y porcentaje; el backend guarda los valores que se le envían.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cierre {
    pub id: CierreId,
    pub fecha: String,
    pub captacion_id: i64,
    pub cliente: String,
    pub monto: f64,
    pub moneda: Moneda,
    pub porcentaje_comision: f64,
}

impl Cierre {
    pub fn comision(&self) -> f64 {
        self.monto * self.porcentaje_comision / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CierreNuevo {
    pub fecha: String,
    pub captacion_id: i64,
    pub cliente: String,
    pub monto: f64,
    pub moneda: Moneda,
    pub porcentaje_comision: f64,
}
