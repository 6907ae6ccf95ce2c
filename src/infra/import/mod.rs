pub mod agente;
pub mod captacion;
pub mod header;
pub mod normalize;
pub mod sheet;

/// Registro de un campo que cayó en su valor por defecto durante la
/// normalización. Se acumulan por lote y se muestran como conteo al usuario;
/// el detalle queda en el log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostico {
    pub fila: usize,
    pub campo: &'static str,
    pub crudo: String,
    pub asignado: String,
}

/// Resultado de normalizar todas las filas de datos de una hoja.
#[derive(Debug, Clone, PartialEq)]
pub struct LoteImportado<T> {
    pub candidatos: Vec<T>,
    pub descartadas: usize,
    pub diagnosticos: Vec<Diagnostico>,
}
