use crate::domain::entities::agente::{Agente, AgenteNuevo};
use crate::domain::entities::captacion::{Captacion, CaptacionId, CaptacionNueva};
use crate::domain::entities::cierre::{Cierre, CierreNuevo};
use crate::domain::entities::contacto::{
    Cliente, ClienteId, ClienteNuevo, Propietario, PropietarioId, PropietarioNuevo,
};
use crate::domain::entities::visita::{Visita, VisitaId, VisitaNueva};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Fallo de transporte (conexión, timeout).
    Red(String),
    /// Respuesta HTTP no exitosa.
    Estado(u16),
    /// El cuerpo no se pudo decodificar como JSON esperado.
    Decodificacion(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Red(mensaje) => write!(f, "error de red: {mensaje}"),
            ApiError::Estado(codigo) => write!(f, "el servidor respondió {codigo}"),
            ApiError::Decodificacion(mensaje) => write!(f, "respuesta inválida: {mensaje}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Puerto hacia el backend REST. El backend es el único dueño de los datos:
/// la app nunca muta sus listas en memoria, solo las reemplaza con lo que
/// devuelve un nuevo `listar_*` después de cada mutación.
pub trait CrmBackend: Send + Sync {
    fn listar_captaciones(&self) -> Result<Vec<Captacion>, ApiError>;
    fn crear_captacion(&self, nueva: &CaptacionNueva) -> Result<(), ApiError>;
    fn eliminar_captacion(&self, id: CaptacionId) -> Result<(), ApiError>;
    /// Alta masiva: todo el lote viaja en una sola llamada.
    fn importar_captaciones(&self, lote: &[CaptacionNueva]) -> Result<(), ApiError>;

    fn listar_agentes(&self) -> Result<Vec<Agente>, ApiError>;
    fn importar_agentes(&self, lote: &[AgenteNuevo]) -> Result<(), ApiError>;

    fn listar_propietarios(&self) -> Result<Vec<Propietario>, ApiError>;
    fn crear_propietario(&self, nuevo: &PropietarioNuevo) -> Result<(), ApiError>;
    fn actualizar_propietario(
        &self,
        id: PropietarioId,
        datos: &PropietarioNuevo,
    ) -> Result<(), ApiError>;
    fn eliminar_propietario(&self, id: PropietarioId) -> Result<(), ApiError>;

    fn listar_clientes(&self) -> Result<Vec<Cliente>, ApiError>;
    fn crear_cliente(&self, nuevo: &ClienteNuevo) -> Result<(), ApiError>;
    fn actualizar_cliente(&self, id: ClienteId, datos: &ClienteNuevo) -> Result<(), ApiError>;
    fn eliminar_cliente(&self, id: ClienteId) -> Result<(), ApiError>;

    fn listar_visitas(&self) -> Result<Vec<Visita>, ApiError>;
    fn crear_visita(&self, nueva: &VisitaNueva) -> Result<(), ApiError>;
    fn eliminar_visita(&self, id: VisitaId) -> Result<(), ApiError>;

    fn listar_cierres(&self) -> Result<Vec<Cierre>, ApiError>;
    fn crear_cierre(&self, nuevo: &CierreNuevo) -> Result<(), ApiError>;
}
