use crate::domain::entities::agente::{Agente, AgenteNuevo};
use crate::domain::entities::captacion::{Captacion, CaptacionId, CaptacionNueva};
use crate::domain::entities::cierre::{Cierre, CierreNuevo};
use crate::domain::entities::contacto::{
    Cliente, ClienteId, ClienteNuevo, Propietario, PropietarioId, PropietarioNuevo,
};
use crate::domain::entities::visita::{Visita, VisitaId, VisitaNueva};
use crate::infra::http::client::ApiClient;
use crate::usecase::ports::backend::{ApiError, CrmBackend};

/// Implementación del puerto contra el backend REST real. Una llamada HTTP
/// por operación; los lotes de import viajan como un solo array JSON.
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrmBackend for HttpBackend {
    fn listar_captaciones(&self) -> Result<Vec<Captacion>, ApiError> {
        self.client.get_json("captaciones")
    }

    fn crear_captacion(&self, nueva: &CaptacionNueva) -> Result<(), ApiError> {
        self.client.post_json("captaciones", nueva)
    }

    fn eliminar_captacion(&self, id: CaptacionId) -> Result<(), ApiError> {
        self.client.delete(&format!("captaciones/{}", id.0))
    }

    fn importar_captaciones(&self, lote: &[CaptacionNueva]) -> Result<(), ApiError> {
        self.client.post_json("captaciones/import", lote)
    }

    fn listar_agentes(&self) -> Result<Vec<Agente>, ApiError> {
        self.client.get_json("agentes")
    }

    fn importar_agentes(&self, lote: &[AgenteNuevo]) -> Result<(), ApiError> {
        self.client.post_json("agentes/import", lote)
    }

    fn listar_propietarios(&self) -> Result<Vec<Propietario>, ApiError> {
        self.client.get_json("propietarios")
    }

    fn crear_propietario(&self, nuevo: &PropietarioNuevo) -> Result<(), ApiError> {
        self.client.post_json("propietarios", nuevo)
    }

    fn actualizar_propietario(
        &self,
        id: PropietarioId,
        datos: &PropietarioNuevo,
    ) -> Result<(), ApiError> {
        self.client.put_json(&format!("propietarios/{}", id.0), datos)
    }

    fn eliminar_propietario(&self, id: PropietarioId) -> Result<(), ApiError> {
        self.client.delete(&format!("propietarios/{}", id.0))
    }

    fn listar_clientes(&self) -> Result<Vec<Cliente>, ApiError> {
        self.client.get_json("clientes")
    }

    fn crear_cliente(&self, nuevo: &ClienteNuevo) -> Result<(), ApiError> {
        self.client.post_json("clientes", nuevo)
    }

    fn actualizar_cliente(&self, id: ClienteId, datos: &ClienteNuevo) -> Result<(), ApiError> {
        self.client.put_json(&format!("clientes/{}", id.0), datos)
    }

    fn eliminar_cliente(&self, id: ClienteId) -> Result<(), ApiError> {
        self.client.delete(&format!("clientes/{}", id.0))
    }

    fn listar_visitas(&self) -> Result<Vec<Visita>, ApiError> {
        self.client.get_json("visitas")
    }

    fn crear_visita(&self, nueva: &VisitaNueva) -> Result<(), ApiError> {
        self.client.post_json("visitas", nueva)
    }

    fn eliminar_visita(&self, id: VisitaId) -> Result<(), ApiError> {
        self.client.delete(&format!("visitas/{}", id.0))
    }

    fn listar_cierres(&self) -> Result<Vec<Cierre>, ApiError> {
        self.client.get_json("cierres")
    }

    fn crear_cierre(&self, nuevo: &CierreNuevo) -> Result<(), ApiError> {
        self.client.post_json("cierres", nuevo)
    }
}
