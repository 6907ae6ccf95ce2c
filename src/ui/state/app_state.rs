use chrono::{Datelike, Local};
use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::agente::Agente;
use crate::domain::entities::captacion::{Captacion, Operacion, TipoInmueble};
use crate::domain::entities::cierre::Cierre;
use crate::domain::entities::contacto::{
    Cliente, ClienteId, ClienteNuevo, Propietario, PropietarioId, PropietarioNuevo,
};
use crate::domain::entities::visita::{Visita, VisitaNueva};
use crate::usecase::services::query_service::OrdenCaptaciones;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pantalla {
    #[default]
    Panel,
    Captaciones,
    Agentes,
    Propietarios,
    Clientes,
    Visitas,
    Cierres,
}

/// Todo el estado de la UI en un solo paquete de señales. Las listas de
/// entidades son copias cacheadas del backend: se reemplazan enteras tras
/// cada fetch exitoso, nunca se mutan en el sitio.
pub struct AppState {
    pub pantalla: Signal<Pantalla>,

    pub captaciones: Signal<Vec<Captacion>>,
    pub agentes: Signal<Vec<Agente>>,
    pub propietarios: Signal<Vec<Propietario>>,
    pub clientes: Signal<Vec<Cliente>>,
    pub visitas: Signal<Vec<Visita>>,
    pub cierres: Signal<Vec<Cierre>>,

    pub busqueda: Signal<String>,
    pub filtro_tipo: Signal<Option<TipoInmueble>>,
    pub filtro_operacion: Signal<Option<Operacion>>,
    pub orden: Signal<OrdenCaptaciones>,
    pub descendente: Signal<bool>,
    pub busqueda_agentes: Signal<String>,

    pub anio: Signal<i32>,
    pub mes: Signal<u32>,
    pub dia_seleccionado: Signal<Option<u32>>,

    pub form_propietario: Signal<PropietarioNuevo>,
    pub edicion_propietario: Signal<Option<PropietarioId>>,
    pub form_cliente: Signal<ClienteNuevo>,
    pub edicion_cliente: Signal<Option<ClienteId>>,
    pub form_visita: Signal<VisitaNueva>,

    pub cierre_fecha: Signal<String>,
    pub cierre_captacion: Signal<String>,
    pub cierre_cliente: Signal<String>,
    pub cierre_monto: Signal<String>,
    pub cierre_en_soles: Signal<bool>,
    pub cierre_porcentaje: Signal<String>,

    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        let hoy = Local::now().date_naive();
        Self {
            pantalla: use_signal(Pantalla::default),

            captaciones: use_signal(Vec::<Captacion>::new),
            agentes: use_signal(Vec::<Agente>::new),
            propietarios: use_signal(Vec::<Propietario>::new),
            clientes: use_signal(Vec::<Cliente>::new),
            visitas: use_signal(Vec::<Visita>::new),
            cierres: use_signal(Vec::<Cierre>::new),

            busqueda: use_signal(String::new),
            filtro_tipo: use_signal(|| None::<TipoInmueble>),
            filtro_operacion: use_signal(|| None::<Operacion>),
            orden: use_signal(OrdenCaptaciones::default),
            descendente: use_signal(|| false),
            busqueda_agentes: use_signal(String::new),

            anio: use_signal(move || hoy.year()),
            mes: use_signal(move || hoy.month()),
            dia_seleccionado: use_signal(|| None::<u32>),

            form_propietario: use_signal(PropietarioNuevo::default),
            edicion_propietario: use_signal(|| None::<PropietarioId>),
            form_cliente: use_signal(ClienteNuevo::default),
            edicion_cliente: use_signal(|| None::<ClienteId>),
            form_visita: use_signal(VisitaNueva::default),

            cierre_fecha: use_signal(String::new),
            cierre_captacion: use_signal(String::new),
            cierre_cliente: use_signal(String::new),
            cierre_monto: use_signal(String::new),
            cierre_en_soles: use_signal(|| false),
            cierre_porcentaje: use_signal(String::new),

            busy: use_signal(|| false),
            status: use_signal(|| "Listo".to_string()),
        }
    }
}
