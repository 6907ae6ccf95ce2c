use crate::domain::entities::agente::Agente;
use crate::domain::entities::captacion::{Captacion, Moneda, Operacion, TipoInmueble};
use crate::domain::entities::cierre::Cierre;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrdenCaptaciones {
    #[default]
    Fecha,
    Precio,
    Area,
}

/// Filtro y orden aplicados en memoria sobre la lista cacheada. La lista
/// canónica vive en el backend; aquí nunca se muta, solo se deriva una vista.
#[derive(Debug, Clone, Default)]
pub struct OpcionesCaptaciones {
    pub busqueda: String,
    pub tipo: Option<TipoInmueble>,
    pub operacion: Option<Operacion>,
    pub orden: OrdenCaptaciones,
    pub descendente: bool,
}

fn coincide_busqueda(captacion: &Captacion, termino: &str) -> bool {
    if termino.is_empty() {
        return true;
    }
    let termino = termino.to_uppercase();
    [
        captacion.distrito.as_str(),
        captacion.direccion.as_str(),
        captacion.propietario.as_str(),
        captacion.descripcion.as_str(),
        captacion.celular.as_str(),
    ]
    .iter()
    .any(|campo| campo.to_uppercase().contains(&termino))
}

pub fn filtra_captaciones(lista: &[Captacion], opciones: &OpcionesCaptaciones) -> Vec<Captacion> {
    let mut vista: Vec<Captacion> = lista
        .iter()
        .filter(|c| opciones.tipo.map_or(true, |tipo| c.tipo == tipo))
        .filter(|c| opciones.operacion.map_or(true, |op| c.operacion == op))
        .filter(|c| coincide_busqueda(c, opciones.busqueda.trim()))
        .cloned()
        .collect();

    match opciones.orden {
        OrdenCaptaciones::Fecha => vista.sort_by(|a, b| a.fecha.cmp(&b.fecha)),
        OrdenCaptaciones::Precio => {
            vista.sort_by(|a, b| a.precio.partial_cmp(&b.precio).unwrap_or(std::cmp::Ordering::Equal))
        }
        OrdenCaptaciones::Area => {
            vista.sort_by(|a, b| a.area.partial_cmp(&b.area).unwrap_or(std::cmp::Ordering::Equal))
        }
    }
    if opciones.descendente {
        vista.reverse();
    }
    vista
}

pub fn filtra_agentes(lista: &[Agente], busqueda: &str) -> Vec<Agente> {
    let termino = busqueda.trim().to_uppercase();
    if termino.is_empty() {
        return lista.to_vec();
    }
    lista
        .iter()
        .filter(|a| {
            [
                a.nombre.as_str(),
                a.inmobiliaria.as_str(),
                a.celular1.as_str(),
                a.celular2.as_str(),
                a.celular3.as_str(),
            ]
            .iter()
            .any(|campo| campo.to_uppercase().contains(&termino))
        })
        .cloned()
        .collect()
}

/// Totales que muestra el panel de control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResumenPanel {
    pub captaciones: usize,
    pub propietarios: usize,
    pub clientes: usize,
    pub visitas: usize,
    pub cierres: usize,
    pub comision_usd: f64,
    pub comision_pen: f64,
}

pub fn resumen_panel(
    captaciones: usize,
    propietarios: usize,
    clientes: usize,
    visitas: usize,
    cierres: &[Cierre],
) -> ResumenPanel {
    let mut comision_usd = 0.0;
    let mut comision_pen = 0.0;
    for cierre in cierres {
        match cierre.moneda {
            Moneda::Usd => comision_usd += cierre.comision(),
            Moneda::Pen => comision_pen += cierre.comision(),
        }
    }
    ResumenPanel {
        captaciones,
        propietarios,
        clientes,
        visitas,
        cierres: cierres.len(),
        comision_usd,
        comision_pen,
    }
}
