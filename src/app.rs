use std::sync::Arc;

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::config::AppConfig;
use crate::domain::entities::captacion::{Captacion, Moneda, Operacion, TipoInmueble};
use crate::domain::entities::cierre::CierreNuevo;
use crate::domain::entities::contacto::{ClienteNuevo, PropietarioNuevo};
use crate::domain::entities::visita::VisitaNueva;
use crate::domain::validacion::valida_contacto;
use crate::infra::http::backend::HttpBackend;
use crate::infra::http::client::ApiClient;
use crate::infra::import::normalize::hoy;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::calendar::{
    arma_mes, desplazamiento_primer_dia, fecha_iso, mes_anterior, mes_siguiente, semanas_del_mes,
};
use crate::ui::state::app_state::{AppState, Pantalla};
use crate::usecase::ports::backend::CrmBackend;
use crate::usecase::services::import_service::{
    ImportService, ResultadoImportacion, ResumenImportacion,
};
use crate::usecase::services::query_service::{
    filtra_agentes, filtra_captaciones, resumen_panel, OpcionesCaptaciones, OrdenCaptaciones,
};

const OPCION_TODOS: &str = "__todos__";

const ESTILO_TABLA: &str = "border-collapse: collapse; width: 100%; border: 1px solid #bbb;";
const ESTILO_TH: &str = "border: 1px solid #bbb; padding: 6px; background: #f2f2f2;";
const ESTILO_TD: &str = "border: 1px solid #bbb; padding: 6px;";

pub fn nombre_mes(mes: u32) -> &'static str {
    match mes {
        1 => "Enero",
        2 => "Febrero",
        3 => "Marzo",
        4 => "Abril",
        5 => "Mayo",
        6 => "Junio",
        7 => "Julio",
        8 => "Agosto",
        9 => "Septiembre",
        10 => "Octubre",
        11 => "Noviembre",
        12 => "Diciembre",
        _ => "",
    }
}

pub fn formatea_monto(valor: f64) -> String {
    if !valor.is_finite() {
        return String::new();
    }
    if valor.fract().abs() < f64::EPSILON {
        format!("{}", valor as i64)
    } else {
        format!("{valor:.2}")
    }
}

fn tipo_desde_opcion(valor: &str) -> Option<TipoInmueble> {
    match valor {
        "DEPARTAMENTO" => Some(TipoInmueble::Departamento),
        "CASA" => Some(TipoInmueble::Casa),
        "TERRENO" => Some(TipoInmueble::Terreno),
        "LOCAL" => Some(TipoInmueble::Local),
        "OFICINA" => Some(TipoInmueble::Oficina),
        _ => None,
    }
}

fn operacion_desde_opcion(valor: &str) -> Option<Operacion> {
    match valor {
        "VENTA" => Some(Operacion::Venta),
        "ALQUILER" => Some(Operacion::Alquiler),
        "ANTICRESIS" => Some(Operacion::Anticresis),
        _ => None,
    }
}

fn orden_desde_opcion(valor: &str) -> OrdenCaptaciones {
    match valor {
        "PRECIO" => OrdenCaptaciones::Precio,
        "AREA" => OrdenCaptaciones::Area,
        _ => OrdenCaptaciones::Fecha,
    }
}

fn confirma(titulo: &str, descripcion: &str) -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(titulo)
        .set_description(descripcion)
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

fn confirma_lote(resumen: &ResumenImportacion) -> bool {
    let descripcion = format!(
        "Se importarán {} registros ({} filas descartadas, {} campos con valor por defecto). ¿Continuar?",
        resumen.candidatos, resumen.descartadas, resumen.defectos
    );
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Confirmar importación")
        .set_description(descripcion.as_str())
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

fn refresca_captaciones(
    backend: &Arc<dyn CrmBackend>,
    mut lista: Signal<Vec<Captacion>>,
    mut status: Signal<String>,
) {
    match run_blocking(|| backend.listar_captaciones()) {
        Ok(nueva) => *lista.write() = nueva,
        Err(err) => *status.write() = format!("No se pudieron recargar las captaciones: {err}"),
    }
}

#[component]
pub fn App() -> Element {
    let config = AppConfig::desde_entorno();

    if config.mantenimiento {
        return rsx! {
            div {
                style: "padding: 40px; text-align: center;",
                h2 { "Sistema en mantenimiento" }
                p { "Vuelva a intentarlo más tarde." }
            }
        };
    }

    let client = match ApiClient::new(&config.api_url, &config.api_token) {
        Ok(client) => client,
        Err(err) => {
            return rsx! {
                div {
                    p { "No se pudo inicializar el cliente HTTP: {err}" }
                }
            };
        }
    };

    let AppState {
        mut pantalla,
        mut captaciones,
        mut agentes,
        mut propietarios,
        mut clientes,
        mut visitas,
        mut cierres,
        mut busqueda,
        mut filtro_tipo,
        mut filtro_operacion,
        mut orden,
        mut descendente,
        mut busqueda_agentes,
        mut anio,
        mut mes,
        mut dia_seleccionado,
        mut form_propietario,
        mut edicion_propietario,
        mut form_cliente,
        mut edicion_cliente,
        mut form_visita,
        mut cierre_fecha,
        mut cierre_captacion,
        mut cierre_cliente,
        mut cierre_monto,
        mut cierre_en_soles,
        mut cierre_porcentaje,
        mut busy,
        mut status,
    } = AppState::new();

    let backend: Arc<dyn CrmBackend> = Arc::new(HttpBackend::new(client));
    let import_service = Arc::new(ImportService::new(backend.clone()));

    let backend_for_init = backend.clone();
    let backend_for_import_capt = backend.clone();
    let backend_for_import_agentes = backend.clone();
    let backend_for_del_capt = backend.clone();
    let backend_for_propietario = backend.clone();
    let backend_for_del_propietario = backend.clone();
    let backend_for_cliente = backend.clone();
    let backend_for_del_cliente = backend.clone();
    let backend_for_visita = backend.clone();
    let backend_for_del_visita = backend.clone();
    let backend_for_cierre = backend.clone();
    let import_service_for_capt = import_service.clone();
    let import_service_for_agentes = import_service.clone();

    use_effect(move || {
        *busy.write() = true;
        let resultado = run_blocking(|| {
            let capt = backend_for_init.listar_captaciones()?;
            let ags = backend_for_init.listar_agentes()?;
            let props = backend_for_init.listar_propietarios()?;
            let clts = backend_for_init.listar_clientes()?;
            let vsts = backend_for_init.listar_visitas()?;
            let crrs = backend_for_init.listar_cierres()?;
            Ok::<_, crate::usecase::ports::backend::ApiError>((
                capt, ags, props, clts, vsts, crrs,
            ))
        });
        match resultado {
            Ok((capt, ags, props, clts, vsts, crrs)) => {
                *captaciones.write() = capt;
                *agentes.write() = ags;
                *propietarios.write() = props;
                *clientes.write() = clts;
                *visitas.write() = vsts;
                *cierres.write() = crrs;
                *status.write() = "Datos cargados".to_string();
            }
            Err(err) => {
                *status.write() = format!("No se pudieron cargar los datos: {err}");
            }
        }
        *busy.write() = false;
    });

    let pantalla_actual = pantalla();
    let opciones = OpcionesCaptaciones {
        busqueda: busqueda(),
        tipo: filtro_tipo(),
        operacion: filtro_operacion(),
        orden: orden(),
        descendente: descendente(),
    };
    let vista_captaciones = filtra_captaciones(&captaciones(), &opciones);
    let vista_agentes = filtra_agentes(&agentes(), &busqueda_agentes());
    let panel = resumen_panel(
        captaciones().len(),
        propietarios().len(),
        clientes().len(),
        visitas().len(),
        &cierres(),
    );

    let anio_actual = anio();
    let mes_actual = mes();
    let celdas_mes = arma_mes(anio_actual, mes_actual, &visitas(), &clientes());
    let desplazamiento = desplazamiento_primer_dia(anio_actual, mes_actual);
    let semanas = semanas_del_mes(celdas_mes, desplazamiento);
    let etiqueta_mes = nombre_mes(mes_actual);
    let detalle_dia = dia_seleccionado().map(|dia| {
        let fecha = fecha_iso(anio_actual, mes_actual, dia);
        let del_dia: Vec<_> = visitas()
            .iter()
            .filter(|visita| visita.fecha == fecha)
            .cloned()
            .collect();
        (dia, fecha, del_dia)
    });

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px;",

            nav {
                style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap; padding: 8px 0; border-bottom: 1px solid #ddd;",
                button { disabled: busy(), onclick: move |_| pantalla.set(Pantalla::Panel), "Panel" }
                button { disabled: busy(), onclick: move |_| pantalla.set(Pantalla::Captaciones), "Captaciones" }
                button { disabled: busy(), onclick: move |_| pantalla.set(Pantalla::Agentes), "Agentes" }
                button { disabled: busy(), onclick: move |_| pantalla.set(Pantalla::Propietarios), "Propietarios" }
                button { disabled: busy(), onclick: move |_| pantalla.set(Pantalla::Clientes), "Clientes" }
                button { disabled: busy(), onclick: move |_| pantalla.set(Pantalla::Visitas), "Visitas" }
                button { disabled: busy(), onclick: move |_| pantalla.set(Pantalla::Cierres), "Cierres" }
                span { " {status}" }
            }

            if pantalla_actual == Pantalla::Panel {
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; padding: 16px 0;",
                    div { style: "border: 1px solid #bbb; border-radius: 8px; padding: 12px; min-width: 140px;",
                        h3 { "Captaciones" }
                        p { "{panel.captaciones}" }
                    }
                    div { style: "border: 1px solid #bbb; border-radius: 8px; padding: 12px; min-width: 140px;",
                        h3 { "Propietarios" }
                        p { "{panel.propietarios}" }
                    }
                    div { style: "border: 1px solid #bbb; border-radius: 8px; padding: 12px; min-width: 140px;",
                        h3 { "Clientes" }
                        p { "{panel.clientes}" }
                    }
                    div { style: "border: 1px solid #bbb; border-radius: 8px; padding: 12px; min-width: 140px;",
                        h3 { "Visitas" }
                        p { "{panel.visitas}" }
                    }
                    div { style: "border: 1px solid #bbb; border-radius: 8px; padding: 12px; min-width: 140px;",
                        h3 { "Cierres" }
                        p { "{panel.cierres}" }
                    }
                    div { style: "border: 1px solid #bbb; border-radius: 8px; padding: 12px; min-width: 180px;",
                        h3 { "Comisiones" }
                        {
                            let usd = formatea_monto(panel.comision_usd);
                            let pen = formatea_monto(panel.comision_pen);
                            rsx! {
                                p { "$ {usd}" }
                                p { "S/ {pen}" }
                            }
                        }
                    }
                }
            }

            if pantalla_actual == Pantalla::Captaciones {
                div {
                    div {
                        style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                        button {
                            disabled: busy(),
                            onclick: move |_| {
                                if busy() {
                                    return;
                                }
                                let Some(archivo) = FileDialog::new()
                                    .add_filter("hojas de cálculo", &["xlsx", "xls", "csv"])
                                    .pick_file() else {
                                    *status.write() = "Importación cancelada".to_string();
                                    return;
                                };

                                *busy.write() = true;
                                *status.write() = format!("Importando {}", archivo.display());

                                let servicio = import_service_for_capt.clone();
                                let resultado = run_blocking(|| {
                                    servicio.importar_captaciones(&archivo, confirma_lote)
                                });
                                match resultado {
                                    Ok(ResultadoImportacion::Cancelado) => {
                                        *status.write() = "Importación cancelada".to_string();
                                    }
                                    Ok(ResultadoImportacion::Importado { enviados }) => {
                                        *status.write() = format!("Se importaron {enviados} captaciones");
                                        refresca_captaciones(&backend_for_import_capt, captaciones, status);
                                    }
                                    Err(err) => {
                                        *status.write() = format!("Importación fallida: {err}");
                                    }
                                }
                                *busy.write() = false;
                            },
                            "Importar archivo"
                        }

                        input {
                            disabled: busy(),
                            value: busqueda(),
                            placeholder: "Buscar distrito, dirección, contacto…",
                            onchange: move |event| {
                                *busqueda.write() = event.value();
                            },
                        }

                        select {
                            disabled: busy(),
                            value: filtro_tipo()
                                .map(|tipo| tipo.etiqueta().to_string())
                                .unwrap_or_else(|| OPCION_TODOS.to_string()),
                            onchange: move |event| {
                                *filtro_tipo.write() = tipo_desde_opcion(&event.value());
                            },
                            option { value: "{OPCION_TODOS}", "Todos los tipos" }
                            option { value: "DEPARTAMENTO", "Departamento" }
                            option { value: "CASA", "Casa" }
                            option { value: "TERRENO", "Terreno" }
                            option { value: "LOCAL", "Local" }
                            option { value: "OFICINA", "Oficina" }
                        }

                        select {
                            disabled: busy(),
                            value: filtro_operacion()
                                .map(|op| op.etiqueta().to_string())
                                .unwrap_or_else(|| OPCION_TODOS.to_string()),
                            onchange: move |event| {
                                *filtro_operacion.write() = operacion_desde_opcion(&event.value());
                            },
                            option { value: "{OPCION_TODOS}", "Todas las operaciones" }
                            option { value: "VENTA", "Venta" }
                            option { value: "ALQUILER", "Alquiler" }
                            option { value: "ANTICRESIS", "Anticresis" }
                        }

                        select {
                            disabled: busy(),
                            onchange: move |event| {
                                *orden.write() = orden_desde_opcion(&event.value());
                            },
                            option { value: "FECHA", "Por fecha" }
                            option { value: "PRECIO", "Por precio" }
                            option { value: "AREA", "Por área" }
                        }

                        button {
                            disabled: busy(),
                            onclick: move |_| {
                                let siguiente = !descendente();
                                *descendente.write() = siguiente;
                            },
                            if descendente() { "Descendente" } else { "Ascendente" }
                        }
                    }

                    {
                        let total_vista = vista_captaciones.len();
                        rsx! { p { "{total_vista} captaciones" } }
                    }

                    table { style: ESTILO_TABLA,
                        thead {
                            tr {
                                th { style: ESTILO_TH, "Tipo" }
                                th { style: ESTILO_TH, "Operación" }
                                th { style: ESTILO_TH, "Precio" }
                                th { style: ESTILO_TH, "Área" }
                                th { style: ESTILO_TH, "Distrito" }
                                th { style: ESTILO_TH, "Dirección" }
                                th { style: ESTILO_TH, "Contacto" }
                                th { style: ESTILO_TH, "Celular" }
                                th { style: ESTILO_TH, "Vínculo" }
                                th { style: ESTILO_TH, "Fecha" }
                                th { style: ESTILO_TH, "" }
                            }
                        }
                        tbody {
                            if vista_captaciones.is_empty() {
                                tr {
                                    td { style: ESTILO_TD, colspan: 11, "Sin captaciones" }
                                }
                            } else {
                                for captacion in vista_captaciones.clone() {
                                    tr {
                                        {
                                            let tipo = captacion.tipo.etiqueta();
                                            let operacion = captacion.operacion.etiqueta();
                                            let precio = format!(
                                                "{} {}",
                                                captacion.moneda.simbolo(),
                                                formatea_monto(captacion.precio)
                                            );
                                            let area = formatea_monto(captacion.area);
                                            let vinculo = captacion.vinculo.etiqueta();
                                            rsx! {
                                                td { style: ESTILO_TD, "{tipo}" }
                                                td { style: ESTILO_TD, "{operacion}" }
                                                td { style: ESTILO_TD, "{precio}" }
                                                td { style: ESTILO_TD, "{area} m²" }
                                                td { style: ESTILO_TD, "{captacion.distrito}" }
                                                td { style: ESTILO_TD, "{captacion.direccion}" }
                                                td { style: ESTILO_TD, "{captacion.propietario}" }
                                                td { style: ESTILO_TD, "{captacion.celular}" }
                                                td { style: ESTILO_TD, "{vinculo}" }
                                                td { style: ESTILO_TD, "{captacion.fecha}" }
                                            }
                                        }
                                        td { style: ESTILO_TD,
                                            button {
                                                disabled: busy(),
                                                onclick: {
                                                    let backend = backend_for_del_capt.clone();
                                                    let id = captacion.id;
                                                    move |_| {
                                                        if !confirma(
                                                            "Eliminar captación",
                                                            "¿Eliminar esta captación? La operación no se puede deshacer.",
                                                        ) {
                                                            return;
                                                        }
                                                        *busy.write() = true;
                                                        match run_blocking(|| backend.eliminar_captacion(id)) {
                                                            Ok(()) => {
                                                                *status.write() = "Captación eliminada".to_string();
                                                                refresca_captaciones(&backend, captaciones, status);
                                                            }
                                                            Err(err) => {
                                                                *status.write() = format!("No se pudo eliminar: {err}");
                                                            }
                                                        }
                                                        *busy.write() = false;
                                                    }
                                                },
                                                "Eliminar"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if pantalla_actual == Pantalla::Agentes {
                div {
                    div {
                        style: "display: flex; gap: 12px; align-items: center; padding: 8px 0;",
                        button {
                            disabled: busy(),
                            onclick: move |_| {
                                if busy() {
                                    return;
                                }
                                let Some(archivo) = FileDialog::new()
                                    .add_filter("hojas de cálculo", &["xlsx", "xls", "csv"])
                                    .pick_file() else {
                                    *status.write() = "Importación cancelada".to_string();
                                    return;
                                };

                                *busy.write() = true;
                                *status.write() = format!("Importando {}", archivo.display());

                                let servicio = import_service_for_agentes.clone();
                                let resultado = run_blocking(|| {
                                    servicio.importar_agentes(&archivo, confirma_lote)
                                });
                                match resultado {
                                    Ok(ResultadoImportacion::Cancelado) => {
                                        *status.write() = "Importación cancelada".to_string();
                                    }
                                    Ok(ResultadoImportacion::Importado { enviados }) => {
                                        match run_blocking(|| backend_for_import_agentes.listar_agentes()) {
                                            Ok(lista) => {
                                                *agentes.write() = lista;
                                                *status.write() = format!("Se importaron {enviados} agentes");
                                            }
                                            Err(err) => {
                                                *status.write() = format!(
                                                    "Importación exitosa, pero falló la recarga: {err}"
                                                );
                                            }
                                        }
                                    }
                                    Err(err) => {
                                        *status.write() = format!("Importación fallida: {err}");
                                    }
                                }
                                *busy.write() = false;
                            },
                            "Importar archivo"
                        }

                        input {
                            disabled: busy(),
                            value: busqueda_agentes(),
                            placeholder: "Buscar nombre, inmobiliaria o celular",
                            onchange: move |event| {
                                *busqueda_agentes.write() = event.value();
                            },
                        }
                    }

                    table { style: ESTILO_TABLA,
                        thead {
                            tr {
                                th { style: ESTILO_TH, "Nombre" }
                                th { style: ESTILO_TH, "Inmobiliaria" }
                                th { style: ESTILO_TH, "Celular 1" }
                                th { style: ESTILO_TH, "Celular 2" }
                                th { style: ESTILO_TH, "Celular 3" }
                                th { style: ESTILO_TH, "Link" }
                                th { style: ESTILO_TH, "Estado" }
                            }
                        }
                        tbody {
                            if vista_agentes.is_empty() {
                                tr {
                                    td { style: ESTILO_TD, colspan: 7, "Sin agentes" }
                                }
                            } else {
                                for agente in vista_agentes.clone() {
                                    tr {
                                        td { style: ESTILO_TD, "{agente.nombre}" }
                                        td { style: ESTILO_TD, "{agente.inmobiliaria}" }
                                        td { style: ESTILO_TD, "{agente.celular1}" }
                                        td { style: ESTILO_TD, "{agente.celular2}" }
                                        td { style: ESTILO_TD, "{agente.celular3}" }
                                        td { style: ESTILO_TD, "{agente.link}" }
                                        td { style: ESTILO_TD, "{agente.estado}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if pantalla_actual == Pantalla::Propietarios {
                div {
                    div {
                        style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                        input {
                            disabled: busy(),
                            value: form_propietario().nombre,
                            placeholder: "Nombre",
                            onchange: move |event| {
                                form_propietario.write().nombre = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: form_propietario().dni,
                            placeholder: "DNI (8 dígitos)",
                            onchange: move |event| {
                                form_propietario.write().dni = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: form_propietario().celular,
                            placeholder: "Celular (9 dígitos)",
                            onchange: move |event| {
                                form_propietario.write().celular = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: form_propietario().notas,
                            placeholder: "Notas",
                            onchange: move |event| {
                                form_propietario.write().notas = event.value();
                            },
                        }
                        button {
                            disabled: busy(),
                            onclick: {
                                let backend = backend_for_propietario.clone();
                                move |_| {
                                    let datos = form_propietario();
                                    if let Some(problema) =
                                        valida_contacto(&datos.nombre, &datos.dni, &datos.celular)
                                    {
                                        *status.write() = problema;
                                        return;
                                    }
                                    *busy.write() = true;
                                    let resultado = run_blocking(|| match edicion_propietario() {
                                        Some(id) => backend.actualizar_propietario(id, &datos),
                                        None => backend.crear_propietario(&datos),
                                    });
                                    match resultado {
                                        Ok(()) => {
                                            match run_blocking(|| backend.listar_propietarios()) {
                                                Ok(lista) => *propietarios.write() = lista,
                                                Err(err) => {
                                                    *status.write() =
                                                        format!("No se pudo recargar: {err}");
                                                }
                                            }
                                            *form_propietario.write() = PropietarioNuevo::default();
                                            *edicion_propietario.write() = None;
                                            *status.write() = "Propietario guardado".to_string();
                                        }
                                        Err(err) => {
                                            *status.write() = format!("No se pudo guardar: {err}");
                                        }
                                    }
                                    *busy.write() = false;
                                }
                            },
                            if edicion_propietario().is_some() { "Actualizar" } else { "Agregar" }
                        }
                    }

                    table { style: ESTILO_TABLA,
                        thead {
                            tr {
                                th { style: ESTILO_TH, "Nombre" }
                                th { style: ESTILO_TH, "DNI" }
                                th { style: ESTILO_TH, "Celular" }
                                th { style: ESTILO_TH, "Notas" }
                                th { style: ESTILO_TH, "" }
                            }
                        }
                        tbody {
                            for propietario in propietarios() {
                                tr {
                                    td { style: ESTILO_TD, "{propietario.nombre}" }
                                    td { style: ESTILO_TD, "{propietario.dni}" }
                                    td { style: ESTILO_TD, "{propietario.celular}" }
                                    td { style: ESTILO_TD, "{propietario.notas}" }
                                    td { style: ESTILO_TD,
                                        button {
                                            disabled: busy(),
                                            onclick: {
                                                let propietario = propietario.clone();
                                                move |_| {
                                                    *form_propietario.write() = PropietarioNuevo {
                                                        nombre: propietario.nombre.clone(),
                                                        dni: propietario.dni.clone(),
                                                        celular: propietario.celular.clone(),
                                                        notas: propietario.notas.clone(),
                                                    };
                                                    *edicion_propietario.write() = Some(propietario.id);
                                                }
                                            },
                                            "Editar"
                                        }
                                        button {
                                            disabled: busy(),
                                            onclick: {
                                                let backend = backend_for_del_propietario.clone();
                                                let id = propietario.id;
                                                move |_| {
                                                    if !confirma(
                                                        "Eliminar propietario",
                                                        "¿Eliminar este propietario?",
                                                    ) {
                                                        return;
                                                    }
                                                    *busy.write() = true;
                                                    let resultado = run_blocking(|| {
                                                        backend.eliminar_propietario(id)?;
                                                        backend.listar_propietarios()
                                                    });
                                                    match resultado {
                                                        Ok(lista) => {
                                                            *propietarios.write() = lista;
                                                            *status.write() =
                                                                "Propietario eliminado".to_string();
                                                        }
                                                        Err(err) => {
                                                            *status.write() =
                                                                format!("No se pudo eliminar: {err}");
                                                        }
                                                    }
                                                    *busy.write() = false;
                                                }
                                            },
                                            "Eliminar"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if pantalla_actual == Pantalla::Clientes {
                div {
                    div {
                        style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                        input {
                            disabled: busy(),
                            value: form_cliente().nombre,
                            placeholder: "Nombre",
                            onchange: move |event| {
                                form_cliente.write().nombre = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: form_cliente().dni,
                            placeholder: "DNI (8 dígitos)",
                            onchange: move |event| {
                                form_cliente.write().dni = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: form_cliente().celular,
                            placeholder: "Celular (9 dígitos)",
                            onchange: move |event| {
                                form_cliente.write().celular = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: form_cliente().fecha_nacimiento,
                            placeholder: "Nacimiento (YYYY-MM-DD)",
                            onchange: move |event| {
                                form_cliente.write().fecha_nacimiento = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: form_cliente().notas,
                            placeholder: "Notas",
                            onchange: move |event| {
                                form_cliente.write().notas = event.value();
                            },
                        }
                        button {
                            disabled: busy(),
                            onclick: {
                                let backend = backend_for_cliente.clone();
                                move |_| {
                                    let datos = form_cliente();
                                    if let Some(problema) =
                                        valida_contacto(&datos.nombre, &datos.dni, &datos.celular)
                                    {
                                        *status.write() = problema;
                                        return;
                                    }
                                    *busy.write() = true;
                                    let resultado = run_blocking(|| match edicion_cliente() {
                                        Some(id) => backend.actualizar_cliente(id, &datos),
                                        None => backend.crear_cliente(&datos),
                                    });
                                    match resultado {
                                        Ok(()) => {
                                            match run_blocking(|| backend.listar_clientes()) {
                                                Ok(lista) => *clientes.write() = lista,
                                                Err(err) => {
                                                    *status.write() =
                                                        format!("No se pudo recargar: {err}");
                                                }
                                            }
                                            *form_cliente.write() = ClienteNuevo::default();
                                            *edicion_cliente.write() = None;
                                            *status.write() = "Cliente guardado".to_string();
                                        }
                                        Err(err) => {
                                            *status.write() = format!("No se pudo guardar: {err}");
                                        }
                                    }
                                    *busy.write() = false;
                                }
                            },
                            if edicion_cliente().is_some() { "Actualizar" } else { "Agregar" }
                        }
                    }

                    table { style: ESTILO_TABLA,
                        thead {
                            tr {
                                th { style: ESTILO_TH, "Nombre" }
                                th { style: ESTILO_TH, "DNI" }
                                th { style: ESTILO_TH, "Celular" }
                                th { style: ESTILO_TH, "Nacimiento" }
                                th { style: ESTILO_TH, "Notas" }
                                th { style: ESTILO_TH, "" }
                            }
                        }
                        tbody {
                            for cliente in clientes() {
                                tr {
                                    td { style: ESTILO_TD, "{cliente.nombre}" }
                                    td { style: ESTILO_TD, "{cliente.dni}" }
                                    td { style: ESTILO_TD, "{cliente.celular}" }
                                    td { style: ESTILO_TD, "{cliente.fecha_nacimiento}" }
                                    td { style: ESTILO_TD, "{cliente.notas}" }
                                    td { style: ESTILO_TD,
                                        button {
                                            disabled: busy(),
                                            onclick: {
                                                let cliente = cliente.clone();
                                                move |_| {
                                                    *form_cliente.write() = ClienteNuevo {
                                                        nombre: cliente.nombre.clone(),
                                                        dni: cliente.dni.clone(),
                                                        celular: cliente.celular.clone(),
                                                        fecha_nacimiento: cliente
                                                            .fecha_nacimiento
                                                            .clone(),
                                                        notas: cliente.notas.clone(),
                                                    };
                                                    *edicion_cliente.write() = Some(cliente.id);
                                                }
                                            },
                                            "Editar"
                                        }
                                        button {
                                            disabled: busy(),
                                            onclick: {
                                                let backend = backend_for_del_cliente.clone();
                                                let id = cliente.id;
                                                move |_| {
                                                    if !confirma("Eliminar cliente", "¿Eliminar este cliente?") {
                                                        return;
                                                    }
                                                    *busy.write() = true;
                                                    let resultado = run_blocking(|| {
                                                        backend.eliminar_cliente(id)?;
                                                        backend.listar_clientes()
                                                    });
                                                    match resultado {
                                                        Ok(lista) => {
                                                            *clientes.write() = lista;
                                                            *status.write() =
                                                                "Cliente eliminado".to_string();
                                                        }
                                                        Err(err) => {
                                                            *status.write() =
                                                                format!("No se pudo eliminar: {err}");
                                                        }
                                                    }
                                                    *busy.write() = false;
                                                }
                                            },
                                            "Eliminar"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if pantalla_actual == Pantalla::Visitas {
                div {
                    div {
                        style: "display: flex; gap: 12px; align-items: center; padding: 8px 0;",
                        button {
                            disabled: busy(),
                            onclick: move |_| {
                                let (nuevo_anio, nuevo_mes) = mes_anterior(anio(), mes());
                                *anio.write() = nuevo_anio;
                                *mes.write() = nuevo_mes;
                                *dia_seleccionado.write() = None;
                            },
                            "←"
                        }
                        h3 { "{etiqueta_mes} {anio_actual}" }
                        button {
                            disabled: busy(),
                            onclick: move |_| {
                                let (nuevo_anio, nuevo_mes) = mes_siguiente(anio(), mes());
                                *anio.write() = nuevo_anio;
                                *mes.write() = nuevo_mes;
                                *dia_seleccionado.write() = None;
                            },
                            "→"
                        }
                    }

                    table { style: ESTILO_TABLA,
                        thead {
                            tr {
                                th { style: ESTILO_TH, "Lun" }
                                th { style: ESTILO_TH, "Mar" }
                                th { style: ESTILO_TH, "Mié" }
                                th { style: ESTILO_TH, "Jue" }
                                th { style: ESTILO_TH, "Vie" }
                                th { style: ESTILO_TH, "Sáb" }
                                th { style: ESTILO_TH, "Dom" }
                            }
                        }
                        tbody {
                            for semana in semanas.clone() {
                                tr {
                                    for celda in semana {
                                        if let Some(dia_cal) = celda {
                                            td {
                                                style: "border: 1px solid #bbb; padding: 6px; vertical-align: top; min-width: 90px; cursor: pointer;",
                                                onclick: {
                                                    let dia = dia_cal.dia;
                                                    move |_| {
                                                        *dia_seleccionado.write() = Some(dia);
                                                        let fecha = fecha_iso(anio(), mes(), dia);
                                                        form_visita.write().fecha = fecha;
                                                    }
                                                },
                                                {
                                                    let dia = dia_cal.dia;
                                                    let num_visitas = dia_cal.visitas.len();
                                                    let cumpleanos = dia_cal.cumpleanos.join(", ");
                                                    rsx! {
                                                        strong { "{dia}" }
                                                        if num_visitas > 0 {
                                                            p { "{num_visitas} visita(s)" }
                                                        }
                                                        if !cumpleanos.is_empty() {
                                                            p { "🎂 {cumpleanos}" }
                                                        }
                                                    }
                                                }
                                            }
                                        } else {
                                            td { style: ESTILO_TD, "" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if let Some((dia, fecha, del_dia)) = detalle_dia {
                        div {
                            style: "border: 1px solid #bbb; border-radius: 8px; padding: 12px; margin-top: 12px;",
                            h3 { "Visitas del {dia} de {etiqueta_mes}" }
                            if del_dia.is_empty() {
                                p { "Sin visitas agendadas" }
                            } else {
                                for visita in del_dia {
                                    div {
                                        style: "display: flex; gap: 8px; align-items: center;",
                                        {
                                            let resumen = format!(
                                                "{} — {} (captación #{}) {}",
                                                visita.hora, visita.cliente, visita.captacion_id, visita.estado
                                            );
                                            rsx! { span { "{resumen}" } }
                                        }
                                        button {
                                            disabled: busy(),
                                            onclick: {
                                                let backend = backend_for_del_visita.clone();
                                                let id = visita.id;
                                                move |_| {
                                                    if !confirma("Eliminar visita", "¿Eliminar esta visita?") {
                                                        return;
                                                    }
                                                    *busy.write() = true;
                                                    let resultado = run_blocking(|| {
                                                        backend.eliminar_visita(id)?;
                                                        backend.listar_visitas()
                                                    });
                                                    match resultado {
                                                        Ok(lista) => {
                                                            *visitas.write() = lista;
                                                            *status.write() = "Visita eliminada".to_string();
                                                        }
                                                        Err(err) => {
                                                            *status.write() =
                                                                format!("No se pudo eliminar: {err}");
                                                        }
                                                    }
                                                    *busy.write() = false;
                                                }
                                            },
                                            "Eliminar"
                                        }
                                    }
                                }
                            }

                            div {
                                style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap; margin-top: 8px;",
                                input {
                                    disabled: busy(),
                                    value: form_visita().hora,
                                    placeholder: "Hora (10:30)",
                                    onchange: move |event| {
                                        form_visita.write().hora = event.value();
                                    },
                                }
                                input {
                                    disabled: busy(),
                                    value: form_visita().cliente,
                                    placeholder: "Cliente",
                                    onchange: move |event| {
                                        form_visita.write().cliente = event.value();
                                    },
                                }
                                input {
                                    disabled: busy(),
                                    value: form_visita().captacion_id.to_string(),
                                    placeholder: "Captación #",
                                    onchange: move |event| {
                                        form_visita.write().captacion_id =
                                            event.value().trim().parse().unwrap_or(0);
                                    },
                                }
                                input {
                                    disabled: busy(),
                                    value: form_visita().estado,
                                    placeholder: "Estado",
                                    onchange: move |event| {
                                        form_visita.write().estado = event.value();
                                    },
                                }
                                button {
                                    disabled: busy(),
                                    onclick: {
                                        let backend = backend_for_visita.clone();
                                        let fecha = fecha.clone();
                                        move |_| {
                                            let mut datos = form_visita();
                                            datos.fecha = fecha.clone();
                                            if datos.cliente.trim().is_empty() {
                                                *status.write() =
                                                    "El cliente es obligatorio".to_string();
                                                return;
                                            }
                                            *busy.write() = true;
                                            let resultado = run_blocking(|| {
                                                backend.crear_visita(&datos)?;
                                                backend.listar_visitas()
                                            });
                                            match resultado {
                                                Ok(lista) => {
                                                    *visitas.write() = lista;
                                                    *form_visita.write() = VisitaNueva::default();
                                                    *status.write() = "Visita agendada".to_string();
                                                }
                                                Err(err) => {
                                                    *status.write() =
                                                        format!("No se pudo agendar: {err}");
                                                }
                                            }
                                            *busy.write() = false;
                                        }
                                    },
                                    "Agendar visita"
                                }
                            }
                        }
                    }
                }
            }

            if pantalla_actual == Pantalla::Cierres {
                div {
                    div {
                        style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                        input {
                            disabled: busy(),
                            value: cierre_fecha(),
                            placeholder: "Fecha (YYYY-MM-DD)",
                            onchange: move |event| {
                                *cierre_fecha.write() = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: cierre_captacion(),
                            placeholder: "Captación #",
                            onchange: move |event| {
                                *cierre_captacion.write() = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: cierre_cliente(),
                            placeholder: "Cliente",
                            onchange: move |event| {
                                *cierre_cliente.write() = event.value();
                            },
                        }
                        input {
                            disabled: busy(),
                            value: cierre_monto(),
                            placeholder: "Monto",
                            onchange: move |event| {
                                *cierre_monto.write() = event.value();
                            },
                        }
                        label {
                            input {
                                r#type: "checkbox",
                                checked: cierre_en_soles(),
                                onchange: move |event| {
                                    *cierre_en_soles.write() =
                                        event.value().parse::<bool>().unwrap_or(false);
                                },
                            }
                            "En soles"
                        }
                        input {
                            disabled: busy(),
                            value: cierre_porcentaje(),
                            placeholder: "% comisión",
                            onchange: move |event| {
                                *cierre_porcentaje.write() = event.value();
                            },
                        }
                        button {
                            disabled: busy(),
                            onclick: {
                                let backend = backend_for_cierre.clone();
                                move |_| {
                                    let fecha = cierre_fecha();
                                    if fecha.trim().is_empty() {
                                        *status.write() = "La fecha es obligatoria".to_string();
                                        return;
                                    }
                                    let nuevo = CierreNuevo {
                                        fecha: fecha.trim().to_string(),
                                        captacion_id: cierre_captacion().trim().parse().unwrap_or(0),
                                        cliente: cierre_cliente().trim().to_string(),
                                        monto: cierre_monto().trim().parse().unwrap_or(0.0),
                                        moneda: if cierre_en_soles() {
                                            Moneda::Pen
                                        } else {
                                            Moneda::Usd
                                        },
                                        porcentaje_comision: cierre_porcentaje()
                                            .trim()
                                            .parse()
                                            .unwrap_or(0.0),
                                    };
                                    *busy.write() = true;
                                    let resultado = run_blocking(|| {
                                        backend.crear_cierre(&nuevo)?;
                                        backend.listar_cierres()
                                    });
                                    match resultado {
                                        Ok(lista) => {
                                            *cierres.write() = lista;
                                            *cierre_fecha.write() = hoy();
                                            *cierre_captacion.write() = String::new();
                                            *cierre_cliente.write() = String::new();
                                            *cierre_monto.write() = String::new();
                                            *cierre_porcentaje.write() = String::new();
                                            *status.write() = "Cierre registrado".to_string();
                                        }
                                        Err(err) => {
                                            *status.write() = format!("No se pudo registrar: {err}");
                                        }
                                    }
                                    *busy.write() = false;
                                }
                            },
                            "Registrar cierre"
                        }
                    }

                    table { style: ESTILO_TABLA,
                        thead {
                            tr {
                                th { style: ESTILO_TH, "Fecha" }
                                th { style: ESTILO_TH, "Captación" }
                                th { style: ESTILO_TH, "Cliente" }
                                th { style: ESTILO_TH, "Monto" }
                                th { style: ESTILO_TH, "% comisión" }
                                th { style: ESTILO_TH, "Comisión" }
                            }
                        }
                        tbody {
                            for cierre in cierres() {
                                tr {
                                    {
                                        let monto = format!(
                                            "{} {}",
                                            cierre.moneda.simbolo(),
                                            formatea_monto(cierre.monto)
                                        );
                                        let porcentaje = formatea_monto(cierre.porcentaje_comision);
                                        let comision = format!(
                                            "{} {}",
                                            cierre.moneda.simbolo(),
                                            formatea_monto(cierre.comision())
                                        );
                                        rsx! {
                                            td { style: ESTILO_TD, "{cierre.fecha}" }
                                            td { style: ESTILO_TD, "#{cierre.captacion_id}" }
                                            td { style: ESTILO_TD, "{cierre.cliente}" }
                                            td { style: ESTILO_TD, "{monto}" }
                                            td { style: ESTILO_TD, "{porcentaje} %" }
                                            td { style: ESTILO_TD, "{comision}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
