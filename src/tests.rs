use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::{formatea_monto, nombre_mes};
use crate::domain::entities::agente::{Agente, AgenteId, AgenteNuevo, ESTADO_ALIADO};
use crate::domain::entities::captacion::{
    Captacion, CaptacionId, CaptacionNueva, Moneda, Operacion, TipoInmueble, Vinculo,
};
use crate::domain::entities::cierre::{Cierre, CierreId, CierreNuevo};
use crate::domain::entities::contacto::{
    Cliente, ClienteId, ClienteNuevo, Propietario, PropietarioId, PropietarioNuevo,
};
use crate::domain::entities::visita::{Visita, VisitaId, VisitaNueva};
use crate::domain::validacion::{celular_valido, dni_valido, valida_contacto};
use crate::infra::import::agente::{normaliza_lote_agentes, CAMPOS_AGENTE, GRUPOS_CABECERA_AGENTE};
use crate::infra::import::captacion::{
    normaliza_fila_captacion, normaliza_lote_captaciones, CAMPOS_CAPTACION,
    GRUPOS_CABECERA_CAPTACION,
};
use crate::infra::import::header::{
    localiza_cabecera, mapea_columnas, valor_campo, FILAS_BUSQUEDA_CABECERA,
};
use crate::infra::import::normalize::{
    fecha_desde_celda, hoy, limpia_numero, recorta_texto, solo_digitos, DIGITOS_CELULAR,
};
use crate::infra::import::sheet::{leer_tabla, Celda};
use crate::ui::calendar::{
    arma_mes, desplazamiento_primer_dia, dias_en_mes, fecha_iso, mes_anterior, mes_siguiente,
    semanas_del_mes,
};
use crate::usecase::ports::backend::{ApiError, CrmBackend};
use crate::usecase::services::import_service::{ImportService, ResultadoImportacion};
use crate::usecase::services::query_service::{
    filtra_agentes, filtra_captaciones, resumen_panel, OpcionesCaptaciones, OrdenCaptaciones,
};

fn fila_texto(celdas: &[&str]) -> Vec<Celda> {
    celdas
        .iter()
        .map(|texto| {
            if texto.is_empty() {
                Celda::Vacia
            } else {
                Celda::Texto(texto.to_string())
            }
        })
        .collect()
}

fn archivo_temporal(sufijo: &str, contenido: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("inmocrm-{nanos}-{sufijo}"));
    fs::write(&path, contenido).expect("temp file should be writable");
    path
}

// --- detección de cabecera ---

#[test]
fn localiza_cabecera_encuentra_la_primera_fila_que_cumple_todos_los_grupos() {
    let filas = vec![
        fila_texto(&["REGISTRO DE CAPTACIONES 2024"]),
        fila_texto(&["", ""]),
        fila_texto(&["N°", "INMUEBLE", "PRECIO $", "AT M2"]),
        fila_texto(&["1", "DEPA", "85000", "120"]),
    ];

    let fila =
        localiza_cabecera(&filas, GRUPOS_CABECERA_CAPTACION).expect("header row should be found");
    assert_eq!(fila, 2);
}

#[test]
fn localiza_cabecera_exige_al_menos_una_clave_de_cada_grupo() {
    // "INMUEBLE" aparece pero ningún término del grupo precio/área.
    let filas = vec![fila_texto(&["INMUEBLE", "DISTRITO", "CONTACTO"])];
    assert_eq!(localiza_cabecera(&filas, GRUPOS_CABECERA_CAPTACION), None);
}

#[test]
fn localiza_cabecera_no_mira_mas_alla_del_limite() {
    let mut filas: Vec<Vec<Celda>> = (0..FILAS_BUSQUEDA_CABECERA)
        .map(|_| fila_texto(&["relleno"]))
        .collect();
    filas.push(fila_texto(&["INMUEBLE", "PRECIO"]));

    assert_eq!(
        localiza_cabecera(&filas, GRUPOS_CABECERA_CAPTACION),
        None,
        "a header past the lookahead window should not be found"
    );
}

#[test]
fn mapea_columnas_asigna_la_primera_celda_coincidente() {
    let cabecera = fila_texto(&["DISTRITO", "TIPO INMUEBLE", "PRECIO $", "PRECIO SOLES"]);
    let columnas = mapea_columnas(&cabecera, CAMPOS_CAPTACION);

    assert_eq!(columnas.get("TIPO"), Some(&1));
    // Con dos columnas de precio gana la primera.
    assert_eq!(columnas.get("PRECIO"), Some(&2));
    assert_eq!(columnas.get("DISTRITO"), Some(&0));
    assert_eq!(columnas.get("FECHA"), None);
}

#[test]
fn valor_campo_devuelve_vacia_para_columnas_no_mapeadas_o_filas_cortas() {
    let mut columnas = HashMap::new();
    columnas.insert("PRECIO", 5usize);
    let fila = fila_texto(&["solo", "dos"]);

    assert_eq!(*valor_campo(&fila, &columnas, "PRECIO"), Celda::Vacia);
    assert_eq!(*valor_campo(&fila, &columnas, "TIPO"), Celda::Vacia);
}

// --- coerción de enums ---

#[test]
fn tipo_inmueble_reconoce_sinonimos_y_cae_en_casa() {
    assert_eq!(
        TipoInmueble::desde_texto("dpto estreno"),
        TipoInmueble::Departamento
    );
    assert_eq!(TipoInmueble::desde_texto("LOTE 12"), TipoInmueble::Terreno);
    assert_eq!(TipoInmueble::desde_texto("chalet"), TipoInmueble::Casa);
    assert_eq!(TipoInmueble::desde_texto("???"), TipoInmueble::Casa);
    assert_eq!(TipoInmueble::reconoce("???"), None);
}

#[test]
fn operacion_reconoce_sinonimos_y_cae_en_venta() {
    assert_eq!(Operacion::desde_texto("ALQUILER"), Operacion::Alquiler);
    assert_eq!(Operacion::desde_texto("en renta"), Operacion::Alquiler);
    assert_eq!(Operacion::desde_texto("anticresis"), Operacion::Anticresis);
    assert_eq!(Operacion::desde_texto(""), Operacion::Venta);
    assert_eq!(Operacion::desde_texto("remate"), Operacion::Venta);
}

#[test]
fn vinculo_reconoce_sinonimos_y_cae_en_propietario() {
    assert_eq!(Vinculo::desde_texto("hija"), Vinculo::Hijo);
    assert_eq!(Vinculo::desde_texto("esposa"), Vinculo::Conyuge);
    assert_eq!(Vinculo::desde_texto("dueño"), Vinculo::Propietario);
    assert_eq!(Vinculo::desde_texto("vecino"), Vinculo::Propietario);
}

#[test]
fn moneda_se_detecta_sobre_el_texto_crudo_del_precio() {
    assert_eq!(Moneda::desde_texto_precio("S/ 250,000"), Moneda::Pen);
    assert_eq!(Moneda::desde_texto_precio("250000 pen"), Moneda::Pen);
    assert_eq!(Moneda::desde_texto_precio("$ 85,000"), Moneda::Usd);
    assert_eq!(Moneda::desde_texto_precio("85000"), Moneda::Usd);
}

// --- normalización de valores ---

#[test]
fn limpia_numero_nunca_falla_y_usa_cero_por_defecto() {
    assert_eq!(limpia_numero("$ 85,000"), 85000.0);
    assert_eq!(limpia_numero("120.5 m2"), 120.5);
    assert_eq!(limpia_numero(""), 0.0);
    assert_eq!(limpia_numero("consultar"), 0.0);
    // Varios puntos dejan un número imparseable; también cae en cero.
    assert_eq!(limpia_numero("1.2.3"), 0.0);
}

#[test]
fn limpia_numero_nunca_devuelve_infinito() {
    // Un precio con cientos de dígitos desborda f64 hacia infinito al
    // parsear; debe caer en cero, no propagarse.
    let desborde = "9".repeat(400);
    let valor = limpia_numero(&desborde);
    assert!(valor.is_finite(), "value should be finite, got {valor}");
    assert_eq!(valor, 0.0);
}

#[test]
fn solo_digitos_es_idempotente() {
    let una_vez = solo_digitos("+51 987-654-321 anexo 22", DIGITOS_CELULAR);
    let dos_veces = solo_digitos(&una_vez, DIGITOS_CELULAR);

    assert_eq!(una_vez, "519876543");
    assert_eq!(una_vez, dos_veces);
}

#[test]
fn recorta_texto_respeta_limites_de_caracteres_multibyte() {
    let recortado = recorta_texto("ñandú ñandú", 7);
    assert_eq!(recortado, "ñandú ñ");
}

#[test]
fn fecha_desde_celda_convierte_seriales_de_hoja_de_calculo() {
    // 45292 es el 2024-01-01 en la época estándar de las hojas de cálculo.
    assert_eq!(fecha_desde_celda(&Celda::Numero(45292.0)), "2024-01-01");
    assert_eq!(
        fecha_desde_celda(&Celda::Texto(" 2023-06-15 ".to_string())),
        "2023-06-15"
    );
    assert_eq!(fecha_desde_celda(&Celda::Vacia), hoy());
    assert_eq!(fecha_desde_celda(&Celda::Texto("mañana".to_string())), hoy());
}

#[test]
fn fecha_desde_celda_rellena_componentes_sin_cero() {
    // chrono acepta "2024-1-5"; la salida debe quedar normalizada para que
    // la comparación textual del calendario la encuentre.
    assert_eq!(
        fecha_desde_celda(&Celda::Texto("2024-1-5".to_string())),
        "2024-01-05"
    );
}

// --- normalización de filas ---

fn columnas_captacion() -> HashMap<&'static str, usize> {
    mapea_columnas(
        &fila_texto(&[
            "FECHA",
            "INMUEBLE",
            "OPERACION",
            "PRECIO",
            "AT",
            "DISTRITO",
            "DIRECCION",
            "PROPIETARIO",
            "CELULAR",
            "VINCULO",
            "DESCRIPCION",
        ]),
        CAMPOS_CAPTACION,
    )
}

#[test]
fn fila_sin_tipo_ni_precio_se_descarta() {
    let columnas = columnas_captacion();
    let fila = fila_texto(&["", "", "", "", "", "Surco", "Av. Benavides 123"]);
    let mut diagnosticos = Vec::new();

    let resultado = normaliza_fila_captacion(&fila, &columnas, 3, &mut diagnosticos);
    assert_eq!(resultado, None);
    assert!(diagnosticos.is_empty());
}

#[test]
fn fila_con_solo_precio_sobrevive_con_tipo_por_defecto() {
    let columnas = columnas_captacion();
    let fila = fila_texto(&["", "", "", "S/ 320,000"]);
    let mut diagnosticos = Vec::new();

    let captacion = normaliza_fila_captacion(&fila, &columnas, 4, &mut diagnosticos)
        .expect("a row with a price should survive");
    assert_eq!(captacion.tipo, TipoInmueble::Casa);
    assert_eq!(captacion.precio, 320000.0);
    assert_eq!(captacion.moneda, Moneda::Pen);
    assert_eq!(captacion.fecha, hoy());
    // El tipo estaba vacío, no irreconocible: no se anota defecto.
    assert!(diagnosticos.is_empty());
}

#[test]
fn texto_irreconocible_genera_diagnostico_y_valor_por_defecto() {
    let columnas = columnas_captacion();
    let fila = fila_texto(&["", "galpón", "traspaso", "85000"]);
    let mut diagnosticos = Vec::new();

    let captacion = normaliza_fila_captacion(&fila, &columnas, 5, &mut diagnosticos)
        .expect("row should survive");
    assert_eq!(captacion.tipo, TipoInmueble::Casa);
    assert_eq!(captacion.operacion, Operacion::Venta);

    assert_eq!(diagnosticos.len(), 2);
    assert_eq!(diagnosticos[0].fila, 5);
    assert_eq!(diagnosticos[0].campo, "TIPO");
    assert_eq!(diagnosticos[0].crudo, "galpón");
    assert_eq!(diagnosticos[0].asignado, "CASA");
    assert_eq!(diagnosticos[1].campo, "OPERACION");
}

#[test]
fn normaliza_lote_cuenta_descartes_y_salta_la_cabecera() {
    let filas = vec![
        fila_texto(&["CARTERA DE INMUEBLES"]),
        fila_texto(&["FECHA", "INMUEBLE", "OPERACION", "PRECIO"]),
        fila_texto(&["2024-02-01", "depa", "venta", "$ 85,000"]),
        fila_texto(&["", "", "", ""]),
        fila_texto(&["2024-02-02", "terreno", "alquiler", "S/ 1,500"]),
    ];
    let fila_cabecera =
        localiza_cabecera(&filas, GRUPOS_CABECERA_CAPTACION).expect("header should be found");
    let columnas = mapea_columnas(&filas[fila_cabecera], CAMPOS_CAPTACION);

    let lote = normaliza_lote_captaciones(&filas, fila_cabecera, &columnas);

    assert_eq!(lote.candidatos.len(), 2);
    assert_eq!(lote.descartadas, 1);
    assert_eq!(lote.candidatos[0].tipo, TipoInmueble::Departamento);
    assert_eq!(lote.candidatos[0].moneda, Moneda::Usd);
    assert_eq!(lote.candidatos[0].fecha, "2024-02-01");
    assert_eq!(lote.candidatos[1].operacion, Operacion::Alquiler);
    assert_eq!(lote.candidatos[1].moneda, Moneda::Pen);
}

#[test]
fn fila_de_agente_se_normaliza_de_punta_a_punta() {
    let cabecera = fila_texto(&[
        "N°",
        "CELULAR 1",
        "CELULAR 2",
        "CELULAR 3",
        "NOMBRE",
        "INMOBILIARIA",
        "LINK",
    ]);
    let columnas = mapea_columnas(&cabecera, CAMPOS_AGENTE);
    let filas = vec![
        cabecera.clone(),
        fila_texto(&[
            "",
            "987654321",
            "",
            "",
            "Juan Perez",
            "Prime Realty",
            "facebook.com/juan",
        ]),
        fila_texto(&["", "", "", "", "", "", ""]),
    ];

    let lote = normaliza_lote_agentes(&filas, 0, &columnas);

    assert_eq!(lote.candidatos.len(), 1);
    assert_eq!(lote.descartadas, 1);
    let agente = &lote.candidatos[0];
    assert_eq!(agente.celular1, "987654321");
    assert_eq!(agente.celular2, "");
    assert_eq!(agente.nombre, "Juan Perez");
    assert_eq!(agente.inmobiliaria, "Prime Realty");
    assert_eq!(agente.link, "facebook.com/juan");
    assert_eq!(agente.estado, ESTADO_ALIADO);
}

#[test]
fn cabecera_de_agentes_acepta_listas_con_celular_y_nombre() {
    let filas = vec![
        fila_texto(&["AGENTES ALIADOS"]),
        fila_texto(&["CELULAR 1", "CELULAR 2", "NOMBRE", "INMOBILIARIA"]),
    ];
    assert_eq!(localiza_cabecera(&filas, GRUPOS_CABECERA_AGENTE), Some(1));
}

// --- lectura de archivos ---

#[test]
fn leer_tabla_carga_un_csv_sin_asumir_cabecera() {
    let path = archivo_temporal(
        "captaciones.csv",
        "CARTERA 2024,,\nN°,INMUEBLE,PRECIO\n1,depa,85000\n",
    );

    let filas = leer_tabla(&path).expect("csv should load");
    fs::remove_file(&path).ok();

    assert_eq!(filas.len(), 3);
    assert_eq!(filas[1][1].texto(), "INMUEBLE");
    assert_eq!(filas[2][2].texto(), "85000");
}

#[test]
fn leer_tabla_rechaza_extensiones_desconocidas() {
    let path = archivo_temporal("notas.txt", "esto no es una tabla");
    let resultado = leer_tabla(&path);
    fs::remove_file(&path).ok();

    assert!(resultado.is_err());
}

// --- flujo de importación ---

#[derive(Default)]
struct BackendContable {
    lotes_captaciones: AtomicUsize,
    lotes_agentes: AtomicUsize,
}

impl CrmBackend for BackendContable {
    fn listar_captaciones(&self) -> Result<Vec<Captacion>, ApiError> {
        Ok(Vec::new())
    }
    fn crear_captacion(&self, _: &CaptacionNueva) -> Result<(), ApiError> {
        Ok(())
    }
    fn eliminar_captacion(&self, _: CaptacionId) -> Result<(), ApiError> {
        Ok(())
    }
    fn importar_captaciones(&self, _: &[CaptacionNueva]) -> Result<(), ApiError> {
        self.lotes_captaciones.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn listar_agentes(&self) -> Result<Vec<Agente>, ApiError> {
        Ok(Vec::new())
    }
    fn importar_agentes(&self, _: &[AgenteNuevo]) -> Result<(), ApiError> {
        self.lotes_agentes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn listar_propietarios(&self) -> Result<Vec<Propietario>, ApiError> {
        Ok(Vec::new())
    }
    fn crear_propietario(&self, _: &PropietarioNuevo) -> Result<(), ApiError> {
        Ok(())
    }
    fn actualizar_propietario(
        &self,
        _: PropietarioId,
        _: &PropietarioNuevo,
    ) -> Result<(), ApiError> {
        Ok(())
    }
    fn eliminar_propietario(&self, _: PropietarioId) -> Result<(), ApiError> {
        Ok(())
    }

    fn listar_clientes(&self) -> Result<Vec<Cliente>, ApiError> {
        Ok(Vec::new())
    }
    fn crear_cliente(&self, _: &ClienteNuevo) -> Result<(), ApiError> {
        Ok(())
    }
    fn actualizar_cliente(&self, _: ClienteId, _: &ClienteNuevo) -> Result<(), ApiError> {
        Ok(())
    }
    fn eliminar_cliente(&self, _: ClienteId) -> Result<(), ApiError> {
        Ok(())
    }

    fn listar_visitas(&self) -> Result<Vec<Visita>, ApiError> {
        Ok(Vec::new())
    }
    fn crear_visita(&self, _: &VisitaNueva) -> Result<(), ApiError> {
        Ok(())
    }
    fn eliminar_visita(&self, _: VisitaId) -> Result<(), ApiError> {
        Ok(())
    }

    fn listar_cierres(&self) -> Result<Vec<Cierre>, ApiError> {
        Ok(Vec::new())
    }
    fn crear_cierre(&self, _: &CierreNuevo) -> Result<(), ApiError> {
        Ok(())
    }
}

const CSV_CAPTACIONES: &str = "\
CARTERA DE INMUEBLES,,,\n\
N°,INMUEBLE,OPERACION,PRECIO\n\
1,depa,venta,$ 85000\n\
2,terreno,alquiler,S/ 1500\n";

#[test]
fn rechazar_la_confirmacion_no_llama_al_backend() {
    let backend = Arc::new(BackendContable::default());
    let servicio = ImportService::new(backend.clone());
    let path = archivo_temporal("rechazo.csv", CSV_CAPTACIONES);

    let resultado = servicio
        .importar_captaciones(&path, |_| false)
        .expect("declined import should not be an error");
    fs::remove_file(&path).ok();

    assert_eq!(resultado, ResultadoImportacion::Cancelado);
    assert_eq!(backend.lotes_captaciones.load(Ordering::SeqCst), 0);
}

#[test]
fn aceptar_la_confirmacion_envia_el_lote_en_una_sola_llamada() {
    let backend = Arc::new(BackendContable::default());
    let servicio = ImportService::new(backend.clone());
    let path = archivo_temporal("acepta.csv", CSV_CAPTACIONES);

    let resumen_visto = std::cell::Cell::new((0usize, 0usize));
    let resultado = servicio
        .importar_captaciones(&path, |resumen| {
            resumen_visto.set((resumen.candidatos, resumen.descartadas));
            true
        })
        .expect("import should succeed");
    fs::remove_file(&path).ok();

    assert_eq!(resultado, ResultadoImportacion::Importado { enviados: 2 });
    assert_eq!(resumen_visto.get(), (2, 0));
    assert_eq!(backend.lotes_captaciones.load(Ordering::SeqCst), 1);
}

#[test]
fn un_archivo_sin_cabecera_reconocible_corta_el_flujo_antes_de_confirmar() {
    let backend = Arc::new(BackendContable::default());
    let servicio = ImportService::new(backend.clone());
    let path = archivo_temporal("sin-cabecera.csv", "a,b,c\n1,2,3\n");

    let resultado = servicio.importar_captaciones(&path, |_| {
        panic!("confirmation should never be reached without a header");
    });
    fs::remove_file(&path).ok();

    assert!(resultado.is_err());
    assert_eq!(backend.lotes_captaciones.load(Ordering::SeqCst), 0);
}

#[test]
fn importar_agentes_tambien_respeta_la_confirmacion() {
    let backend = Arc::new(BackendContable::default());
    let servicio = ImportService::new(backend.clone());
    let csv = "LISTA,,\nCELULAR 1,NOMBRE,INMOBILIARIA\n987654321,Juan Perez,Prime Realty\n";
    let path = archivo_temporal("agentes.csv", csv);

    let resultado = servicio
        .importar_agentes(&path, |_| true)
        .expect("agent import should succeed");
    fs::remove_file(&path).ok();

    assert_eq!(resultado, ResultadoImportacion::Importado { enviados: 1 });
    assert_eq!(backend.lotes_agentes.load(Ordering::SeqCst), 1);
}

// --- validación de contactos ---

#[test]
fn dni_y_celular_exigen_longitud_exacta() {
    assert!(dni_valido("12345678"));
    assert!(!dni_valido("1234567"));
    assert!(!dni_valido("12345678a"));
    assert!(celular_valido("987654321"));
    assert!(!celular_valido("98765432"));
}

#[test]
fn valida_contacto_permite_campos_opcionales_vacios() {
    assert_eq!(valida_contacto("Ana Torres", "", ""), None);
    assert!(valida_contacto("", "12345678", "987654321").is_some());
    assert!(valida_contacto("Ana", "123", "987654321").is_some());
}

// --- calendario ---

#[test]
fn dias_en_mes_maneja_bisiestos_y_entradas_invalidas() {
    assert_eq!(dias_en_mes(2024, 2), 29);
    assert_eq!(dias_en_mes(2023, 2), 28);
    assert_eq!(dias_en_mes(2024, 12), 31);
    assert_eq!(dias_en_mes(2024, 13), 0);
}

#[test]
fn navegacion_de_meses_cruza_los_limites_de_anio() {
    assert_eq!(mes_anterior(2024, 1), (2023, 12));
    assert_eq!(mes_siguiente(2024, 12), (2025, 1));
    assert_eq!(mes_anterior(2024, 7), (2024, 6));
}

#[test]
fn arma_mes_adjunta_visitas_y_cumpleanos_a_sus_dias() {
    let visitas = vec![Visita {
        id: VisitaId(1),
        fecha: "2024-03-15".to_string(),
        hora: "10:30".to_string(),
        captacion_id: 7,
        cliente: "Rosa Díaz".to_string(),
        estado: "PENDIENTE".to_string(),
    }];
    let clientes = vec![Cliente {
        id: ClienteId(1),
        nombre: "Rosa Díaz".to_string(),
        dni: "12345678".to_string(),
        celular: "987654321".to_string(),
        fecha_nacimiento: "1990-03-15".to_string(),
        notas: String::new(),
    }];

    let celdas = arma_mes(2024, 3, &visitas, &clientes);

    assert_eq!(celdas.len(), 31);
    assert_eq!(celdas[14].dia, 15);
    assert_eq!(celdas[14].visitas.len(), 1);
    assert_eq!(celdas[14].cumpleanos, vec!["Rosa Díaz".to_string()]);
    assert!(celdas[13].visitas.is_empty());
}

#[test]
fn semanas_del_mes_rellena_los_huecos_y_cierra_en_multiplos_de_siete() {
    // Marzo 2024 empieza viernes (desplazamiento 4) y tiene 31 días.
    let celdas = arma_mes(2024, 3, &[], &[]);
    let desplazamiento = desplazamiento_primer_dia(2024, 3);
    assert_eq!(desplazamiento, 4);

    let semanas = semanas_del_mes(celdas, desplazamiento);

    assert_eq!(semanas.len(), 5);
    assert!(semanas.iter().all(|semana| semana.len() == 7));
    assert!(semanas[0][3].is_none());
    assert_eq!(
        semanas[0][4].as_ref().map(|dia| dia.dia),
        Some(1),
        "day 1 should land on Friday"
    );
    assert_eq!(semanas[4][6].as_ref().map(|dia| dia.dia), Some(31));
}

#[test]
fn fecha_iso_rellena_con_ceros() {
    assert_eq!(fecha_iso(2024, 3, 5), "2024-03-05");
}

// --- consultas en memoria ---

fn captacion_de_prueba(id: i64, tipo: TipoInmueble, precio: f64, distrito: &str) -> Captacion {
    Captacion {
        id: CaptacionId(id),
        tipo,
        operacion: Operacion::Venta,
        precio,
        moneda: Moneda::Usd,
        area: 100.0,
        distrito: distrito.to_string(),
        direccion: String::new(),
        propietario: String::new(),
        celular: String::new(),
        vinculo: Vinculo::Propietario,
        fecha: format!("2024-01-{id:02}"),
        descripcion: String::new(),
    }
}

#[test]
fn filtra_captaciones_combina_busqueda_tipo_y_orden() {
    let lista = vec![
        captacion_de_prueba(1, TipoInmueble::Casa, 120000.0, "Surco"),
        captacion_de_prueba(2, TipoInmueble::Departamento, 85000.0, "Surco"),
        captacion_de_prueba(3, TipoInmueble::Departamento, 95000.0, "Miraflores"),
    ];

    let opciones = OpcionesCaptaciones {
        busqueda: "surco".to_string(),
        tipo: Some(TipoInmueble::Departamento),
        operacion: None,
        orden: OrdenCaptaciones::Precio,
        descendente: false,
    };
    let vista = filtra_captaciones(&lista, &opciones);
    assert_eq!(vista.len(), 1);
    assert_eq!(vista[0].id, CaptacionId(2));

    let todas = filtra_captaciones(
        &lista,
        &OpcionesCaptaciones {
            orden: OrdenCaptaciones::Precio,
            descendente: true,
            ..Default::default()
        },
    );
    assert_eq!(todas[0].id, CaptacionId(1));
    assert_eq!(todas[2].id, CaptacionId(2));
}

#[test]
fn filtra_agentes_busca_en_nombres_y_celulares() {
    let lista = vec![Agente {
        id: AgenteId(1),
        celular1: "987654321".to_string(),
        celular2: String::new(),
        celular3: String::new(),
        nombre: "Juan Perez".to_string(),
        inmobiliaria: "Prime Realty".to_string(),
        link: String::new(),
        estado: ESTADO_ALIADO.to_string(),
    }];

    assert_eq!(filtra_agentes(&lista, "perez").len(), 1);
    assert_eq!(filtra_agentes(&lista, "98765").len(), 1);
    assert_eq!(filtra_agentes(&lista, "lopez").len(), 0);
}

#[test]
fn resumen_panel_separa_comisiones_por_moneda() {
    let cierres = vec![
        Cierre {
            id: CierreId(1),
            fecha: "2024-01-10".to_string(),
            captacion_id: 1,
            cliente: "A".to_string(),
            monto: 100000.0,
            moneda: Moneda::Usd,
            porcentaje_comision: 3.0,
        },
        Cierre {
            id: CierreId(2),
            fecha: "2024-02-10".to_string(),
            captacion_id: 2,
            cliente: "B".to_string(),
            monto: 200000.0,
            moneda: Moneda::Pen,
            porcentaje_comision: 2.5,
        },
    ];

    let panel = resumen_panel(4, 3, 2, 1, &cierres);

    assert_eq!(panel.captaciones, 4);
    assert_eq!(panel.cierres, 2);
    assert_eq!(panel.comision_usd, 3000.0);
    assert_eq!(panel.comision_pen, 5000.0);
}

// --- helpers de la UI ---

#[test]
fn formatea_monto_omite_decimales_enteros() {
    assert_eq!(formatea_monto(85000.0), "85000");
    assert_eq!(formatea_monto(1500.5), "1500.50");
    assert_eq!(formatea_monto(f64::NAN), "");
}

#[test]
fn nombre_mes_cubre_los_doce_meses() {
    assert_eq!(nombre_mes(1), "Enero");
    assert_eq!(nombre_mes(12), "Diciembre");
    assert_eq!(nombre_mes(13), "");
}
