use std::collections::HashMap;

use tracing::warn;

use crate::domain::entities::captacion::{
    CaptacionNueva, Moneda, Operacion, TipoInmueble, Vinculo,
};
use crate::infra::import::header::{valor_campo, CampoSpec};
use crate::infra::import::normalize::{
    fecha_desde_celda, limpia_numero, recorta_texto, solo_digitos, DIGITOS_CELULAR, MAX_TEXTO,
};
use crate::infra::import::sheet::Celda;
use crate::infra::import::{Diagnostico, LoteImportado};

/// La fila de cabecera debe mencionar el inmueble y alguna columna de precio
/// o área.
pub const GRUPOS_CABECERA_CAPTACION: &[&[&str]] = &[&["INMUEBLE"], &["PRECIO", "AT"]];

pub const CAMPOS_CAPTACION: &[CampoSpec] = &[
    CampoSpec {
        campo: "TIPO",
        claves: &["INMUEBLE", "TIPO"],
    },
    CampoSpec {
        campo: "OPERACION",
        claves: &["OPERACION", "OPERACIÓN", "MODALIDAD"],
    },
    CampoSpec {
        campo: "PRECIO",
        claves: &["PRECIO"],
    },
    CampoSpec {
        campo: "AREA",
        claves: &["AT", "AREA", "ÁREA", "M2"],
    },
    CampoSpec {
        campo: "DISTRITO",
        claves: &["DISTRITO"],
    },
    CampoSpec {
        campo: "DIRECCION",
        claves: &["DIRECCION", "DIRECCIÓN", "UBICACION", "UBICACIÓN"],
    },
    CampoSpec {
        campo: "PROPIETARIO",
        claves: &["PROPIETARIO", "DUEÑO", "CONTACTO"],
    },
    CampoSpec {
        campo: "CELULAR",
        claves: &["CELULAR", "TELEFONO", "TELÉFONO"],
    },
    CampoSpec {
        campo: "VINCULO",
        claves: &["VINCULO", "VÍNCULO", "RELACION", "RELACIÓN"],
    },
    CampoSpec {
        campo: "FECHA",
        claves: &["FECHA"],
    },
    CampoSpec {
        campo: "DESCRIPCION",
        claves: &["DESCRIPCION", "DESCRIPCIÓN", "DETALLE", "OBSERV"],
    },
];

fn anota_defecto(
    diagnosticos: &mut Vec<Diagnostico>,
    fila: usize,
    campo: &'static str,
    crudo: &str,
    asignado: &str,
) {
    warn!(fila, campo, crudo, asignado, "campo no reconocido, se asignó el valor por defecto");
    diagnosticos.push(Diagnostico {
        fila,
        campo,
        crudo: crudo.to_string(),
        asignado: asignado.to_string(),
    });
}

/// Normaliza una fila de datos. Devuelve `None` si la fila no tiene ni tipo
/// ni precio (las dos columnas esenciales).
pub fn normaliza_fila_captacion(
    fila: &[Celda],
    columnas: &HashMap<&'static str, usize>,
    num_fila: usize,
    diagnosticos: &mut Vec<Diagnostico>,
) -> Option<CaptacionNueva> {
    let tipo_crudo = valor_campo(fila, columnas, "TIPO").texto();
    let precio_crudo = valor_campo(fila, columnas, "PRECIO").texto();

    if tipo_crudo.trim().is_empty() && precio_crudo.trim().is_empty() {
        return None;
    }

    let tipo = match TipoInmueble::reconoce(&tipo_crudo) {
        Some(tipo) => tipo,
        None => {
            if !tipo_crudo.trim().is_empty() {
                anota_defecto(diagnosticos, num_fila, "TIPO", &tipo_crudo, "CASA");
            }
            TipoInmueble::Casa
        }
    };

    let operacion_cruda = valor_campo(fila, columnas, "OPERACION").texto();
    let operacion = match Operacion::reconoce(&operacion_cruda) {
        Some(operacion) => operacion,
        None => {
            if !operacion_cruda.trim().is_empty() {
                anota_defecto(diagnosticos, num_fila, "OPERACION", &operacion_cruda, "VENTA");
            }
            Operacion::Venta
        }
    };

    let vinculo_crudo = valor_campo(fila, columnas, "VINCULO").texto();
    let vinculo = match Vinculo::reconoce(&vinculo_crudo) {
        Some(vinculo) => vinculo,
        None => {
            if !vinculo_crudo.trim().is_empty() {
                anota_defecto(diagnosticos, num_fila, "VINCULO", &vinculo_crudo, "PROPIETARIO");
            }
            Vinculo::Propietario
        }
    };

    Some(CaptacionNueva {
        tipo,
        operacion,
        precio: limpia_numero(&precio_crudo),
        moneda: Moneda::desde_texto_precio(&precio_crudo),
        area: limpia_numero(&valor_campo(fila, columnas, "AREA").texto()),
        distrito: recorta_texto(&valor_campo(fila, columnas, "DISTRITO").texto(), MAX_TEXTO),
        direccion: recorta_texto(&valor_campo(fila, columnas, "DIRECCION").texto(), MAX_TEXTO),
        propietario: recorta_texto(
            &valor_campo(fila, columnas, "PROPIETARIO").texto(),
            MAX_TEXTO,
        ),
        celular: solo_digitos(
            &valor_campo(fila, columnas, "CELULAR").texto(),
            DIGITOS_CELULAR,
        ),
        vinculo,
        fecha: fecha_desde_celda(valor_campo(fila, columnas, "FECHA")),
        descripcion: recorta_texto(
            &valor_campo(fila, columnas, "DESCRIPCION").texto(),
            MAX_TEXTO,
        ),
    })
}

/// Normaliza todas las filas de datos posteriores a la cabecera.
pub fn normaliza_lote_captaciones(
    filas: &[Vec<Celda>],
    fila_cabecera: usize,
    columnas: &HashMap<&'static str, usize>,
) -> LoteImportado<CaptacionNueva> {
    let mut candidatos = Vec::new();
    let mut descartadas = 0;
    let mut diagnosticos = Vec::new();

    for (offset, fila) in filas.iter().skip(fila_cabecera + 1).enumerate() {
        let num_fila = fila_cabecera + 1 + offset;
        match normaliza_fila_captacion(fila, columnas, num_fila, &mut diagnosticos) {
            Some(candidato) => candidatos.push(candidato),
            None => descartadas += 1,
        }
    }

    LoteImportado {
        candidatos,
        descartadas,
        diagnosticos,
    }
}
