use std::collections::HashMap;

use crate::domain::entities::agente::{AgenteNuevo, ESTADO_ALIADO};
use crate::infra::import::header::{valor_campo, CampoSpec};
use crate::infra::import::normalize::{recorta_texto, solo_digitos, DIGITOS_CELULAR, MAX_TEXTO};
use crate::infra::import::sheet::Celda;
use crate::infra::import::LoteImportado;

pub const GRUPOS_CABECERA_AGENTE: &[&[&str]] = &[&["CELULAR"], &["NOMBRE", "AGENTE"]];

pub const CAMPOS_AGENTE: &[CampoSpec] = &[
    CampoSpec {
        campo: "CELULAR1",
        claves: &["CELULAR 1", "CELULAR1", "CELULAR"],
    },
    CampoSpec {
        campo: "CELULAR2",
        claves: &["CELULAR 2", "CELULAR2"],
    },
    CampoSpec {
        campo: "CELULAR3",
        claves: &["CELULAR 3", "CELULAR3"],
    },
    CampoSpec {
        campo: "NOMBRE",
        claves: &["NOMBRE", "AGENTE"],
    },
    CampoSpec {
        campo: "INMOBILIARIA",
        claves: &["INMOBILIARIA", "EMPRESA"],
    },
    CampoSpec {
        campo: "LINK",
        claves: &["LINK", "FACEBOOK", "PERFIL"],
    },
];

/// Normaliza una fila de agente. Se descarta solo si no trae ni nombre ni
/// ningún celular; todo agente nuevo entra con estado ALIADO.
pub fn normaliza_fila_agente(
    fila: &[Celda],
    columnas: &HashMap<&'static str, usize>,
) -> Option<AgenteNuevo> {
    let celular1 = solo_digitos(
        &valor_campo(fila, columnas, "CELULAR1").texto(),
        DIGITOS_CELULAR,
    );
    let celular2 = solo_digitos(
        &valor_campo(fila, columnas, "CELULAR2").texto(),
        DIGITOS_CELULAR,
    );
    let celular3 = solo_digitos(
        &valor_campo(fila, columnas, "CELULAR3").texto(),
        DIGITOS_CELULAR,
    );
    let nombre = recorta_texto(&valor_campo(fila, columnas, "NOMBRE").texto(), MAX_TEXTO);

    if nombre.is_empty() && celular1.is_empty() && celular2.is_empty() && celular3.is_empty() {
        return None;
    }

    Some(AgenteNuevo {
        celular1,
        celular2,
        celular3,
        nombre,
        inmobiliaria: recorta_texto(
            &valor_campo(fila, columnas, "INMOBILIARIA").texto(),
            MAX_TEXTO,
        ),
        link: recorta_texto(&valor_campo(fila, columnas, "LINK").texto(), MAX_TEXTO),
        estado: ESTADO_ALIADO.to_string(),
    })
}

pub fn normaliza_lote_agentes(
    filas: &[Vec<Celda>],
    fila_cabecera: usize,
    columnas: &HashMap<&'static str, usize>,
) -> LoteImportado<AgenteNuevo> {
    let mut candidatos = Vec::new();
    let mut descartadas = 0;

    for fila in filas.iter().skip(fila_cabecera + 1) {
        match normaliza_fila_agente(fila, columnas) {
            Some(candidato) => candidatos.push(candidato),
            None => descartadas += 1,
        }
    }

    LoteImportado {
        candidatos,
        descartadas,
        // El importador de agentes no tiene campos enum que puedan caer en
        // un valor por defecto.
        diagnosticos: Vec::new(),
    }
}
