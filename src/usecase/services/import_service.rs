use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use tracing::info;

use crate::infra::import::agente::{normaliza_lote_agentes, CAMPOS_AGENTE, GRUPOS_CABECERA_AGENTE};
use crate::infra::import::captacion::{
    normaliza_lote_captaciones, CAMPOS_CAPTACION, GRUPOS_CABECERA_CAPTACION,
};
use crate::infra::import::header::{localiza_cabecera, mapea_columnas, FILAS_BUSQUEDA_CABECERA};
use crate::infra::import::sheet::leer_tabla;
use crate::usecase::ports::backend::CrmBackend;

/// Lo que se le muestra al usuario antes de confirmar el envío del lote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumenImportacion {
    pub candidatos: usize,
    pub descartadas: usize,
    pub defectos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultadoImportacion {
    /// El usuario rechazó el lote; no se hizo ninguna llamada al backend.
    Cancelado,
    Importado { enviados: usize },
}

/// Orquesta el flujo completo de import: leer archivo → localizar cabecera →
/// normalizar filas → confirmar con el usuario → enviar el lote entero en una
/// sola llamada. Operación de un solo disparo: sin reintentos, sin reporte
/// por fila y sin clave de idempotencia, así que reenviar el mismo archivo
/// tras un fallo parcial del backend puede duplicar registros.
pub struct ImportService {
    backend: Arc<dyn CrmBackend>,
}

impl ImportService {
    pub fn new(backend: Arc<dyn CrmBackend>) -> Self {
        Self { backend }
    }

    pub fn importar_captaciones<F>(&self, path: &Path, confirmar: F) -> Result<ResultadoImportacion>
    where
        F: FnOnce(&ResumenImportacion) -> bool,
    {
        let filas = leer_tabla(path)?;
        let fila_cabecera =
            localiza_cabecera(&filas, GRUPOS_CABECERA_CAPTACION).ok_or_else(|| {
                anyhow!(
                    "no se encontró la fila de cabecera en las primeras {} filas",
                    FILAS_BUSQUEDA_CABECERA
                )
            })?;
        let columnas = mapea_columnas(&filas[fila_cabecera], CAMPOS_CAPTACION);
        let lote = normaliza_lote_captaciones(&filas, fila_cabecera, &columnas);

        if lote.candidatos.is_empty() {
            bail!("el archivo no contiene filas con datos importables");
        }

        let resumen = ResumenImportacion {
            candidatos: lote.candidatos.len(),
            descartadas: lote.descartadas,
            defectos: lote.diagnosticos.len(),
        };

        if !confirmar(&resumen) {
            return Ok(ResultadoImportacion::Cancelado);
        }

        self.backend
            .importar_captaciones(&lote.candidatos)
            .map_err(|err| anyhow!("no se pudo importar el lote: {err}"))?;

        info!(
            enviados = resumen.candidatos,
            descartadas = resumen.descartadas,
            defectos = resumen.defectos,
            "lote de captaciones importado"
        );
        Ok(ResultadoImportacion::Importado {
            enviados: resumen.candidatos,
        })
    }

    pub fn importar_agentes<F>(&self, path: &Path, confirmar: F) -> Result<ResultadoImportacion>
    where
        F: FnOnce(&ResumenImportacion) -> bool,
    {
        let filas = leer_tabla(path)?;
        let fila_cabecera = localiza_cabecera(&filas, GRUPOS_CABECERA_AGENTE).ok_or_else(|| {
            anyhow!(
                "no se encontró la fila de cabecera en las primeras {} filas",
                FILAS_BUSQUEDA_CABECERA
            )
        })?;
        let columnas = mapea_columnas(&filas[fila_cabecera], CAMPOS_AGENTE);
        let lote = normaliza_lote_agentes(&filas, fila_cabecera, &columnas);

        if lote.candidatos.is_empty() {
            bail!("el archivo no contiene filas con datos importables");
        }

        let resumen = ResumenImportacion {
            candidatos: lote.candidatos.len(),
            descartadas: lote.descartadas,
            defectos: lote.diagnosticos.len(),
        };

        if !confirmar(&resumen) {
            return Ok(ResultadoImportacion::Cancelado);
        }

        self.backend
            .importar_agentes(&lote.candidatos)
            .map_err(|err| anyhow!("no se pudo importar el lote: {err}"))?;

        info!(enviados = resumen.candidatos, "lote de agentes importado");
        Ok(ResultadoImportacion::Importado {
            enviados: resumen.candidatos,
        })
    }
}
