use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

/// Valor crudo de una celda tal como llega de la hoja de cálculo. Se conserva
/// la distinción texto/número porque las fechas seriales de Excel llegan como
/// número y se convierten recién al normalizar.
#[derive(Debug, Clone, PartialEq)]
pub enum Celda {
    Vacia,
    Texto(String),
    Numero(f64),
}

impl Celda {
    pub fn texto(&self) -> String {
        match self {
            Celda::Vacia => String::new(),
            Celda::Texto(v) => v.clone(),
            Celda::Numero(v) => {
                if (v.floor() - v).abs() < f64::EPSILON {
                    format!("{}", *v as i64)
                } else {
                    format!("{v}")
                }
            }
        }
    }
}

fn celda_desde_data(cell: &Data) -> Celda {
    match cell {
        Data::String(v) => {
            let v = v.trim();
            if v.is_empty() {
                Celda::Vacia
            } else {
                Celda::Texto(v.to_string())
            }
        }
        Data::Float(v) => Celda::Numero(*v),
        Data::Int(v) => Celda::Numero(*v as f64),
        Data::Bool(v) => Celda::Texto(v.to_string()),
        Data::DateTime(v) => Celda::Numero(v.as_f64()),
        Data::DateTimeIso(v) => Celda::Texto(v.clone()),
        Data::DurationIso(v) => Celda::Texto(v.clone()),
        Data::Error(_) => Celda::Vacia,
        Data::Empty => Celda::Vacia,
    }
}

fn leer_workbook(path: &Path) -> Result<Vec<Vec<Celda>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("no se pudo abrir el archivo: {}", path.display()))?;

    // Solo se lee la primera hoja; los archivos de origen no tienen un
    // esquema fijo y la cabecera se localiza después por heurística.
    let primera = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("el archivo no contiene hojas: {}", path.display()))?;

    let rango = workbook
        .worksheet_range(&primera)
        .with_context(|| format!("no se pudo leer la hoja: {primera}"))?;

    Ok(rango
        .rows()
        .map(|fila| fila.iter().map(celda_desde_data).collect())
        .collect())
}

fn leer_csv(path: &Path) -> Result<Vec<Vec<Celda>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("no se pudo abrir el csv: {}", path.display()))?;

    let mut filas = Vec::new();
    for registro in reader.records() {
        let registro = registro.context("no se pudo leer el registro csv")?;
        filas.push(
            registro
                .iter()
                .map(|valor| {
                    let valor = valor.trim();
                    if valor.is_empty() {
                        Celda::Vacia
                    } else {
                        Celda::Texto(valor.to_string())
                    }
                })
                .collect(),
        );
    }
    Ok(filas)
}

/// Lee el archivo completo como filas crudas. `.csv` pasa por el lector csv;
/// cualquier otra extensión se trata como libro de cálculo.
pub fn leer_tabla(path: &Path) -> Result<Vec<Vec<Celda>>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if extension == "csv" {
        leer_csv(path)
    } else {
        leer_workbook(path)
    }
}
