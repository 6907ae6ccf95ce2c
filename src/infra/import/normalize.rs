use chrono::{DateTime, Local, NaiveDate};

use crate::infra::import::sheet::Celda;

/// Offset entre la época de las hojas de cálculo (1899-12-30) y la de Unix,
/// en días.
const DIAS_EPOCA_EXCEL: f64 = 25569.0;

const SEGUNDOS_POR_DIA: f64 = 86400.0;

/// Longitud máxima de celular peruano.
pub const DIGITOS_CELULAR: usize = 9;

/// Límite de los campos de texto libre, por las columnas del backend.
pub const MAX_TEXTO: usize = 250;

/// Extrae un número decimal de texto libre: conserva solo dígitos y puntos y
/// parsea el resto. Entrada vacía, sin dígitos o fuera del rango de f64
/// devuelve 0.0; el resultado siempre es finito.
pub fn limpia_numero(texto: &str) -> f64 {
    let limpio: String = texto
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match limpio.parse::<f64>() {
        Ok(valor) if valor.is_finite() => valor,
        _ => 0.0,
    }
}

/// Deja solo dígitos y trunca a `max`. Idempotente: aplicarla dos veces da lo
/// mismo que una.
pub fn solo_digitos(texto: &str, max: usize) -> String {
    texto
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// Recorta texto libre a `max` caracteres, sin partir un carácter multibyte.
pub fn recorta_texto(texto: &str, max: usize) -> String {
    texto.trim().chars().take(max).collect()
}

pub fn hoy() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Fecha normalizada a ISO `YYYY-MM-DD`:
/// - número serial de hoja de cálculo → conversión por la época estándar
/// - texto ya en ISO → pasa sin cambios
/// - cualquier otra cosa → fecha actual
pub fn fecha_desde_celda(celda: &Celda) -> String {
    match celda {
        Celda::Numero(serial) => {
            let unix = ((serial - DIAS_EPOCA_EXCEL) * SEGUNDOS_POR_DIA) as i64;
            match DateTime::from_timestamp(unix, 0) {
                Some(fecha) => fecha.date_naive().format("%Y-%m-%d").to_string(),
                None => hoy(),
            }
        }
        Celda::Texto(texto) => {
            // Se reformatea lo parseado: chrono acepta componentes sin cero a
            // la izquierda y el calendario compara fechas por igualdad textual.
            match NaiveDate::parse_from_str(texto.trim(), "%Y-%m-%d") {
                Ok(fecha) => fecha.format("%Y-%m-%d").to_string(),
                Err(_) => hoy(),
            }
        }
        Celda::Vacia => hoy(),
    }
}
