use chrono::{Datelike, NaiveDate};

use crate::domain::entities::contacto::Cliente;
use crate::domain::entities::visita::Visita;

/// Cantidad de días del mes, o 0 si año/mes no forman una fecha válida.
pub fn dias_en_mes(anio: i32, mes: u32) -> u32 {
    let Some(primero) = NaiveDate::from_ymd_opt(anio, mes, 1) else {
        return 0;
    };
    let (anio_sig, mes_sig) = mes_siguiente(anio, mes);
    let Some(primero_sig) = NaiveDate::from_ymd_opt(anio_sig, mes_sig, 1) else {
        return 0;
    };
    (primero_sig - primero).num_days() as u32
}

/// Desplazamiento del día 1 dentro de la semana (0 = lunes).
pub fn desplazamiento_primer_dia(anio: i32, mes: u32) -> u32 {
    NaiveDate::from_ymd_opt(anio, mes, 1)
        .map(|fecha| fecha.weekday().num_days_from_monday())
        .unwrap_or(0)
}

/// Mes anterior, con retroceso de año en el límite 1/12.
pub fn mes_anterior(anio: i32, mes: u32) -> (i32, u32) {
    if mes <= 1 {
        (anio - 1, 12)
    } else {
        (anio, mes - 1)
    }
}

/// Mes siguiente, con avance de año en el límite 12/1.
pub fn mes_siguiente(anio: i32, mes: u32) -> (i32, u32) {
    if mes >= 12 {
        (anio + 1, 1)
    } else {
        (anio, mes + 1)
    }
}

pub fn fecha_iso(anio: i32, mes: u32, dia: u32) -> String {
    format!("{anio:04}-{mes:02}-{dia:02}")
}

/// Una celda del calendario: el día del mes y los registros que caen en él.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiaCalendario {
    pub dia: u32,
    pub visitas: Vec<Visita>,
    pub cumpleanos: Vec<String>,
}

/// Arma las celdas del mes adjuntando visitas por fecha exacta y cumpleaños
/// de clientes por coincidencia de mes y día.
pub fn arma_mes(
    anio: i32,
    mes: u32,
    visitas: &[Visita],
    clientes: &[Cliente],
) -> Vec<DiaCalendario> {
    let total = dias_en_mes(anio, mes);
    let mut celdas = Vec::with_capacity(total as usize);

    for dia in 1..=total {
        let fecha = fecha_iso(anio, mes, dia);
        let del_dia = visitas
            .iter()
            .filter(|visita| visita.fecha == fecha)
            .cloned()
            .collect();
        let cumpleanos = clientes
            .iter()
            .filter(|cliente| {
                NaiveDate::parse_from_str(&cliente.fecha_nacimiento, "%Y-%m-%d")
                    .map(|nacimiento| nacimiento.month() == mes && nacimiento.day() == dia)
                    .unwrap_or(false)
            })
            .map(|cliente| cliente.nombre.clone())
            .collect();

        celdas.push(DiaCalendario {
            dia,
            visitas: del_dia,
            cumpleanos,
        });
    }
    celdas
}

/// Reparte las celdas del mes en semanas de 7, rellenando con None los
/// huecos anteriores al día 1 y los posteriores al último día.
pub fn semanas_del_mes(
    celdas: Vec<DiaCalendario>,
    desplazamiento: u32,
) -> Vec<Vec<Option<DiaCalendario>>> {
    let mut rejilla: Vec<Option<DiaCalendario>> = Vec::with_capacity(42);
    for _ in 0..desplazamiento {
        rejilla.push(None);
    }
    rejilla.extend(celdas.into_iter().map(Some));
    while rejilla.len() % 7 != 0 {
        rejilla.push(None);
    }

    rejilla
        .chunks(7)
        .map(|semana| semana.to_vec())
        .collect()
}
