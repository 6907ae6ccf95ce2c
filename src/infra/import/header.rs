use std::collections::HashMap;

use crate::infra::import::sheet::Celda;

/// Hasta dónde se busca la fila de cabecera antes de abortar el import.
pub const FILAS_BUSQUEDA_CABECERA: usize = 25;

/// Sinónimos de cabecera para un campo lógico. La tabla es declarativa para
/// poder extenderla sin tocar el flujo de detección.
#[derive(Debug, Clone, Copy)]
pub struct CampoSpec {
    pub campo: &'static str,
    pub claves: &'static [&'static str],
}

/// Busca la fila de cabecera: la primera cuyo texto concatenado en mayúsculas
/// contiene al menos una clave de cada grupo. Devuelve `None` si ninguna fila
/// dentro del límite cumple.
pub fn localiza_cabecera(filas: &[Vec<Celda>], grupos: &[&[&str]]) -> Option<usize> {
    for (idx, fila) in filas.iter().take(FILAS_BUSQUEDA_CABECERA).enumerate() {
        let concatenado = fila
            .iter()
            .map(|celda| celda.texto().to_uppercase())
            .collect::<Vec<_>>()
            .join(" ");

        let cumple = grupos
            .iter()
            .all(|grupo| grupo.iter().any(|clave| concatenado.contains(clave)));
        if cumple {
            return Some(idx);
        }
    }
    None
}

/// Asigna a cada campo lógico el índice de la primera celda de cabecera cuyo
/// texto (en mayúsculas, recortado) contiene alguno de sus sinónimos. Campos
/// sin celda coincidente simplemente no aparecen en el mapa.
pub fn mapea_columnas(cabecera: &[Celda], campos: &[CampoSpec]) -> HashMap<&'static str, usize> {
    let mut columnas = HashMap::new();
    for spec in campos {
        for (idx, celda) in cabecera.iter().enumerate() {
            let texto = celda.texto().trim().to_uppercase();
            if spec.claves.iter().any(|clave| texto.contains(clave)) {
                columnas.insert(spec.campo, idx);
                break;
            }
        }
    }
    columnas
}

/// Valor de una fila para un campo lógico, o celda vacía si la columna no se
/// detectó o la fila es corta.
pub fn valor_campo<'a>(
    fila: &'a [Celda],
    columnas: &HashMap<&'static str, usize>,
    campo: &'static str,
) -> &'a Celda {
    static VACIA: Celda = Celda::Vacia;
    columnas
        .get(campo)
        .and_then(|idx| fila.get(*idx))
        .unwrap_or(&VACIA)
}
