//! Validaciones de entrada previas al envío. El backend sigue siendo la
//! autoridad final (unicidad de DNI, integridad); aquí solo se filtra lo que
//! nunca debería salir del formulario.

pub fn dni_valido(dni: &str) -> bool {
    dni.len() == 8 && dni.chars().all(|c| c.is_ascii_digit())
}

pub fn celular_valido(celular: &str) -> bool {
    celular.len() == 9 && celular.chars().all(|c| c.is_ascii_digit())
}

/// Devuelve el primer problema encontrado, o `None` si el contacto es válido.
pub fn valida_contacto(nombre: &str, dni: &str, celular: &str) -> Option<String> {
    if nombre.trim().is_empty() {
        return Some("El nombre es obligatorio".to_string());
    }
    if !dni.is_empty() && !dni_valido(dni) {
        return Some("El DNI debe tener 8 dígitos".to_string());
    }
    if !celular.is_empty() && !celular_valido(celular) {
        return Some("El celular debe tener 9 dígitos".to_string());
    }
    None
}
