use std::env;

/// Configuración ambiental de la app. Solo dos superficies observables: la
/// URL base del API y la bandera de mantenimiento; el token viaja en la
/// cabecera Authorization de cada llamada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub api_token: String,
    pub mantenimiento: bool,
}

fn bandera_activa(valor: &str) -> bool {
    matches!(
        valor.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "si" | "sí" | "yes"
    )
}

impl AppConfig {
    pub fn desde_entorno() -> AppConfig {
        AppConfig {
            api_url: env::var("INMOCRM_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
            api_token: env::var("INMOCRM_API_TOKEN").unwrap_or_default(),
            mantenimiento: env::var("INMOCRM_MANTENIMIENTO")
                .map(|valor| bandera_activa(&valor))
                .unwrap_or(false),
        }
    }
}
