use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptacionId(pub i64);

/// Tipo de operación ofrecida. `desde_texto` nunca devuelve texto crudo:
/// cualquier entrada no reconocida cae en `Venta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operacion {
    Venta,
    Alquiler,
    Anticresis,
}

impl Operacion {
    /// Devuelve `Some` solo si el texto contiene alguna subcadena conocida.
    pub fn reconoce(texto: &str) -> Option<Operacion> {
        let mayus = texto.to_uppercase();
        if mayus.contains("ALQ") || mayus.contains("RENT") {
            Some(Operacion::Alquiler)
        } else if mayus.contains("ANTICRES") {
            Some(Operacion::Anticresis)
        } else if mayus.contains("VENT") {
            Some(Operacion::Venta)
        } else {
            None
        }
    }

    pub fn desde_texto(texto: &str) -> Operacion {
        Operacion::reconoce(texto).unwrap_or(Operacion::Venta)
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Operacion::Venta => "VENTA",
            Operacion::Alquiler => "ALQUILER",
            Operacion::Anticresis => "ANTICRESIS",
        }
    }
}

/// Tipo de inmueble. El texto libre se compara por subcadena en orden de
/// prioridad; lo no reconocido cae en `Casa`, la categoría más frecuente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoInmueble {
    Departamento,
    Casa,
    Terreno,
    Local,
    Oficina,
}

impl TipoInmueble {
    pub fn reconoce(texto: &str) -> Option<TipoInmueble> {
        let mayus = texto.to_uppercase();
        if mayus.contains("DEPA") || mayus.contains("DPTO") || mayus.contains("FLAT") {
            Some(TipoInmueble::Departamento)
        } else if mayus.contains("TERRENO") || mayus.contains("LOTE") {
            Some(TipoInmueble::Terreno)
        } else if mayus.contains("LOCAL") {
            Some(TipoInmueble::Local)
        } else if mayus.contains("OFICINA") {
            Some(TipoInmueble::Oficina)
        } else if mayus.contains("CASA") || mayus.contains("CHALET") {
            Some(TipoInmueble::Casa)
        } else {
            None
        }
    }

    pub fn desde_texto(texto: &str) -> TipoInmueble {
        TipoInmueble::reconoce(texto).unwrap_or(TipoInmueble::Casa)
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            TipoInmueble::Departamento => "DEPARTAMENTO",
            TipoInmueble::Casa => "CASA",
            TipoInmueble::Terreno => "TERRENO",
            TipoInmueble::Local => "LOCAL",
            TipoInmueble::Oficina => "OFICINA",
        }
    }
}

/// Moneda del precio. Se detecta sobre el texto crudo del precio: "S/" o
/// "PEN" implican soles; todo lo demás se asume dólares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Moneda {
    Usd,
    Pen,
}

impl Moneda {
    pub fn desde_texto_precio(texto: &str) -> Moneda {
        let mayus = texto.to_uppercase();
        if mayus.contains("S/") || mayus.contains("PEN") {
            Moneda::Pen
        } else {
            Moneda::Usd
        }
    }

    pub fn simbolo(&self) -> &'static str {
        match self {
            Moneda::Usd => "$",
            Moneda::Pen => "S/",
        }
    }
}

/// Vínculo de la persona de contacto con el propietario del inmueble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vinculo {
    Propietario,
    Hijo,
    Conyuge,
    Apoderado,
    Tercero,
}

impl Vinculo {
    pub fn reconoce(texto: &str) -> Option<Vinculo> {
        let mayus = texto.to_uppercase();
        if mayus.contains("HIJ") {
            Some(Vinculo::Hijo)
        } else if mayus.contains("ESPOS") || mayus.contains("CONYUG") || mayus.contains("CÓNYUG") {
            Some(Vinculo::Conyuge)
        } else if mayus.contains("APODER") {
            Some(Vinculo::Apoderado)
        } else if mayus.contains("TERCER") || mayus.contains("AGENTE") {
            Some(Vinculo::Tercero)
        } else if mayus.contains("PROPIET") || mayus.contains("DUEÑ") {
            Some(Vinculo::Propietario)
        } else {
            None
        }
    }

    pub fn desde_texto(texto: &str) -> Vinculo {
        Vinculo::reconoce(texto).unwrap_or(Vinculo::Propietario)
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Vinculo::Propietario => "PROPIETARIO",
            Vinculo::Hijo => "HIJO",
            Vinculo::Conyuge => "CONYUGE",
            Vinculo::Apoderado => "APODERADO",
            Vinculo::Tercero => "TERCERO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Captacion {
    pub id: CaptacionId,
    pub tipo: TipoInmueble,
    pub operacion: Operacion,
    pub precio: f64,
    pub moneda: Moneda,
    pub area: f64,
    pub distrito: String,
    pub direccion: String,
    pub propietario: String,
    pub celular: String,
    pub vinculo: Vinculo,
    pub fecha: String,
    pub descripcion: String,
}

/// Registro candidato producido por el importador, o cargado desde el
/// formulario manual. El backend asigna el id al crearlo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptacionNueva {
    pub tipo: TipoInmueble,
    pub operacion: Operacion,
    pub precio: f64,
    pub moneda: Moneda,
    pub area: f64,
    pub distrito: String,
    pub direccion: String,
    pub propietario: String,
    pub celular: String,
    pub vinculo: Vinculo,
    pub fecha: String,
    pub descripcion: String,
}
