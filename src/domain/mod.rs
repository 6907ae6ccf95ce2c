pub mod entities;
pub mod validacion;
