pub mod agente;
pub mod captacion;
pub mod cierre;
pub mod contacto;
pub mod visita;
