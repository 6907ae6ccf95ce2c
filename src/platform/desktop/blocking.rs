/// Costura para el trabajo bloqueante lanzado desde los handlers de la UI.
/// En escritorio se ejecuta en el mismo hilo: el parseo de archivos grandes y
/// las llamadas HTTP bloquean la interacción mientras duran.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
