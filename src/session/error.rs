use thiserror::Error;

/// Taxonomía de errores del flujo de sesión. Los de autenticación llegan al
/// formulario de login; el resto son detalle de infraestructura que las
/// pantallas muestran tal cual.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Credenciales inválidas o sesión rechazada: {0}")]
    Authentication(String),

    #[error("Error de comunicación con el servidor: {0}")]
    Gateway(String),
}
