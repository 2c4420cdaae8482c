// ============================================================================
// NÚCLEO DE SESIÓN
// ============================================================================
// Autenticación, restauración desde storage y resolución de membresías de
// empresa. La sesión es un valor explícito que solo reemplazan bootstrap,
// login y logout; las pantallas lo reciben por contexto.
// ============================================================================

pub mod error;
pub mod flow;
pub mod gateway;
pub mod resolver;
pub mod store;

pub use error::SessionError;
pub use flow::SessionFlow;
pub use gateway::{BrowserStorage, HttpGateway, KeyValueStorage, SessionGateway};
pub use resolver::MembershipClass;
pub use store::Session;
