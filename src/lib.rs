// ============================================================================
// MOONBAR - PANEL ADMINISTRATIVO (RUST / YEW)
// ============================================================================
// - models:   estructuras compartidas con el backend REST
// - services: SOLO comunicación HTTP (stateless)
// - session:  núcleo de autenticación y resolución de empresas
// - hooks:    contextos de Yew (sesión, indicador de carga)
// - views:    componentes de pantalla
// ============================================================================

pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;
pub mod views;
