// ============================================================================
// CARE SESSION - FRONTEND (RUST + YEW)
// ============================================================================
// - state: contexto de autorización de sesión (acciones, reducer, selectores, store)
// - navigation: rutas y menú por rol
// - scoping: qué paciente consulta cada vista
// - services: SOLO comunicación API
// - hooks / components: capa Yew
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod navigation;
pub mod scoping;
pub mod services;
pub mod hooks;
pub mod components;
