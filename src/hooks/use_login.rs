// ============================================================================
// USE LOGIN HOOK - Login -> decodificación -> despacho al store de sesión
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_mounted, use_session_dispatcher};
use crate::services::log_in;
use crate::state::{LoginOutcome, SessionAction};

#[derive(Clone, PartialEq, Debug)]
pub enum LoginStatus {
    Idle,
    Pending,
    Failed(String),
}

pub struct UseLoginHandle {
    pub status: UseStateHandle<LoginStatus>,
    pub login: Callback<(String, String)>,
    pub sign_out: Callback<()>,
}

#[hook]
pub fn use_login() -> UseLoginHandle {
    let status = use_state(|| LoginStatus::Idle);
    let dispatcher = use_session_dispatcher();
    let mounted = use_mounted();

    let login = {
        let status = status.clone();
        let dispatcher = dispatcher.clone();
        Callback::from(move |(user_name, password): (String, String)| {
            status.set(LoginStatus::Pending);
            let status = status.clone();
            let dispatcher = dispatcher.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match log_in(&user_name, &password).await {
                    Ok(account) => LoginOutcome::from_account(&account)
                        .and_then(|outcome| dispatcher.dispatch_login(&outcome))
                        .map_err(|e| e.to_string()),
                    Err(e) => Err(e),
                };
                match result {
                    Ok(()) => {
                        log::info!("✅ [LOGIN] Sesión establecida para {}", user_name);
                        if mounted.get() {
                            status.set(LoginStatus::Idle);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] Error en login: {}", e);
                        if mounted.get() {
                            status.set(LoginStatus::Failed(e));
                        }
                    }
                }
            });
        })
    };

    let sign_out = Callback::from(move |_| {
        log::info!("👋 [LOGIN] Cerrando sesión");
        if let Err(e) = dispatcher.dispatch(SessionAction::SignOut) {
            log::error!("❌ [LOGIN] No se pudo cerrar sesión: {}", e);
        }
    });

    UseLoginHandle {
        status,
        login,
        sign_out,
    }
}
