// ============================================================================
// USE NAVIGATOR - Navegación dentro de la app (sin recargar la página)
// ============================================================================
// Una recarga perdería la sesión en memoria, por eso toda navegación pasa
// por `history.pushState` + estado de ruta en `App`.
// ============================================================================

use yew::prelude::*;

use crate::navigation::AppRoute;

#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub route: AppRoute,
    navigate: Callback<AppRoute>,
}

impl Navigator {
    pub fn new(route: AppRoute, navigate: Callback<AppRoute>) -> Self {
        Self { route, navigate }
    }

    pub fn push(&self, route: AppRoute) {
        if route != self.route {
            self.navigate.emit(route);
        }
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("use_navigator must be used inside App")
}
