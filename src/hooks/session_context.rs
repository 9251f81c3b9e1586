// ============================================================================
// SESSION CONTEXT - Compartir el store de sesión entre componentes
// ============================================================================
// Usa Context API de Yew. Lectura y despacho viajan en contextos separados:
// una vista que solo lee nunca recibe la capacidad de escribir.
// ============================================================================

use yew::prelude::*;

use crate::state::{SessionDispatcher, SessionReader};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub reader: SessionReader,
    pub dispatcher: SessionDispatcher,
    pub children: Children,
}

/// Provider que envuelve la app con el store creado en `App`
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    html! {
        <ContextProvider<SessionReader> context={props.reader.clone()}>
            <ContextProvider<SessionDispatcher> context={props.dispatcher.clone()}>
                {props.children.clone()}
            </ContextProvider<SessionDispatcher>>
        </ContextProvider<SessionReader>>
    }
}

#[hook]
pub fn use_session_reader() -> SessionReader {
    use_context::<SessionReader>().expect("use_session_reader must be used inside SessionProvider")
}

#[hook]
pub fn use_session_dispatcher() -> SessionDispatcher {
    use_context::<SessionDispatcher>()
        .expect("use_session_dispatcher must be used inside SessionProvider")
}
