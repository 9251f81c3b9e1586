// ============================================================================
// SESSION STORE - Contenedor del estado de sesión + suscriptores
// ============================================================================
// Un solo `SessionStore` por cliente, creado por `App` (raíz de composición).
// Los consumidores reciben capacidades separadas:
// - `SessionReader`: selectores + suscripciones (solo lectura)
// - `SessionDispatcher`: despacho de acciones (solo el flujo de login/toolbar)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::{Rc, Weak};

use crate::errors::SessionError;
use crate::models::{PatientId, Role};
use crate::state::selectors::{self, Selector};
use crate::state::{reduce, LoginOutcome, SessionAction, SessionState};

type Listener = Rc<dyn Fn(&SessionState)>;

struct ListenerEntry {
    /// Último commit ya confirmado al suscribirse; no se le entrega nada anterior
    since: u64,
    listener: Listener,
}

struct StoreInner {
    state: RefCell<SessionState>,
    /// Número del último commit
    seq: Cell<u64>,
    listeners: RefCell<BTreeMap<u64, ListenerEntry>>,
    next_listener_id: Cell<u64>,
    /// Snapshots confirmados pendientes de entregar, en orden de commit
    pending: RefCell<VecDeque<(u64, SessionState)>>,
    delivering: Cell<bool>,
}

impl StoreInner {
    fn dispatch(&self, action: SessionAction) -> Result<(), SessionError> {
        let next = {
            let current = self.state.borrow();
            match reduce(&current, &action) {
                Ok(next) if next == *current => {
                    log::debug!("🔁 [SESSION] {} sin cambios", action.name());
                    return Ok(());
                }
                Ok(next) => next,
                Err(e) => {
                    log::warn!("⚠️ [SESSION] {} rechazada: {}", action.name(), e);
                    return Err(e);
                }
            }
        };
        debug_assert!(next.holds_invariant());

        log::info!(
            "🔐 [SESSION] {} → rol={}, paciente={:?}",
            action.name(),
            next.role,
            next.patient_id.map(|id| id.get())
        );
        let seq = self.seq.get() + 1;
        self.seq.set(seq);
        *self.state.borrow_mut() = next.clone();
        self.pending.borrow_mut().push_back((seq, next));
        self.deliver();
        Ok(())
    }

    /// Entrega los snapshots pendientes. Un dispatch hecho desde un listener
    /// se confirma en el acto, pero su notificación espera en la cola hasta
    /// que todos los listeners hayan visto el snapshot anterior. Un listener
    /// registrado durante la ronda solo recibe commits posteriores a su alta.
    fn deliver(&self) {
        if self.delivering.replace(true) {
            return;
        }
        loop {
            let Some((seq, snapshot)) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            let ids: Vec<u64> = self.listeners.borrow().keys().copied().collect();
            for id in ids {
                // Un listener dado de baja a mitad de ronda ya no recibe nada
                let listener = self
                    .listeners
                    .borrow()
                    .get(&id)
                    .filter(|entry| seq > entry.since)
                    .map(|entry| entry.listener.clone());
                if let Some(listener) = listener {
                    listener(&snapshot);
                }
            }
        }
        self.delivering.set(false);
    }

    fn add_listener(&self, listener: Listener) -> u64 {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        let since = self.seq.get();
        self.listeners.borrow_mut().insert(id, ListenerEntry { since, listener });
        id
    }
}

/// Propietario del estado de sesión (raíz de composición)
pub struct SessionStore {
    inner: Rc<StoreInner>,
}

impl SessionStore {
    /// Crear store con el estado inicial (sin autenticar)
    pub fn new() -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(SessionState::new()),
                seq: Cell::new(0),
                listeners: RefCell::new(BTreeMap::new()),
                next_listener_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
            }),
        }
    }

    /// Capacidad de lectura/suscripción
    pub fn reader(&self) -> SessionReader {
        SessionReader {
            inner: self.inner.clone(),
        }
    }

    /// Capacidad de escritura (solo vía acciones)
    pub fn dispatcher(&self) -> SessionDispatcher {
        SessionDispatcher {
            inner: self.inner.clone(),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Lectura y suscripción al estado de sesión
#[derive(Clone)]
pub struct SessionReader {
    inner: Rc<StoreInner>,
}

impl PartialEq for SessionReader {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionReader {
    /// Evalúa un selector sobre el estado confirmado actual
    pub fn select<T>(&self, selector: Selector<T>) -> T {
        selector(&self.inner.state.borrow())
    }

    pub fn current_role(&self) -> Role {
        self.select(selectors::current_role)
    }

    pub fn current_patient_id(&self) -> Option<PatientId> {
        self.select(selectors::current_patient_id)
    }

    /// Suscribirse a cada estado confirmado. La baja ocurre al soltar el `Subscription`.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionState) + 'static,
    {
        let id = self.inner.add_listener(Rc::new(listener));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Suscribirse a una proyección: `callback` solo se llama cuando su valor cambia
    pub fn subscribe_select<T, F>(&self, selector: Selector<T>, callback: F) -> Subscription
    where
        T: PartialEq + Clone + 'static,
        F: Fn(T) + 'static,
    {
        let last = RefCell::new(self.select(selector));
        self.subscribe(move |state| {
            let value = selector(state);
            let previous = last.replace(value.clone());
            if previous != value {
                callback(value);
            }
        })
    }
}

/// Despacho de acciones de sesión
#[derive(Clone)]
pub struct SessionDispatcher {
    inner: Rc<StoreInner>,
}

impl PartialEq for SessionDispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionDispatcher {
    /// Aplica la acción; si el reducer la rechaza el estado no cambia
    pub fn dispatch(&self, action: SessionAction) -> Result<(), SessionError> {
        self.inner.dispatch(action)
    }

    /// Despacha el par `SetRole` / `SetPatientId` de un login, en orden
    pub fn dispatch_login(&self, outcome: &LoginOutcome) -> Result<(), SessionError> {
        for action in outcome.actions() {
            self.dispatch(action)?;
        }
        Ok(())
    }
}

/// Suscripción activa; soltarla da de baja al listener
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.listeners.borrow_mut().remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Rc<RefCell<Vec<(Role, Option<i64>)>>>;

    fn record(reader: &SessionReader, log: &Log) -> Subscription {
        let log = log.clone();
        reader.subscribe(move |state| {
            log.borrow_mut().push((
                selectors::current_role(state),
                selectors::current_patient_id(state).map(|id| id.get()),
            ));
        })
    }

    #[test]
    fn patient_login_is_observed_role_then_id() {
        let store = SessionStore::new();
        let log: Log = Rc::default();
        let _sub = record(&store.reader(), &log);

        store
            .dispatcher()
            .dispatch_login(&LoginOutcome::patient(PatientId::new(7).unwrap()))
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec![(Role::Patient, None), (Role::Patient, Some(7))]
        );
        assert_eq!(store.reader().current_patient_id(), PatientId::new(7));
    }

    #[test]
    fn rejected_action_is_reported_and_not_broadcast() {
        let store = SessionStore::new();
        let dispatcher = store.dispatcher();
        dispatcher.dispatch(SessionAction::SetRole(Role::Professional)).unwrap();

        let log: Log = Rc::default();
        let _sub = record(&store.reader(), &log);

        let err = dispatcher.dispatch(SessionAction::SetPatientId(7)).unwrap_err();
        assert!(matches!(err, SessionError::PatientIdWithoutPatientRole { .. }));
        assert!(log.borrow().is_empty());
        assert_eq!(store.reader().current_role(), Role::Professional);
        assert_eq!(store.reader().current_patient_id(), None);
    }

    #[test]
    fn repeated_role_is_broadcast_once() {
        let store = SessionStore::new();
        let log: Log = Rc::default();
        let _sub = record(&store.reader(), &log);

        let dispatcher = store.dispatcher();
        dispatcher.dispatch(SessionAction::SetRole(Role::Professional)).unwrap();
        dispatcher.dispatch(SessionAction::SetRole(Role::Professional)).unwrap();

        assert_eq!(*log.borrow(), vec![(Role::Professional, None)]);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let store = SessionStore::new();
        let log: Log = Rc::default();
        let sub = record(&store.reader(), &log);

        store.dispatcher().dispatch(SessionAction::SetRole(Role::Patient)).unwrap();
        sub.unsubscribe();
        store.dispatcher().dispatch(SessionAction::SetPatientId(3)).unwrap();

        assert_eq!(*log.borrow(), vec![(Role::Patient, None)]);
    }

    #[test]
    fn reentrant_dispatch_keeps_commit_order_for_every_listener() {
        let store = SessionStore::new();
        let reader = store.reader();

        // El primer listener completa el login en cuanto ve el rol de paciente
        let dispatcher = store.dispatcher();
        let _completer = reader.subscribe(move |state| {
            if selectors::current_role(state) == Role::Patient
                && selectors::current_patient_id(state).is_none()
            {
                dispatcher.dispatch(SessionAction::SetPatientId(11)).unwrap();
            }
        });
        let log: Log = Rc::default();
        let _sub = record(&reader, &log);

        store.dispatcher().dispatch(SessionAction::SetRole(Role::Patient)).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![(Role::Patient, None), (Role::Patient, Some(11))]
        );
    }

    #[test]
    fn listener_removed_mid_round_is_skipped() {
        let store = SessionStore::new();
        let reader = store.reader();
        let log: Log = Rc::default();

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let _killer = {
            let victim = victim.clone();
            reader.subscribe(move |_| {
                victim.borrow_mut().take();
            })
        };
        *victim.borrow_mut() = Some(record(&reader, &log));

        store.dispatcher().dispatch(SessionAction::SetRole(Role::Professional)).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn subscribe_select_is_distinct_until_changed() {
        let store = SessionStore::new();
        let roles = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let roles = roles.clone();
            store
                .reader()
                .subscribe_select(selectors::current_role, move |role| roles.borrow_mut().push(role))
        };

        let dispatcher = store.dispatcher();
        dispatcher.dispatch(SessionAction::SetRole(Role::Patient)).unwrap();
        dispatcher.dispatch(SessionAction::SetPatientId(5)).unwrap();
        dispatcher.dispatch(SessionAction::SetRole(Role::Professional)).unwrap();
        dispatcher.dispatch(SessionAction::SignOut).unwrap();

        assert_eq!(
            *roles.borrow(),
            vec![Role::Patient, Role::Professional, Role::Unauthenticated]
        );
    }

    #[test]
    fn listener_added_mid_round_starts_at_its_own_state() {
        let store = SessionStore::new();
        let reader = store.reader();
        let roles = Rc::new(RefCell::new(Vec::new()));
        let late: Rc<RefCell<Option<Subscription>>> = Rc::default();

        // Al ver el rol de paciente: dos commits más y una suscripción nueva
        let _driver = {
            let dispatcher = store.dispatcher();
            let observer = reader.clone();
            let roles = roles.clone();
            let late = late.clone();
            let done = Cell::new(false);
            reader.subscribe(move |state| {
                if selectors::current_role(state) != Role::Patient || done.replace(true) {
                    return;
                }
                dispatcher.dispatch(SessionAction::SetPatientId(5)).unwrap();
                dispatcher.dispatch(SessionAction::SetRole(Role::Professional)).unwrap();
                assert_eq!(observer.current_role(), Role::Professional);
                let roles = roles.clone();
                *late.borrow_mut() = Some(
                    observer.subscribe_select(selectors::current_role, move |role| roles.borrow_mut().push(role)),
                );
            })
        };

        store.dispatcher().dispatch(SessionAction::SetRole(Role::Patient)).unwrap();
        assert!(roles.borrow().is_empty());

        store.dispatcher().dispatch(SessionAction::SignOut).unwrap();
        assert_eq!(*roles.borrow(), vec![Role::Unauthenticated]);
    }

    #[test]
    fn stores_are_isolated() {
        let a = SessionStore::new();
        let b = SessionStore::new();
        a.dispatcher().dispatch(SessionAction::SetRole(Role::Professional)).unwrap();

        assert_eq!(a.reader().current_role(), Role::Professional);
        assert_eq!(b.reader().current_role(), Role::Unauthenticated);
        assert!(a.reader() != b.reader());
        assert!(a.reader() == a.reader());
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = SessionStore::new();
        let sub = store.reader().subscribe(|_| {});
        drop(store);
        drop(sub);
    }
}
