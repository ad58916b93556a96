//! The application store: session, appointments and health metrics.
//!
//! A single [`AppStore`] is constructed at process start and handed to every
//! consumer that needs it. Mutations replace in-memory lists wholesale and
//! then persist; a failed write on the append/cancel paths is logged and
//! swallowed, leaving memory ahead of storage until the next successful
//! write. Only `login`/`signup` report persistence failure, as a `false`
//! return.

pub mod ids;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::model::{
    Appointment, AppointmentStatus, HealthMetric, HealthRecord, LabResult, MetricKind, User,
    UserRole,
};
use crate::seed;
use crate::storage::{keys, StorageAdapter};

const PATIENT_AVATAR: &str = "https://i.pravatar.cc/150?img=12";
const DOCTOR_AVATAR: &str = "https://i.pravatar.cc/150?img=1";
const DEMO_PHONE: &str = "+1 234 567 8900";

#[derive(Debug, Default)]
struct AppState {
    current_user: Option<User>,
    appointments: Vec<Appointment>,
    health_metrics: Vec<HealthMetric>,
}

pub struct AppStore<S> {
    adapter: S,
    state: RwLock<AppState>,
    loading: AtomicBool,
    lab_results: Vec<LabResult>,
    health_records: Vec<HealthRecord>,
}

impl<S: StorageAdapter> AppStore<S> {
    pub fn new(adapter: S) -> Self {
        AppStore {
            adapter,
            state: RwLock::new(AppState::default()),
            loading: AtomicBool::new(true),
            lab_results: seed::lab_results(),
            health_records: seed::health_records(),
        }
    }

    /// Bootstrap: read the three persisted records, falling back per key.
    ///
    /// Each key is loaded independently; a read or decode failure on one
    /// does not abort the others. Seed fallbacks are in-memory only: nothing
    /// is written back until the first mutation. Clears the loading flag on
    /// completion regardless of partial failure.
    pub async fn load(&self) {
        let user = self.read_record::<User>(keys::USER).await;
        let appointments = self.read_record::<Vec<Appointment>>(keys::APPOINTMENTS).await;
        let metrics = self.read_record::<Vec<HealthMetric>>(keys::HEALTH_METRICS).await;

        {
            let mut state = self.state.write().unwrap();
            state.current_user = user;
            state.appointments = appointments.unwrap_or_else(|| {
                debug!("no persisted appointments, using seed data");
                seed::appointments()
            });
            state.health_metrics = metrics.unwrap_or_else(|| {
                debug!("no persisted health metrics, using seed data");
                seed::health_metrics()
            });
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    /// True until the first [`load`](Self::load) completes.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Establishes a session for `email`, returning false only if persisting
    /// the session record fails.
    ///
    /// The password is accepted but never checked, and no role matching is
    /// enforced here: a stored signup record wins regardless of the role the
    /// caller asked for. The UI is expected to compare the account's
    /// recorded role against the selected one before calling this. With no
    /// signup record on file, a deterministic demo user for `role` is
    /// synthesized so the client works without prior registration.
    pub async fn login(&self, email: &str, _password: &str, role: UserRole) -> bool {
        let user = match self.read_record::<User>(&keys::signup(email)).await {
            Some(stored) => stored,
            None => demo_user(email, role),
        };

        match self.persist(keys::USER, &user).await {
            Ok(()) => {
                self.state.write().unwrap().current_user = Some(user);
                true
            }
            Err(e) => {
                warn!(email, error = %e, "login could not persist session");
                false
            }
        }
    }

    /// Registers an account under the per-email signup key. Does not
    /// establish a session; the caller follows up with [`login`](Self::login).
    ///
    /// Pre-existing-email detection is the caller's job, via
    /// [`signup_record`](Self::signup_record).
    pub async fn signup(
        &self,
        email: &str,
        _password: &str,
        name: &str,
        role: UserRole,
        specialization: Option<&str>,
    ) -> bool {
        let user = match role {
            UserRole::Patient => User::Patient {
                id: ids::generate("patient"),
                email: email.to_string(),
                name: name.to_string(),
                phone: None,
                avatar: Some(PATIENT_AVATAR.to_string()),
            },
            UserRole::Doctor => User::Doctor {
                id: ids::generate("doctor"),
                email: email.to_string(),
                name: name.to_string(),
                phone: None,
                avatar: Some(DOCTOR_AVATAR.to_string()),
                specialization: specialization.unwrap_or("General Physician").to_string(),
                experience: 0,
                rating: 0.0,
            },
        };

        match self.persist(&keys::signup(email), &user).await {
            Ok(()) => true,
            Err(e) => {
                warn!(email, error = %e, "signup could not persist account record");
                false
            }
        }
    }

    /// The stored signup record for `email`, if any. The UI consults this
    /// before signup (email collision) and before login (role check).
    pub async fn signup_record(&self, email: &str) -> Option<User> {
        self.read_record::<User>(&keys::signup(email)).await
    }

    /// Clears the session. Signup records, appointments and metrics are
    /// untouched.
    pub async fn logout(&self) {
        if let Err(e) = self.adapter.delete(keys::USER).await {
            warn!(error = %e, "could not remove persisted session");
        }
        self.state.write().unwrap().current_user = None;
    }

    /// Appends unconditionally: no dedup, no id-collision check, no field
    /// validation. Id uniqueness is the caller's contract (see
    /// [`ids::generate`]).
    pub async fn add_appointment(&self, appointment: Appointment) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            let mut next = state.appointments.clone();
            next.push(appointment);
            state.appointments = next;
            state.appointments.clone()
        };
        if let Err(e) = self.persist(keys::APPOINTMENTS, &snapshot).await {
            warn!(error = %e, "appointment list not persisted; memory ahead of storage");
        }
    }

    /// Marks the matching appointment `Cancelled`, preserving order; silent
    /// no-op when no entry matches.
    ///
    /// No status guard: cancelling an already-completed or already-cancelled
    /// entry still forces `Cancelled`, indistinguishable from a first
    /// cancellation.
    pub async fn cancel_appointment(&self, id: &str) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            let next: Vec<Appointment> = state
                .appointments
                .iter()
                .cloned()
                .map(|apt| {
                    if apt.id == id {
                        Appointment {
                            status: AppointmentStatus::Cancelled,
                            ..apt
                        }
                    } else {
                        apt
                    }
                })
                .collect();
            state.appointments = next;
            state.appointments.clone()
        };
        if let Err(e) = self.persist(keys::APPOINTMENTS, &snapshot).await {
            warn!(error = %e, "appointment list not persisted; memory ahead of storage");
        }
    }

    /// Appends a reading, same unconditional semantics as
    /// [`add_appointment`](Self::add_appointment).
    pub async fn add_health_metric(&self, metric: HealthMetric) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            let mut next = state.health_metrics.clone();
            next.push(metric);
            state.health_metrics = next;
            state.health_metrics.clone()
        };
        if let Err(e) = self.persist(keys::HEALTH_METRICS, &snapshot).await {
            warn!(error = %e, "health metric list not persisted; memory ahead of storage");
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().unwrap().current_user.clone()
    }

    /// Role-filtered view: a patient sees appointments where they are the
    /// patient, a doctor those where they are the doctor, and a logged-out
    /// client sees nothing. Relative order follows the raw list.
    pub fn my_appointments(&self) -> Vec<Appointment> {
        let state = self.state.read().unwrap();
        let Some(user) = &state.current_user else {
            return Vec::new();
        };
        let uid = user.id();
        state
            .appointments
            .iter()
            .filter(|apt| match user.role() {
                UserRole::Patient => apt.patient_id == uid,
                UserRole::Doctor => apt.doctor_id == uid,
            })
            .cloned()
            .collect()
    }

    /// The raw, unfiltered appointment list.
    pub fn all_appointments(&self) -> Vec<Appointment> {
        self.state.read().unwrap().appointments.clone()
    }

    pub fn health_metrics(&self) -> Vec<HealthMetric> {
        self.state.read().unwrap().health_metrics.clone()
    }

    /// The most recently *appended* reading of `kind`.
    ///
    /// Insertion order, not date order: an entry appended later wins even if
    /// it carries an earlier date. Documented contract, not an accident.
    pub fn latest_metric(&self, kind: MetricKind) -> Option<HealthMetric> {
        self.state
            .read()
            .unwrap()
            .health_metrics
            .iter()
            .rev()
            .find(|m| m.kind == kind)
            .cloned()
    }

    pub fn lab_results(&self) -> &[LabResult] {
        &self.lab_results
    }

    pub fn health_records(&self) -> &[HealthRecord] {
        &self.health_records
    }

    async fn read_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.adapter.read(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, error = %e, "discarding undecodable record");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, treating key as absent");
                None
            }
        }
    }

    async fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.adapter.write(key, &raw).await?;
        Ok(())
    }
}

fn demo_user(email: &str, role: UserRole) -> User {
    match role {
        UserRole::Patient => User::Patient {
            id: "patient1".to_string(),
            email: email.to_string(),
            name: "John Doe".to_string(),
            phone: Some(DEMO_PHONE.to_string()),
            avatar: Some(PATIENT_AVATAR.to_string()),
        },
        UserRole::Doctor => User::Doctor {
            id: "doctor1".to_string(),
            email: email.to_string(),
            name: "Dr. Sarah Johnson".to_string(),
            phone: Some(DEMO_PHONE.to_string()),
            avatar: Some(DOCTOR_AVATAR.to_string()),
            specialization: "Cardiologist".to_string(),
            experience: 12,
            rating: 4.8,
        },
    }
}
