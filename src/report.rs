//! Human-readable lines for the display layer.
//!
//! The scheduler never formats text itself; it asks a [`Locale`] for the
//! line matching each event and hands it to its console.

use serde::{Deserialize, Serialize};

use crate::error::{RejectReason, RoutingError, ValidationError};
use crate::models::{TripFailure, TripRequest, TripResult};
use crate::scheduler::{SchedulerState, MAX_CAPACITY, MIN_CAPACITY};

/// Language of the display lines.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Location, TripRequest, VehicleLabel};
/// use fleet_routing::report::Locale;
///
/// let req = TripRequest::new(VehicleLabel::new(1), Location::from("A"), Location::from("D"));
/// assert_eq!(
///     Locale::Spanish.assigned(&req),
///     "Vehicle 1 tiene asignado el viaje de A a D."
/// );
/// assert_eq!(
///     Locale::English.assigned(&req),
///     "Vehicle 1 is assigned the trip from A to D."
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish.
    #[default]
    Spanish,
    /// English.
    English,
}

impl Locale {
    /// Confirmation for an accepted request.
    pub fn assigned(&self, request: &TripRequest) -> String {
        let (v, o, d) = (request.vehicle(), request.origin(), request.destination());
        match self {
            Locale::Spanish => format!("{v} tiene asignado el viaje de {o} a {d}."),
            Locale::English => format!("{v} is assigned the trip from {o} to {d}."),
        }
    }

    /// First line of the results block.
    pub fn results_header(&self) -> &'static str {
        match self {
            Locale::Spanish => "Resultados de los viajes:",
            Locale::English => "Trip results:",
        }
    }

    /// One completed trip.
    pub fn travelled(&self, result: &TripResult) -> String {
        let (v, o, d) = (result.vehicle(), result.origin(), result.destination());
        let km = result.total_distance();
        match self {
            Locale::Spanish => format!("{v} viajó de {o} a {d}. Distancia: {km} km"),
            Locale::English => format!("{v} traveled from {o} to {d}. Distance: {km} km"),
        }
    }

    /// One trip that could not be routed.
    pub fn trip_failed(&self, failure: &TripFailure) -> String {
        let request = failure.request();
        let (v, o, d) = (request.vehicle(), request.origin(), request.destination());
        match self {
            Locale::Spanish => format!("{v} no encontró una ruta de {o} a {d}."),
            Locale::English => format!("{v} found no route from {o} to {d}."),
        }
    }

    /// Explanation for a rejected operation.
    pub fn rejection(&self, error: &ValidationError) -> String {
        match error {
            ValidationError::CapacityOutOfRange { .. } => match self {
                Locale::Spanish => {
                    format!("El número de autos debe estar entre {MIN_CAPACITY} y {MAX_CAPACITY}.")
                }
                Locale::English => {
                    format!("The number of vehicles must be between {MIN_CAPACITY} and {MAX_CAPACITY}.")
                }
            },
            ValidationError::CapacityBelowPending { pending, .. } => match self {
                Locale::Spanish => format!(
                    "Ya hay {pending} viajes asignados; el número de autos no puede ser menor."
                ),
                Locale::English => format!(
                    "{pending} trips are already assigned; the number of vehicles cannot be lower."
                ),
            },
            ValidationError::RequestRejected(reason) => self.request_rejection(reason),
            ValidationError::IncompleteFleet { .. } => match self {
                Locale::Spanish => "No se han asignado viajes a todos los autos.".to_owned(),
                Locale::English => "Not every vehicle has a trip assigned.".to_owned(),
            },
            ValidationError::NotConfiguring(state) => match (self, state) {
                (Locale::Spanish, SchedulerState::Running) => {
                    "La simulación está en curso.".to_owned()
                }
                (Locale::Spanish, _) => {
                    "La simulación ya terminó; reinicie para configurar un nuevo ciclo.".to_owned()
                }
                (Locale::English, SchedulerState::Running) => {
                    "The simulation is running.".to_owned()
                }
                (Locale::English, _) => {
                    "The simulation has finished; reset to configure a new cycle.".to_owned()
                }
            },
        }
    }

    fn request_rejection(&self, reason: &RejectReason) -> String {
        match reason {
            RejectReason::MissingEndpoint => match self {
                Locale::Spanish => "Por favor seleccione una ciudad de origen y destino.".to_owned(),
                Locale::English => "Please select an origin and a destination.".to_owned(),
            },
            RejectReason::FleetFull { .. } => match self {
                Locale::Spanish => "Ya se han asignado todos los autos.".to_owned(),
                Locale::English => "Every vehicle already has a trip.".to_owned(),
            },
            RejectReason::UnknownLocation(RoutingError::UnknownLocation(location)) => match self {
                Locale::Spanish => format!("La ciudad {location} no existe en el mapa."),
                Locale::English => format!("{location} is not on the map."),
            },
            RejectReason::UnknownLocation(RoutingError::NoRoute { start, end }) => match self {
                Locale::Spanish => format!("No existe una ruta de {start} a {end}."),
                Locale::English => format!("There is no route from {start} to {end}."),
            },
        }
    }
}
