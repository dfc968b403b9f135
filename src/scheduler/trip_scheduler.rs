//! Trip scheduler state machine.

use std::fmt;

use tracing::{debug, info, warn};

use super::{Console, FleetCapacity};
use crate::error::{RejectReason, RoutingError, ValidationError};
use crate::models::{Location, TripFailure, TripRequest, TripResult, VehicleLabel};
use crate::network::{RoadGraph, RoadNetwork};
use crate::report::Locale;
use crate::routing::Router;

/// Phase of a simulation cycle.
///
/// `Configuring → Running → Reported`, and back to `Configuring` only
/// through [`TripScheduler::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulerState {
    /// Accepting capacity and trip requests.
    Configuring,
    /// Routing the pending requests.
    Running,
    /// Results are available.
    Reported,
}

impl fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SchedulerState::Configuring => "configuring",
            SchedulerState::Running => "running",
            SchedulerState::Reported => "reported",
        })
    }
}

/// Assigns trip requests to a bounded fleet and simulates them.
///
/// Vehicles are numbered by submission order. Every accepted request and
/// every rejected operation writes exactly one line to the console; a
/// successful run writes the results block.
///
/// # Examples
///
/// ```
/// use fleet_routing::network::RoadNetwork;
/// use fleet_routing::scheduler::TripScheduler;
///
/// let net = RoadNetwork::default_map();
/// let mut scheduler = TripScheduler::new(&net);
/// scheduler.set_capacity(2).unwrap();
/// scheduler.submit_request("A", "J").unwrap();
/// scheduler.submit_request("C", "D").unwrap();
///
/// let results = scheduler.run_simulation().unwrap();
/// assert_eq!(results[0].total_distance(), 2);
/// assert_eq!(results[1].total_distance(), 26);
/// assert_eq!(
///     scheduler.console().last().unwrap(),
///     "Vehicle 1 viajó de A a J. Distancia: 26 km"
/// );
/// ```
pub struct TripScheduler<'n, C = Vec<String>> {
    router: Router<'n, RoadNetwork>,
    network: &'n RoadNetwork,
    capacity: FleetCapacity,
    locale: Locale,
    state: SchedulerState,
    pending: Vec<TripRequest>,
    results: Vec<TripResult>,
    failures: Vec<TripFailure>,
    console: C,
}

impl<'n> TripScheduler<'n> {
    /// Creates a scheduler that collects its lines in a `Vec<String>`.
    pub fn new(network: &'n RoadNetwork) -> Self {
        Self::with_console(network, Vec::new())
    }
}

impl<'n, C: Console> TripScheduler<'n, C> {
    /// Creates a scheduler writing to `console`.
    ///
    /// Starts in [`SchedulerState::Configuring`] with capacity 1 and Spanish
    /// lines.
    pub fn with_console(network: &'n RoadNetwork, console: C) -> Self {
        Self {
            router: Router::new(network),
            network,
            capacity: FleetCapacity::default(),
            locale: Locale::default(),
            state: SchedulerState::Configuring,
            pending: Vec::new(),
            results: Vec::new(),
            failures: Vec::new(),
            console,
        }
    }

    /// Sets the language of the console lines.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the fleet size for this cycle.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NotConfiguring`] outside the configuring phase
    /// - [`ValidationError::CapacityOutOfRange`] outside `1..=5`
    /// - [`ValidationError::CapacityBelowPending`] if more requests than
    ///   `requested` were already accepted
    pub fn set_capacity(&mut self, requested: i64) -> Result<(), ValidationError> {
        self.ensure_configuring()?;
        let capacity = match FleetCapacity::new(requested) {
            Ok(capacity) => capacity,
            Err(e) => return self.reject(e),
        };
        if self.pending.len() > usize::from(capacity.get()) {
            return self.reject(ValidationError::CapacityBelowPending {
                requested: capacity.get(),
                pending: self.pending.len(),
            });
        }
        debug!("fleet capacity set to {capacity}");
        self.capacity = capacity;
        Ok(())
    }

    /// Queues a trip for the next free vehicle.
    ///
    /// Labels are trimmed; a blank label counts as missing.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NotConfiguring`] outside the configuring phase
    /// - [`RejectReason::MissingEndpoint`] for a blank origin or destination
    /// - [`RejectReason::UnknownLocation`] for a label not on the map
    /// - [`RejectReason::FleetFull`] once every vehicle has a trip
    pub fn submit_request(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> Result<VehicleLabel, ValidationError> {
        self.ensure_configuring()?;

        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() || destination.is_empty() {
            return self.reject(RejectReason::MissingEndpoint.into());
        }
        for label in [origin, destination] {
            if !self.network.contains(label) {
                let unknown = RoutingError::UnknownLocation(Location::from(label));
                return self.reject(RejectReason::UnknownLocation(unknown).into());
            }
        }
        if self.pending.len() >= usize::from(self.capacity.get()) {
            return self.reject(
                RejectReason::FleetFull {
                    capacity: self.capacity.get(),
                }
                .into(),
            );
        }

        let vehicle = VehicleLabel::new(self.pending.len() + 1);
        let request = TripRequest::new(vehicle, Location::from(origin), Location::from(destination));
        debug!("{vehicle} assigned {origin} -> {destination}");
        self.console.write_line(self.locale.assigned(&request));
        self.pending.push(request);
        Ok(vehicle)
    }

    /// Routes every pending request and reports the completed trips.
    ///
    /// Requests are routed in submission order. A request whose destination
    /// cannot be reached is recorded in [`failures`](Self::failures) and does
    /// not stop the others. Completed trips are sorted by ascending distance;
    /// equal distances keep submission order.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NotConfiguring`] outside the configuring phase
    /// - [`ValidationError::IncompleteFleet`] if some vehicle has no trip;
    ///   nothing is routed in that case
    pub fn run_simulation(&mut self) -> Result<&[TripResult], ValidationError> {
        self.ensure_configuring()?;
        if self.pending.len() < usize::from(self.capacity.get()) {
            return self.reject(ValidationError::IncompleteFleet {
                pending: self.pending.len(),
                capacity: self.capacity.get(),
            });
        }

        self.state = SchedulerState::Running;
        self.results.clear();
        self.failures.clear();
        debug!("routing {} trips", self.pending.len());

        for request in &self.pending {
            match self
                .router
                .route(request.origin().as_str(), request.destination().as_str())
            {
                Ok(found) => self.results.push(TripResult::new(
                    request.clone(),
                    found.path,
                    found.total_distance,
                )),
                Err(error) => {
                    warn!("{}: {error}", request.vehicle());
                    self.failures.push(TripFailure::new(request.clone(), error));
                }
            }
        }

        self.results.sort_by_key(TripResult::total_distance);

        self.console
            .write_line(self.locale.results_header().to_owned());
        for result in &self.results {
            self.console.write_line(self.locale.travelled(result));
        }
        for failure in &self.failures {
            self.console.write_line(self.locale.trip_failed(failure));
        }

        self.state = SchedulerState::Reported;
        info!(
            completed = self.results.len(),
            failed = self.failures.len(),
            "simulation finished"
        );
        Ok(&self.results)
    }

    /// Returns to [`SchedulerState::Configuring`] for a new cycle.
    ///
    /// Drops pending requests, results, and failures. Capacity and locale
    /// are kept.
    pub fn reset(&mut self) {
        debug!("scheduler reset from {}", self.state);
        self.pending.clear();
        self.results.clear();
        self.failures.clear();
        self.state = SchedulerState::Configuring;
    }

    /// Completed trips from shortest to longest. Empty before a run.
    pub fn results(&self) -> &[TripResult] {
        &self.results
    }

    /// Trips of the last run that found no route.
    pub fn failures(&self) -> &[TripFailure] {
        &self.failures
    }

    /// Accepted requests, in submission order.
    pub fn pending(&self) -> &[TripRequest] {
        &self.pending
    }

    /// Current phase.
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Current fleet size.
    pub fn capacity(&self) -> FleetCapacity {
        self.capacity
    }

    /// Language of the console lines.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The console lines were written to.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console, e.g. to drain collected lines.
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    fn ensure_configuring(&mut self) -> Result<(), ValidationError> {
        match self.state {
            SchedulerState::Configuring => Ok(()),
            state => self.reject(ValidationError::NotConfiguring(state)),
        }
    }

    fn reject<T>(&mut self, error: ValidationError) -> Result<T, ValidationError> {
        warn!("{error}");
        self.console.write_line(self.locale.rejection(&error));
        Err(error)
    }
}
