//! Selection and presentation state.
//!
//! Tracks which mode a user has picked from a comparison, whether that pick
//! is waiting on a green-alternative confirmation, and the carpool context
//! used to split driving emissions per person. Rendering is left to the
//! caller; this module only owns the transitions.

mod error;
mod policy;

pub use error::SelectionError;
pub use policy::{ConfirmationPolicy, GreenAlternative, green_alternative};

use crate::domain::{ModeId, RouteResult};
use crate::planner::rank_routes;

/// Largest carpool size, driver included.
pub const MAX_PASSENGERS: u8 = 8;

/// What the user is currently looking at.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Every route is shown; nothing is selected.
    AllVisible,

    /// A high-emission mode was picked and a greener alternative is offered.
    PendingConfirmation {
        mode: ModeId,
        alternative: GreenAlternative,
    },

    /// One mode is selected and shown on its own.
    ModeSelected { mode: ModeId },
}

/// Carpool adjustment for the driving route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarpoolState {
    pub carpooling: bool,

    /// People sharing the car, driver included.
    pub passengers: u8,
}

impl Default for CarpoolState {
    fn default() -> Self {
        Self {
            carpooling: false,
            passengers: 1,
        }
    }
}

/// Per-user selection session over one set of route results.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    routes: Vec<RouteResult>,
    view: ViewState,
    carpool: CarpoolState,
    policy: ConfirmationPolicy,
}

impl SelectionSession {
    pub fn new(routes: Vec<RouteResult>) -> Self {
        Self::with_policy(routes, ConfirmationPolicy::default())
    }

    pub fn with_policy(routes: Vec<RouteResult>, policy: ConfirmationPolicy) -> Self {
        Self {
            routes,
            view: ViewState::AllVisible,
            carpool: CarpoolState::default(),
            policy,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn carpool(&self) -> CarpoolState {
        self.carpool
    }

    pub fn routes(&self) -> &[RouteResult] {
        &self.routes
    }

    /// The committed selection, if any.
    pub fn selected(&self) -> Option<&RouteResult> {
        match &self.view {
            ViewState::ModeSelected { mode } => self.find(mode),
            _ => None,
        }
    }

    /// Pick a mode.
    ///
    /// High-emission picks with a greener alternative open a confirmation
    /// prompt; everything else is selected immediately. Picking is allowed
    /// from the overview or while another mode is selected.
    pub fn select(&mut self, mode: &ModeId) -> Result<&ViewState, SelectionError> {
        if matches!(self.view, ViewState::PendingConfirmation { .. }) {
            return Err(SelectionError::ConfirmationPending);
        }

        let route = self
            .find(mode)
            .ok_or_else(|| SelectionError::UnknownMode(mode.clone()))?;

        match green_alternative(&self.routes, route, &self.policy) {
            Some(alternative) => {
                tracing::debug!(%mode, alternative = %alternative.mode, "offering greener alternative");
                self.view = ViewState::PendingConfirmation {
                    mode: mode.clone(),
                    alternative,
                };
            }
            None => self.commit(mode.clone()),
        }

        Ok(&self.view)
    }

    /// Keep the mode that opened the prompt.
    pub fn continue_anyway(&mut self) -> Result<&ViewState, SelectionError> {
        let ViewState::PendingConfirmation { mode, .. } = &self.view else {
            return Err(SelectionError::NoPendingConfirmation);
        };
        let mode = mode.clone();
        self.commit(mode);
        Ok(&self.view)
    }

    /// Dismiss the prompt and go back to the overview.
    pub fn choose_different(&mut self) -> Result<&ViewState, SelectionError> {
        if !matches!(self.view, ViewState::PendingConfirmation { .. }) {
            return Err(SelectionError::NoPendingConfirmation);
        }
        self.view = ViewState::AllVisible;
        Ok(&self.view)
    }

    /// Back to the overview from any state.
    pub fn reset(&mut self) {
        self.view = ViewState::AllVisible;
    }

    /// Swap in the results of a new query.
    ///
    /// A selected mode that is still present stays selected; otherwise the
    /// session returns to the overview. An open prompt is dropped.
    pub fn replace_routes(&mut self, routes: Vec<RouteResult>) {
        self.routes = routes;

        let was_driving = self.is_driving_selected();
        let still_present = match &self.view {
            ViewState::ModeSelected { mode } => self.find(mode).is_some(),
            _ => false,
        };

        if !still_present {
            self.view = ViewState::AllVisible;
            if was_driving {
                self.carpool = CarpoolState::default();
            }
        }
    }

    /// Turn carpooling on or off. Turning it off returns to one passenger.
    pub fn set_carpooling(&mut self, carpooling: bool) -> Result<CarpoolState, SelectionError> {
        if !self.is_driving_selected() {
            return Err(SelectionError::NotDriving);
        }
        self.carpool.carpooling = carpooling;
        if !carpooling {
            self.carpool.passengers = 1;
        }
        Ok(self.carpool)
    }

    /// Set how many people share the car.
    pub fn set_passengers(&mut self, passengers: u8) -> Result<CarpoolState, SelectionError> {
        if !self.is_driving_selected() {
            return Err(SelectionError::NotDriving);
        }
        if !(1..=MAX_PASSENGERS).contains(&passengers) {
            return Err(SelectionError::PassengersOutOfRange(passengers));
        }
        self.carpool.passengers = passengers;
        self.carpool.carpooling = passengers > 1;
        Ok(self.carpool)
    }

    /// Emissions of the selected route split across the carpool.
    pub fn per_person_carbon_kg(&self) -> Option<f64> {
        let route = self.selected()?;
        let passengers = if route.mode.is_driving() {
            self.carpool.passengers
        } else {
            1
        };
        Some(route.carbon_kg / f64::from(passengers))
    }

    /// Routes to show: all of them, lowest carbon first, until a mode is
    /// selected, then only that one.
    pub fn visible_routes(&self) -> Vec<RouteResult> {
        match self.selected() {
            Some(route) => vec![route.clone()],
            None => rank_routes(self.routes.clone()),
        }
    }

    fn find(&self, mode: &ModeId) -> Option<&RouteResult> {
        self.routes.iter().find(|r| &r.mode == mode)
    }

    fn is_driving_selected(&self) -> bool {
        matches!(&self.view, ViewState::ModeSelected { mode } if mode.is_driving())
    }

    fn commit(&mut self, mode: ModeId) {
        if !mode.is_driving() {
            self.carpool = CarpoolState::default();
        }
        self.view = ViewState::ModeSelected { mode };
    }
}
