use serde::{Deserialize, Serialize};

/// A named waypoint along a train's route.
///
/// `distance` is measured from the route origin in the same unit as the
/// train's speed (km, km/h).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub distance: f64,
}

impl Stop {
    #[must_use]
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }
}
