//! Vehicle classification.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The closed set of vehicle categories the facility accepts.
///
/// Parsing from wire or database text is fallible; an unrecognised value
/// is [`CoreError::UnknownVehicleType`], never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Bike,
}

impl VehicleType {
    /// All accepted vehicle types, in display order.
    pub const ALL: [VehicleType; 2] = [Self::Car, Self::Bike];

    /// Stable lowercase name, used for database storage and query params.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            _ => Err(CoreError::UnknownVehicleType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_known_types_case_insensitively() {
        assert_eq!("car".parse::<VehicleType>().unwrap(), VehicleType::Car);
        assert_eq!("BIKE".parse::<VehicleType>().unwrap(), VehicleType::Bike);
    }

    #[test]
    fn rejects_unknown_type() {
        let err = "truck".parse::<VehicleType>().unwrap_err();
        assert_matches!(err, CoreError::UnknownVehicleType(s) if s == "truck");
    }

    #[test]
    fn name_round_trips() {
        for vehicle_type in VehicleType::ALL {
            assert_eq!(
                vehicle_type.as_str().parse::<VehicleType>().unwrap(),
                vehicle_type
            );
        }
    }
}
