use serde::{Deserialize, Serialize};

use super::{is_zero_f64, is_zero_i64};

/// Sensor readings grouped by category
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub temperature: Vec<TemperatureSensor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub carbondioxide: Vec<CarbonDioxideSensor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub door_locked: Vec<DoorLockedSensor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub barometer: Vec<BarometerSensor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub radiation: Option<RadiationSensors>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub humidity: Vec<HumiditySensor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub beverage_supply: Vec<BeverageSensor>,
}

impl Sensors {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
            && self.carbondioxide.is_empty()
            && self.door_locked.is_empty()
            && self.barometer.is_empty()
            && self.radiation.as_ref().map_or(true, RadiationSensors::is_empty)
            && self.humidity.is_empty()
            && self.beverage_supply.is_empty()
    }

    /// Every sensor's common fields, in category order.
    pub(crate) fn bases(&self) -> Vec<(&'static str, &SensorBase)> {
        let mut out: Vec<(&'static str, &SensorBase)> = Vec::new();
        out.extend(self.temperature.iter().map(|s| ("temperature", &s.base)));
        out.extend(self.carbondioxide.iter().map(|s| ("carbondioxide", &s.base)));
        out.extend(self.door_locked.iter().map(|s| ("door_locked", &s.base)));
        out.extend(self.barometer.iter().map(|s| ("barometer", &s.base)));
        if let Some(radiation) = &self.radiation {
            out.extend(radiation.all().map(|s| ("radiation", &s.base)));
        }
        out.extend(self.humidity.iter().map(|s| ("humidity", &s.base)));
        out.extend(self.beverage_supply.iter().map(|s| ("beverage_supply", &s.base)));
        out
    }

    /// Units of every sensor that carries one, in category order.
    pub(crate) fn units(&self) -> Vec<(&'static str, &str)> {
        let mut out: Vec<(&'static str, &str)> = Vec::new();
        out.extend(self.temperature.iter().map(|s| ("temperature", s.unit.as_str())));
        out.extend(self.carbondioxide.iter().map(|s| ("carbondioxide", s.unit.as_str())));
        out.extend(self.barometer.iter().map(|s| ("barometer", s.unit.as_str())));
        if let Some(radiation) = &self.radiation {
            out.extend(radiation.all().map(|s| ("radiation", s.unit.as_str())));
        }
        out.extend(self.humidity.iter().map(|s| ("humidity", s.unit.as_str())));
        out.extend(self.beverage_supply.iter().map(|s| ("beverage_supply", s.unit.as_str())));
        out
    }
}

/// Fields shared by every sensor entry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorBase {
    pub location: String, // Required

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "lastchange", skip_serializing_if = "is_zero_i64")]
    pub last_change: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureSensor {
    #[serde(flatten)]
    pub base: SensorBase,
    pub value: f64,   // Required
    pub unit: String, // Required
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonDioxideSensor {
    #[serde(flatten)]
    pub base: SensorBase,
    pub value: f64,   // Required
    pub unit: String, // Required
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorLockedSensor {
    #[serde(flatten)]
    pub base: SensorBase,
    pub value: bool, // Required
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarometerSensor {
    #[serde(flatten)]
    pub base: SensorBase,
    pub value: f64,   // Required
    pub unit: String, // Required
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumiditySensor {
    #[serde(flatten)]
    pub base: SensorBase,
    pub value: f64,   // Required
    pub unit: String, // Required
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeverageSensor {
    #[serde(flatten)]
    pub base: SensorBase,
    pub value: f64,   // Required
    pub unit: String, // Required
}

/// Radiation sensors by particle type
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiationSensors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alpha: Vec<RadiationSensor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub beta: Vec<RadiationSensor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gamma: Vec<RadiationSensor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub beta_gamma: Vec<RadiationSensor>,
}

impl RadiationSensors {
    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
            && self.beta.is_empty()
            && self.gamma.is_empty()
            && self.beta_gamma.is_empty()
    }

    fn all(&self) -> impl Iterator<Item = &RadiationSensor> {
        self.alpha
            .iter()
            .chain(&self.beta)
            .chain(&self.gamma)
            .chain(&self.beta_gamma)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiationSensor {
    #[serde(flatten)]
    pub base: SensorBase,
    pub value: f64,   // Required
    pub unit: String, // Required

    #[serde(skip_serializing_if = "is_zero_f64")]
    pub dead_time: f64,

    #[serde(skip_serializing_if = "is_zero_f64")]
    pub conversion_factor: f64,
}
