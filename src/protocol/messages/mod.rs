//! Decoded PGN structures for the curated registry (`protocol::registry`) and
//! the [`Value`] tagged union the dispatcher hands to subscribers. Every
//! struct here drives the generic engine in `infra::codec::engine` through
//! [`FieldAccess`]/[`PgnData`] rather than hand-rolling its own bit reads.
use crate::core::{PgnBytes, PgnValue};
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::engine;
use crate::infra::codec::traits::{FieldAccess, PgnData};
use crate::protocol::registry;

/// Maximum reference stations carried by a PGN 129029 reading, mirroring the
/// registry's `max_repetitions` for that repeating field set.
const MAX_REFERENCE_STATIONS: usize = 4;

//==================================================================================127251
/// PGN 127251 – Rate of Turn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RateOfTurn {
    pub sid: u8,
    /// Angular rate about the vertical axis, rad/s. `None` when the sender
    /// reports the sentinel "data not available" pattern.
    pub rate: Option<f64>,
}

impl RateOfTurn {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldAccess for RateOfTurn {
    fn field(&self, id: &'static str) -> Option<PgnValue> {
        match id {
            "Sid" => Some(PgnValue::U8(self.sid)),
            "Rate" => Some(match self.rate {
                Some(v) => PgnValue::F64(v),
                None => PgnValue::Null,
            }),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: PgnValue) -> Option<()> {
        match id {
            "Sid" => match value {
                PgnValue::U8(v) => {
                    self.sid = v;
                    Some(())
                }
                _ => None,
            },
            "Rate" => match value {
                PgnValue::F64(v) => {
                    self.rate = Some(v);
                    Some(())
                }
                PgnValue::Null => {
                    self.rate = None;
                    Some(())
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl PgnData for RateOfTurn {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut instance = Self::new();
        engine::deserialize_into(&mut instance, payload, &registry::PGN_127251[0])?;
        Ok(instance)
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        engine::serialize(self, buffer, &registry::PGN_127251[0])
    }
}

//==================================================================================127489
/// PGN 127489 – Engine Parameters, Dynamic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineParametersDynamic {
    pub instance: u8,
    pub oil_pressure: Option<f32>,
    pub oil_temperature: Option<f32>,
    pub alternator_voltage: Option<f32>,
    pub fuel_rate: Option<f32>,
    pub engine_hours: Option<f32>,
    pub discrete_status1: u16,
    pub percent_engine_load: Option<i8>,
    pub percent_engine_torque: Option<i8>,
}

impl EngineParametersDynamic {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldAccess for EngineParametersDynamic {
    fn field(&self, id: &'static str) -> Option<PgnValue> {
        match id {
            "Instance" => Some(PgnValue::U8(self.instance)),
            "OilPressure" => Some(opt_f32(self.oil_pressure)),
            "OilTemperature" => Some(opt_f32(self.oil_temperature)),
            "AlternatorVoltage" => Some(opt_f32(self.alternator_voltage)),
            "FuelRate" => Some(opt_f32(self.fuel_rate)),
            "EngineHours" => Some(opt_f32(self.engine_hours)),
            "DiscreteStatus1" => Some(PgnValue::U16(self.discrete_status1)),
            "PercentEngineLoad" => Some(match self.percent_engine_load {
                Some(v) => PgnValue::I8(v),
                None => PgnValue::Null,
            }),
            "PercentEngineTorque" => Some(match self.percent_engine_torque {
                Some(v) => PgnValue::I8(v),
                None => PgnValue::Null,
            }),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: PgnValue) -> Option<()> {
        match id {
            "Instance" => set_u8(&mut self.instance, value),
            "OilPressure" => set_opt_f32(&mut self.oil_pressure, value),
            "OilTemperature" => set_opt_f32(&mut self.oil_temperature, value),
            "AlternatorVoltage" => set_opt_f32(&mut self.alternator_voltage, value),
            "FuelRate" => set_opt_f32(&mut self.fuel_rate, value),
            "EngineHours" => set_opt_f32(&mut self.engine_hours, value),
            "DiscreteStatus1" => set_u16(&mut self.discrete_status1, value),
            "PercentEngineLoad" => match value {
                PgnValue::I8(v) => {
                    self.percent_engine_load = Some(v);
                    Some(())
                }
                PgnValue::Null => {
                    self.percent_engine_load = None;
                    Some(())
                }
                _ => None,
            },
            "PercentEngineTorque" => match value {
                PgnValue::I8(v) => {
                    self.percent_engine_torque = Some(v);
                    Some(())
                }
                PgnValue::Null => {
                    self.percent_engine_torque = None;
                    Some(())
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl PgnData for EngineParametersDynamic {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut instance = Self::new();
        engine::deserialize_into(&mut instance, payload, &registry::PGN_127489[0])?;
        Ok(instance)
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        engine::serialize(self, buffer, &registry::PGN_127489[0])
    }
}

//==================================================================================129025
/// PGN 129025 – Position, Rapid Update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionRapidUpdate {
    pub latitude: Option<f32>,
    pub longitude: Option<f32>,
}

impl PositionRapidUpdate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldAccess for PositionRapidUpdate {
    fn field(&self, id: &'static str) -> Option<PgnValue> {
        match id {
            "Latitude" => Some(opt_f32(self.latitude)),
            "Longitude" => Some(opt_f32(self.longitude)),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: PgnValue) -> Option<()> {
        match id {
            "Latitude" => set_opt_f32(&mut self.latitude, value),
            "Longitude" => set_opt_f32(&mut self.longitude, value),
            _ => None,
        }
    }
}

impl PgnData for PositionRapidUpdate {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut instance = Self::new();
        engine::deserialize_into(&mut instance, payload, &registry::PGN_129025[0])?;
        Ok(instance)
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        engine::serialize(self, buffer, &registry::PGN_129025[0])
    }
}

//==================================================================================129029
/// A single differential reference station reading inside a [`GnssPositionData`] message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReferenceStation {
    pub reference_station_id: u16,
    pub age_of_dgnss_corrections: Option<f32>,
}

/// PGN 129029 – GNSS Position Data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GnssPositionData {
    pub date: u16,
    pub time: Option<f32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub number_of_svs: u8,
    pub hdop: Option<f32>,
    reference_station_count: usize,
    reference_stations: [ReferenceStation; MAX_REFERENCE_STATIONS],
}

impl GnssPositionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_stations(&self) -> &[ReferenceStation] {
        &self.reference_stations[..self.reference_station_count]
    }
}

impl FieldAccess for GnssPositionData {
    fn field(&self, id: &'static str) -> Option<PgnValue> {
        match id {
            "Date" => Some(PgnValue::U16(self.date)),
            "Time" => Some(opt_f32(self.time)),
            "Latitude" => Some(opt_f64(self.latitude)),
            "Longitude" => Some(opt_f64(self.longitude)),
            "NumberOfSvs" => Some(PgnValue::U8(self.number_of_svs)),
            "Hdop" => Some(opt_f32(self.hdop)),
            "ReferenceStationCount" => Some(PgnValue::U8(self.reference_station_count as u8)),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: PgnValue) -> Option<()> {
        match id {
            "Date" => set_u16(&mut self.date, value),
            "Time" => set_opt_f32(&mut self.time, value),
            "Latitude" => set_opt_f64(&mut self.latitude, value),
            "Longitude" => set_opt_f64(&mut self.longitude, value),
            "NumberOfSvs" => set_u8(&mut self.number_of_svs, value),
            "Hdop" => set_opt_f32(&mut self.hdop, value),
            "ReferenceStationCount" => match value {
                PgnValue::U8(v) => {
                    self.reference_station_count = (v as usize).min(MAX_REFERENCE_STATIONS);
                    Some(())
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn repetitive_field(
        &self,
        array_id: &'static str,
        index: usize,
        field_id: &'static str,
    ) -> Option<PgnValue> {
        if array_id != "reference_stations" || index >= self.reference_station_count {
            return None;
        }
        let station = &self.reference_stations[index];
        match field_id {
            "ReferenceStationId" => Some(PgnValue::U16(station.reference_station_id)),
            "AgeOfDgnssCorrections" => Some(opt_f32(station.age_of_dgnss_corrections)),
            _ => None,
        }
    }

    fn repetitive_field_mut(
        &mut self,
        array_id: &'static str,
        index: usize,
        field_id: &'static str,
        value: PgnValue,
    ) -> Option<()> {
        if array_id != "reference_stations" || index >= MAX_REFERENCE_STATIONS {
            return None;
        }
        let station = &mut self.reference_stations[index];
        match field_id {
            "ReferenceStationId" => set_u16(&mut station.reference_station_id, value),
            "AgeOfDgnssCorrections" => set_opt_f32(&mut station.age_of_dgnss_corrections, value),
            _ => None,
        }
    }

    fn repetitive_count(&self, array_id: &'static str) -> Option<usize> {
        (array_id == "reference_stations").then_some(self.reference_station_count)
    }

    fn set_repetitive_count(&mut self, array_id: &'static str, count: usize) -> Option<()> {
        if array_id != "reference_stations" {
            return None;
        }
        self.reference_station_count = count.min(MAX_REFERENCE_STATIONS);
        Some(())
    }
}

impl PgnData for GnssPositionData {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut instance = Self::new();
        engine::deserialize_into(&mut instance, payload, &registry::PGN_129029[0])?;
        Ok(instance)
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        engine::serialize(self, buffer, &registry::PGN_129029[0])
    }
}

//==================================================================================126996
/// PGN 126996 – Product Information.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInformation {
    pub nmea_2000_version: u16,
    pub product_code: u16,
    pub model_id: PgnBytes,
    pub software_version_code: PgnBytes,
    pub model_serial_code: PgnBytes,
    pub certification_level: u8,
    pub load_equivalency: u8,
}

impl Default for ProductInformation {
    fn default() -> Self {
        Self {
            nmea_2000_version: 0,
            product_code: 0,
            model_id: PgnBytes::new(),
            software_version_code: PgnBytes::new(),
            model_serial_code: PgnBytes::new(),
            certification_level: 0,
            load_equivalency: 0,
        }
    }
}

impl ProductInformation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldAccess for ProductInformation {
    fn field(&self, id: &'static str) -> Option<PgnValue> {
        match id {
            "Nmea2000Version" => Some(PgnValue::U16(self.nmea_2000_version)),
            "ProductCode" => Some(PgnValue::U16(self.product_code)),
            "ModelId" => Some(PgnValue::Bytes(self.model_id)),
            "SoftwareVersionCode" => Some(PgnValue::Bytes(self.software_version_code)),
            "ModelSerialCode" => Some(PgnValue::Bytes(self.model_serial_code)),
            "CertificationLevel" => Some(PgnValue::U8(self.certification_level)),
            "LoadEquivalency" => Some(PgnValue::U8(self.load_equivalency)),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: PgnValue) -> Option<()> {
        match id {
            "Nmea2000Version" => set_u16(&mut self.nmea_2000_version, value),
            "ProductCode" => set_u16(&mut self.product_code, value),
            "ModelId" => set_bytes(&mut self.model_id, value),
            "SoftwareVersionCode" => set_bytes(&mut self.software_version_code, value),
            "ModelSerialCode" => set_bytes(&mut self.model_serial_code, value),
            "CertificationLevel" => set_u8(&mut self.certification_level, value),
            "LoadEquivalency" => set_u8(&mut self.load_equivalency, value),
            _ => None,
        }
    }
}

impl PgnData for ProductInformation {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut instance = Self::new();
        engine::deserialize_into(&mut instance, payload, &registry::PGN_126996[0])?;
        Ok(instance)
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        engine::serialize(self, buffer, &registry::PGN_126996[0])
    }
}

//==================================================================================130824
/// PGN 130824, B&G manufacturer variant – single-frame wind sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BgWindData {
    pub manufacturer_code: u16,
    pub industry_code: u8,
    pub field_a: u8,
    pub field_b: u8,
    pub field_c: u8,
    pub field_d: Option<u8>,
    pub field_e: Option<u8>,
    pub field_f: Option<u8>,
    pub field_g: Option<u8>,
}

impl BgWindData {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldAccess for BgWindData {
    fn field(&self, id: &'static str) -> Option<PgnValue> {
        match id {
            "ManufacturerCode" => Some(PgnValue::U16(self.manufacturer_code)),
            "IndustryCode" => Some(PgnValue::U8(self.industry_code)),
            "FieldA" => Some(PgnValue::U8(self.field_a)),
            "FieldB" => Some(PgnValue::U8(self.field_b)),
            "FieldC" => Some(PgnValue::U8(self.field_c)),
            "FieldD" => Some(opt_u8(self.field_d)),
            "FieldE" => Some(opt_u8(self.field_e)),
            "FieldF" => Some(opt_u8(self.field_f)),
            "FieldG" => Some(opt_u8(self.field_g)),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: PgnValue) -> Option<()> {
        match id {
            "ManufacturerCode" => set_u16(&mut self.manufacturer_code, value),
            "IndustryCode" => set_u8(&mut self.industry_code, value),
            "FieldA" => set_u8(&mut self.field_a, value),
            "FieldB" => set_u8(&mut self.field_b, value),
            "FieldC" => set_u8(&mut self.field_c, value),
            "FieldD" => set_opt_u8(&mut self.field_d, value),
            "FieldE" => set_opt_u8(&mut self.field_e, value),
            "FieldF" => set_opt_u8(&mut self.field_f, value),
            "FieldG" => set_opt_u8(&mut self.field_g, value),
            _ => None,
        }
    }
}

impl PgnData for BgWindData {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut instance = Self::new();
        engine::deserialize_into(&mut instance, payload, &registry::PGN_130824_BG)?;
        Ok(instance)
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        engine::serialize(self, buffer, &registry::PGN_130824_BG)
    }
}

/// PGN 130824, Maretron manufacturer variant – fast-packet proprietary blob.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaretronProprietary {
    pub manufacturer_code: u16,
    pub industry_code: u8,
    pub payload: PgnBytes,
}

impl MaretronProprietary {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldAccess for MaretronProprietary {
    fn field(&self, id: &'static str) -> Option<PgnValue> {
        match id {
            "ManufacturerCode" => Some(PgnValue::U16(self.manufacturer_code)),
            "IndustryCode" => Some(PgnValue::U8(self.industry_code)),
            "Payload" => Some(PgnValue::Bytes(self.payload)),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: PgnValue) -> Option<()> {
        match id {
            "ManufacturerCode" => set_u16(&mut self.manufacturer_code, value),
            "IndustryCode" => set_u8(&mut self.industry_code, value),
            "Payload" => set_bytes(&mut self.payload, value),
            _ => None,
        }
    }
}

impl PgnData for MaretronProprietary {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut instance = Self::new();
        engine::deserialize_into(&mut instance, payload, &registry::PGN_130824_MARETRON)?;
        Ok(instance)
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        engine::serialize(self, buffer, &registry::PGN_130824_MARETRON)
    }
}

//==================================================================================VALUE
/// A schema lookup that produced no match, or a match whose candidate
/// decoders all failed. Carries whatever the classifier/assembler/dispatcher
/// could still recover so a subscriber can log or re-route it (§4.7).
#[derive(Debug, Clone)]
pub struct UnknownValue {
    pub pgn: u32,
    pub source: u8,
    pub raw: PgnBytes,
    /// Human-readable cause, one of the dispatcher's `DispatchReason` variants
    /// rendered to text (kept as `&'static str` rather than the error itself
    /// so `Value` stays `Clone`).
    pub reason: &'static str,
    /// Best-effort manufacturer code, extracted from the first two payload
    /// bytes when the PGN is in a proprietary range.
    pub manufacturer: Option<u16>,
    /// Best-effort industry code, extracted alongside `manufacturer`.
    pub industry_code: Option<u8>,
}

/// Tagged union of every decoded message this crate knows how to produce.
/// The dispatcher (`protocol::dispatcher`) builds one of these per packet and
/// hands it to `protocol::subscription` for fan-out; there is no dynamic
/// dispatch here since the closed set of variants is known at compile time.
#[derive(Debug, Clone)]
pub enum Value {
    RateOfTurn(RateOfTurn),
    EngineParametersDynamic(EngineParametersDynamic),
    PositionRapidUpdate(PositionRapidUpdate),
    GnssPositionData(GnssPositionData),
    ProductInformation(ProductInformation),
    BgWindData(BgWindData),
    MaretronProprietary(MaretronProprietary),
    Unknown(UnknownValue),
}

impl Value {
    /// The PGN this value was decoded from (or attempted to be).
    pub fn pgn(&self) -> u32 {
        match self {
            Value::RateOfTurn(_) => 127251,
            Value::EngineParametersDynamic(_) => 127489,
            Value::PositionRapidUpdate(_) => 129025,
            Value::GnssPositionData(_) => 129029,
            Value::ProductInformation(_) => 126996,
            Value::BgWindData(_) | Value::MaretronProprietary(_) => 130824,
            Value::Unknown(unknown) => unknown.pgn,
        }
    }
}

//==================================================================================CONVERSION_HELPERS
fn opt_f64(v: Option<f64>) -> PgnValue {
    match v {
        Some(v) => PgnValue::F64(v),
        None => PgnValue::Null,
    }
}

fn opt_f32(v: Option<f32>) -> PgnValue {
    match v {
        Some(v) => PgnValue::F32(v),
        None => PgnValue::Null,
    }
}

fn opt_u8(v: Option<u8>) -> PgnValue {
    match v {
        Some(v) => PgnValue::U8(v),
        None => PgnValue::Null,
    }
}

fn set_u8(dest: &mut u8, value: PgnValue) -> Option<()> {
    match value {
        PgnValue::U8(v) => {
            *dest = v;
            Some(())
        }
        _ => None,
    }
}

fn set_u16(dest: &mut u16, value: PgnValue) -> Option<()> {
    match value {
        PgnValue::U16(v) => {
            *dest = v;
            Some(())
        }
        _ => None,
    }
}

fn set_opt_f64(dest: &mut Option<f64>, value: PgnValue) -> Option<()> {
    match value {
        PgnValue::F64(v) => {
            *dest = Some(v);
            Some(())
        }
        PgnValue::Null => {
            *dest = None;
            Some(())
        }
        _ => None,
    }
}

fn set_opt_f32(dest: &mut Option<f32>, value: PgnValue) -> Option<()> {
    match value {
        PgnValue::F32(v) => {
            *dest = Some(v);
            Some(())
        }
        PgnValue::Null => {
            *dest = None;
            Some(())
        }
        _ => None,
    }
}

fn set_opt_u8(dest: &mut Option<u8>, value: PgnValue) -> Option<()> {
    match value {
        PgnValue::U8(v) => {
            *dest = Some(v);
            Some(())
        }
        PgnValue::Null => {
            *dest = None;
            Some(())
        }
        _ => None,
    }
}

fn set_bytes(dest: &mut PgnBytes, value: PgnValue) -> Option<()> {
    match value {
        PgnValue::Bytes(v) => {
            *dest = v;
            Some(())
        }
        _ => None,
    }
}
