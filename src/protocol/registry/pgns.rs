//! The curated PGN table. Each descriptor below is hand-authored in the same
//! shape the retired code generator would have produced from `canboat.json`
//! (see `DESIGN.md`), covering every field kind and dispatcher behavior this
//! crate exercises rather than the full upstream dictionary.
use crate::core::{FieldDescriptor, FieldKind, PgnDescriptor, RepeatingFieldSet};

const NO_REPEATING: &[RepeatingFieldSet] = &[];

//==================================================================================127251
const FIELDS_127251: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: "Sid",
        name: "SID",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(0),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "Rate",
        name: "Rate",
        kind: FieldKind::Number,
        bits_length: Some(32),
        bits_length_var: None,
        bits_offset: Some(8),
        is_signed: Some(true),
        resolution: Some(3.125e-8),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("rad/s"),
        physical_qtity: Some("ANGULAR_VELOCITY"),
        match_value: None,
    },
    FieldDescriptor {
        id: "Reserved",
        name: "Reserved",
        kind: FieldKind::Reserved,
        bits_length: Some(24),
        bits_length_var: None,
        bits_offset: Some(40),
        is_signed: None,
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
];

pub const PGN_127251: [PgnDescriptor; 1] = [PgnDescriptor {
    id: 127251,
    name: "Rate of Turn",
    description: "Angular rate about the vertical axis",
    priority: Some(2),
    fastpacket: false,
    length: Some(8),
    field_count: Some(3),
    trans_interval: Some(100),
    trans_irregular: Some(false),
    fields: FIELDS_127251,
    repeating_field_sets: NO_REPEATING,
    manufacturer: None,
}];

//==================================================================================127489
const FIELDS_127489: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: "Instance",
        name: "Engine Instance",
        kind: FieldKind::Lookup,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(0),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: Some("EngineInstance"),
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "OilPressure",
        name: "Oil pressure",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(8),
        is_signed: Some(false),
        resolution: Some(100.0),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("Pa"),
        physical_qtity: Some("PRESSURE"),
        match_value: None,
    },
    FieldDescriptor {
        id: "OilTemperature",
        name: "Oil temperature",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(24),
        is_signed: Some(false),
        resolution: Some(0.1),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("K"),
        physical_qtity: Some("TEMPERATURE"),
        match_value: None,
    },
    FieldDescriptor {
        id: "AlternatorVoltage",
        name: "Alternator voltage",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(40),
        is_signed: Some(true),
        resolution: Some(0.01),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("V"),
        physical_qtity: Some("VOLTAGE"),
        match_value: None,
    },
    FieldDescriptor {
        id: "FuelRate",
        name: "Fuel rate",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(56),
        is_signed: Some(true),
        resolution: Some(0.1),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("L/h"),
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "EngineHours",
        name: "Engine hours",
        kind: FieldKind::Duration,
        bits_length: Some(32),
        bits_length_var: None,
        bits_offset: Some(72),
        is_signed: Some(false),
        resolution: Some(1.0),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("s"),
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "DiscreteStatus1",
        name: "Discrete status 1",
        kind: FieldKind::BitLookup,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(104),
        is_signed: None,
        resolution: None,
        enum_direct_name: Some("EngineDiscreteStatus1"),
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "PercentEngineLoad",
        name: "Percent engine load",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(120),
        is_signed: Some(true),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("%"),
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "PercentEngineTorque",
        name: "Percent engine torque",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(128),
        is_signed: Some(true),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("%"),
        physical_qtity: None,
        match_value: None,
    },
];

pub const PGN_127489: [PgnDescriptor; 1] = [PgnDescriptor {
    id: 127489,
    name: "Engine Parameters, Dynamic",
    description: "Running engine telemetry",
    priority: Some(6),
    fastpacket: true,
    length: Some(17),
    field_count: Some(9),
    trans_interval: Some(500),
    trans_irregular: Some(false),
    fields: FIELDS_127489,
    repeating_field_sets: NO_REPEATING,
    manufacturer: None,
}];

//==================================================================================129025
const FIELDS_129025: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: "Latitude",
        name: "Latitude",
        kind: FieldKind::Number,
        bits_length: Some(32),
        bits_length_var: None,
        bits_offset: Some(0),
        is_signed: Some(true),
        resolution: Some(1e-7),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("deg"),
        physical_qtity: Some("GEOGRAPHICAL_LATITUDE"),
        match_value: None,
    },
    FieldDescriptor {
        id: "Longitude",
        name: "Longitude",
        kind: FieldKind::Number,
        bits_length: Some(32),
        bits_length_var: None,
        bits_offset: Some(32),
        is_signed: Some(true),
        resolution: Some(1e-7),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("deg"),
        physical_qtity: Some("GEOGRAPHICAL_LONGITUDE"),
        match_value: None,
    },
];

pub const PGN_129025: [PgnDescriptor; 1] = [PgnDescriptor {
    id: 129025,
    name: "Position, Rapid Update",
    description: "Latitude and longitude, no fix quality",
    priority: Some(2),
    fastpacket: false,
    length: Some(8),
    field_count: Some(2),
    trans_interval: Some(100),
    trans_irregular: Some(false),
    fields: FIELDS_129025,
    repeating_field_sets: NO_REPEATING,
    manufacturer: None,
}];

//==================================================================================129029
const FIELDS_129029: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: "Date",
        name: "Date",
        kind: FieldKind::Date,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(0),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("days"),
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "Time",
        name: "Time",
        kind: FieldKind::Time,
        bits_length: Some(32),
        bits_length_var: None,
        bits_offset: Some(16),
        is_signed: Some(false),
        resolution: Some(0.0001),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("s"),
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "Latitude",
        name: "Latitude",
        kind: FieldKind::Number,
        bits_length: Some(64),
        bits_length_var: None,
        bits_offset: Some(48),
        is_signed: Some(true),
        resolution: Some(1e-16),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("deg"),
        physical_qtity: Some("GEOGRAPHICAL_LATITUDE"),
        match_value: None,
    },
    FieldDescriptor {
        id: "Longitude",
        name: "Longitude",
        kind: FieldKind::Number,
        bits_length: Some(64),
        bits_length_var: None,
        bits_offset: Some(112),
        is_signed: Some(true),
        resolution: Some(1e-16),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("deg"),
        physical_qtity: Some("GEOGRAPHICAL_LONGITUDE"),
        match_value: None,
    },
    FieldDescriptor {
        id: "NumberOfSvs",
        name: "Number of SVs",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(176),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "Hdop",
        name: "HDOP",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(184),
        is_signed: Some(true),
        resolution: Some(0.01),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "ReferenceStationCount",
        name: "Reference station count",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(200),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "ReferenceStationId",
        name: "Reference station ID",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(208),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "AgeOfDgnssCorrections",
        name: "Age of DGNSS corrections",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(224),
        is_signed: Some(false),
        resolution: Some(0.01),
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: Some("s"),
        physical_qtity: None,
        match_value: None,
    },
];

const REPEATING_129029: &[RepeatingFieldSet] = &[RepeatingFieldSet {
    array_id: "reference_stations",
    count_field_index: Some(6),
    start_field_index: 7,
    size: 2,
    max_repetitions: 4,
}];

pub const PGN_129029: [PgnDescriptor; 1] = [PgnDescriptor {
    id: 129029,
    name: "GNSS Position Data",
    description: "Full GNSS fix with differential reference stations",
    priority: Some(3),
    fastpacket: true,
    length: None,
    field_count: Some(9),
    trans_interval: Some(1000),
    trans_irregular: Some(false),
    fields: FIELDS_129029,
    repeating_field_sets: REPEATING_129029,
    manufacturer: None,
}];

//==================================================================================126996
const FIELDS_126996: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: "Nmea2000Version",
        name: "NMEA 2000 Version",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(0),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "ProductCode",
        name: "Product Code",
        kind: FieldKind::Number,
        bits_length: Some(16),
        bits_length_var: None,
        bits_offset: Some(16),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "ModelId",
        name: "Model ID",
        kind: FieldKind::StringFix,
        bits_length: Some(64),
        bits_length_var: None,
        bits_offset: Some(32),
        is_signed: None,
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "SoftwareVersionCode",
        name: "Software Version Code",
        kind: FieldKind::StringLz,
        bits_length: None,
        bits_length_var: None,
        bits_offset: Some(96),
        is_signed: None,
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "ModelSerialCode",
        name: "Model Serial Code",
        kind: FieldKind::StringLau,
        bits_length: None,
        bits_length_var: None,
        bits_offset: None,
        is_signed: None,
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "CertificationLevel",
        name: "Certification Level",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: None,
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "LoadEquivalency",
        name: "Load Equivalency",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: None,
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
];

pub const PGN_126996: [PgnDescriptor; 1] = [PgnDescriptor {
    id: 126996,
    name: "Product Information",
    description: "Device identification broadcast at startup",
    priority: Some(6),
    fastpacket: true,
    length: None,
    field_count: Some(7),
    trans_interval: None,
    trans_irregular: Some(true),
    fields: FIELDS_126996,
    repeating_field_sets: NO_REPEATING,
    manufacturer: None,
}];

//==================================================================================130824
const FIELDS_130824_BG: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: "ManufacturerCode",
        name: "Manufacturer Code",
        kind: FieldKind::Lookup,
        bits_length: Some(11),
        bits_length_var: None,
        bits_offset: Some(0),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: Some("ManufacturerCode"),
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: Some(381),
    },
    FieldDescriptor {
        id: "Reserved",
        name: "Reserved",
        kind: FieldKind::Reserved,
        bits_length: Some(2),
        bits_length_var: None,
        bits_offset: Some(11),
        is_signed: None,
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "IndustryCode",
        name: "Industry Code",
        kind: FieldKind::Lookup,
        bits_length: Some(3),
        bits_length_var: None,
        bits_offset: Some(13),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: Some("IndustryCode"),
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "FieldA",
        name: "Field A",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(16),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "FieldB",
        name: "Field B",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(24),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "FieldC",
        name: "Field C",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(32),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "FieldD",
        name: "Field D",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(40),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "FieldE",
        name: "Field E",
        kind: FieldKind::Number,
        bits_length: Some(8),
        bits_length_var: None,
        bits_offset: Some(48),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "FieldF",
        name: "Field F",
        kind: FieldKind::Number,
        bits_length: Some(4),
        bits_length_var: None,
        bits_offset: Some(56),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "FieldG",
        name: "Field G",
        kind: FieldKind::Number,
        bits_length: Some(4),
        bits_length_var: None,
        bits_offset: Some(60),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
];

pub const PGN_130824_BG: PgnDescriptor = PgnDescriptor {
    id: 130824,
    name: "B&G Wind Data",
    description: "B&G proprietary single-frame wind sensor readings",
    priority: Some(7),
    fastpacket: false,
    length: Some(8),
    field_count: Some(10),
    trans_interval: None,
    trans_irregular: Some(true),
    fields: FIELDS_130824_BG,
    repeating_field_sets: NO_REPEATING,
    manufacturer: Some(381),
};

const FIELDS_130824_MARETRON: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: "ManufacturerCode",
        name: "Manufacturer Code",
        kind: FieldKind::Lookup,
        bits_length: Some(11),
        bits_length_var: None,
        bits_offset: Some(0),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: Some("ManufacturerCode"),
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: Some(137),
    },
    FieldDescriptor {
        id: "Reserved",
        name: "Reserved",
        kind: FieldKind::Reserved,
        bits_length: Some(2),
        bits_length_var: None,
        bits_offset: Some(11),
        is_signed: None,
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "IndustryCode",
        name: "Industry Code",
        kind: FieldKind::Lookup,
        bits_length: Some(3),
        bits_length_var: None,
        bits_offset: Some(13),
        is_signed: Some(false),
        resolution: None,
        enum_direct_name: Some("IndustryCode"),
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
    FieldDescriptor {
        id: "Payload",
        name: "Proprietary Payload",
        kind: FieldKind::Binary,
        bits_length: Some(56),
        bits_length_var: None,
        bits_offset: Some(16),
        is_signed: None,
        resolution: None,
        enum_direct_name: None,
        enum_indirect_name: None,
        enum_indirect_field_order: None,
        physical_unit: None,
        physical_qtity: None,
        match_value: None,
    },
];

pub const PGN_130824_MARETRON: PgnDescriptor = PgnDescriptor {
    id: 130824,
    name: "Maretron Proprietary",
    description: "Maretron proprietary fast-packet message",
    priority: Some(7),
    fastpacket: true,
    length: Some(9),
    field_count: Some(4),
    trans_interval: None,
    trans_irregular: Some(true),
    fields: FIELDS_130824_MARETRON,
    repeating_field_sets: NO_REPEATING,
    manufacturer: Some(137),
};

pub const PGN_130824: [PgnDescriptor; 2] = [PGN_130824_MARETRON, PGN_130824_BG];
