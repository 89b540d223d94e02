//! Choices offered by the build order form.

pub const CIVILIZATIONS: [&str; 35] = [
    "Aztecs",
    "Berbers",
    "Britons",
    "Bulgarians",
    "Burmese",
    "Byzantines",
    "Celts",
    "Chinese",
    "Cumans",
    "Ethiopians",
    "Franks",
    "Goths",
    "Huns",
    "Incas",
    "Indians",
    "Italians",
    "Japanese",
    "Khmer",
    "Koreans",
    "Lithuanians",
    "Magyars",
    "Malay",
    "Malians",
    "Mayans",
    "Mongols",
    "Persians",
    "Portuguese",
    "Saracens",
    "Slavs",
    "Spanish",
    "Tatars",
    "Teutons",
    "Turks",
    "Vietnamese",
    "Vikings",
];

pub const MAP_TYPES: [&str; 5] = ["Arabia", "Arena", "Black Forest", "Nomad", "Islands"];

/// Civilization preselected in a new form
pub const DEFAULT_CIVILIZATION: &str = "Britons";

/// Map type preselected in a new form
pub const DEFAULT_MAP_TYPE: &str = "Arabia";
