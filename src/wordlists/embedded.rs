//! Embedded word sets
//!
//! Compiled into the binary; sized for exhaustive tree generation (25) and
//! learning runs (100).

/// Small word set, suitable for deep complete game trees
pub const WORDS_25: &[&str] = &[
    "about", "allow", "brawl", "crane", "dream", "earth", "flame", "grape", "house", "irate",
    "jolly", "knack", "lemon", "mango", "night", "ocean", "plant", "quart", "reach", "slate",
    "tiger", "urban", "vivid", "whale", "youth",
];

/// Default word set for learning runs and game simulations
pub const WORDS_100: &[&str] = &[
    "about", "allow", "brawl", "crane", "dream", "earth", "flame", "grape", "house", "irate",
    "jolly", "knack", "lemon", "mango", "night", "ocean", "plant", "quart", "reach", "slate",
    "tiger", "urban", "vivid", "whale", "youth", "angel", "baker", "beach", "blend", "bloom",
    "brave", "bread", "brick", "charm", "chest", "cloud", "coast", "crisp", "crown", "dance",
    "delta", "drift", "eagle", "ember", "fable", "fairy", "feast", "fence", "field", "flock",
    "frost", "giant", "glade", "glory", "grasp", "green", "haste", "heart", "honey", "ivory",
    "jewel", "judge", "lance", "light", "lunar", "march", "medal", "mirth", "noble", "north",
    "olive", "opera", "pearl", "pilot", "plume", "pride", "prism", "quill", "raven", "ridge",
    "river", "robin", "royal", "salty", "shade", "shine", "shore", "smile", "snowy", "spark",
    "spice", "stone", "storm", "swift", "thorn", "torch", "trail", "tulip", "vapor", "wheat",
];
