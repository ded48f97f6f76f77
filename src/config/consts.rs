// src/config/consts.rs

// Breeds
// As of 2022-08-27
pub const DEFAULT_BREEDS: &[&str] = &[
    "aberration", "banescale", "bogsneak", "coatl", "fae", "gaoler",
    "guardian", "imperial", "mirror", "nocturne", "obelisk", "pearlcatcher",
    "ridgeback", "skydancer", "snapper", "spiral", "tundra", "veilspun",
    "wildclaw",
];
pub const SKIN_MALE_SUFFIX: &str = " male only";
pub const SKIN_FEMALE_SUFFIX: &str = " female only";

// Ambiguous across mats/specialty/other; never resolved as a tab alias.
pub const AMBIGUOUS_ALIASES: &[&str] = &["trinket", "trinkets"];

// Page markup
pub const TAB_INPUT_TAG: &str = "input";
pub const TAB_INPUT_NAME: &str = "tab";
pub const CURRENT_TAB_TAG: &str = "span";
pub const CURRENT_TAB_CLASS: &str = "ah-current-tab";

// CLI
pub const LOG_ENV: &str = "FR_TABS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";
