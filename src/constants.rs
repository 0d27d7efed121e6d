// --- Numeric Constants ---
pub const EPSILON: f64 = 1e-12; // Tolerance for all floating-point equality checks
pub const DISPLAY_PRECISION: usize = 6; // Significant digits when printing numbers

// --- Prompts ---
pub const PROMPT_FIRST_VECTOR: &str = "Enter first vector (2 floats): ";
pub const PROMPT_SECOND_VECTOR: &str = "Enter second vector (2 floats): ";
pub const PROMPT_SCALAR: &str = "Enter scalar multiplier: ";

// --- Report Labels ---
pub const LABEL_FIRST_VECTOR: &str = "First vector: ";
pub const LABEL_SECOND_VECTOR: &str = "Second vector: ";
pub const LABEL_ADD: &str = "Vector add: ";
pub const LABEL_SUBTRACT: &str = "Vector subtract: ";
pub const LABEL_SCALAR_MULT: &str = "Scalar multiplier: ";

// --- Logging ---
pub const LOG_FILE: &str = "vector2d.log";
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
