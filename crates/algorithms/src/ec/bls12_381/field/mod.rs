pub mod ext; // Generic composition of tower levels
pub mod fp; // Base field
pub mod fp12; // Degree-12 extension (target field)
pub mod fp2; // Quadratic extension
pub mod fp6; // Degree-6 extension
pub mod wide; // Double-width accumulators
