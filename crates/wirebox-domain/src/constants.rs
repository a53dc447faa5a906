//! Domain layer constants
//!
//! Constants shared by the resolution engine and its diagnostics.
//! Infrastructure-specific constants live in `wirebox_infrastructure::constants`.

// ============================================================================
// RESOLUTION CONSTANTS
// ============================================================================

/// Separator used when rendering a resolution chain
pub const CHAIN_SEPARATOR: &str = " -> ";

/// Minimum chain length at which a dependency loop can exist
pub const MIN_LOOP_CHAIN_LEN: usize = 2;

// ============================================================================
// INJECTION CONSTANTS
// ============================================================================

/// Field attribute marking a struct field for injection
pub const INJECT_ATTRIBUTE: &str = "inject";
