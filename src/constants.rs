// Sizes of the ByteSyzed machine state.
pub const MEMORY_SIZE: usize = 256;
pub const REGISTER_COUNT: usize = 16;

// Debug file tag lines.
pub const MEM_START: &str = "!mem#";
pub const MEM_END: &str = "!mem!";
pub const REGS_START: &str = "!regs#";
pub const REGS_END: &str = "!regs!";

// Column ranges holding a byte value, half-open.
pub const DEBUG_VALUE_COLUMNS: (usize, usize) = (2, 4);
pub const OUTPUT_VALUE_COLUMNS: (usize, usize) = (0, 2);

/// Value used to fill memory addresses the debug file leaves out.
pub const PAD_VALUE: &str = "00";
