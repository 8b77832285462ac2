//! Shared constants

/// Line number used when a position is not known
pub const UNKNOWN_LINE: i32 = -1;

/// Return type that marks a method without a result value
pub const DEFAULT_VOID_MARKER: &str = "void";

/// Name of the synthetic variable holding a method's result at exit
pub const RETURN_VARIABLE: &str = "return";

/// Separator between a structure element ID and a program point suffix
pub const POINT_ID_SEPARATOR: &str = ":::";

/// Prefix of the synthetic file path given to package elements
pub const PACKAGE_PATH_PREFIX: &str = "<package:";
