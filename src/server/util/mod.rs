//! Helpers shared by the unit tests of the server modules.
