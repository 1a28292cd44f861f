//! Statically compiled unit data from /units/units.json.
//! Generated at build time by build.rs, no runtime JSON parsing needed.

include!(concat!(env!("OUT_DIR"), "/units_generated.rs"));
