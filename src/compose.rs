pub(crate) mod engine;
pub(crate) mod params;
pub mod policy;
pub(crate) mod svg;
