//! Reads the first entity of a Quake map and hands its brushes to emitters.

pub mod qmap;
