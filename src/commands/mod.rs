//! CLI commands for rumo

pub mod borders;
pub mod capitals;
pub mod compare;
pub mod dispatch;
pub mod route;
