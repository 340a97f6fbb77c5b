// Domain layer: directory records and the ports the browser talks through.

pub mod model;
pub mod ports;
