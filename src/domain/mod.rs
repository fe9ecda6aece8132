// Domain layer: request/route models and the seams (ports) the client and displays meet at.

pub mod model;
pub mod ports;
