mod descent;
mod flight_sim;
mod pointer;

pub use descent::DescentController;
pub use flight_sim::FlightSimController;
pub use pointer::PointerController;
