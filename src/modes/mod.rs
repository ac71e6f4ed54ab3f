pub mod human;
pub mod pacer;

pub use human::HumanMode;
pub use pacer::TickPacer;
