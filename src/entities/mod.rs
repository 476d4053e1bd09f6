mod page;
mod ride;

pub use page::{PageMeta, RidePage, MAX_SAFE_INTEGER};
pub use ride::{NewRide, Ride};
