pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod time_test;
#[cfg(test)]
mod velocity_test;

pub use length::{Length, AU_M};
pub use mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};
pub use time::{Time, SECONDS_PER_DAY};
pub use velocity::Velocity;
