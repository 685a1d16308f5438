pub mod angle;
pub mod length;
pub mod proper_motion;
pub mod time;
pub mod velocity;


pub use angle::{Angle, ARCSEC_PER_DEGREE, ARCSEC_TO_RAD};
pub use length::{Length, PARSEC_TO_KM};
pub use proper_motion::ProperMotion;
pub use time::{Time, DAYS_PER_YEAR, SECONDS_PER_YEAR};
pub use velocity::Velocity;
