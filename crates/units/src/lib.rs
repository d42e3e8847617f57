pub mod angular_velocity;
pub mod length;
pub mod velocity;


pub use angular_velocity::AngularVelocity;
pub use length::Length;
pub use velocity::Velocity;
