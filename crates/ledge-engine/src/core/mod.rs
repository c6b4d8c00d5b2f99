pub mod body;
pub mod camera;
pub mod collision;
pub mod geometry;
pub mod kinematics;
pub mod time;
