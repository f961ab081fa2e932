pub mod camera;
pub mod packet;
