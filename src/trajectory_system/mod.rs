pub mod kinematics;
pub mod landing;
