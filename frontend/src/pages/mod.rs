pub mod dashboard;
pub mod home;
pub mod signin;
pub mod signup;
