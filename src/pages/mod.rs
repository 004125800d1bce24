pub mod debug;
pub mod home;
pub mod info;
pub mod markets;
pub mod trading;
