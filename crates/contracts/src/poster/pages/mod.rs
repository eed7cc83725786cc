pub mod approach;
pub mod home;
pub mod results;
pub mod team;
