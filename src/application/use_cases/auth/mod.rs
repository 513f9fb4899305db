pub mod authenticate;
pub mod login;
pub mod logout;
pub mod register;
