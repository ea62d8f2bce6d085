pub mod check;
pub mod fix;
pub mod helper;
pub mod init;
