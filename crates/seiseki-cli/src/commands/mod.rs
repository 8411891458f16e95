pub mod compare;
pub mod evaluate;
pub mod init;
pub mod schedule;
pub mod timeline;
pub mod validate;
