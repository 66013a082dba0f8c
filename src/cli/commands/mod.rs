pub mod batch;
pub mod clean;
pub mod config;
pub mod init;
pub mod match_posts;
pub mod process;
pub mod run;
