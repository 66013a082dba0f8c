pub mod batch;
pub mod calculator;
pub mod clean;
pub mod config;
pub mod match_posts;
pub mod matcher;
pub mod process;
pub mod reconstruct;
pub mod recording;
