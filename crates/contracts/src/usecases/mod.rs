pub mod common;
pub mod u101_upload_agent;
