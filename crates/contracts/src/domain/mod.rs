pub mod a001_agent;
