mod config;
mod lookup;
