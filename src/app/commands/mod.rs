pub mod config_ci;
