pub mod system_host;
