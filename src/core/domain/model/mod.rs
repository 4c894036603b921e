pub mod dns;
pub mod instance;
pub mod provisioning;
