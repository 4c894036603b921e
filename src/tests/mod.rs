mod integration;
mod resources;
