pub mod dedalus;
pub mod logging;
