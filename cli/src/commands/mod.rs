//! One module per subcommand.

pub mod ip;
pub mod ports;
pub mod ports_edit;
