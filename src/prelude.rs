pub use super::register::*;
pub use super::register::{advanced::*, embedded::*, main::*, sensor_hub::*};
