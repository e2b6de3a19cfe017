pub use anyhow::{anyhow, bail, Result};
pub use log::{debug, error, info, trace, warn};

pub use crate::command::Command;
pub use crate::commands::refresh::RefreshPlan;
pub use crate::commands::CommandBuilder;
pub use crate::config::{self, Config};
pub use crate::error::CommandError;
pub use crate::givenergy::{self, Model, Request, RequestCommon, TimeSlot};
pub use crate::options::Options;
pub use crate::register::HoldingRegister;
