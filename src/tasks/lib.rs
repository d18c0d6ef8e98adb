/* ************************************************************************ **
** This file is part of crysym, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The `crysym` command line program.
//!
//! Everything here is high level glue: reading structure documents, calling
//! into `crysym-structure`, and writing JSON reports.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate clap;
#[macro_use] extern crate crysym_clap;
#[cfg(test)]
#[macro_use] extern crate crysym_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

mod ui;
mod cmd;
mod filetypes;

pub mod entry_points;

pub use crate::cmd::{space_group_report, primitive_report, niggli_report, reduce_report};
pub use crate::filetypes::structure::LabeledStructure;
pub use crate::filetypes::reports::{SpaceGroupReport, ReduceReport, LatticeReport};
pub use crysym_tasks_config::{Settings, ValidatedSettings, StructureDoc, AtomDoc, CellDoc, Kind};
