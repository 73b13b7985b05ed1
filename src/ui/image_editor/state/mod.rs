// SPDX-License-Identifier: MPL-2.0
//! Editor state handlers, split by concern.

pub mod crop;
pub mod history;
pub mod persistence;
pub mod pointer;
pub mod render;
pub mod routing;
pub mod session;
pub mod transform;
