// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Synchronization of externally observable state with the resolved
//! configuration: the route hostname and the console shortcut link.

pub mod console_link;
pub mod route;

pub use console_link::set_console_link;
pub use route::set_route;
