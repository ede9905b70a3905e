// SPDX-License-Identifier: MPL-2.0
//! Internationalization support using Fluent.

pub mod fluent;

pub use fluent::I18n;
