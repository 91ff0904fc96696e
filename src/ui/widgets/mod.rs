// SPDX-License-Identifier: MPL-2.0
pub mod rotating_logo;

pub use rotating_logo::RotatingLogo;
