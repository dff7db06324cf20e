// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(unused)]

#[cfg(feature = "log")]
macro_rules! debug {
    ($($x:tt)*) => {
        log::debug!($($x)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($x:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! warn {
    ($($x:tt)*) => {
        log::warn!($($x)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! warn {
    ($($x:tt)*) => {};
}
