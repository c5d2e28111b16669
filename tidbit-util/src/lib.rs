// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stateless helpers.
//!
//! | module | helpers |
//! | --- | --- |
//! | [`number`] | [`to_fixed`] - decimal rounding with carry |
//! | [`value`] | [`deep_equals`], [`equals`], [`pick`], [`pick_from`] |
//! | [`query`] | [`parse_query`], [`format_options`], [`Query`] |
//! | [`color`] | [`rgb_to_gray`], [`random_color`] |
//! | [`random`] | [`random_string`] |
//! | [`date`] | [`day_of_year`] |
//! | [`markup`] | [`remove_tags`] |

pub mod color;
pub mod date;
pub mod markup;
pub mod number;
pub mod query;
pub mod random;
pub mod value;

pub use color::{random_color, random_color_with, rgb_to_gray};
pub use date::{day_of_year, day_of_year_today};
pub use markup::remove_tags;
pub use number::{to_fixed, DEFAULT_FIXED_DIGITS, MAX_FIXED_DIGITS};
pub use query::{format_options, parse_query, Query};
pub use random::{random_string, random_string_with, DEFAULT_RANDOM_STRING_LEN};
pub use value::{deep_equals, equals, pick, pick_from};
