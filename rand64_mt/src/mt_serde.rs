// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serde support for the Mersenne Twister state array, which is larger
//! than the array sizes serde derives for.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Mt64, NN};

impl Serialize for Mt64 {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = ser.serialize_tuple(NN + 1)?;
        seq.serialize_element(&(self.mti as u64))?;
        for word in self.mt.iter() {
            seq.serialize_element(word)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Mt64 {
    fn deserialize<D>(de: D) -> Result<Mt64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Mt64Visitor {
            _pd: PhantomData<Mt64>,
        }

        impl<'de> Visitor<'de> for Mt64Visitor {
            type Value = Mt64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("Mt64 state")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Mt64, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mti: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if mti > (NN + 1) as u64 {
                    return Err(de::Error::custom("output cursor out of range"));
                }

                let mut mt = [0u64; NN];
                for (i, word) in mt.iter_mut().enumerate() {
                    *word = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i + 1, &self))?;
                }

                Ok(Mt64 { mt, mti: mti as usize })
            }
        }

        de.deserialize_tuple(NN + 1, Mt64Visitor { _pd: PhantomData })
    }
}
