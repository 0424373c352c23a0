//! Serde support for [`Colour`].
//!
//! Colours serialize as their normalised RGBA components. Deserialization
//! accepts either a colour string (name, `transparent`, or hex) or a
//! sequence of 3 or 4 components, mirroring the constructor's input shapes.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::colour::Colour;

impl Serialize for Colour {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (r, g, b, a) = self.rgba();
        let mut seq = serializer.serialize_seq(Some(4))?;
        seq.serialize_element(&f64::from(r))?;
        seq.serialize_element(&f64::from(g))?;
        seq.serialize_element(&f64::from(b))?;
        seq.serialize_element(&a)?;
        seq.end()
    }
}

struct ColourVisitor;

impl<'de> Visitor<'de> for ColourVisitor {
    type Value = Colour;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a colour string or a sequence of 3 or 4 components")
    }

    fn visit_str<E>(self, value: &str) -> Result<Colour, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Colour, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut components = Vec::with_capacity(4);
        while let Some(value) = seq.next_element::<f64>()? {
            components.push(value);
        }
        Colour::from_components(&components).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Colour, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ColourVisitor)
    }
}
